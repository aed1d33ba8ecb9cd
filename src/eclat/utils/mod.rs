pub mod idset;
pub mod storage;

pub use idset::{IdSet, IdSetsMap};
pub use storage::{FrequentLevel, ItemsetStorage};
