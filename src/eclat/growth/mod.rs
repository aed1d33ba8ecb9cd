pub mod builder;
pub mod mining;

pub use builder::{build_root, diff_sets, tid_sets};
pub use mining::{declat, eclat, extend_layers, mine};
