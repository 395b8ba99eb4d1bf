pub mod canonical;
pub mod classifier;

pub use canonical::*;
pub use classifier::*;
