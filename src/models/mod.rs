pub mod artifact;
pub mod classifier;

pub use self::artifact::*;
pub use self::classifier::*;
