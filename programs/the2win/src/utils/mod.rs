pub mod fair;
pub mod multiplier;

pub use fair::*;
pub use multiplier::*;
