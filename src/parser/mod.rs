pub mod clean;
pub mod record;

pub use clean::*;
pub use record::*;
