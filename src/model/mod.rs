pub mod codes;
pub mod entities;

pub use codes::*;
pub use entities::*;
