pub mod errors;
pub mod macros;

pub use errors::*;
