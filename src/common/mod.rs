pub mod error;
pub mod grid;
pub mod metadata;

pub use error::*;
pub use grid::*;
pub use metadata::*;
