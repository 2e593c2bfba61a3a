pub mod field;
pub mod entry;

pub use field::*;
pub use entry::*;
