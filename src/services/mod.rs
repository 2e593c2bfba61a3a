pub mod calculator;
pub mod session;

pub use calculator::*;
pub use session::*;
