//! Application state module

mod forms;
mod status;

pub use forms::*;
pub use status::*;
