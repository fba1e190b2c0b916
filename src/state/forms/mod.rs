//! Form domain layer
//!
//! Values, validation, the committed-values store and the controller that ties
//! them to the submission executor.

mod controller;
pub mod field;
mod focus;
mod store;
mod validation;
mod values;

pub use controller::*;
pub use focus::*;
pub use store::*;
pub use validation::*;
pub use values::*;
