//! Form rendering module
//!
//! - `field_renderer`: per-field boxes for text, choice and toggle fields
//! - `assessment_form`: the form body and its status/actions row

mod assessment_form;
mod field_renderer;

pub use assessment_form::{draw_actions, draw_form, form_height};
