//! Core evaluation
//!
//! - `color`: the RGB model, HSL/HSB conversions and color parsing
//! - `functions`: the stylesheet functions, their signatures and the registry

pub mod color;
pub mod functions;
