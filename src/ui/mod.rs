//! Presentation layer: control widgets and chart rendering.

pub mod panels;
pub mod plot;
