//! UI layer - egui app and views

pub mod app;
pub mod spacing;
pub mod views;
