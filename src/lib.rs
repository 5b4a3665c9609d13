pub mod action;
pub mod batch;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod layout;
pub mod manifest;
pub mod renderer;
pub mod roster;
pub mod verify;

pub use color::Color;
pub use error::{Result, SheetError};
pub use generator::{generate, render_sheet};
pub use layout::Variant;
