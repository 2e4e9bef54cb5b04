//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `progress`: Step progress bar
//! - `wizard`: The multi-step form screen

mod field_renderer;
mod progress;
mod wizard;

pub use wizard::draw as draw_wizard;
