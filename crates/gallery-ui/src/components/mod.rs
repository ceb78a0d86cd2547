//! Reusable UI components

mod badge;
mod button;
mod facet_dropdown;
mod image;
mod input;
mod loading_indicator;

pub use badge::*;
pub use button::*;
pub use facet_dropdown::*;
pub use image::*;
pub use input::*;
pub use loading_indicator::*;
