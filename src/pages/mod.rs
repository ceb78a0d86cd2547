//! Page components for the Character Gallery.

mod gallery;

pub use gallery::Gallery;
