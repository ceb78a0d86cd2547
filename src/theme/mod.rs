//! Theme: palette and global styles.

mod styles;

pub use styles::GLOBAL_STYLES;
