//! Builder style entry points that work on image files.

pub mod capacity;
pub mod hide;
pub mod unveil;
