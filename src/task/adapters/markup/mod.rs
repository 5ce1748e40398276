//! HTML markup rendering of the display containers.

mod surface;

pub use surface::{MarkupError, MarkupSurface};
