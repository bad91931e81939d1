//! Scene compositing onto a CPU raster.
//!
//! [`compositor::Compositor`] owns the resolved fonts and turns a canvas plus an
//! ordered element list into a straight-alpha [`bitmap::Bitmap`].

pub(crate) mod bitmap;
mod bitmap_font;
pub(crate) mod compositor;
pub(crate) mod font;
pub(crate) mod text;
