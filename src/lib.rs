//! Litho is the CPU pixel-processing core of a raster image editor.
//!
//! The crate turns a source pixel buffer, a list of regions-of-interest, and
//! effect parameters into a written destination buffer, or — for the fill
//! engines — into a stencil mask plus a bounding box.
//!
//! # Pipeline overview
//!
//! 1. **Tile**: callers shard the dirty area into ROIs ([`split_rows`] or
//!    their own rectangles).
//! 2. **Render**: a convolution engine ([`render_color_difference`],
//!    [`render_gaussian_blur`], or an [`Effect`] variant) writes every ROI
//!    pixel of the destination [`Surface`].
//! 3. **Select**: the fill engines ([`fill_stencil_from_point`],
//!    [`fill_stencil_by_color`]) mark matched pixels in a [`BitMask`] and
//!    report the matched extent as a [`Rect`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No I/O, no globals**: engines are pure calls over borrowed buffers and
//!   retain nothing across calls.
//! - **Run-to-completion**: results are fully computed before return;
//!   parallelism (rayon) is confined inside each call.
//! - **Fixed-point hot loops**: the blur pipeline accumulates in `i64` with
//!   the editor's historical `>>7`/`>>8` scaling, so outputs are
//!   pixel-reproducible across platforms.
#![forbid(unsafe_code)]

mod effects;
mod fill;
mod foundation;
mod surface;

pub use effects::blur::{gaussian_blur_row, render_gaussian_blur};
pub use effects::convolve::{directional_weights, render_color_difference};
pub use effects::fx::{Effect, parse_effect};
pub use fill::flood::fill_stencil_from_point;
pub use fill::global::fill_stencil_by_color;
pub use foundation::core::{Bgra8, Point, PointI, Rect, RectI};
pub use foundation::error::{LithoError, LithoResult};
pub use surface::buffer::Surface;
pub use surface::mask::BitMask;
pub use surface::region::split_rows;
