use kurbo::Rect;
use rayon::prelude::*;

use crate::fill::stencil_matches;
use crate::foundation::{
    core::{Bgra8, RectI},
    error::LithoResult,
};
use crate::surface::{buffer::Surface, mask::BitMask, region::row_spans};

/// Marks every pixel within `tolerance` of `reference`, independent of
/// connectivity, and returns the bounding box of the marked set (far edges
/// widened by one; [`Rect::ZERO`] when nothing matches).
///
/// With `limit_to_selection`, only pixels inside the `selection` rectangles
/// are considered. The stencil is cleared on entry.
///
/// Rows carry no sequential dependency, so they are scanned in parallel;
/// each worker owns one stencil row and a local extent accumulator, and the
/// per-row extents are combined in a single reduction step.
#[tracing::instrument(skip(src, stencil, selection))]
pub fn fill_stencil_by_color(
    src: &Surface,
    stencil: &mut BitMask,
    reference: Bgra8,
    tolerance: u8,
    selection: &[RectI],
    limit_to_selection: bool,
) -> LithoResult<Rect> {
    stencil_matches(src, stencil)?;

    let width = src.width() as usize;
    let width_i = src.width() as i32;
    let pixels = src.pixels();

    stencil.clear(false);
    let words_per_row = stencil.words_per_row();

    let extents = stencil
        .words_mut()
        .par_chunks_mut(words_per_row)
        .enumerate()
        .map(|(y, row_words)| {
            let row = &pixels[y * width..][..width];
            let spans = if limit_to_selection {
                row_spans(selection, y as i32, width_i)
            } else {
                vec![(0, width_i)]
            };

            let mut local = Extents::EMPTY;
            for (x0, x1) in spans {
                for x in x0..x1 {
                    if Bgra8::within_tolerance(reference, row[x as usize], tolerance) {
                        BitMask::set_in_row_words(row_words, x as usize);
                        local.include(x, y as i32);
                    }
                }
            }
            local
        })
        .reduce(|| Extents::EMPTY, Extents::merge);

    Ok(extents.to_rect())
}

/// Per-worker bounding extents, merged once after the parallel scan.
#[derive(Clone, Copy, Debug)]
struct Extents {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl Extents {
    const EMPTY: Self = Self {
        left: i32::MAX,
        right: i32::MIN,
        top: i32::MAX,
        bottom: i32::MIN,
    };

    fn include(&mut self, x: i32, y: i32) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.top = self.top.min(y);
        self.bottom = self.bottom.max(y);
    }

    fn merge(a: Self, b: Self) -> Self {
        Self {
            left: a.left.min(b.left),
            right: a.right.max(b.right),
            top: a.top.min(b.top),
            bottom: a.bottom.max(b.bottom),
        }
    }

    fn to_rect(self) -> Rect {
        if self.left == i32::MAX {
            return Rect::ZERO;
        }
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right + 1),
            f64::from(self.bottom + 1),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/global.rs"]
mod tests;
