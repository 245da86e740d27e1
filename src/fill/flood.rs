use std::collections::VecDeque;

use kurbo::Rect;

use crate::fill::stencil_matches;
use crate::foundation::{
    core::{Bgra8, PointI, RectI},
    error::{LithoError, LithoResult},
};
use crate::surface::{buffer::Surface, mask::BitMask};

/// Scanline flood fill from a seed point.
///
/// The reference color is the sample under `start`; a pixel matches when
/// every channel (alpha included) is within `tolerance` of it. Matched,
/// 4-connected pixels are marked in `stencil` and the bounding box of the
/// marked set is returned, widened by one on the far edges (a pixel at
/// `(x, y)` occupies `[x, x+1] × [y, y+1]`).
///
/// With `limit_to_selection`, the fill cannot cross the boundary of the
/// `selection` rectangles: everything outside them is pre-marked to block
/// the scan and released afterwards, so the returned stencil holds only
/// genuinely matched pixels. A seed outside the selection yields an empty
/// stencil and [`Rect::ZERO`].
///
/// The stencil is cleared on entry. The working queue grows on demand; large
/// contiguous fills cannot overflow it.
#[tracing::instrument(skip(src, stencil, selection))]
pub fn fill_stencil_from_point(
    src: &Surface,
    stencil: &mut BitMask,
    start: PointI,
    tolerance: u8,
    selection: &[RectI],
    limit_to_selection: bool,
) -> LithoResult<Rect> {
    stencil_matches(src, stencil)?;
    if !src.bounds().contains(start) {
        return Err(LithoError::validation("fill seed point is out of bounds"));
    }

    let width = src.width() as i32;
    let height = src.height() as i32;
    let pixels = src.pixels();

    stencil.clear(false);
    if limit_to_selection {
        stencil.mask_outside(selection, true);
        if stencil.get(start.x as u32, start.y as u32) {
            stencil.mask_outside(selection, false);
            return Ok(Rect::ZERO);
        }
    }

    let scan = RunScanner {
        pixels,
        width,
        cmp: pixels[(start.y * width + start.x) as usize],
        tolerance,
    };

    let mut left = start.x;
    let mut right = start.x;
    let mut top = start.y;
    let mut bottom = start.y;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(pt) = queue.pop_front() {
        let y = pt.y;

        // Extend the run left and right of the dequeued point, marking as we
        // go so revisits terminate.
        let mut x_left = pt.x;
        let mut x_right = pt.x;
        while x_left > 0 && scan.matched(stencil, x_left - 1, y) {
            x_left -= 1;
            stencil.set(x_left as u32, y as u32, true);
        }
        while x_right < width && scan.matched(stencil, x_right, y) {
            stencil.set(x_right as u32, y as u32, true);
            x_right += 1;
        }
        x_right -= 1;

        left = left.min(x_left);
        right = right.max(x_right);
        top = top.min(y);
        bottom = bottom.max(y);

        // One seed per contiguous unvisited matched run in the rows above
        // and below the span just marked.
        if y > 0 {
            scan.enqueue_runs(&mut queue, stencil, y - 1, x_left, x_right);
        }
        if y < height - 1 {
            scan.enqueue_runs(&mut queue, stencil, y + 1, x_left, x_right);
        }
    }

    if limit_to_selection {
        stencil.mask_outside(selection, false);
    }

    Ok(Rect::new(
        f64::from(left),
        f64::from(top),
        f64::from(right + 1),
        f64::from(bottom + 1),
    ))
}

/// Row-run matcher shared by the horizontal extension and the adjacent-row
/// seeding passes.
struct RunScanner<'a> {
    pixels: &'a [Bgra8],
    width: i32,
    cmp: Bgra8,
    tolerance: u8,
}

impl RunScanner<'_> {
    /// Unvisited and within tolerance of the reference color.
    fn matched(&self, stencil: &BitMask, x: i32, y: i32) -> bool {
        !stencil.get(x as u32, y as u32)
            && Bgra8::within_tolerance(
                self.cmp,
                self.pixels[(y * self.width + x) as usize],
                self.tolerance,
            )
    }

    fn enqueue_runs(
        &self,
        queue: &mut VecDeque<PointI>,
        stencil: &BitMask,
        oy: i32,
        x_left: i32,
        x_right: i32,
    ) {
        let mut sx = x_left;
        while sx <= x_right {
            while sx <= x_right && !self.matched(stencil, sx, oy) {
                sx += 1;
            }
            if sx <= x_right {
                queue.push_back(PointI::new(sx, oy));
                while sx <= x_right && self.matched(stencil, sx, oy) {
                    sx += 1;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/flood.rs"]
mod tests;
