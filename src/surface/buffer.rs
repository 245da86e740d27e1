use crate::foundation::{
    core::{Bgra8, RectI},
    error::{LithoError, LithoResult},
};

/// A caller-owned, row-major pixel buffer.
///
/// Invariants: `width > 0`, `height > 0`, `data.len() == width * height`,
/// `index(x, y) = y * width + x`. Engines borrow a `Surface` for the duration
/// of one call and retain nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<Bgra8>,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> LithoResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![Bgra8::ZERO; len],
        })
    }

    pub fn filled(width: u32, height: u32, color: Bgra8) -> LithoResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Wraps an existing pixel vector. The length must match `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Bgra8>) -> LithoResult<Self> {
        let len = checked_area(width, height)?;
        if data.len() != len {
            return Err(LithoError::validation(
                "surface pixel data must match width * height",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> RectI {
        RectI::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[Bgra8] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Bgra8] {
        &mut self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Bgra8 {
        self.data[self.index(x, y)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Bgra8) {
        let i = self.index(x, y);
        self.data[i] = color;
    }

    pub fn row(&self, y: u32) -> &[Bgra8] {
        let w = self.width as usize;
        &self.data[y as usize * w..][..w]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

pub(crate) fn same_size(a: &Surface, b: &Surface) -> LithoResult<()> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(LithoError::validation(
            "source and destination surfaces must have identical dimensions",
        ));
    }
    Ok(())
}

fn checked_area(width: u32, height: u32) -> LithoResult<usize> {
    if width == 0 || height == 0 {
        return Err(LithoError::validation(
            "surface width/height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| LithoError::validation("surface size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
