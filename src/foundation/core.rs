use crate::foundation::math::mul_div255_u8;

pub use kurbo::{Point, Rect};

/// One 8-bit BGRA color sample. Field order matches the editor's native
/// surface memory layout (blue first).
///
/// Whether the channels are straight or premultiplied is a convention of the
/// surrounding pipeline; [`Bgra8::to_premultiplied_alpha`] and
/// [`Bgra8::to_straight_alpha`] convert between the two, with byte rounding.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Bgra8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra8 {
    /// The all-zero (fully transparent) sample.
    pub const ZERO: Self = Self {
        b: 0,
        g: 0,
        r: 0,
        a: 0,
    };

    pub fn from_bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    pub fn opaque(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    /// Scales the color channels by `a/255`, rounding to the nearest byte.
    pub fn to_premultiplied_alpha(self) -> Self {
        let a = u16::from(self.a);
        Self {
            b: mul_div255_u8(u16::from(self.b), a),
            g: mul_div255_u8(u16::from(self.g), a),
            r: mul_div255_u8(u16::from(self.r), a),
            a: self.a,
        }
    }

    /// Inverse of [`Bgra8::to_premultiplied_alpha`]. A fully transparent
    /// sample has no recoverable color and maps to [`Bgra8::ZERO`].
    pub fn to_straight_alpha(self) -> Self {
        if self.a == 0 {
            return Self::ZERO;
        }
        let a = u32::from(self.a);
        let unmul = |c: u8| (((u32::from(c) * 255) + a / 2) / a).min(255) as u8;
        Self {
            b: unmul(self.b),
            g: unmul(self.g),
            r: unmul(self.r),
            a: self.a,
        }
    }

    /// True when every channel difference, alpha included, is at most
    /// `tolerance`. This is the match predicate used by the fill engines.
    pub fn within_tolerance(x: Self, y: Self, tolerance: u8) -> bool {
        let t = i16::from(tolerance);
        let close = |p: u8, q: u8| (i16::from(p) - i16::from(q)).abs() <= t;
        close(x.b, y.b) && close(x.g, y.g) && close(x.r, y.r) && close(x.a, y.a)
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle. `width`/`height` are never meaningfully
/// negative; a rectangle with zero (or negative) extent is empty.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RectI {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column to the right of the rectangle (exclusive).
    pub fn right(self) -> i32 {
        self.x + self.width
    }

    /// First row below the rectangle (exclusive).
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(self, p: PointI) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            x,
            y,
            width: (right - x).max(0),
            height: (bottom - y).max(0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
