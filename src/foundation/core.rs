pub use kurbo::{Point, Rect};

/// Top-left anchor of an element, in canvas pixels.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, staying in signed pixel space.
    pub fn offset(self, dx: i64, dy: i64) -> PixelPoint {
        PixelPoint {
            x: i64::from(self.x) + dx,
            y: i64::from(self.y) + dy,
        }
    }
}

impl From<[u32; 2]> for Position {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for PixelPoint {
    fn from(p: Position) -> Self {
        Self::new(i64::from(p.x), i64::from(p.y))
    }
}

impl From<Position> for [u32; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

/// Signed pixel coordinate. Derived positions (centered labels, insets) can
/// land left of or above the canvas origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// Half-open pixel box `[x, x+width) x [y, y+height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelBox {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    pub fn at(pos: Position, width: u32, height: u32) -> Self {
        Self {
            x: i64::from(pos.x),
            y: i64::from(pos.y),
            width,
            height,
        }
    }

    pub fn origin(self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn right(self) -> i64 {
        self.x + i64::from(self.width)
    }

    pub fn bottom(self) -> i64 {
        self.y + i64::from(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(self, px: i64, py: i64) -> bool {
        self.x <= px && px < self.right() && self.y <= py && py < self.bottom()
    }

    /// Offset from the top-left corner.
    pub fn inset(self, dx: i64, dy: i64) -> PixelPoint {
        PixelPoint::new(self.x + dx, self.y + dy)
    }

    /// Origin that centers a `content_w x content_h` box inside this one,
    /// with flooring division so odd remainders bias toward the top-left.
    pub fn centered(self, content_w: u32, content_h: u32) -> PixelPoint {
        let dx = (i64::from(self.width) - i64::from(content_w)).div_euclid(2);
        let dy = (i64::from(self.height) - i64::from(content_h)).div_euclid(2);
        PixelPoint::new(self.x + dx, self.y + dy)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    /// The four 1px edge strips (top, bottom, left, right), inside the box.
    pub fn outline_strips(self) -> [PixelBox; 4] {
        let bottom_y = self.bottom().saturating_sub(1).max(self.y);
        let right_x = self.right().saturating_sub(1).max(self.x);
        let inner_h = self.height.saturating_sub(2);
        [
            PixelBox {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height.min(1),
            },
            PixelBox {
                x: self.x,
                y: bottom_y,
                width: self.width,
                height: self.height.min(1),
            },
            PixelBox {
                x: self.x,
                y: self.y + 1,
                width: self.width.min(1),
                height: inner_h,
            },
            PixelBox {
                x: right_x,
                y: self.y + 1,
                width: self.width.min(1),
                height: inner_h,
            },
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
