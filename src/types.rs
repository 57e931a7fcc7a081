//! Core numeric and geometric primitives.
//!
//! Angles are always degrees in the public API; conversion to radians
//! happens only at the trigonometry call sites. Screen coordinates are
//! y-down, angles run counter-clockwise with 0° at the east.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// An angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);
    pub const FULL_TURN: Degrees = Degrees(360.0);

    /// Raw value in degrees.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Wrap into [0, 360).
    pub fn normalized(self) -> Degrees {
        let mut a = self.0;
        while a >= 360.0 {
            a -= 360.0;
        }
        while a < 0.0 {
            a += 360.0;
        }
        Degrees(a)
    }

    /// Unit direction on a y-down surface: `(cos a, -sin a)`.
    #[inline]
    pub fn direction(self) -> DVec2 {
        let rad = self.to_radians();
        dvec2(rad.cos(), -rad.sin())
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}
impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}
impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}
impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}
impl AddAssign for Degrees {
    fn add_assign(&mut self, rhs: Degrees) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned rectangle in surface coordinates (y-down).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle from min/max corners.
    pub fn from_corners(min: DVec2, max: DVec2) -> Rect {
        Rect {
            left: min.x,
            top: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        dvec2(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A rectangle with zero or negative extent draws nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn translated(&self, offset: DVec2) -> Rect {
        Rect {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Corner points, clockwise from top-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            dvec2(self.left, self.top),
            dvec2(self.right(), self.top),
            dvec2(self.right(), self.bottom()),
            dvec2(self.left, self.bottom()),
        ]
    }
}

/// Axis-aligned bounding box accumulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BBox {
    /// Create an empty bounding box (will expand on first point).
    pub fn new() -> BBox {
        BBox {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn expand_rect(&mut self, rect: Rect) {
        self.expand_point(dvec2(rect.left, rect.top));
        self.expand_point(dvec2(rect.right(), rect.bottom()));
    }

    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            None
        } else {
            Some(Rect::from_corners(self.min, self.max))
        }
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// A darkened variant at half brightness, used for 3D shadow walls.
    pub fn darker(self) -> Color {
        Color {
            r: self.r / 2,
            g: self.g / 2,
            b: self.b / 2,
            a: self.a,
        }
    }

    /// Scale the alpha channel by `factor` in [0, 1].
    pub fn with_alpha_factor(self, factor: f64) -> Color {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Color { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Stroke style for polylines and outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Stroke {
        Stroke { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn degrees_normalized_wraps_high() {
        assert!((Degrees(360.0).normalized().0 - 0.0).abs() < EPS);
        assert!((Degrees(725.0).normalized().0 - 5.0).abs() < EPS);
    }

    #[test]
    fn degrees_normalized_wraps_negative() {
        assert!((Degrees(-90.0).normalized().0 - 270.0).abs() < EPS);
    }

    #[test]
    fn degrees_direction_is_screen_down() {
        // 90° points up on a y-down surface
        let d = Degrees(90.0).direction();
        assert!(d.x.abs() < EPS);
        assert!((d.y + 1.0).abs() < EPS);
    }

    #[test]
    fn rect_center_and_corners() {
        let r = Rect::new(10.0, 20.0, 100.0, 60.0);
        assert_eq!(r.center(), dvec2(60.0, 50.0));
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 80.0);
        assert!(!r.is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(dvec2(5.0, 5.0)));
        assert!(r.contains(dvec2(0.0, 10.0)));
        assert!(!r.contains(dvec2(10.1, 5.0)));
    }

    #[test]
    fn bbox_new_is_empty() {
        assert!(BBox::new().is_empty());
        assert_eq!(BBox::new().to_rect(), None);
    }

    #[test]
    fn bbox_expand_and_to_rect() {
        let mut bb = BBox::new();
        bb.expand_point(dvec2(1.0, 2.0));
        bb.expand_point(dvec2(5.0, -3.0));
        let rect = bb.to_rect().unwrap();
        assert_eq!(rect.left, 1.0);
        assert_eq!(rect.top, -3.0);
        assert_eq!(rect.width, 4.0);
        assert_eq!(rect.height, 5.0);
    }

    #[test]
    fn color_darker_halves_channels() {
        let c = Color::rgb(200, 100, 50);
        assert_eq!(c.darker(), Color::rgb(100, 50, 25));
    }

    #[test]
    fn color_alpha_factor_clamps() {
        let c = Color::rgba(10, 20, 30, 200);
        assert_eq!(c.with_alpha_factor(0.5).a, 100);
        assert_eq!(c.with_alpha_factor(2.0).a, 200);
        assert_eq!(c.with_alpha_factor(-1.0).a, 0);
    }
}
