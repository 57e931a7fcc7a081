//! The polar → surface coordinate transform.
//!
//! A [`PolarTransform`] is render-scoped: it is derived from the plotting
//! rectangle and the dataset's value range at the start of a render call,
//! threaded through the geometry functions as an explicit argument, and
//! dropped when the call returns. Nothing here is ambient state, so two
//! diagrams sharing one plane can never observe each other's transform.

use glam::{DVec2, dvec2};

use crate::types::Rect;

/// A point in diagram space: a radius in value units and an angle in
/// index/value units (scaled to degrees by the transform's `angle_unit`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PolarPoint {
    pub radius: f64,
    pub angle: f64,
}

impl PolarPoint {
    pub fn new(radius: f64, angle: f64) -> PolarPoint {
        PolarPoint { radius, angle }
    }
}

/// Independent x/y scaling about a fixed center point.
///
/// Zooming about the center keeps the diagram where it is; only distances
/// from the center stretch or shrink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    pub x_factor: f64,
    pub y_factor: f64,
    pub center: DVec2,
}

impl Zoom {
    pub fn identity(center: DVec2) -> Zoom {
        Zoom {
            x_factor: 1.0,
            y_factor: 1.0,
            center,
        }
    }

    pub fn uniform(factor: f64, center: DVec2) -> Zoom {
        Zoom {
            x_factor: factor,
            y_factor: factor,
            center,
        }
    }

    fn apply(&self, p: DVec2) -> DVec2 {
        self.center + (p - self.center) * dvec2(self.x_factor, self.y_factor)
    }

    #[cfg(test)]
    fn unapply(&self, p: DVec2) -> DVec2 {
        self.center + (p - self.center) / dvec2(self.x_factor, self.y_factor)
    }
}

/// Converts diagram-space (radius, angle) points to surface points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarTransform {
    /// Surface position of the polar origin.
    pub origin: DVec2,
    /// Surface units per radius unit.
    pub radius_unit: f64,
    /// Degrees per angle unit.
    pub angle_unit: f64,
    /// Rotational offset applied to every angle, in degrees.
    pub start_position: f64,
    pub zoom: Zoom,
}

impl PolarTransform {
    /// A transform filling `area`: origin at the center, the maximum radius
    /// `max_radius` mapped to the inscribed circle, one angle unit per
    /// `angle_unit` degrees.
    pub fn fitted(area: Rect, max_radius: f64, angle_unit: f64, start_position: f64) -> PolarTransform {
        let center = area.center();
        let radius = area.width.min(area.height) / 2.0;
        let radius_unit = if max_radius > 0.0 { radius / max_radius } else { 0.0 };
        PolarTransform {
            origin: center,
            radius_unit,
            angle_unit,
            start_position,
            zoom: Zoom::identity(center),
        }
    }

    pub fn with_zoom(mut self, zoom: Zoom) -> PolarTransform {
        self.zoom = zoom;
        self
    }

    /// Diagram point to surface point.
    ///
    /// The angle is scaled to degrees, rotated by the start position, and
    /// converted with a negative sine so that growing angles run
    /// counter-clockwise on the y-down surface. Zoom is applied about its
    /// center so it never recenters the diagram.
    pub fn translate(&self, p: PolarPoint) -> DVec2 {
        let radius = p.radius * self.radius_unit;
        let theta = (p.angle * self.angle_unit + self.start_position).to_radians();
        let cart = dvec2(radius * theta.cos(), -(radius * theta.sin()));
        self.zoom.apply(self.origin + cart)
    }

    /// Pure angular/radial scaling without the cartesian conversion.
    /// Used where callers need raw angular-space values, e.g. the arc span
    /// in degrees for 3D side generation.
    pub fn translate_polar(&self, p: PolarPoint) -> PolarPoint {
        PolarPoint {
            radius: p.radius * self.radius_unit,
            angle: p.angle * self.angle_unit,
        }
    }

    /// Inverse of [`translate`](Self::translate); consistency checks only.
    #[cfg(test)]
    pub(crate) fn untranslate(&self, surface: DVec2) -> PolarPoint {
        let cart = self.zoom.unapply(surface) - self.origin;
        let radius = cart.length();
        let theta = (-cart.y).atan2(cart.x).to_degrees();
        let angle_deg = theta - self.start_position;
        PolarPoint {
            radius: if self.radius_unit != 0.0 { radius / self.radius_unit } else { 0.0 },
            angle: if self.angle_unit != 0.0 {
                let mut a = angle_deg / self.angle_unit;
                let turn = 360.0 / self.angle_unit;
                while a < 0.0 {
                    a += turn;
                }
                while a >= turn {
                    a -= turn;
                }
                a
            } else {
                0.0
            },
        }
    }
}
