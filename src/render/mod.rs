//! Diagram renderers.
//!
//! This module is organized into submodules:
//! - `labels`: the measure → draw label-fit controller
//! - `pie`: pie diagrams, including the pseudo-3D paint order
//! - `threed`: side-wall extrusion for the 3D effect
//! - `ring`: nested ring (multi-row) diagrams
//! - `radar`: radar and open polar polyline diagrams
//!
//! Renderers are pure: they take the data model, the plotting rectangle and
//! a render mode, and return a [`DrawList`](crate::surface::DrawList).
//! All per-render state (slice layouts, transforms, label bounds) lives on
//! the stack of one `paint` call.

pub mod labels;
pub mod pie;
pub mod radar;
pub mod ring;
pub mod threed;

pub use pie::PieChart;
pub use radar::{PolarChart, RadarChart};
pub use ring::RingChart;

use glam::{DVec2, dvec2};

use crate::types::{Degrees, Rect};

/// Point on the ellipse inscribed in `rect` at `angle` degrees.
///
/// Angle 0° is east, growing counter-clockwise on the y-down surface.
pub(crate) fn point_on_circle(rect: Rect, angle: f64) -> DVec2 {
    rect.center() + Degrees(angle).direction() * dvec2(rect.width / 2.0, rect.height / 2.0)
}
