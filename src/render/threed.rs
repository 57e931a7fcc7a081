//! Pseudo-3D side walls for extruded pie slices.
//!
//! The "3D" look is a flat illusion: for each slice, the walls that would
//! be visible if the disc were a solid cylinder seen from above are filled
//! in below the slice. Which walls are visible changes at the four cardinal
//! angles, so the selection is an explicit case enumeration over the
//! quadrants of the slice's start and end angle. The enumeration encodes a
//! hidden-surface heuristic, not a closed-form law; treat it as a lookup
//! table and do not try to simplify it.
//!
//! Primitives:
//! - a *straight wall*: the quadrilateral under the radial edge at one angle
//! - an *arc wall*: the ribbon under a rim arc, sampled at the configured
//!   granularity and mirrored at the extrusion depth
//! - an *upper brink*: the cosmetic line from the center to a rim point
//!   marking a silhouette boundary, plus one arc-shaped brink over the full
//!   visible arc emitted after all walls

use glam::dvec2;

use crate::model::CellId;
use crate::surface::DrawList;
use crate::types::{Color, Rect, Stroke};

use super::point_on_circle;

/// Wall style and sampling parameters for one slice's extrusion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Extrusion {
    /// Resolved extrusion depth in surface units, downward.
    pub depth: f64,
    pub fill: Color,
    pub pen: Stroke,
    /// Arc sampling step in degrees.
    pub granularity: f64,
}

/// Which quarter of the circle an angle in [0, 360) falls into.
/// Boundary angles belong to the lower quadrant, matching the case table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

fn quadrant(angle: f64) -> Quadrant {
    if angle <= 90.0 {
        Quadrant::First
    } else if angle <= 180.0 {
        Quadrant::Second
    } else if angle <= 270.0 {
        Quadrant::Third
    } else {
        Quadrant::Fourth
    }
}

/// Emit the extrusion for one slice spanning `[start_angle, end_angle)`.
///
/// Both angles are wrapped into [0, 360) first. A full circle is a
/// dedicated case (one 180°→360° arc wall) and never enters the table.
pub(crate) fn extrude_slice(
    list: &mut DrawList,
    cell: Option<CellId>,
    rect: Rect,
    ex: &Extrusion,
    start_angle: f64,
    end_angle: f64,
) {
    let mut start = start_angle;
    let mut end = end_angle;
    while start >= 360.0 {
        start -= 360.0;
    }
    while start < 0.0 {
        start += 360.0;
    }
    while end >= 360.0 {
        end -= 360.0;
    }
    while end < 0.0 {
        end += 360.0;
    }
    debug_assert!((0.0..=360.0).contains(&start));
    debug_assert!((0.0..=360.0).contains(&end));

    if start == end || start == end - 360.0 {
        // full circle: only the lower half of the rim is ever visible
        arc_wall(list, cell, rect, ex, 180.0, 360.0);
    } else {
        use Quadrant::*;
        match (quadrant(start), quadrant(end)) {
            (First, First) => {
                if start <= end {
                    // starts and ends in first quadrant, less than 1/4
                    straight_wall(list, cell, rect, ex, start);
                    upper_brink(list, cell, rect, ex, end);
                } else {
                    // starts and ends in first quadrant, more than 3/4
                    straight_wall(list, cell, rect, ex, start);
                    upper_brink(list, cell, rect, ex, end);
                    arc_wall(list, cell, rect, ex, 180.0, 360.0);
                }
            }
            (First, Second) => {
                // starts in first quadrant, ends in second, less than 1/2
                straight_wall(list, cell, rect, ex, start);
                straight_wall(list, cell, rect, ex, end);
            }
            (First, Third) => {
                straight_wall(list, cell, rect, ex, start);
                straight_wall(list, cell, rect, ex, end);
                arc_wall(list, cell, rect, ex, 180.0, end);
            }
            (First, Fourth) => {
                // more than 3/4, swinging around through the bottom
                straight_wall(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
                arc_wall(list, cell, rect, ex, 180.0, end);
            }
            (Second, First) => {
                arc_wall(list, cell, rect, ex, 180.0, 360.0);
                upper_brink(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
            }
            (Second, Second) => {
                if start <= end {
                    // starts and ends in second quadrant, less than 1/4
                    straight_wall(list, cell, rect, ex, end);
                    upper_brink(list, cell, rect, ex, start);
                } else {
                    // starts and ends in second quadrant, more than 3/4
                    straight_wall(list, cell, rect, ex, end);
                    upper_brink(list, cell, rect, ex, start);
                    arc_wall(list, cell, rect, ex, 180.0, 360.0);
                }
            }
            (Second, Third) => {
                straight_wall(list, cell, rect, ex, end);
                upper_brink(list, cell, rect, ex, start);
                arc_wall(list, cell, rect, ex, 180.0, end);
            }
            (Second, Fourth) => {
                arc_wall(list, cell, rect, ex, 180.0, end);
                upper_brink(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
            }
            (Third, First) => {
                arc_wall(list, cell, rect, ex, start, 360.0);
                upper_brink(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
            }
            (Third, Second) => {
                straight_wall(list, cell, rect, ex, end);
                upper_brink(list, cell, rect, ex, start);
                arc_wall(list, cell, rect, ex, start, 360.0);
            }
            (Third, Third) => {
                if start <= end {
                    // starts and ends in third quadrant, less than 1/4
                    straight_wall(list, cell, rect, ex, end);
                    upper_brink(list, cell, rect, ex, start);
                    arc_wall(list, cell, rect, ex, start, end);
                } else {
                    // starts and ends in third quadrant, more than 3/4
                    straight_wall(list, cell, rect, ex, end);
                    upper_brink(list, cell, rect, ex, start);
                    arc_wall(list, cell, rect, ex, 180.0, end);
                    arc_wall(list, cell, rect, ex, start, 360.0);
                }
            }
            (Third, Fourth) => {
                arc_wall(list, cell, rect, ex, start, end);
                upper_brink(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
            }
            (Fourth, First) => {
                straight_wall(list, cell, rect, ex, start);
                upper_brink(list, cell, rect, ex, end);
                arc_wall(list, cell, rect, ex, start, 360.0);
            }
            (Fourth, Second) => {
                straight_wall(list, cell, rect, ex, start);
                straight_wall(list, cell, rect, ex, end);
                arc_wall(list, cell, rect, ex, start, 360.0);
            }
            (Fourth, Third) => {
                straight_wall(list, cell, rect, ex, start);
                straight_wall(list, cell, rect, ex, end);
                arc_wall(list, cell, rect, ex, 180.0, end);
                arc_wall(list, cell, rect, ex, start, 360.0);
            }
            (Fourth, Fourth) => {
                if start <= end {
                    // starts and ends in fourth quadrant, less than 1/4
                    straight_wall(list, cell, rect, ex, start);
                    upper_brink(list, cell, rect, ex, end);
                    arc_wall(list, cell, rect, ex, start, end);
                } else {
                    // starts and ends in fourth quadrant, more than 3/4
                    straight_wall(list, cell, rect, ex, start);
                    upper_brink(list, cell, rect, ex, end);
                    arc_wall(list, cell, rect, ex, start, 360.0);
                    arc_wall(list, cell, rect, ex, 180.0, end);
                }
            }
        }
    }

    arc_brink(list, cell, rect, ex, start, end);
}

/// Quadrilateral under the radial edge at `angle`.
fn straight_wall(list: &mut DrawList, cell: Option<CellId>, rect: Rect, ex: &Extrusion, angle: f64) {
    let center = rect.center();
    let rim = point_on_circle(rect, angle);
    let points = vec![
        center,
        rim,
        dvec2(rim.x, rim.y + ex.depth),
        dvec2(center.x, center.y + ex.depth),
    ];
    list.fill_polygon(cell, points, ex.fill);
}

/// Cosmetic line from the center to the rim at `angle`.
fn upper_brink(list: &mut DrawList, cell: Option<CellId>, rect: Rect, ex: &Extrusion, angle: f64) {
    let center = rect.center();
    let rim = point_on_circle(rect, angle);
    list.stroke_line(cell, center, rim, ex.pen);
}

/// Ribbon under the rim arc between two angles.
///
/// Rim points are sampled every `granularity` degrees, then mirrored in
/// reverse order at the extrusion depth to close the wall polygon. Spans
/// reaching past 540° split into a second wall on the other side of the
/// disc; past 360° the near side clamps at 360°.
fn arc_wall(
    list: &mut DrawList,
    cell: Option<CellId>,
    rect: Rect,
    ex: &Extrusion,
    start_angle: f64,
    end_angle: f64,
) {
    let start = start_angle.min(end_angle);
    let mut end = start_angle.max(end_angle);

    if end > 540.0 {
        arc_wall(list, cell, rect, ex, 180.0, end - 360.0);
    }
    if end > 360.0 {
        end = 360.0;
    }

    let mut rim = Vec::with_capacity(((end - start) / ex.granularity) as usize + 2);
    let mut degree = end;
    let mut perfect_match = false;
    while degree >= start {
        rim.push(point_on_circle(rect, degree));
        perfect_match = degree == start;
        degree -= ex.granularity;
    }
    rim.reverse();
    if !perfect_match {
        rim.insert(0, point_on_circle(rect, start));
    }

    let mut points = rim;
    for i in (0..points.len()).rev() {
        let p = points[i];
        points.push(dvec2(p.x, p.y + ex.depth));
    }
    list.fill_polygon(cell, points, ex.fill);
}

/// Arc-shaped brink over the visible rim between start and end angle.
fn arc_brink(
    list: &mut DrawList,
    cell: Option<CellId>,
    rect: Rect,
    ex: &Extrusion,
    start_angle: f64,
    end_angle: f64,
) {
    let mut end_angle = end_angle;
    if end_angle < start_angle {
        end_angle += 360.0;
    }
    let start = start_angle.min(end_angle);
    let end = start_angle.max(end_angle);

    let mut points = Vec::with_capacity(((end - start) / ex.granularity) as usize + 2);
    let mut degree = end;
    let mut perfect_match = false;
    while degree >= start {
        points.push(point_on_circle(rect, degree));
        perfect_match = degree == start;
        degree -= ex.granularity;
    }
    points.reverse();
    if !perfect_match {
        points.insert(0, point_on_circle(rect, start));
    }

    list.stroke_polyline(cell, points, ex.pen);
}
