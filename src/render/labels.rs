//! Label-fit control: measure labels first, then draw at a corrected scale.
//!
//! Rendering a diagram is a two stage process. The first stage runs the
//! full geometry against a measuring draw list that records only where
//! labels would land. The second stage re-runs the *identical* geometry
//! with the plotting area corrected for any label overflow, this time
//! emitting real operations. Exactly one correction is applied; the loop
//! is not iterated to a fixed point.

use crate::log::debug;
use crate::surface::{DrawList, RenderMode};
use crate::types::Rect;

/// Correction computed from the measure pass and consumed by the draw pass.
///
/// `text_bounds` feeds the pie/ring size shrink; `zoom_factor` feeds the
/// radar transform. A neutral fit leaves geometry untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelFit {
    pub text_bounds: Option<Rect>,
    pub zoom_factor: f64,
}

impl LabelFit {
    pub fn neutral() -> LabelFit {
        LabelFit {
            text_bounds: None,
            zoom_factor: 1.0,
        }
    }

    pub fn from_measure(text_bounds: Option<Rect>, area: Rect) -> LabelFit {
        LabelFit {
            text_bounds,
            zoom_factor: corrective_zoom(text_bounds, area),
        }
    }
}

/// Run `render` twice: once measuring, once drawing with the computed fit.
///
/// Both passes must evaluate the same deterministic geometry for the fit to
/// be meaningful; renderers guarantee that by depending only on their
/// arguments.
pub(crate) fn paint_two_pass<F>(area: Rect, render: F) -> DrawList
where
    F: Fn(RenderMode, &LabelFit) -> DrawList,
{
    let measured = render(RenderMode::Measure, &LabelFit::neutral());
    let fit = LabelFit::from_measure(measured.label_bounds(), area);
    debug!(zoom = fit.zoom_factor, "label fit computed");
    render(RenderMode::Draw, &fit)
}

/// Zoom correction from label overflow: shrink proportionally on whichever
/// axis overflows more, never grow.
pub(crate) fn corrective_zoom(text_bounds: Option<Rect>, area: Rect) -> f64 {
    let bounds = match text_bounds {
        Some(bounds) => bounds,
        None => return 1.0,
    };
    if area.is_empty() {
        return 1.0;
    }

    let overflow_x = (area.left - bounds.left).max(0.0) + (bounds.right() - area.right()).max(0.0);
    let overflow_y = (area.top - bounds.top).max(0.0) + (bounds.bottom() - area.bottom()).max(0.0);
    if overflow_x <= 0.0 && overflow_y <= 0.0 {
        return 1.0;
    }

    let factor = if overflow_x / area.width >= overflow_y / area.height {
        area.width / (area.width + overflow_x)
    } else {
        area.height / (area.height + overflow_y)
    };
    factor.min(1.0)
}

/// Shrink a pie/ring diameter by the measured label overflow.
///
/// Distances are taken from the area center to each side of the label
/// bounding box; the dominant axis decides how much of the diameter the
/// labels need beyond the available half-size.
pub(crate) fn shrink_for_labels(size: f64, area: Rect, text_bounds: Option<Rect>) -> f64 {
    let bounds = match text_bounds {
        Some(bounds) if size > 0.0 => bounds,
        _ => return size,
    };

    let center = area.center();
    let left = (center.x - bounds.left).max(0.0);
    let right = (bounds.right() - center.x).max(0.0);
    let top = (center.y - bounds.top).max(0.0);
    let bottom = (bounds.bottom() - center.y).max(0.0);

    let (x_max, x_min) = if left > right { (left, right) } else { (right, left) };
    let (y_max, y_min) = if top > bottom { (top, bottom) } else { (bottom, top) };

    let available = size / 2.0;
    let diff = if x_max + x_min > y_max + y_min {
        (x_max - available).max(0.0) + (x_min - available).max(0.0)
    } else {
        (y_max - available).max(0.0) + (y_min - available).max(0.0)
    };

    if diff > 0.0 { size - diff.min(size) } else { size }
}

/// Format a cell value for its label, trimming insignificant digits.
pub(crate) fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}
