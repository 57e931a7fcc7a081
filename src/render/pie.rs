//! Pie diagrams.
//!
//! A pie reads the first row of the model, one slice per column. In 3D
//! mode the disc becomes a squashed ellipse with extruded side walls, and
//! slices are painted back-to-front so nearer wedges occlude farther ones
//! without a depth buffer.

use std::collections::BTreeMap;

use crate::attrs::{
    DatasetStyle, DiagramAttributes, SliceAttributes, TextAttributes, ThreeDAttributes,
    palette_style,
};
use crate::model::{CellId, DataModel, row_values};
use crate::slice::SliceLayout;
use crate::surface::{DrawList, RenderMode};
use crate::types::{Degrees, Rect};

use super::labels::{LabelFit, format_value, paint_two_pass, shrink_for_labels};
use super::point_on_circle;
use super::threed::{Extrusion, extrude_slice};

/// Pie diagram configuration and renderer.
#[derive(Clone, Debug, Default)]
pub struct PieChart {
    pub attrs: DiagramAttributes,
    pub three_d: ThreeDAttributes,
    pub text: TextAttributes,
    slice_attrs: BTreeMap<usize, SliceAttributes>,
    styles: Vec<DatasetStyle>,
}

impl PieChart {
    pub fn new() -> PieChart {
        PieChart::default()
    }

    /// Attributes of the slice for `column`, falling back to defaults.
    pub fn slice_attributes(&self, column: usize) -> SliceAttributes {
        self.slice_attrs.get(&column).copied().unwrap_or_default()
    }

    pub fn set_slice_attributes(&mut self, column: usize, attrs: SliceAttributes) {
        self.slice_attrs.insert(column, attrs);
    }

    pub fn set_styles(&mut self, styles: Vec<DatasetStyle>) {
        self.styles = styles;
    }

    /// Diagram-space extent: exploding slices need `1 + max_explode` units
    /// of radius so the largest explosion still fits the plotting area.
    pub fn data_boundaries(&self, model: &dyn DataModel) -> (f64, f64) {
        let max = self.max_explode(model.column_count());
        (0.0, 1.0 + max)
    }

    fn max_explode(&self, columns: usize) -> f64 {
        (0..columns)
            .map(|c| self.slice_attributes(c).explode_factor())
            .fold(0.0, f64::max)
    }

    /// Render both passes: measure label bounds, then draw with the
    /// corrected plot size.
    pub fn paint(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        paint_two_pass(area, |mode, fit| self.render_pass(model, area, mode, fit))
    }

    fn render_pass(
        &self,
        model: &dyn DataModel,
        area: Rect,
        mode: RenderMode,
        fit: &LabelFit,
    ) -> DrawList {
        let mut list = DrawList::new(mode);
        // not having any data is no bug, there is just nothing to draw
        if area.is_empty() || model.row_count() == 0 || model.column_count() == 0 {
            return list;
        }
        let values = row_values(model, 0);
        let layout = match SliceLayout::assign(&values, self.attrs.start_position) {
            Some(layout) => layout,
            None => return list,
        };

        // exploding slices get extra space by shrinking the basic size
        let mut size = area.width.min(area.height);
        size /= 1.0 + self.max_explode(model.column_count());
        if size < 0.0 {
            size = 0.0;
        }
        size = shrink_for_labels(size, area, fit.text_bounds);

        let (position, depth) = if !self.three_d.enabled {
            let x = (area.width - size) / 2.0;
            let y = (area.height - size) / 2.0;
            (Rect::new(area.left + x, area.top + y, size, size), 0.0)
        } else {
            // 3D: the ellipse is squashed so disc plus walls fill the size
            let x = (area.width - size) / 2.0;
            let depth = self.three_d.resolve_depth(size);
            let height = size - depth;
            let y = if area.height == height {
                0.0
            } else {
                (area.height - height - depth) / 2.0
            };
            (Rect::new(area.left + x, area.top + y, size, height), depth)
        };

        let granularity = self.attrs.granularity();
        for pie in paint_order(&layout, self.three_d.enabled) {
            self.draw_one_slice(&mut list, model, &layout, position, size, depth, granularity, pie);
        }
        list
    }

    /// The draw rectangle of one slice: the shared pie position, translated
    /// along the slice's mid-angle when it explodes.
    fn slice_position(&self, layout: &SliceLayout, position: Rect, size: f64, pie: usize) -> Rect {
        let attrs = self.slice_attributes(pie);
        if !attrs.explode() {
            return position;
        }
        let direction = Degrees(layout.mid_angle(pie)).direction();
        position.translated(direction * (attrs.explode_factor() * size / 2.0))
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_one_slice(
        &self,
        list: &mut DrawList,
        model: &dyn DataModel,
        layout: &SliceLayout,
        position: Rect,
        size: f64,
        depth: f64,
        granularity: f64,
        pie: usize,
    ) {
        if layout.span(pie) == 0.0 {
            return;
        }
        let rect = self.slice_position(layout, position, size, pie);
        let cell = Some(CellId::new(0, pie));
        let style = palette_style(&self.styles, pie);
        let (start, span) = trimmed_span(
            layout.start(pie),
            layout.span(pie),
            self.slice_attributes(pie).tangential_gap_factor(),
        );

        if self.three_d.enabled {
            let fill = if self.three_d.use_shadow_colors {
                style.brush.darker()
            } else {
                style.brush
            };
            let ex = Extrusion {
                depth,
                fill,
                pen: style.pen,
                granularity,
            };
            extrude_slice(list, cell, rect, &ex, start, start + span);
        }

        self.draw_slice_surface(list, model, rect, cell, style, start, span, granularity, pie);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_slice_surface(
        &self,
        list: &mut DrawList,
        model: &dyn DataModel,
        rect: Rect,
        cell: Option<CellId>,
        style: DatasetStyle,
        start: f64,
        span: f64,
        granularity: f64,
        pie: usize,
    ) {
        if span == 360.0 {
            // full circle, avoid a seam line through the middle
            list.fill_ellipse(cell, rect, style.brush);
        } else {
            let mut poly = Vec::with_capacity((span / granularity) as usize + 3);
            let mut degree = 0.0;
            let mut perfect_match = false;
            while degree <= span {
                poly.push(point_on_circle(rect, start + degree));
                perfect_match = degree == span;
                degree += granularity;
            }
            // if necessary add one more point to fill the last small gap
            if !perfect_match {
                poly.push(point_on_circle(rect, start + span));
            }
            poly.push(rect.center());
            list.fill_polygon(cell, poly, style.brush);
        }

        if self.text.visible {
            // anchor halfway between the slice tip and the mid-arc point
            let south = rect.center();
            let north = point_on_circle(rect, start + span / 2.0);
            let anchor = (south + north) / 2.0;
            let value = model.cell_value(0, pie).unwrap_or(0.0).abs();
            list.text(cell, anchor, format_value(value), self.text.font_size, self.text.color);
        }
    }
}

/// Trim a slice's angular extent symmetrically by the tangential gap.
pub(crate) fn trimmed_span(start: f64, span: f64, gap_factor: f64) -> (f64, f64) {
    let factor = gap_factor.clamp(0.0, 1.0);
    if factor == 0.0 {
        return (start, span);
    }
    let trim = span * factor / 2.0;
    (start + trim, span - 2.0 * trim)
}

/// Painter's-algorithm order for overlapping 3D wedges.
///
/// The backmost slice (at 90°) goes first; from there one walk steps
/// counter-index-wise and one index-wise toward the frontmost slice (at
/// 270°), which goes last. Slices near the front end up painted over
/// slices near the back, approximating hidden-surface removal.
pub(crate) fn paint_order(layout: &SliceLayout, three_d: bool) -> Vec<usize> {
    let backmost = layout.find_slice_at(90.0);
    let frontmost = layout.find_slice_at(270.0);
    let rightmost = layout.find_slice_at(0.0);
    let leftmost = layout.find_slice_at(180.0);

    let mut order = vec![backmost];
    let mut current_left = backmost;
    let mut current_right = backmost;

    if backmost == frontmost {
        if backmost == leftmost {
            current_left = layout.left_of(current_left);
        }
        if backmost == rightmost {
            current_right = layout.right_of(current_right);
        }
    }
    while current_left != frontmost {
        if current_left != backmost {
            order.push(current_left);
        }
        current_left = layout.left_of(current_left);
    }
    while current_right != frontmost {
        if current_right != backmost {
            order.push(current_right);
        }
        current_right = layout.right_of(current_right);
    }

    // the frontmost is drawn last; when it coincides with the backmost in
    // 3D mode it has already been drawn
    if backmost != frontmost || !three_d {
        order.push(frontmost);
    }
    order
}
