//! Ring (multi-row) diagrams.
//!
//! Every model row is one ring of slices; row 0 is the outermost ring and
//! the last row the innermost. Each ring distributes its own row values
//! over the full turn, so rings are independently proportioned. Radial
//! gaps and (optionally) explosions of inner rings push the rings outside
//! them further out.

use std::collections::BTreeMap;

use glam::DVec2;

use crate::attrs::{DatasetStyle, DiagramAttributes, SliceAttributes, TextAttributes, palette_style};
use crate::model::{CellId, DataModel, row_values};
use crate::slice::SliceLayout;
use crate::surface::{DrawList, RenderMode};
use crate::types::{Degrees, Rect};

use super::labels::{LabelFit, format_value, paint_two_pass, shrink_for_labels};
use super::pie::trimmed_span;

/// Ring diagram configuration and renderer.
#[derive(Clone, Debug, Default)]
pub struct RingChart {
    pub attrs: DiagramAttributes,
    pub text: TextAttributes,
    slice_attrs: BTreeMap<CellId, SliceAttributes>,
    styles: Vec<DatasetStyle>,
}

impl RingChart {
    pub fn new() -> RingChart {
        RingChart::default()
    }

    pub fn slice_attributes(&self, row: usize, column: usize) -> SliceAttributes {
        self.slice_attrs
            .get(&CellId::new(row, column))
            .copied()
            .unwrap_or_default()
    }

    pub fn set_slice_attributes(&mut self, row: usize, column: usize, attrs: SliceAttributes) {
        self.slice_attrs.insert(CellId::new(row, column), attrs);
    }

    pub fn set_styles(&mut self, styles: Vec<DatasetStyle>) {
        self.styles = styles;
    }

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
        let rows = model.row_count();
        let columns = model.column_count();
        if area.is_empty() || rows == 0 || columns == 0 {
            return list;
        }

        let layouts: Vec<Option<SliceLayout>> = (0..rows)
            .map(|row| SliceLayout::assign(&row_values(model, row), self.attrs.start_position))
            .collect();
        if layouts.iter().all(Option::is_none) {
            return list;
        }

        // unlike the pie, explosion reserves no extra space here: an
        // exploding slice shifts within its own annulus only
        let mut size = area.width.min(area.height);
        size = shrink_for_labels(size, area, fit.text_bounds);

        let x = (area.width - size) / 2.0;
        let y = (area.height - size) / 2.0;
        let position = Rect::new(area.left + x, area.top + y, size, size);
        let center = position.center();
        let unit = size / ((rows + 1) as f64 * 2.0);
        let granularity = self.attrs.granularity();

        for (row, layout) in layouts.iter().enumerate() {
            let layout = match layout {
                Some(layout) => layout,
                None => continue,
            };
            let level_offset = self.outward_offset(row, rows, columns);
            let base = (rows - row - 1) as f64;
            let inner_radius = (base + 1.0 + level_offset) * unit;
            let outer_radius = (base + 2.0 + level_offset) * unit;

            for column in 0..columns {
                self.draw_ring_slice(
                    &mut list,
                    model,
                    layout,
                    center,
                    size,
                    inner_radius,
                    outer_radius,
                    granularity,
                    row,
                    column,
                );
            }
        }
        list
    }

    /// Accumulated radial displacement, in level units, that the rings
    /// inside `row` impose on it. Explosions only count when the diagram
    /// expands on explode; otherwise an exploding inner ring displaces
    /// nothing but itself.
    fn outward_offset(&self, row: usize, rows: usize, columns: usize) -> f64 {
        let mut offset = 0.0;
        for inner in row + 1..rows {
            let mut gap: f64 = 0.0;
            let mut explode: f64 = 0.0;
            for column in 0..columns {
                let attrs = self.slice_attributes(inner, column);
                gap = gap.max(attrs.radial_gap_factor());
                explode = explode.max(attrs.explode_factor());
            }
            offset += gap;
            if self.attrs.expand_when_exploded {
                offset += explode;
            }
        }
        offset
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_ring_slice(
        &self,
        list: &mut DrawList,
        model: &dyn DataModel,
        layout: &SliceLayout,
        center: DVec2,
        size: f64,
        inner_radius: f64,
        outer_radius: f64,
        granularity: f64,
        row: usize,
        column: usize,
    ) {
        if layout.span(column) == 0.0 {
            return;
        }
        let attrs = self.slice_attributes(row, column);
        let (start, span) = trimmed_span(
            layout.start(column),
            layout.span(column),
            attrs.tangential_gap_factor(),
        );

        let mut slice_center = center;
        if attrs.explode() {
            let direction = Degrees(layout.mid_angle(column)).direction();
            slice_center += direction * (attrs.explode_factor() * size / 2.0);
        }

        // sample the arc once, reuse for both radii
        let mut angles = Vec::with_capacity((span / granularity) as usize + 2);
        let mut degree = 0.0;
        let mut perfect_match = false;
        while degree <= span {
            angles.push(start + degree);
            perfect_match = degree == span;
            degree += granularity;
        }
        if !perfect_match {
            angles.push(start + span);
        }

        let at = |angle: f64, radius: f64| slice_center + Degrees(angle).direction() * radius;

        // inner-arc vertices ascending, then outer-arc vertices descending
        let mut poly: Vec<DVec2> = angles.iter().map(|&a| at(a, inner_radius)).collect();
        poly.extend(angles.iter().rev().map(|&a| at(a, outer_radius)));

        let cell = Some(CellId::new(row, column));
        let style = palette_style(&self.styles, column);
        list.fill_polygon(cell, poly, style.brush);

        if self.text.visible {
            let mid_radius = (inner_radius + outer_radius) / 2.0;
            let anchor = at(start + span / 2.0, mid_radius);
            let value = model.cell_value(row, column).unwrap_or(0.0).abs();
            list.text(cell, anchor, format_value(value), self.text.font_size, self.text.color);
        }
    }
}
