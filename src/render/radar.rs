//! Radar and open polar diagrams.
//!
//! Each model column is one dataset; each row is one spoke. A cell maps
//! through the polar transform with the row index as the angle and the
//! value as the radius. Datasets become polylines, optionally closed, with
//! an optional translucent fill layer painted entirely below the strokes
//! so fills never occlude another dataset's outline.

use glam::DVec2;

use crate::attrs::{DatasetStyle, DiagramAttributes, TextAttributes, palette_style};
use crate::model::{CellId, DataModel, column_values};
use crate::polar::{PolarPoint, PolarTransform, Zoom};
use crate::surface::{DrawList, RenderMode};
use crate::types::{Rect, Stroke};

use super::labels::{LabelFit, format_value, paint_two_pass};

/// Radar diagram configuration and renderer.
#[derive(Clone, Debug, Default)]
pub struct RadarChart {
    pub attrs: DiagramAttributes,
    pub text: TextAttributes,
    styles: Vec<DatasetStyle>,
}

impl RadarChart {
    pub fn new() -> RadarChart {
        RadarChart::default()
    }

    pub fn set_styles(&mut self, styles: Vec<DatasetStyle>) {
        self.styles = styles;
    }

    pub fn paint(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        paint_two_pass(area, |mode, fit| {
            render_polar_polylines(
                &self.attrs,
                &self.text,
                &self.styles,
                model,
                area,
                mode,
                fit,
                self.attrs.close_datasets,
                self.attrs.fill_alpha,
            )
        })
    }
}

/// Open polar diagram: the radar geometry with closing and fill disabled.
#[derive(Clone, Debug, Default)]
pub struct PolarChart {
    pub attrs: DiagramAttributes,
    pub text: TextAttributes,
    styles: Vec<DatasetStyle>,
}

impl PolarChart {
    pub fn new() -> PolarChart {
        PolarChart::default()
    }

    pub fn set_styles(&mut self, styles: Vec<DatasetStyle>) {
        self.styles = styles;
    }

    pub fn paint(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        paint_two_pass(area, |mode, fit| {
            render_polar_polylines(
                &self.attrs,
                &self.text,
                &self.styles,
                model,
                area,
                mode,
                fit,
                false,
                0.0,
            )
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn render_polar_polylines(
    attrs: &DiagramAttributes,
    text: &TextAttributes,
    styles: &[DatasetStyle],
    model: &dyn DataModel,
    area: Rect,
    mode: RenderMode,
    fit: &LabelFit,
    close_datasets: bool,
    fill_alpha: f64,
) -> DrawList {
    let mut list = DrawList::new(mode);
    let rows = model.row_count();
    let columns = model.column_count();
    if area.is_empty() || rows == 0 || columns == 0 {
        return list;
    }

    let mut max_value: f64 = 0.0;
    for row in 0..rows {
        for column in 0..columns {
            if let Some(value) = model.cell_value(row, column) {
                max_value = max_value.max(value.abs());
            }
        }
    }
    if max_value == 0.0 {
        return list;
    }

    // angle 0 at twelve o'clock, one spoke per row, label overflow shrinks
    // the whole plot through the corrective zoom
    let transform = PolarTransform::fitted(
        area,
        max_value,
        360.0 / rows as f64,
        90.0 + attrs.start_position,
    )
    .with_zoom(Zoom::uniform(fit.zoom_factor, area.center()));

    let dataset_points = |column: usize| -> Vec<(usize, DVec2)> {
        column_values(model, column)
            .into_iter()
            .enumerate()
            .filter_map(|(row, value)| {
                value.map(|v| {
                    let point = transform.translate(PolarPoint::new(v.abs(), row as f64));
                    (row, point)
                })
            })
            .collect()
    };

    // fill layer first, for every dataset, so no fill covers a stroke
    if fill_alpha > 0.0 {
        for column in 0..columns {
            let points: Vec<DVec2> = dataset_points(column).into_iter().map(|(_, p)| p).collect();
            let style = palette_style(styles, column);
            list.fill_polygon(
                Some(CellId::new(0, column)),
                points,
                style.brush.with_alpha_factor(fill_alpha),
            );
        }
    }

    for column in 0..columns {
        let tagged = dataset_points(column);
        let mut points: Vec<DVec2> = tagged.iter().map(|&(_, p)| p).collect();
        if close_datasets && !points.is_empty() {
            points.push(points[0]);
        }
        let style = palette_style(styles, column);
        let stroke = Stroke::new(style.brush, style.pen.width);
        list.stroke_polyline(Some(CellId::new(0, column)), points, stroke);

        if text.visible {
            for (row, point) in tagged {
                let value = model.cell_value(row, column).unwrap_or(0.0);
                list.text(
                    Some(CellId::new(row, column)),
                    point,
                    format_value(value),
                    text.font_size,
                    text.color,
                );
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableModel;
    use crate::surface::DrawOp;
    use glam::dvec2;

    const EPS: f64 = 1e-9;

    fn model() -> TableModel {
        TableModel::from_values(vec![
            vec![1.0, 2.0],
            vec![2.0, 1.0],
            vec![3.0, 2.0],
            vec![4.0, 1.0],
        ])
        .unwrap()
    }

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn closed_polyline_repeats_first_point() {
        let mut chart = RadarChart::new();
        chart.text.visible = false;
        let list = chart.paint(&model(), area());
        assert_eq!(list.len(), 2);
        if let DrawOp::StrokePolyline { points, .. } = &list.ops()[0].op {
            assert_eq!(points.len(), 5);
            assert_eq!(points[0], points[4]);
        } else {
            panic!("expected a polyline");
        }
    }

    #[test]
    fn open_variant_does_not_close() {
        let mut chart = PolarChart::new();
        chart.text.visible = false;
        let list = chart.paint(&model(), area());
        if let DrawOp::StrokePolyline { points, .. } = &list.ops()[0].op {
            assert_eq!(points.len(), 4);
            assert_ne!(points[0], points[3]);
        } else {
            panic!("expected a polyline");
        }
    }

    #[test]
    fn fills_precede_all_strokes() {
        let mut chart = RadarChart::new();
        chart.text.visible = false;
        chart.attrs.fill_alpha = 0.3;
        let list = chart.paint(&model(), area());
        assert_eq!(list.len(), 4);
        assert!(matches!(list.ops()[0].op, DrawOp::FillPolygon { .. }));
        assert!(matches!(list.ops()[1].op, DrawOp::FillPolygon { .. }));
        assert!(matches!(list.ops()[2].op, DrawOp::StrokePolyline { .. }));
        assert!(matches!(list.ops()[3].op, DrawOp::StrokePolyline { .. }));
    }

    #[test]
    fn fill_alpha_zero_disables_fill_layer() {
        let mut chart = RadarChart::new();
        chart.text.visible = false;
        let list = chart.paint(&model(), area());
        assert!(
            list.ops()
                .iter()
                .all(|t| matches!(t.op, DrawOp::StrokePolyline { .. }))
        );
    }

    #[test]
    fn first_spoke_points_up() {
        let m = TableModel::from_values(vec![vec![2.0], vec![1.0], vec![1.0], vec![1.0]]).unwrap();
        let mut chart = RadarChart::new();
        chart.text.visible = false;
        let list = chart.paint(&m, area());
        if let DrawOp::StrokePolyline { points, .. } = &list.ops()[0].op {
            // row 0 holds the maximum, so its point reaches the top edge
            assert!((points[0] - dvec2(100.0, 0.0)).length() < EPS);
        } else {
            panic!("expected a polyline");
        }
    }

    #[test]
    fn missing_cells_are_skipped() {
        let m = TableModel::from_rows(vec![
            vec![Some(1.0)],
            vec![None],
            vec![Some(2.0)],
        ])
        .unwrap();
        let mut chart = PolarChart::new();
        chart.text.visible = false;
        let list = chart.paint(&m, area());
        if let DrawOp::StrokePolyline { points, .. } = &list.ops()[0].op {
            assert_eq!(points.len(), 2);
        } else {
            panic!("expected a polyline");
        }
    }

    #[test]
    fn all_missing_is_a_no_op() {
        let m = TableModel::from_rows(vec![vec![None], vec![None]]).unwrap();
        let chart = RadarChart::new();
        assert!(chart.paint(&m, area()).is_empty());
    }

    #[test]
    fn overflowing_labels_shrink_the_plot() {
        let mut with_labels = RadarChart::new();
        with_labels.text.font_size = 40.0;
        let small = Rect::new(0.0, 0.0, 60.0, 60.0);
        let drawn = with_labels.paint(&model(), small);

        let mut without = RadarChart::new();
        without.text.visible = false;
        let reference = without.paint(&model(), small);

        let reach = |list: &DrawList| -> f64 {
            list.ops()
                .iter()
                .filter_map(|t| match &t.op {
                    DrawOp::StrokePolyline { points, .. } => Some(
                        points
                            .iter()
                            .map(|p| (*p - dvec2(30.0, 30.0)).length())
                            .fold(0.0, f64::max),
                    ),
                    _ => None,
                })
                .fold(0.0, f64::max)
        };
        assert!(reach(&drawn) < reach(&reference));
    }
}
