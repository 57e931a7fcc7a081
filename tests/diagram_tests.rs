//! End-to-end diagram rendering scenarios.

use roundel::{
    CellId, Color, DatasetStyle, Diagram, DrawOp, PieChart, PolarChart, RadarChart, Rect,
    Renderer, RingChart, SliceAttributes, SliceLayout, TableModel, dvec2,
};

const EPS: f64 = 1e-9;

fn one_row(values: &[f64]) -> TableModel {
    TableModel::from_values(vec![values.to_vec()]).unwrap()
}

#[test]
fn slice_layout_matches_value_shares() {
    let cells: Vec<Option<f64>> = [10.0, 20.0, 30.0].iter().copied().map(Some).collect();
    let layout = SliceLayout::assign(&cells, 0.0).unwrap();
    assert!((layout.span(0) - 60.0).abs() < EPS);
    assert!((layout.span(1) - 120.0).abs() < EPS);
    assert!((layout.span(2) - 180.0).abs() < EPS);
    assert!((layout.start(0) - 0.0).abs() < EPS);
    assert!((layout.start(1) - 60.0).abs() < EPS);
    assert!((layout.start(2) - 180.0).abs() < EPS);
}

#[test]
fn zero_and_missing_column_renders_nothing() {
    let model = TableModel::from_rows(vec![vec![Some(0.0), None, Some(0.0)]]).unwrap();
    let area = Rect::new(0.0, 0.0, 400.0, 300.0);
    for diagram in [
        Diagram::from(PieChart::new()),
        Diagram::from(RingChart::new()),
        Diagram::from(RadarChart::new()),
        Diagram::from(PolarChart::new()),
    ] {
        let list = diagram.render(&model, area);
        assert!(list.is_empty(), "expected a silent no-op");
    }
}

#[test]
fn pie_surfaces_cover_every_column() {
    let mut chart = PieChart::new();
    chart.text.visible = false;
    let list = chart.paint(&one_row(&[10.0, 20.0, 30.0]), Rect::new(0.0, 0.0, 300.0, 300.0));

    let mut columns: Vec<usize> = list
        .ops()
        .iter()
        .filter_map(|t| t.cell.map(|c| c.column))
        .collect();
    columns.sort_unstable();
    columns.dedup();
    assert_eq!(columns, vec![0, 1, 2]);
}

#[test]
fn three_d_paint_order_runs_back_to_front() {
    let mut chart = PieChart::new();
    chart.text.visible = false;
    chart.three_d.enabled = true;
    chart.three_d.depth = 20.0;

    // spans 60°/120°/180° from 0°: slice 1 covers 90° (back), slice 2
    // covers 270° (front)
    let list = chart.paint(&one_row(&[10.0, 20.0, 30.0]), Rect::new(0.0, 0.0, 300.0, 300.0));
    assert!(!list.is_empty());
    let first = list.ops().first().unwrap().cell.unwrap();
    let last = list.ops().last().unwrap().cell.unwrap();
    assert_eq!(first.column, 1, "backmost slice painted first");
    assert_eq!(last.column, 2, "frontmost slice painted last");
}

#[test]
fn hit_testing_maps_shapes_back_to_cells() {
    let mut chart = PieChart::new();
    chart.text.visible = false;
    let list = chart.paint(&one_row(&[1.0, 1.0, 1.0, 1.0]), Rect::new(0.0, 0.0, 200.0, 200.0));

    // four quarter slices from 0°; probe each mid-angle at half radius
    for (column, mid_deg) in [(0usize, 45.0f64), (1, 135.0), (2, 225.0), (3, 315.0)] {
        let rad = mid_deg.to_radians();
        let probe = dvec2(100.0 + 50.0 * rad.cos(), 100.0 - 50.0 * rad.sin());
        assert_eq!(
            list.hit_test(probe),
            Some(CellId::new(0, column)),
            "probe at {mid_deg}°"
        );
    }
    assert_eq!(list.hit_test(dvec2(-5.0, -5.0)), None);
}

#[test]
fn rendering_twice_is_deterministic() {
    let model = TableModel::from_values(vec![
        vec![3.0, 1.0, 4.0],
        vec![1.0, 5.0, 9.0],
        vec![2.0, 6.0, 5.0],
    ])
    .unwrap();
    let area = Rect::new(0.0, 0.0, 333.0, 257.0);
    for diagram in [
        Diagram::from(PieChart::new()),
        Diagram::from(RingChart::new()),
        Diagram::from(RadarChart::new()),
        Diagram::from(PolarChart::new()),
    ] {
        let a = diagram.render(&model, area);
        let b = diagram.render(&model, area);
        assert_eq!(a.ops(), b.ops());
    }
}

#[test]
fn inner_ring_explosion_leaves_outer_ring_alone() {
    let model = TableModel::from_values(vec![vec![10.0, 10.0], vec![5.0, 15.0]]).unwrap();
    let area = Rect::new(0.0, 0.0, 240.0, 240.0);

    let outer_ring_polys = |chart: &RingChart| -> Vec<DrawOpKey> {
        chart
            .paint(&model, area)
            .ops()
            .iter()
            .filter(|t| t.cell.map(|c| c.row) == Some(0))
            .map(|t| match &t.op {
                DrawOp::FillPolygon { points, .. } => points.clone(),
                other => panic!("unexpected op {other:?}"),
            })
            .collect()
    };

    let mut plain = RingChart::new();
    plain.text.visible = false;

    let mut exploded = plain.clone();
    let mut attrs = SliceAttributes::new();
    attrs.set_explode_factor(0.2).unwrap();
    exploded.set_slice_attributes(1, 0, attrs);

    // without expand-on-explode the outer ring is untouched...
    assert_eq!(outer_ring_polys(&plain), outer_ring_polys(&exploded));

    // ...and with it, the outer ring moves outward
    let mut expanding = exploded.clone();
    expanding.attrs.expand_when_exploded = true;
    assert_ne!(outer_ring_polys(&exploded), outer_ring_polys(&expanding));
}

type DrawOpKey = Vec<roundel::DVec2>;

#[test]
fn radar_fill_layer_sits_under_every_stroke() {
    let model = TableModel::from_values(vec![
        vec![1.0, 2.0],
        vec![3.0, 1.0],
        vec![2.0, 2.0],
    ])
    .unwrap();
    let mut chart = RadarChart::new();
    chart.text.visible = false;
    chart.attrs.fill_alpha = 0.25;
    chart.set_styles(vec![
        DatasetStyle::new(Color::rgb(200, 40, 40)),
        DatasetStyle::new(Color::rgb(40, 40, 200)),
    ]);

    let list = chart.paint(&model, Rect::new(0.0, 0.0, 300.0, 300.0));
    let last_fill = list
        .ops()
        .iter()
        .rposition(|t| matches!(t.op, DrawOp::FillPolygon { .. }))
        .unwrap();
    let first_stroke = list
        .ops()
        .iter()
        .position(|t| matches!(t.op, DrawOp::StrokePolyline { .. }))
        .unwrap();
    assert!(last_fill < first_stroke);

    // the fill layer carries the configured translucency
    if let DrawOp::FillPolygon { fill, .. } = &list.ops()[0].op {
        assert_eq!(fill.a, 64);
    } else {
        panic!("expected a fill polygon first");
    }
}

#[test]
fn exploded_slice_is_displaced_but_others_stay() {
    let mut chart = PieChart::new();
    chart.text.visible = false;
    let mut attrs = SliceAttributes::new();
    attrs.set_explode_factor(0.1).unwrap();
    chart.set_slice_attributes(0, attrs);

    // 220px area with max explode 0.1 leaves a 200px disc; slice 0 spans
    // [0°, 180°], so its rectangle moves 10px straight up
    let list = chart.paint(&one_row(&[50.0, 50.0]), Rect::new(0.0, 0.0, 220.0, 220.0));
    let tip_of = |column: usize| -> roundel::DVec2 {
        list.ops()
            .iter()
            .find_map(|t| match (&t.op, t.cell) {
                (DrawOp::FillPolygon { points, .. }, Some(cell)) if cell.column == column => {
                    Some(*points.last().unwrap())
                }
                _ => None,
            })
            .unwrap()
    };
    assert!((tip_of(0) - dvec2(110.0, 100.0)).length() < EPS);
    assert!((tip_of(1) - dvec2(110.0, 110.0)).length() < EPS);
}

#[test]
fn labels_report_bounds_and_render_as_text() {
    let mut chart = PieChart::new();
    chart.text.visible = true;
    let list = chart.paint(&one_row(&[5.0, 5.0]), Rect::new(0.0, 0.0, 200.0, 200.0));
    let texts: Vec<&str> = list
        .ops()
        .iter()
        .filter_map(|t| match &t.op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["5", "5"]);
    assert!(list.label_bounds().is_some());
}
