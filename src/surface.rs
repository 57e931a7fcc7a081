//! The produced side of the engine: backend-neutral drawing operations.
//!
//! A render pass appends [`DrawOp`]s to a [`DrawList`]. In
//! [`RenderMode::Measure`] no operations are stored; only the bounding
//! boxes of label placements accumulate, which the label-fit pass consumes
//! to shrink the plotting area before the real pass. Every shape carries an
//! optional [`CellId`] so hosts can map geometry back to data cells.

use glam::{DVec2, dvec2};

use crate::model::CellId;
use crate::types::{BBox, Color, Rect, Stroke};

/// Whether a pass draws for real or only measures label placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Accumulate label bounds, emit nothing.
    Measure,
    /// Emit drawing operations.
    Draw,
}

/// One drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillPolygon {
        points: Vec<DVec2>,
        fill: Color,
    },
    FillEllipse {
        rect: Rect,
        fill: Color,
    },
    StrokePolyline {
        points: Vec<DVec2>,
        stroke: Stroke,
    },
    StrokeLine {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    Text {
        /// Center of the laid-out text rectangle.
        anchor: DVec2,
        text: String,
        font_size: f64,
        color: Color,
    },
}

/// A drawing operation tagged with its source data cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedOp {
    pub cell: Option<CellId>,
    pub op: DrawOp,
}

/// Ordered list of drawing operations produced by one render pass.
#[derive(Clone, Debug)]
pub struct DrawList {
    mode: RenderMode,
    ops: Vec<TaggedOp>,
    label_bounds: BBox,
}

impl DrawList {
    pub fn new(mode: RenderMode) -> DrawList {
        DrawList {
            mode,
            ops: Vec::new(),
            label_bounds: BBox::new(),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn ops(&self) -> &[TaggedOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<TaggedOp> {
        self.ops
    }

    /// Union of all label rectangles seen so far, if any label was placed.
    pub fn label_bounds(&self) -> Option<Rect> {
        self.label_bounds.to_rect()
    }

    fn push(&mut self, cell: Option<CellId>, op: DrawOp) {
        if self.mode == RenderMode::Draw {
            self.ops.push(TaggedOp { cell, op });
        }
    }

    pub fn fill_polygon(&mut self, cell: Option<CellId>, points: Vec<DVec2>, fill: Color) {
        if points.len() < 3 {
            return;
        }
        self.push(cell, DrawOp::FillPolygon { points, fill });
    }

    pub fn fill_ellipse(&mut self, cell: Option<CellId>, rect: Rect, fill: Color) {
        if rect.is_empty() {
            return;
        }
        self.push(cell, DrawOp::FillEllipse { rect, fill });
    }

    pub fn stroke_polyline(&mut self, cell: Option<CellId>, points: Vec<DVec2>, stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        self.push(cell, DrawOp::StrokePolyline { points, stroke });
    }

    pub fn stroke_line(&mut self, cell: Option<CellId>, from: DVec2, to: DVec2, stroke: Stroke) {
        self.push(cell, DrawOp::StrokeLine { from, to, stroke });
    }

    /// Place a text label centered on `anchor`. Label bounds accumulate in
    /// both modes with the same metrics, so measure and draw agree.
    pub fn text(
        &mut self,
        cell: Option<CellId>,
        anchor: DVec2,
        text: String,
        font_size: f64,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        self.label_bounds.expand_rect(label_rect(anchor, &text, font_size));
        self.push(
            cell,
            DrawOp::Text {
                anchor,
                text,
                font_size,
                color,
            },
        );
    }

    /// Reverse mapping: the data cell of the topmost shape containing `p`.
    pub fn hit_test(&self, p: DVec2) -> Option<CellId> {
        for tagged in self.ops.iter().rev() {
            let cell = match tagged.cell {
                Some(cell) => cell,
                None => continue,
            };
            let hit = match &tagged.op {
                DrawOp::FillPolygon { points, .. } => point_in_polygon(p, points),
                DrawOp::FillEllipse { rect, .. } => point_in_ellipse(p, *rect),
                _ => false,
            };
            if hit {
                return Some(cell);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Label metrics
// ---------------------------------------------------------------------------

/// Proportional character advances in hundredths of an em.
#[rustfmt::skip]
const CHAR_ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Text advance in hundredths of an em, using the proportional table.
fn text_advance(text: &str) -> u32 {
    let mut total: u32 = 0;
    for c in text.chars() {
        if (' '..='~').contains(&c) {
            total += CHAR_ADVANCE[(c as usize) - 0x20] as u32;
        } else {
            total += 100;
        }
    }
    total
}

/// Width of a label in surface units for a given font size.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text_advance(text) as f64 * 0.01 * font_size * 0.6
}

/// The rectangle a label occupies when centered on `anchor`.
///
/// Both render passes use this same metric, which is what makes the
/// measure pass a faithful predictor of the draw pass.
pub fn label_rect(anchor: DVec2, text: &str, font_size: f64) -> Rect {
    let width = text_width(text, font_size);
    let height = font_size * 1.2;
    Rect::new(anchor.x - width / 2.0, anchor.y - height / 2.0, width, height)
}

// ---------------------------------------------------------------------------
// Containment tests for reverse mapping
// ---------------------------------------------------------------------------

/// Even-odd crossing test.
fn point_in_polygon(p: DVec2, points: &[DVec2]) -> bool {
    let mut inside = false;
    let n = points.len();
    let mut j = n - 1;
    for i in 0..n {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn point_in_ellipse(p: DVec2, rect: Rect) -> bool {
    let half = dvec2(rect.width / 2.0, rect.height / 2.0);
    if half.x <= 0.0 || half.y <= 0.0 {
        return false;
    }
    let d = (p - rect.center()) / half;
    d.length_squared() <= 1.0
}
