//! Polar-coordinate charting engine.
//!
//! Roundel derives pie, ring, radar and polar diagram geometry from a
//! tabular data model and emits it as backend-neutral drawing operations.
//! There is no painting backend here: a [`DrawList`] is a plain sequence of
//! filled polygons, ellipses, polylines, lines and text placements, each
//! tagged with the data cell it came from so hosts can hit-test shapes
//! back to cells.
//!
//! Rendering is pure and render-scoped. Every `render` call derives its
//! coordinate transform, slice layout and label bounds from its arguments,
//! runs a measure pass to learn where labels land, shrinks the plot to fit
//! them, and re-runs the identical geometry for the draw pass.
//!
//! ```
//! use roundel::{Diagram, PieChart, Rect, Renderer, TableModel};
//!
//! let model = TableModel::from_values(vec![vec![10.0, 20.0, 30.0]]).unwrap();
//! let diagram = Diagram::from(PieChart::new());
//! let ops = diagram.render(&model, Rect::new(0.0, 0.0, 320.0, 240.0));
//! assert!(!ops.is_empty());
//! ```

pub mod attrs;
pub mod errors;
pub mod log;
pub mod model;
pub mod polar;
pub mod render;
pub mod slice;
pub mod surface;
pub mod types;

pub use attrs::{
    DatasetStyle, DiagramAttributes, SliceAttributes, TextAttributes, ThreeDAttributes,
};
pub use errors::{ChartError, NumericError};
pub use model::{CellId, DataModel, TableModel};
pub use polar::{PolarPoint, PolarTransform, Zoom};
pub use render::{PieChart, PolarChart, RadarChart, RingChart};
pub use slice::SliceLayout;
pub use surface::{DrawList, DrawOp, RenderMode, TaggedOp};
pub use types::{BBox, Color, Degrees, Rect, Stroke};

// drawing operations carry glam vectors; re-export them for consumers
pub use glam::{DVec2, dvec2};

use enum_dispatch::enum_dispatch;

/// Renders a diagram over a data model into drawing operations.
#[enum_dispatch]
pub trait Renderer {
    /// Run the measure and draw passes over `model` within `area`.
    fn render(&self, model: &dyn DataModel, area: Rect) -> DrawList;
}

impl Renderer for PieChart {
    fn render(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        self.paint(model, area)
    }
}

impl Renderer for RingChart {
    fn render(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        self.paint(model, area)
    }
}

impl Renderer for RadarChart {
    fn render(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        self.paint(model, area)
    }
}

impl Renderer for PolarChart {
    fn render(&self, model: &dyn DataModel, area: Rect) -> DrawList {
        self.paint(model, area)
    }
}

/// The closed set of diagram variants.
#[enum_dispatch(Renderer)]
#[derive(Clone, Debug)]
pub enum Diagram {
    Pie(PieChart),
    Ring(RingChart),
    Radar(RadarChart),
    Polar(PolarChart),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_dispatches_each_variant() {
        let model = TableModel::from_values(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 2.0, 2.0],
            vec![1.0, 1.0, 4.0],
        ])
        .unwrap();
        let area = Rect::new(0.0, 0.0, 300.0, 300.0);

        let diagrams = [
            Diagram::from(PieChart::new()),
            Diagram::from(RingChart::new()),
            Diagram::from(RadarChart::new()),
            Diagram::from(PolarChart::new()),
        ];
        for diagram in diagrams {
            assert!(!diagram.render(&model, area).is_empty());
        }
    }

    #[test]
    fn degenerate_model_is_empty_for_every_variant() {
        let model = TableModel::from_rows(vec![]).unwrap();
        let area = Rect::new(0.0, 0.0, 300.0, 300.0);
        for diagram in [
            Diagram::from(PieChart::new()),
            Diagram::from(RingChart::new()),
            Diagram::from(RadarChart::new()),
            Diagram::from(PolarChart::new()),
        ] {
            assert!(diagram.render(&model, area).is_empty());
        }
    }
}
