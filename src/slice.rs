//! Slice angle assignment and angular search.
//!
//! One dataset's cell values become a sequence of angular sectors whose
//! spans are proportional to each cell's share of the absolute-value sum.
//! Missing cells occupy a slot with zero span without advancing the
//! running angle, so the slices around them stay contiguous.

use crate::log::debug;

/// Per-cell start angle and angular span, both in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceLayout {
    starts: Vec<f64>,
    spans: Vec<f64>,
}

impl SliceLayout {
    /// Distribute 360° over `values` proportionally to `|value| / Σ|value|`,
    /// beginning at `start_position`.
    ///
    /// Returns `None` when the sum of absolute values is zero or no cell is
    /// present at all. Callers must abort the whole render in that case; a
    /// zero-span layout would make the angular search below loop forever.
    pub fn assign(values: &[Option<f64>], start_position: f64) -> Option<SliceLayout> {
        let total: f64 = values.iter().flatten().map(|v| v.abs()).sum();
        if total == 0.0 {
            debug!("zero-sum dataset, nothing to draw");
            return None;
        }

        let sector_per_unit = 360.0 / total;
        let mut starts = vec![0.0; values.len()];
        let mut spans = vec![0.0; values.len()];
        let mut current = start_position;
        let mut at_least_one = false;

        for (i, value) in values.iter().enumerate() {
            match value {
                Some(v) => {
                    starts[i] = current;
                    spans[i] = v.abs() * sector_per_unit;
                    current += spans[i];
                    at_least_one = true;
                }
                None => {
                    // zero width; keep the previous start so the slot stays
                    // addressable without shifting later slices
                    spans[i] = 0.0;
                    starts[i] = if i > 0 { starts[i - 1] } else { current };
                }
            }
        }

        if !at_least_one {
            return None;
        }
        Some(SliceLayout { starts, spans })
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn start(&self, index: usize) -> f64 {
        self.starts[index]
    }

    pub fn span(&self, index: usize) -> f64 {
        self.spans[index]
    }

    pub fn end(&self, index: usize) -> f64 {
        self.starts[index] + self.spans[index]
    }

    /// Mid-angle of a slice, where explode displacement points.
    pub fn mid_angle(&self, index: usize) -> f64 {
        self.starts[index] + self.spans[index] / 2.0
    }

    /// The slice containing `angle`, with a single wraparound retry and a
    /// last-resort fallback of index 0.
    ///
    /// The fallback accepts a possibly wrong slice over a failure; use
    /// [`try_find_slice_at`](Self::try_find_slice_at) to observe the
    /// not-found case instead.
    pub fn find_slice_at(&self, angle: f64) -> usize {
        match self.try_find_slice_at(angle) {
            Some(index) => index,
            None => {
                debug!(angle, "no slice found, falling back to index 0");
                0
            }
        }
    }

    /// Like [`find_slice_at`](Self::find_slice_at) but exposing the
    /// degenerate no-match case.
    pub fn try_find_slice_at(&self, angle: f64) -> Option<usize> {
        for i in 0..self.starts.len() {
            if self.starts[i] <= angle && self.end(i) >= angle {
                return Some(i);
            }
        }
        // wrap around the 0/360 seam, once
        if angle < 360.0 {
            return self.try_find_slice_at(angle + 360.0);
        }
        None
    }

    /// Index of the slice counter-clockwise of `index`, wrapping at zero.
    pub fn left_of(&self, index: usize) -> usize {
        if index == 0 {
            if self.len() > 1 { self.len() - 1 } else { 0 }
        } else {
            index - 1
        }
    }

    /// Index of the slice clockwise of `index`, wrapping at the end.
    pub fn right_of(&self, index: usize) -> usize {
        let right = index + 1;
        if right == self.len() { 0 } else { right }
    }
}
