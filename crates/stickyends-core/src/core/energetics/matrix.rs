#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Zero columns left between two registers so their runs never merge.
pub const SEGMENT_GAP: usize = 2;

/// The columns of a [`ScoreMatrix`] holding one alignment register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Register offset of the second strand, in pair-steps. Zero is full alignment.
    pub shift: isize,
    pub start: usize,
    pub len: usize,
}

/// Dense, zero-padded storage for ragged per-register stacking scores.
///
/// Every row holds one sequence pair; every segment holds one register. Cells
/// outside a segment are never written and stay exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    segments: Vec<Segment>,
    data: Vec<f64>,
}

impl ScoreMatrix {
    /// Lays out `lengths` as consecutive `(shift, len)` segments separated by
    /// [`SEGMENT_GAP`] zero columns.
    pub fn with_segments(rows: usize, lengths: &[(isize, usize)]) -> Self {
        let mut segments = Vec::with_capacity(lengths.len());
        let mut start = 0;
        for (i, &(shift, len)) in lengths.iter().enumerate() {
            segments.push(Segment { shift, start, len });
            start += len;
            if i + 1 < lengths.len() {
                start += SEGMENT_GAP;
            }
        }
        Self {
            rows,
            cols: start,
            segments,
            data: vec![0.0; rows * start],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// The cells of `segment` in row `row`.
    #[inline]
    pub fn segment_mut(&mut self, row: usize, segment: usize) -> &mut [f64] {
        let Segment { start, len, .. } = self.segments[segment];
        let offset = row * self.cols + start;
        &mut self.data[offset..offset + len]
    }

    #[inline]
    pub fn segment(&self, row: usize, segment: usize) -> &[f64] {
        let Segment { start, len, .. } = self.segments[segment];
        let offset = row * self.cols + start;
        &self.data[offset..offset + len]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Reduces every row of a [`ScoreMatrix`] to its most favorable value.
///
/// Implementations must agree with [`best_run`] on every row; they may only
/// differ in how the rows are scheduled.
pub trait RunReducer: Send + Sync {
    fn reduce(&self, matrix: &ScoreMatrix) -> Vec<f64>;
}

/// Largest sum over a contiguous run of non-zero cells, floored at zero.
///
/// A zero cell ends a run: a masked mismatch behaves like a strand end.
pub fn best_run(row: &[f64]) -> f64 {
    let mut best = 0.0_f64;
    let mut run = 0.0;
    for &cell in row {
        if cell != 0.0 {
            run += cell;
        } else {
            best = best.max(run);
            run = 0.0;
        }
    }
    best.max(run)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MaxRunReducer;

impl RunReducer for MaxRunReducer {
    fn reduce(&self, matrix: &ScoreMatrix) -> Vec<f64> {
        if matrix.cols() == 0 {
            return vec![0.0; matrix.rows()];
        }

        #[cfg(not(feature = "parallel"))]
        let iterator = matrix.as_slice().chunks_exact(matrix.cols());

        #[cfg(feature = "parallel")]
        let iterator = matrix.as_slice().par_chunks_exact(matrix.cols());

        iterator.map(best_run).collect()
    }
}
