use ndarray::{Array2, ArrayView1, ArrayView2, ShapeBuilder, s};
use std::ops::Index;

/// Index arithmetic for a periodic domain of `zmax` distinct samples.
///
/// Sample `zmax` aliases sample `0`: the point to the right of `zmax - 1` is `0`, and the
/// point to the left of `0` is `zmax - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodic {
    zmax: usize,
}

impl Periodic {
    pub fn new(zmax: usize) -> Self {
        debug_assert!(zmax >= 1);
        Periodic { zmax }
    }

    pub fn zmax(&self) -> usize {
        self.zmax
    }

    pub fn left(&self, i: usize) -> usize {
        (i + self.zmax - 1) % self.zmax
    }

    pub fn right(&self, i: usize) -> usize {
        (i + 1) % self.zmax
    }

    /// `f[i+1] - f[i-1]` with wraparound.
    pub fn central_difference(&self, f: &ArrayView1<f64>, i: usize) -> f64 {
        f[self.right(i)] - f[self.left(i)]
    }
}

/// Full time history of both field components, `ex[[i, n]]` and `by[[i, n]]`.
///
/// Built once by the integrator and read-only afterwards. Storage is column-major so each
/// time slice `[.., n]` is contiguous.
#[derive(Debug, Clone)]
pub struct FieldHistory {
    ex: Array2<f64>,
    by: Array2<f64>,
}

/// Both components at a single time step.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub ex: ArrayView1<'a, f64>,
    pub by: ArrayView1<'a, f64>,
}

impl FieldHistory {
    pub(crate) fn zeros(zmax: usize, tmax: usize) -> Self {
        FieldHistory {
            ex: Array2::zeros((zmax + 1, tmax + 1).f()),
            by: Array2::zeros((zmax + 1, tmax + 1).f()),
        }
    }

    pub(crate) fn arrays_mut(&mut self) -> (&mut Array2<f64>, &mut Array2<f64>) {
        (&mut self.ex, &mut self.by)
    }

    pub fn zmax(&self) -> usize {
        self.ex.nrows() - 1
    }

    pub fn tmax(&self) -> usize {
        self.ex.ncols() - 1
    }

    pub fn ex(&self) -> ArrayView2<'_, f64> {
        self.ex.view()
    }

    pub fn by(&self) -> ArrayView2<'_, f64> {
        self.by.view()
    }

    pub fn frame(&self, n: usize) -> Frame<'_> {
        Frame {
            ex: self.ex.column(n),
            by: self.by.column(n),
        }
    }

    /// Position of the largest `Ex` sample at step `n`, ignoring the aliased endpoint.
    pub fn peak_index(&self, n: usize) -> usize {
        let zmax = self.zmax();
        let column = self.ex.slice(s![..zmax, n]);
        let mut best = 0;
        for (i, &value) in column.iter().enumerate() {
            if value > column[best] {
                best = i;
            }
        }
        best
    }

    /// Largest magnitude in either component over the whole history.
    pub fn max_abs(&self) -> f64 {
        self.ex
            .iter()
            .chain(self.by.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

impl Index<[usize; 2]> for FieldHistory {
    type Output = f64;

    /// `history[[i, n]]` is `Ex` at sample `i`, step `n`.
    fn index(&self, index: [usize; 2]) -> &Self::Output {
        &self.ex[index]
    }
}

impl Frame<'_> {
    pub fn max_abs_ex(&self) -> f64 {
        self.ex.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    pub fn max_abs_by(&self) -> f64 {
        self.by.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}
