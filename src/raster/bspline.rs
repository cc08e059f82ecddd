//! Uniform cubic B-spline sampling.
//!
//! With `n + 1` control points the knot vector is `v[i] = i / m` for
//! `i ∈ [0, m]`, `m = n + k + 1`. The curve is sampled on `[v[k], v[n+1]]` at a
//! fixed parameter step, so fewer than four control points give at most one
//! sample.

use glam::ivec2;

use crate::defaults::{BSPLINE_DEGREE, BSPLINE_STEP};
use crate::types::Pixel;

/// Cox-de Boor basis evaluated bottom-up.
///
/// Computes every `N(i, k, u)` for one `u` in a single triangular sweep instead
/// of the exponential recursion, with the same operand order so results match
/// the recursive definition bit for bit.
struct Basis<'a> {
    knots: &'a [f64],
    degree: usize,
    row: Vec<f64>,
}

impl<'a> Basis<'a> {
    fn new(knots: &'a [f64], degree: usize) -> Self {
        Self {
            knots,
            degree,
            row: vec![0.0; knots.len() - 1],
        }
    }

    /// Basis values `N(0..=n, degree, u)`.
    fn eval(&mut self, u: f64) -> &[f64] {
        let v = self.knots;
        let m = v.len() - 1;

        for (j, n) in self.row.iter_mut().enumerate() {
            *n = if v[j] <= u && u < v[j + 1] { 1.0 } else { 0.0 };
        }

        for d in 1..=self.degree {
            for j in 0..m - d {
                let lo = v[j + d] - v[j];
                let hi = v[j + d + 1] - v[j + 1];
                // Repeated knots give zero-width spans; their terms vanish.
                let left = if lo != 0.0 { self.row[j] * (u - v[j]) / lo } else { 0.0 };
                let right = if hi != 0.0 { self.row[j + 1] * (v[j + d + 1] - u) / hi } else { 0.0 };
                self.row[j] = left + right;
            }
        }

        &self.row[..m - self.degree]
    }
}

/// Sample the uniform cubic B-spline over `control`, truncating each sample
/// toward zero.
pub fn bspline(control: &[Pixel]) -> Vec<Pixel> {
    if control.is_empty() {
        return Vec::new();
    }

    let k = BSPLINE_DEGREE;
    let n = control.len() - 1;
    let m = n + k + 1;
    let knots: Vec<f64> = (0..=m).map(|i| i as f64 / m as f64).collect();
    let mut basis = Basis::new(&knots, k);

    let end = knots[n + 1];
    let mut u = knots[k];
    let mut pixels = Vec::new();
    while u <= end {
        let (mut x, mut y) = (0.0, 0.0);
        for (w, p) in basis.eval(u).iter().zip(control) {
            x += w * f64::from(p.x);
            y += w * f64::from(p.y);
        }
        pixels.push(ivec2(x as i32, y as i32));
        u += BSPLINE_STEP;
    }
    pixels
}
