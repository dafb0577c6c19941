// src/model/ols.rs
// Ordinary least squares with an intercept.
//
// X and y are centred, then the minimum-norm solution of X_c b = y_c is taken
// from the eigendecomposition of the Gram matrix X_cᵀX_c. Rank-deficient
// designs (a full one-hot block next to the intercept) are therefore well
// defined: directions with a zero eigenvalue get a zero coefficient.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut2, Axis};

/// Fitted parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LeastSquares {
    pub intercept: f64,
    pub coefficients: Array1<f64>,
}

const JACOBI_MAX_SWEEPS: usize = 100;
// Eigenvalues below this fraction of the largest are treated as zero.
const RANK_RTOL: f64 = 1e-10;

/// Fit `y ≈ intercept + x · coefficients`, one row of `x` per observation.
/// Returns `None` when there are no rows or `x` and `y` disagree on length.
pub fn fit(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Option<LeastSquares> {
    if x.nrows() == 0 || x.nrows() != y.len() {
        return None;
    }
    let x_mean = x.mean_axis(Axis(0))?;
    let y_mean = y.mean()?;

    let xc = &x - &x_mean;
    let yc = &y - y_mean;
    let gram = xc.t().dot(&xc);
    let xty = xc.t().dot(&yc);

    let (eigvals, eigvecs) = symmetric_eigen(gram);
    let lambda_max = eigvals.fold(0.0_f64, |m, &v| m.max(v));
    let cutoff = lambda_max * RANK_RTOL;

    let mut coefficients = Array1::<f64>::zeros(x.ncols());
    for (k, &lambda) in eigvals.iter().enumerate() {
        if lambda <= cutoff || lambda <= 0.0 {
            continue;
        }
        let v = eigvecs.column(k);
        coefficients.scaled_add(v.dot(&xty) / lambda, &v);
    }

    let intercept = y_mean - x_mean.dot(&coefficients);
    Some(LeastSquares { intercept, coefficients })
}

/// Cyclic Jacobi eigendecomposition of a symmetric matrix.
/// Returns eigenvalues and a matrix whose columns are the eigenvectors.
pub fn symmetric_eigen(mut a: Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n = a.nrows();
    let mut v = Array2::<f64>::eye(n);

    for _ in 0..JACOBI_MAX_SWEEPS {
        let diag = a.diag().mapv(|d| d * d).sum();
        let off = a.mapv(|e| e * e).sum() - diag;
        if off == 0.0 || off <= f64::EPSILON * f64::EPSILON * diag {
            break;
        }

        for p in 0..n {
            for q in p + 1..n {
                let apq = a[[p, q]];
                if apq == 0.0 {
                    continue;
                }
                let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
                let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                let t = sign / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                // A <- Jᵀ A J, V <- V J
                rotate(a.view_mut(), Axis(1), p, q, c, s);
                rotate(a.view_mut(), Axis(0), p, q, c, s);
                rotate(v.view_mut(), Axis(1), p, q, c, s);
            }
        }
    }

    (a.diag().to_owned(), v)
}

/// Givens rotation of lanes `p` and `q` along `axis`.
fn rotate(mut m: ArrayViewMut2<'_, f64>, axis: Axis, p: usize, q: usize, c: f64, s: f64) {
    let lp = m.index_axis(axis, p).to_owned();
    let lq = m.index_axis(axis, q).to_owned();
    m.index_axis_mut(axis, p).assign(&(&lp * c - &lq * s));
    m.index_axis_mut(axis, q).assign(&(&lp * s + &lq * c));
}
