//! Closed-form statistics used by the analyzer: median, Pearson
//! correlation, and a two-predictor ordinary least squares fit.

/// Median of the given values. Even-length inputs return the mean of
/// the two middle values. `None` for an empty slice.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Pearson correlation coefficient of two equal-length series.
/// NaN when either series has zero variance or is empty.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return f64::NAN;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        sxy / denom
    }
}

/// Fit `y = b0 + b1*x1 + b2*x2` by ordinary least squares over the
/// given observations. Returns `None` when the normal equations are
/// singular (collinear or constant predictors).
pub(crate) fn ols2(x1: &[f64], x2: &[f64], y: &[f64]) -> Option<[f64; 3]> {
    debug_assert_eq!(x1.len(), y.len());
    debug_assert_eq!(x2.len(), y.len());

    let n = y.len() as f64;
    // Normal equations X'X b = X'y with design columns [1, x1, x2].
    let s1: f64 = x1.iter().sum();
    let s2: f64 = x2.iter().sum();
    let s11: f64 = x1.iter().map(|v| v * v).sum();
    let s22: f64 = x2.iter().map(|v| v * v).sum();
    let s12: f64 = x1.iter().zip(x2).map(|(a, b)| a * b).sum();
    let sy: f64 = y.iter().sum();
    let s1y: f64 = x1.iter().zip(y).map(|(a, b)| a * b).sum();
    let s2y: f64 = x2.iter().zip(y).map(|(a, b)| a * b).sum();

    let mut m = [[n, s1, s2, sy], [s1, s11, s12, s1y], [s2, s12, s22, s2y]];
    solve3(&mut m)
}

/// Gaussian elimination with partial pivoting on a 3x4 augmented
/// matrix. `None` when a pivot is (numerically) zero.
fn solve3(m: &mut [[f64; 4]; 3]) -> Option<[f64; 3]> {
    const EPS: f64 = 1e-12;

    for col in 0..3 {
        let pivot = (col..3).max_by(|&a, &b| {
            m[a][col]
                .abs()
                .partial_cmp(&m[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if m[pivot][col].abs() < EPS {
            return None;
        }
        m.swap(col, pivot);

        for row in 0..3 {
            if row == col {
                continue;
            }
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    Some([m[0][3] / m[0][0], m[1][3] / m[1][1], m[2][3] / m[2][2]])
}

/// Round to two decimal places, the precision reported to callers.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
