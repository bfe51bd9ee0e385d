//! Shared numeric statistics helpers.
//!
//! The z-score convention used for outlier detection everywhere in the
//! crate: `(value - mean) / std` with the sample standard deviation
//! (ddof = 1). When the standard deviation is zero or undefined, no value
//! counts as an outlier.

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Median over a copy of the data; `None` for an empty slice.
pub fn median(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// Sample standard deviation (ddof = 1); `None` with fewer than two values.
pub fn sample_std(xs: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let m = mean(xs)?;
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64;
    Some(var.sqrt())
}

/// Row indices whose z-score magnitude exceeds `threshold`.
///
/// Missing rows (`None`) are never outliers. Returns an empty vector when
/// the standard deviation is zero or undefined.
pub fn zscore_outliers(values: &[Option<f64>], threshold: f64) -> Vec<usize> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let (m, s) = match (mean(&present), sample_std(&present)) {
        (Some(m), Some(s)) if s > 0.0 => (m, s),
        _ => return Vec::new(),
    };
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| {
            let x = (*v)?;
            if ((x - m) / s).abs() > threshold {
                Some(i)
            } else {
                None
            }
        })
        .collect()
}
