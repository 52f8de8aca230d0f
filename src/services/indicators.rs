/// Window used for chart annotation and as the API default.
pub const DEFAULT_WINDOW: usize = 5;

/// Simple Moving Average (SMA)
/// Returns a vector aligned with `values`:
/// - `None` while fewer than `window` values exist
/// - `Some(avg)` of the trailing `window` values from index `window - 1` on
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    // Running sum via scan, subtracting the value that falls out of the window.
    values
        .iter()
        .enumerate()
        .scan(0.0_f64, move |sum, (i, &v)| {
            *sum += v;
            if i >= window {
                *sum -= values[i - window];
            }

            let out = if i + 1 >= window {
                Some(*sum / window as f64)
            } else {
                None
            };

            Some(out)
        })
        .collect()
}

/// One-step forecast from the mean of the last `window` values.
///
/// With fewer values than the window (or a zero window) there is no full
/// window to average, so the last value stands in; an empty series yields 0.
pub fn predict_by_average(values: &[f64], window: usize) -> f64 {
    let Some(&last) = values.last() else {
        return 0.0;
    };
    if window == 0 || values.len() < window {
        return last;
    }

    values[values.len() - window..].iter().sum::<f64>() / window as f64
}

/// One-step forecast from an ordinary-least-squares line over (index, value).
///
/// Fits y = slope * x + intercept with x = 0..n-1, then evaluates at x = n.
/// Series shorter than two points fall back to the first value, or 0 when
/// empty.
pub fn predict_by_trend(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return values.first().copied().unwrap_or(0.0);
    }

    let n_f = n as f64;
    let x_mean = (n_f - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }

    // Distinct integer indices keep the denominator positive for n >= 2;
    // the guard covers exact floating-point zero anyway.
    let slope = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };
    let intercept = y_mean - slope * x_mean;

    slope * n_f + intercept
}
