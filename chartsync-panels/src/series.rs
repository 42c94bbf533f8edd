use crate::{CandleSeries, SeriesDef};

/// Rows of `[t, open, high, low, close]`. Mismatched array lengths truncate
/// to the shortest side instead of failing.
pub fn candle_rows(candles: &CandleSeries) -> Vec<[f64; 5]> {
    let len = candles
        .x
        .len()
        .min(candles.open.len())
        .min(candles.high.len())
        .min(candles.low.len())
        .min(candles.close.len());
    (0..len)
        .map(|i| {
            [
                candles.x[i],
                candles.open[i],
                candles.high[i],
                candles.low[i],
                candles.close[i],
            ]
        })
        .collect()
}

/// Pair up parallel x/y arrays into `(t, y)` rows.
pub fn xy_rows(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

/// Expand a series' band definition into `(t, lo, hi)` rows aligned with the
/// series data. Points past the end of a per-point edge are dropped.
pub fn band_rows(series: &SeriesDef) -> Option<Vec<(f64, f64, f64)>> {
    let band = series.range.as_ref()?;
    let mut rows = Vec::with_capacity(series.x.len());
    for (idx, t) in series.x.iter().copied().enumerate() {
        let (Some(lo), Some(hi)) = (band.min.at(idx), band.max.at(idx)) else {
            continue;
        };
        rows.push((t, lo, hi));
    }
    Some(rows)
}
