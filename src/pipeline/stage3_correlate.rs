use crate::model::record::SubjectRecord;
use crate::model::stats::CohortCorrelation;

/// Pearson product-moment correlation of `x` and `y`.
///
/// Literal formula: zero variance in either input yields NaN or ±inf. Both
/// means divide by `x.len()`; a `y` shorter than `x` reads NaN for the
/// missing positions, so the result is NaN.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0f64;
    for (i, xi) in x.iter().enumerate() {
        let yi = y.get(i).copied().unwrap_or(f64::NAN);
        numerator += (xi - mean_x) * (yi - mean_y);
    }
    let ss_x = x.iter().map(|xi| (xi - mean_x).powi(2)).sum::<f64>();
    let ss_y = y.iter().map(|yi| (yi - mean_y).powi(2)).sum::<f64>();

    numerator / (ss_x * ss_y).sqrt()
}

pub fn cohort_correlation(records: &[SubjectRecord]) -> CohortCorrelation {
    let bsa = records.iter().map(|r| r.bsa).collect::<Vec<_>>();
    let edv = records.iter().map(|r| r.edv).collect::<Vec<_>>();
    let indexed = records.iter().map(|r| r.edv_indexed).collect::<Vec<_>>();
    CohortCorrelation {
        raw: correlation(&bsa, &edv),
        indexed: correlation(&bsa, &indexed),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_correlate.rs"]
mod tests;
