use rand::Rng;

use crate::model::cohort::Cohort;
use crate::model::profile::CohortParams;
use crate::model::record::SubjectRecord;
use crate::pipeline::stage1_sample::sample_normal;

/// Pairs `bsa[i]` with `edv[i]` and sorts the records ascending by BSA.
///
/// One record per BSA value; an `edv` shorter than `bsa` yields NaN for the
/// missing positions. The sort is stable, so equal BSA values keep their
/// pairing order.
pub fn synthesize_cohort(cohort: Cohort, bsa: &[f64], edv: &[f64]) -> Vec<SubjectRecord> {
    let mut records = bsa
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let e = edv.get(i).copied().unwrap_or(f64::NAN);
            SubjectRecord::new(cohort, b, e)
        })
        .collect::<Vec<_>>();
    records.sort_by(|a, b| a.bsa.total_cmp(&b.bsa));
    records
}

/// Draws BSA then EDV for one cohort and synthesizes its records.
pub fn draw_cohort<R: Rng + ?Sized>(
    rng: &mut R,
    cohort: Cohort,
    params: &CohortParams,
) -> Vec<SubjectRecord> {
    let bsa = sample_normal(rng, params.n, params.bsa_mean, params.bsa_sd);
    let edv = sample_normal(rng, params.n, params.edv_mean, params.edv_sd);
    synthesize_cohort(cohort, &bsa, &edv)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_synthesize.rs"]
mod tests;
