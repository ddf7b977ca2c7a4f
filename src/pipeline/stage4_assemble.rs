use rand::Rng;
use tracing::{debug, info, warn};

use crate::model::cohort::{Cohort, cohort_order};
use crate::model::profile::SynthesisProfile;
use crate::model::record::SubjectRecord;
use crate::model::stats::{CohortCorrelation, CorrelationStats};
use crate::pipeline::stage2_synthesize::draw_cohort;
use crate::pipeline::stage3_correlate::cohort_correlation;

/// Dataset plus correlation statistics, computed once per run.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub dataset: Vec<SubjectRecord>,
    pub stats: CorrelationStats,
}

impl Assembly {
    pub fn records(&self, cohort: Cohort) -> impl Iterator<Item = &SubjectRecord> {
        self.dataset.iter().filter(move |r| r.cohort == cohort)
    }

    pub fn count(&self, cohort: Cohort) -> usize {
        self.records(cohort).count()
    }
}

pub fn run_stage4<R: Rng + ?Sized>(rng: &mut R, profile: &SynthesisProfile) -> Assembly {
    // Men are drawn before Women; within a cohort BSA before EDV.
    let men = synthesize(rng, Cohort::Men, profile);
    let women = synthesize(rng, Cohort::Women, profile);

    let stats = CorrelationStats {
        men: cohort_correlation(&men),
        women: cohort_correlation(&women),
    };
    for &cohort in cohort_order() {
        log_correlation(cohort, stats.get(cohort));
    }

    let mut dataset = Vec::with_capacity(men.len() + women.len());
    dataset.extend(men);
    dataset.extend(women);
    info!(records = dataset.len(), "dataset assembled");

    Assembly { dataset, stats }
}

fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    cohort: Cohort,
    profile: &SynthesisProfile,
) -> Vec<SubjectRecord> {
    let params = profile.params(cohort);
    debug!(
        cohort = cohort.label(),
        n = params.n,
        bsa_mean = params.bsa_mean,
        bsa_sd = params.bsa_sd,
        edv_mean = params.edv_mean,
        edv_sd = params.edv_sd,
        "synthesizing cohort"
    );
    draw_cohort(rng, cohort, params)
}

fn log_correlation(cohort: Cohort, corr: &CohortCorrelation) {
    if corr.is_finite() {
        info!(
            cohort = cohort.label(),
            raw = corr.raw,
            indexed = corr.indexed,
            "cohort correlation"
        );
    } else {
        warn!(
            cohort = cohort.label(),
            raw = corr.raw,
            indexed = corr.indexed,
            "non-finite cohort correlation"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_assemble.rs"]
mod tests;
