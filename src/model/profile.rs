use serde::Serialize;

use crate::model::cohort::Cohort;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortParams {
    pub n: usize,
    pub bsa_mean: f64,
    pub bsa_sd: f64,
    pub edv_mean: f64,
    pub edv_sd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisProfile {
    pub men: CohortParams,
    pub women: CohortParams,
}

impl SynthesisProfile {
    pub fn default_v1() -> Self {
        Self {
            men: CohortParams {
                n: 833,
                bsa_mean: 1.9,
                bsa_sd: 0.2,
                edv_mean: 133.0,
                edv_sd: 32.0,
            },
            women: CohortParams {
                n: 756,
                bsa_mean: 1.6,
                bsa_sd: 0.2,
                edv_mean: 107.0,
                edv_sd: 23.0,
            },
        }
    }

    pub fn params(&self, cohort: Cohort) -> &CohortParams {
        match cohort {
            Cohort::Men => &self.men,
            Cohort::Women => &self.women,
        }
    }

    pub fn total_subjects(&self) -> usize {
        self.men.n + self.women.n
    }
}
