use serde::Serialize;

use crate::model::cohort::Cohort;

/// Pearson r of BSA against raw EDV and against EDV/BSA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortCorrelation {
    pub raw: f64,
    pub indexed: f64,
}

impl CohortCorrelation {
    pub fn is_finite(&self) -> bool {
        self.raw.is_finite() && self.indexed.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationStats {
    pub men: CohortCorrelation,
    pub women: CohortCorrelation,
}

impl CorrelationStats {
    pub fn get(&self, cohort: Cohort) -> &CohortCorrelation {
        match cohort {
            Cohort::Men => &self.men,
            Cohort::Women => &self.women,
        }
    }
}
