use serde::Serialize;

use crate::model::cohort::Cohort;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectRecord {
    pub cohort: Cohort,
    pub bsa: f64,
    pub edv: f64,
    pub edv_indexed: f64,
}

impl SubjectRecord {
    /// No guard on `bsa`: zero or negative values give an infinite or negative index.
    pub fn new(cohort: Cohort, bsa: f64, edv: f64) -> Self {
        Self {
            cohort,
            bsa,
            edv,
            edv_indexed: edv / bsa,
        }
    }
}
