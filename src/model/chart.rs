use crate::model::cohort::Cohort;

/// Fixed presentation constants for the raw and indexed scatter panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProfile {
    pub men_uln: f64,
    pub women_uln: f64,
    pub uln_bsa_start: f64,
    pub bsa_domain: [f64; 2],
    pub bsa_ticks: Vec<f64>,
    pub edv_domain: [f64; 2],
    pub indexed_domain: [f64; 2],
    pub men_colour: &'static str,
    pub women_colour: &'static str,
    pub reference_dash: &'static str,
}

impl ChartProfile {
    pub fn default_v1() -> Self {
        Self {
            men_uln: 79.0,
            women_uln: 72.3,
            uln_bsa_start: 0.8,
            bsa_domain: [0.0, 2.7],
            bsa_ticks: vec![0.5, 1.0, 1.5, 2.0, 2.5],
            edv_domain: [0.0, 300.0],
            indexed_domain: [0.0, 200.0],
            men_colour: "#8884d8",
            women_colour: "#82ca9d",
            reference_dash: "5 5",
        }
    }

    /// Upper limit of normal for indexed EDV (mL/m²); also the slope of the raw reference line.
    pub fn uln(&self, cohort: Cohort) -> f64 {
        match cohort {
            Cohort::Men => self.men_uln,
            Cohort::Women => self.women_uln,
        }
    }

    pub fn colour(&self, cohort: Cohort) -> &'static str {
        match cohort {
            Cohort::Men => self.men_colour,
            Cohort::Women => self.women_colour,
        }
    }

    /// Endpoints of the raw-panel ULN segment, from `uln_bsa_start` to the upper BSA bound.
    pub fn uln_segment(&self, cohort: Cohort) -> [(f64, f64); 2] {
        let slope = self.uln(cohort);
        let start = self.uln_bsa_start;
        let end = self.bsa_domain[1];
        [(start, start * slope), (end, end * slope)]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/chart.rs"]
mod tests;
