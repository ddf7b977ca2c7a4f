use serde::Serialize;

use crate::model::chart::ChartProfile;
use crate::model::cohort::{Cohort, cohort_order};
use crate::model::profile::CohortParams;
use crate::model::record::SubjectRecord;
use crate::model::stats::{CohortCorrelation, CorrelationStats};

// serde_json writes non-finite f64 as `null`, which is what renderers expect
// for a point they cannot place.

#[derive(Debug, Clone, Serialize)]
pub struct ChartPayload {
    pub panels: Vec<ChartPanel>,
    pub stats: CorrelationStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub id: &'static str,
    pub title: &'static str,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub reference_segments: Vec<ReferenceSegment>,
    pub reference_lines: Vec<HorizontalLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub key: &'static str,
    pub label: &'static str,
    pub domain: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub colour: &'static str,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSegment {
    pub name: String,
    pub colour: &'static str,
    pub dash: &'static str,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct HorizontalLine {
    pub y: f64,
    pub colour: &'static str,
    pub dash: &'static str,
}

pub fn build_chart_payload(
    dataset: &[SubjectRecord],
    stats: &CorrelationStats,
    chart: &ChartProfile,
) -> ChartPayload {
    let bsa_axis = Axis {
        key: "bsa",
        label: "BSA (m²)",
        domain: chart.bsa_domain,
        ticks: Some(chart.bsa_ticks.clone()),
    };

    let raw = ChartPanel {
        id: "raw",
        title: "EDV vs BSA",
        x_axis: bsa_axis.clone(),
        y_axis: Axis {
            key: "edv",
            label: "EDV (mL)",
            domain: chart.edv_domain,
            ticks: None,
        },
        series: cohort_series(dataset, chart, |r| r.edv),
        reference_segments: cohort_order()
            .iter()
            .map(|&cohort| {
                let [(x0, y0), (x1, y1)] = chart.uln_segment(cohort);
                ReferenceSegment {
                    name: format!("{} ULN", cohort.label()),
                    colour: chart.colour(cohort),
                    dash: chart.reference_dash,
                    from: Point { x: x0, y: y0 },
                    to: Point { x: x1, y: y1 },
                }
            })
            .collect(),
        reference_lines: Vec::new(),
    };

    let indexed = ChartPanel {
        id: "indexed",
        title: "Indexed EDV vs BSA",
        x_axis: bsa_axis,
        y_axis: Axis {
            key: "edv_indexed",
            label: "EDV/BSA (mL/m²)",
            domain: chart.indexed_domain,
            ticks: None,
        },
        series: cohort_series(dataset, chart, |r| r.edv_indexed),
        reference_segments: Vec::new(),
        reference_lines: cohort_order()
            .iter()
            .map(|&cohort| HorizontalLine {
                y: chart.uln(cohort),
                colour: chart.colour(cohort),
                dash: chart.reference_dash,
            })
            .collect(),
    };

    ChartPayload {
        panels: vec![raw, indexed],
        stats: *stats,
    }
}

fn cohort_series(
    dataset: &[SubjectRecord],
    chart: &ChartProfile,
    y: impl Fn(&SubjectRecord) -> f64,
) -> Vec<Series> {
    cohort_order()
        .iter()
        .map(|&cohort| Series {
            name: cohort.label(),
            colour: chart.colour(cohort),
            points: dataset
                .iter()
                .filter(|r| r.cohort == cohort)
                .map(|r| Point { x: r.bsa, y: y(r) })
                .collect(),
        })
        .collect()
}

pub fn render_chart_json(payload: &ChartPayload) -> serde_json::Result<String> {
    serde_json::to_string(payload)
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub seed: Option<u64>,
    pub outputs: Vec<String>,
    pub cohorts: Vec<CohortSummary>,
    pub n_records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortSummary {
    pub cohort: Cohort,
    pub n_records: usize,
    pub params: CohortParams,
    pub correlation: CohortCorrelation,
}

pub fn render_summary_json(summary: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
