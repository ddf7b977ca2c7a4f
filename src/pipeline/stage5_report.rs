use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::EdvError;
use crate::model::chart::ChartProfile;
use crate::model::cohort::cohort_order;
use crate::model::profile::SynthesisProfile;
use crate::pipeline::stage4_assemble::Assembly;
use crate::report::csv::{CSV_FILE_NAME, to_csv};
use crate::report::json::{
    CohortSummary, SummaryData, ToolMeta, build_chart_payload, render_chart_json,
    render_summary_json,
};
use crate::report::text::{ReportContext, render_report_text};

pub const CHART_FILE_NAME: &str = "chart.json";
pub const SUMMARY_FILE_NAME: &str = "summary.json";
pub const REPORT_FILE_NAME: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Full,
    CsvOnly,
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub assembly: &'a Assembly,
    pub profile: &'a SynthesisProfile,
    pub chart: &'a ChartProfile,
    pub seed: Option<u64>,
    pub tool_name: String,
    pub tool_version: String,
}

/// Writes the report files into `out_dir` and returns their paths in write order.
pub fn write_reports(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<Vec<PathBuf>, EdvError> {
    fs::create_dir_all(out_dir).map_err(|e| EdvError::io(out_dir, e))?;

    let mut written = Vec::new();

    let csv_path = out_dir.join(CSV_FILE_NAME);
    write_text(&csv_path, &to_csv(&input.assembly.dataset))?;
    written.push(csv_path);

    if mode == ReportMode::CsvOnly {
        return Ok(written);
    }

    let chart_path = out_dir.join(CHART_FILE_NAME);
    let payload = build_chart_payload(
        &input.assembly.dataset,
        &input.assembly.stats,
        input.chart,
    );
    write_text(&chart_path, &render_chart_json(&payload)?)?;
    written.push(chart_path);

    let report_path = out_dir.join(REPORT_FILE_NAME);
    write_text(&report_path, &render_report_text(&build_report_context(input)))?;
    written.push(report_path);

    let summary_path = out_dir.join(SUMMARY_FILE_NAME);
    let summary = build_summary(input, mode);
    write_text(&summary_path, &render_summary_json(&summary)?)?;
    written.push(summary_path);

    Ok(written)
}

fn build_summary(input: &Stage5Input<'_>, mode: ReportMode) -> SummaryData {
    let mut outputs = vec![CSV_FILE_NAME.to_string()];
    if mode == ReportMode::Full {
        outputs.extend(
            [CHART_FILE_NAME, REPORT_FILE_NAME, SUMMARY_FILE_NAME]
                .iter()
                .map(|s| s.to_string()),
        );
    }

    let cohorts = cohort_order()
        .iter()
        .map(|&cohort| CohortSummary {
            cohort,
            n_records: input.assembly.count(cohort),
            params: *input.profile.params(cohort),
            correlation: *input.assembly.stats.get(cohort),
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        seed: input.seed,
        outputs,
        cohorts,
        n_records: input.assembly.dataset.len(),
    }
}

fn build_report_context(input: &Stage5Input<'_>) -> ReportContext {
    ReportContext {
        stats: input.assembly.stats,
        counts: cohort_order()
            .iter()
            .map(|&cohort| (cohort, input.assembly.count(cohort)))
            .collect(),
        seed: input.seed,
    }
}

fn write_text(path: &Path, content: &str) -> Result<(), EdvError> {
    let file = File::create(path).map_err(|e| EdvError::io(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(content.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| EdvError::io(path, e))?;
    info!(path = %path.display(), bytes = content.len(), "wrote");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
