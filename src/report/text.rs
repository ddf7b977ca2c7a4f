use crate::model::cohort::{Cohort, cohort_order};
use crate::model::stats::CorrelationStats;
use crate::report::format_fixed3;

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub stats: CorrelationStats,
    pub counts: Vec<(Cohort, usize)>,
    pub seed: Option<u64>,
}

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("EDV Analysis\n");
    out.push_str("============\n\n");

    out.push_str("Correlation Analysis\n");
    for &cohort in cohort_order() {
        let corr = ctx.stats.get(cohort);
        out.push_str(&format!(
            "{} - Raw EDV vs BSA: {}\n",
            cohort.label(),
            format_fixed3(corr.raw)
        ));
        out.push_str(&format!(
            "{} - Indexed EDV vs BSA: {}\n",
            cohort.label(),
            format_fixed3(corr.indexed)
        ));
    }
    out.push('\n');

    out.push_str("Cohorts\n");
    for (cohort, n) in &ctx.counts {
        out.push_str(&format!("{}: {} subjects\n", cohort.label(), n));
    }
    match ctx.seed {
        Some(seed) => out.push_str(&format!("Seed: {}\n", seed)),
        None => out.push_str("Seed: entropy (not reproducible)\n"),
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
