use crate::model::record::SubjectRecord;
use crate::report::format_js_number;

pub const CSV_FILE_NAME: &str = "edv_data.csv";
pub const CSV_HEADER: [&str; 4] = ["sex", "bsa", "edv", "edv_indexed"];

/// Header plus one unquoted row per record, `\n`-joined with no trailing newline.
pub fn to_csv(dataset: &[SubjectRecord]) -> String {
    let mut lines = Vec::with_capacity(dataset.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for record in dataset {
        lines.push(
            [
                record.cohort.label().to_string(),
                format_js_number(record.bsa),
                format_js_number(record.edv),
                format_js_number(record.edv_indexed),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
