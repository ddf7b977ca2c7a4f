
use super::*;

fn sample_dataset() -> Vec<SubjectRecord> {
    vec![
        SubjectRecord::new(Cohort::Men, 1.8, 126.0),
        SubjectRecord::new(Cohort::Men, 2.1, 147.0),
        SubjectRecord::new(Cohort::Women, 1.5, 105.0),
    ]
}

fn sample_stats() -> CorrelationStats {
    CorrelationStats {
        men: CohortCorrelation {
            raw: 0.1,
            indexed: -0.4,
        },
        women: CohortCorrelation {
            raw: f64::NAN,
            indexed: -0.5,
        },
    }
}

#[test]
fn test_panels_split_series_by_cohort() {
    let payload = build_chart_payload(
        &sample_dataset(),
        &sample_stats(),
        &ChartProfile::default_v1(),
    );
    assert_eq!(payload.panels.len(), 2);
    let raw = &payload.panels[0];
    assert_eq!(raw.id, "raw");
    assert_eq!(raw.series[0].name, "Men");
    assert_eq!(raw.series[0].points.len(), 2);
    assert_eq!(raw.series[1].name, "Women");
    assert_eq!(raw.series[1].points, vec![Point { x: 1.5, y: 105.0 }]);

    let indexed = &payload.panels[1];
    assert_eq!(indexed.y_axis.key, "edv_indexed");
    assert_eq!(indexed.y_axis.domain, [0.0, 200.0]);
    assert!((indexed.series[1].points[0].y - 70.0).abs() < 1e-9);
}

#[test]
fn test_reference_lines() {
    let payload = build_chart_payload(
        &sample_dataset(),
        &sample_stats(),
        &ChartProfile::default_v1(),
    );
    let raw = &payload.panels[0];
    assert_eq!(raw.reference_segments.len(), 2);
    assert_eq!(raw.reference_segments[0].name, "Men ULN");
    assert_eq!(raw.reference_segments[1].name, "Women ULN");
    assert!((raw.reference_segments[1].to.y - 2.7 * 72.3).abs() < 1e-9);
    assert!(raw.reference_lines.is_empty());

    let indexed = &payload.panels[1];
    let ys = indexed.reference_lines.iter().map(|l| l.y).collect::<Vec<_>>();
    assert_eq!(ys, vec![79.0, 72.3]);
    assert!(indexed.reference_segments.is_empty());
}

#[test]
fn test_chart_json_encodes_non_finite_as_null() {
    let payload = build_chart_payload(
        &sample_dataset(),
        &sample_stats(),
        &ChartProfile::default_v1(),
    );
    let json = render_chart_json(&payload).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["stats"]["women"]["raw"].is_null());
    assert_eq!(value["stats"]["men"]["indexed"], serde_json::json!(-0.4));
    assert_eq!(value["panels"][0]["x_axis"]["ticks"][0], serde_json::json!(0.5));
    assert!(value["panels"][0]["y_axis"].get("ticks").is_none());
}
