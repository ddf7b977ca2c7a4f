
use super::*;
use crate::model::profile::SynthesisProfile;
use crate::pipeline::stage1_sample::build_rng;

#[test]
fn test_pairs_by_index_and_sorts() {
    let bsa = [2.0, 1.5, 1.8];
    let edv = [150.0, 90.0, 120.0];
    let records = synthesize_cohort(Cohort::Men, &bsa, &edv);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].bsa, 1.5);
    assert_eq!(records[0].edv, 90.0);
    assert_eq!(records[1].bsa, 1.8);
    assert_eq!(records[1].edv, 120.0);
    assert_eq!(records[2].bsa, 2.0);
    assert_eq!(records[2].edv, 150.0);
    assert!(records.iter().all(|r| r.cohort == Cohort::Men));
}

#[test]
fn test_ratio_is_edv_over_bsa() {
    let bsa = [2.0, 1.5, 1.8];
    let edv = [150.0, 90.0, 120.0];
    for r in synthesize_cohort(Cohort::Women, &bsa, &edv) {
        assert!((r.edv_indexed - r.edv / r.bsa).abs() < 1e-12);
    }
}

#[test]
fn test_ties_keep_pairing_order() {
    let bsa = [1.7, 1.2, 1.7, 1.7];
    let edv = [10.0, 20.0, 30.0, 40.0];
    let records = synthesize_cohort(Cohort::Men, &bsa, &edv);
    let edvs = records.iter().map(|r| r.edv).collect::<Vec<_>>();
    assert_eq!(edvs, vec![20.0, 10.0, 30.0, 40.0]);
}

#[test]
fn test_zero_bsa_gives_infinite_index() {
    let records = synthesize_cohort(Cohort::Men, &[0.0], &[100.0]);
    assert!(records[0].edv_indexed.is_infinite());
}

#[test]
fn test_drawn_cohort_sorted_and_sized() {
    let profile = SynthesisProfile::default_v1();
    let mut rng = build_rng(Some(11));
    let records = draw_cohort(&mut rng, Cohort::Women, &profile.women);
    assert_eq!(records.len(), 756);
    for pair in records.windows(2) {
        assert!(pair[0].bsa <= pair[1].bsa);
    }
    for r in &records {
        assert!((r.edv_indexed - r.edv / r.bsa).abs() <= 1e-9 * r.edv_indexed.abs());
    }
}

#[test]
fn test_short_edv_gives_nan_records() {
    let records = synthesize_cohort(Cohort::Men, &[1.0, 2.0], &[3.0]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].edv, 3.0);
    assert!(records[1].edv.is_nan());
    assert!(records[1].edv_indexed.is_nan());
}
