pub mod stage1_sample;
pub mod stage2_synthesize;
pub mod stage3_correlate;
pub mod stage4_assemble;
pub mod stage5_report;
