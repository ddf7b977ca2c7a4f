pub mod chart;
pub mod cohort;
pub mod profile;
pub mod record;
pub mod stats;
