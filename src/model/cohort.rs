use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cohort {
    Men,
    Women,
}

impl Cohort {
    /// Label written into the `sex` column and used as the series name.
    pub fn label(self) -> &'static str {
        match self {
            Cohort::Men => "Men",
            Cohort::Women => "Women",
        }
    }
}

/// Assembly and rendering order.
pub fn cohort_order() -> &'static [Cohort] {
    &[Cohort::Men, Cohort::Women]
}
