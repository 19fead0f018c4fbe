//! Weekly cohort retention matrix.

/// Column headers of the retention table.
pub const PERIODS: [&str; 5] = ["Signup", "Week 1", "Week 2", "Week 3", "Week 4"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub label: String,
    /// Retention percentages, one per entry of [`PERIODS`].
    pub values: Vec<u8>,
}

pub fn sample_cohorts() -> Vec<Cohort> {
    [
        ("Week 1", [100, 62, 48, 35, 29]),
        ("Week 2", [100, 58, 44, 32, 25]),
        ("Week 3", [100, 60, 46, 34, 27]),
        ("Week 4", [100, 55, 40, 30, 23]),
    ]
    .into_iter()
    .map(|(label, values)| Cohort {
        label: label.to_string(),
        values: values.to_vec(),
    })
    .collect()
}

/// Heat-map bucket for a retention cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Highest,
    High,
    Medium,
    Low,
    Lowest,
}

impl Intensity {
    pub fn for_value(value: u8) -> Self {
        match value {
            70.. => Self::Highest,
            50..=69 => Self::High,
            35..=49 => Self::Medium,
            20..=34 => Self::Low,
            _ => Self::Lowest,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Highest => "cohort-cell--5",
            Self::High => "cohort-cell--4",
            Self::Medium => "cohort-cell--3",
            Self::Low => "cohort-cell--2",
            Self::Lowest => "cohort-cell--1",
        }
    }
}

/// Mean retention per period across cohorts that have a value for it.
pub fn average_retention(cohorts: &[Cohort]) -> Vec<f64> {
    let periods = cohorts.iter().map(|c| c.values.len()).max().unwrap_or(0);
    (0..periods)
        .map(|idx| {
            let values: Vec<f64> = cohorts
                .iter()
                .filter_map(|c| c.values.get(idx).map(|v| f64::from(*v)))
                .collect();
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        })
        .collect()
}
