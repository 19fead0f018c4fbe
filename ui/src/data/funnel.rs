//! Funnel drop-off analysis.

use serde::{Deserialize, Serialize};

use crate::core::format::ratio_percent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub users: u64,
}

impl FunnelStage {
    pub fn new(stage: impl Into<String>, users: u64) -> Self {
        Self {
            stage: stage.into(),
            users,
        }
    }
}

/// A stage enriched with conversion figures.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStep {
    pub stage: String,
    pub users: u64,
    /// Share of the first stage, in percent.
    pub rate_of_top: f64,
    /// Share of the previous stage, in percent (100 for the first stage).
    pub step_conversion: f64,
    /// Users lost since the previous stage.
    pub drop_off: u64,
}

/// Sample e-commerce funnel shown on the funnels page.
pub fn sample_funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage::new("Visited site", 12_000),
        FunnelStage::new("Viewed product", 7_800),
        FunnelStage::new("Added to cart", 4_200),
        FunnelStage::new("Checkout started", 2_500),
        FunnelStage::new("Purchased", 1_600),
    ]
}

pub fn analyze(stages: &[FunnelStage]) -> Vec<FunnelStep> {
    let top = stages.first().map(|s| s.users).unwrap_or(0);
    let mut previous: Option<u64> = None;

    stages
        .iter()
        .map(|stage| {
            let (step_conversion, drop_off) = match previous {
                None => (100.0, 0),
                Some(prev) => (
                    ratio_percent(stage.users, prev),
                    prev.saturating_sub(stage.users),
                ),
            };
            previous = Some(stage.users);
            FunnelStep {
                stage: stage.stage.clone(),
                users: stage.users,
                rate_of_top: ratio_percent(stage.users, top),
                step_conversion,
                drop_off,
            }
        })
        .collect()
}

/// End-to-end conversion from the first to the last stage, in percent.
pub fn overall_conversion(stages: &[FunnelStage]) -> f64 {
    match (stages.first(), stages.last()) {
        (Some(first), Some(last)) => ratio_percent(last.users, first.users),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_relative_to_top_and_previous() {
        let steps = analyze(&sample_funnel());
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].rate_of_top, 100.0);
        assert_eq!(steps[0].step_conversion, 100.0);
        assert_eq!(steps[0].drop_off, 0);

        assert!((steps[1].rate_of_top - 65.0).abs() < 1e-9);
        assert!((steps[1].step_conversion - 65.0).abs() < 1e-9);
        assert_eq!(steps[1].drop_off, 4_200);

        assert!((steps[4].rate_of_top - 13.333_333).abs() < 1e-4);
        assert!((steps[4].step_conversion - 64.0).abs() < 1e-9);
        assert_eq!(steps[4].drop_off, 900);
    }

    #[test]
    fn empty_top_stage_yields_zero_rates() {
        let steps = analyze(&[FunnelStage::new("a", 0), FunnelStage::new("b", 0)]);
        assert!(steps.iter().all(|s| s.rate_of_top == 0.0));
        assert_eq!(steps[1].step_conversion, 0.0);
    }

    #[test]
    fn overall_conversion_spans_first_to_last() {
        assert!((overall_conversion(&sample_funnel()) - 13.333_333).abs() < 1e-4);
        assert_eq!(overall_conversion(&[]), 0.0);
    }
}
