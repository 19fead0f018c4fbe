//! Types shared by the mock feed, the spreadsheet importer and the views.

use serde::{Deserialize, Serialize};

use crate::core::format::ratio_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRangePreset {
    #[default]
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl DateRangePreset {
    pub const ALL: [Self; 3] = [Self::Last7Days, Self::Last30Days, Self::Last90Days];

    pub fn days(self) -> u32 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficSource {
    #[default]
    All,
    Organic,
    Paid,
    Referral,
}

impl TrafficSource {
    pub const ALL: [Self; 4] = [Self::All, Self::Organic, Self::Paid, Self::Referral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Organic => "organic",
            Self::Paid => "paid",
            Self::Referral => "referral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All sources",
            Self::Organic => "Organic",
            Self::Paid => "Paid",
            Self::Referral => "Referral",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    All,
    Desktop,
    Mobile,
}

impl DeviceType {
    pub const ALL: [Self; 3] = [Self::All, Self::Desktop, Self::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All devices",
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    pub date_range: DateRangePreset,
    pub source: TrafficSource,
    pub device: DeviceType,
}

/// Partial filter update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FiltersPatch {
    pub date_range: Option<DateRangePreset>,
    pub source: Option<TrafficSource>,
    pub device: Option<DeviceType>,
}

impl DashboardFilters {
    pub fn merged(self, patch: FiltersPatch) -> Self {
        Self {
            date_range: patch.date_range.unwrap_or(self.date_range),
            source: patch.source.unwrap_or(self.source),
            device: patch.device.unwrap_or(self.device),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    pub total_visitors: u64,
    /// Percentage, one decimal.
    pub bounce_rate: f64,
    /// Seconds.
    pub avg_session_duration: u32,
    pub conversions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Usually `YYYY-MM-DD`; imported sheets may carry free-form labels.
    pub date: String,
    pub visitors: u64,
    pub conversions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPage {
    pub path: String,
    pub views: u64,
    pub conversions: u64,
}

impl TopPage {
    pub fn conversion_rate(&self) -> f64 {
        ratio_percent(self.conversions, self.views)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpis: KpiMetrics,
    pub time_series: Vec<TimeSeriesPoint>,
    pub top_pages: Vec<TopPage>,
}

impl DashboardData {
    pub fn conversion_rate(&self) -> f64 {
        ratio_percent(self.kpis.conversions, self.kpis.total_visitors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    pub id: String,
    pub name: String,
    /// RFC 3339, UTC.
    pub created_at: String,
    pub filters: DashboardFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_serialize_with_short_codes() {
        let filters = DashboardFilters {
            date_range: DateRangePreset::Last30Days,
            source: TrafficSource::Organic,
            device: DeviceType::Mobile,
        };
        let json = serde_json::to_value(filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "dateRange": "30d", "source": "organic", "device": "mobile" })
        );
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let base = DashboardFilters::default();
        let next = base.merged(FiltersPatch {
            device: Some(DeviceType::Desktop),
            ..Default::default()
        });
        assert_eq!(next.date_range, DateRangePreset::Last7Days);
        assert_eq!(next.source, TrafficSource::All);
        assert_eq!(next.device, DeviceType::Desktop);
    }

    #[test]
    fn option_codes_parse_back() {
        for preset in DateRangePreset::ALL {
            assert_eq!(DateRangePreset::parse(preset.as_str()), Some(preset));
        }
        assert_eq!(TrafficSource::parse("paid"), Some(TrafficSource::Paid));
        assert_eq!(DeviceType::parse("tablet"), None);
    }

    #[test]
    fn page_conversion_rate_is_zero_without_views() {
        let page = TopPage {
            path: "/empty".into(),
            views: 0,
            conversions: 3,
        };
        assert_eq!(page.conversion_rate(), 0.0);
    }
}
