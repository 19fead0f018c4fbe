//! Simulated analytics API.
//!
//! Values are random but internally consistent: KPI totals are always the sums
//! of the generated series, and every selected filter scales the traffic.

use rand::Rng;
use time::{macros::format_description, Date, Duration};

use super::model::{
    DashboardData, DashboardFilters, DateRangePreset, DeviceType, KpiMetrics, TimeSeriesPoint,
    TopPage, TrafficSource,
};
use crate::core::{config::app_config, format::round1, timing};

const TOP_PAGE_PATHS: [&str; 5] = [
    "/home",
    "/pricing",
    "/blog/getting-started",
    "/blog/advanced-analytics",
    "/signup",
];

/// Fetch a fresh dataset for `filters` after a simulated network delay.
pub async fn fetch_dashboard_data(filters: DashboardFilters) -> DashboardData {
    let config = app_config();
    let latency = rand::thread_rng()
        .gen_range(config.mock_latency_min_ms..=config.mock_latency_max_ms);
    timing::sleep_ms(latency).await;

    let data = generate_dashboard(&filters, timing::today_utc(), &mut rand::thread_rng());
    tracing::debug!(
        range = filters.date_range.as_str(),
        source = filters.source.as_str(),
        device = filters.device.as_str(),
        latency_ms = latency,
        "mock dashboard data generated"
    );
    data
}

pub fn generate_dashboard<R: Rng + ?Sized>(
    filters: &DashboardFilters,
    today: Date,
    rng: &mut R,
) -> DashboardData {
    let time_series = generate_time_series(filters, today, rng);
    let total_visitors = time_series.iter().map(|p| p.visitors).sum();
    let conversions = time_series.iter().map(|p| p.conversions).sum();

    let bounce_rate = round1(rng.gen_range(40.0..=60.0));
    let avg_session_duration = rng.gen_range(120.0_f64..=300.0).round() as u32;

    let top_pages = generate_top_pages(filters, rng);

    DashboardData {
        kpis: KpiMetrics {
            total_visitors,
            bounce_rate,
            avg_session_duration,
            conversions,
        },
        time_series,
        top_pages,
    }
}

fn generate_time_series<R: Rng + ?Sized>(
    filters: &DashboardFilters,
    today: Date,
    rng: &mut R,
) -> Vec<TimeSeriesPoint> {
    let days = filters.date_range.days();
    let start = today - Duration::days(i64::from(days) - 1);
    let base = base_visitors(filters.date_range) * traffic_share(filters);

    (0..days)
        .map(|idx| {
            let date = start + Duration::days(i64::from(idx));
            let visitors = random_in_range(rng, base * 0.7, base * 1.3);
            let rate = 0.02 + rng.gen::<f64>() * 0.03;
            let conversions = (visitors as f64 * rate).round() as u64;
            TimeSeriesPoint {
                date: format_day(date),
                visitors,
                conversions,
            }
        })
        .collect()
}

fn generate_top_pages<R: Rng + ?Sized>(filters: &DashboardFilters, rng: &mut R) -> Vec<TopPage> {
    let share = traffic_share(filters);

    TOP_PAGE_PATHS
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let multiplier = 1.0 - idx as f64 * 0.1 + rng.gen::<f64>() * 0.2;
            let views = random_in_range(rng, 500.0, 2000.0) as f64 * multiplier * share;
            let rate = 0.03 + rng.gen::<f64>() * 0.04;
            TopPage {
                path: (*path).to_string(),
                views: views.round() as u64,
                conversions: (views * rate).round() as u64,
            }
        })
        .collect()
}

fn base_visitors(range: DateRangePreset) -> f64 {
    match range {
        DateRangePreset::Last7Days => 800.0,
        DateRangePreset::Last30Days => 600.0,
        DateRangePreset::Last90Days => 400.0,
    }
}

/// Fraction of total traffic matching the source and device filters.
pub fn traffic_share(filters: &DashboardFilters) -> f64 {
    let source = match filters.source {
        TrafficSource::All => 1.0,
        TrafficSource::Organic => 0.5,
        TrafficSource::Paid => 0.3,
        TrafficSource::Referral => 0.2,
    };
    let device = match filters.device {
        DeviceType::All => 1.0,
        DeviceType::Desktop => 0.6,
        DeviceType::Mobile => 0.4,
    };
    source * device
}

fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> u64 {
    (min + rng.gen::<f64>() * (max - min)).round().max(0.0) as u64
}

fn format_day(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
