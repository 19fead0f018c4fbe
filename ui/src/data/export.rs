//! Serialising dashboard data for download.

use super::model::DashboardData;

pub fn build_json(data: &DashboardData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Two CSV sections separated by a blank line: the daily series, then the top pages.
pub fn build_csv(data: &DashboardData) -> String {
    let mut rows: Vec<Vec<String>> =
        Vec::with_capacity(data.time_series.len() + data.top_pages.len() + 3);

    rows.push(vec!["date".into(), "visitors".into(), "conversions".into()]);
    for point in &data.time_series {
        rows.push(vec![
            point.date.clone(),
            point.visitors.to_string(),
            point.conversions.to_string(),
        ]);
    }

    rows.push(Vec::new());
    rows.push(vec![
        "page".into(),
        "views".into(),
        "conversions".into(),
        "conversion_rate".into(),
    ]);
    for page in &data.top_pages {
        rows.push(vec![
            page.path.clone(),
            page.views.to_string(),
            page.conversions.to_string(),
            format!("{:.1}", page.conversion_rate()),
        ]);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// File name like `insightboard-20250301_101500.csv`.
pub fn export_filename(extension: &str) -> String {
    use time::{macros::format_description, OffsetDateTime};

    let slug = OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into());
    format!("insightboard-{slug}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{KpiMetrics, TimeSeriesPoint, TopPage};

    fn sample() -> DashboardData {
        DashboardData {
            kpis: KpiMetrics {
                total_visitors: 300,
                bounce_rate: 52.5,
                avg_session_duration: 180,
                conversions: 12,
            },
            time_series: vec![
                TimeSeriesPoint {
                    date: "2025-03-01".into(),
                    visitors: 100,
                    conversions: 4,
                },
                TimeSeriesPoint {
                    date: "2025-03-02".into(),
                    visitors: 200,
                    conversions: 8,
                },
            ],
            top_pages: vec![TopPage {
                path: "/blog/a,b".into(),
                views: 80,
                conversions: 4,
            }],
        }
    }

    #[test]
    fn csv_has_series_then_pages() {
        let csv = build_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "date,visitors,conversions",
                "2025-03-01,100,4",
                "2025-03-02,200,8",
                "",
                "page,views,conversions,conversion_rate",
                "\"/blog/a,b\",80,4,5.0",
            ]
        );
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("plain"), "plain");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = build_json(&sample()).unwrap();
        assert!(json.contains("\"timeSeries\""));
        assert!(json.contains("\"totalVisitors\": 300"));
    }

    #[test]
    fn filename_carries_extension() {
        let name = export_filename("json");
        assert!(name.starts_with("insightboard-"));
        assert!(name.ends_with(".json"));
    }
}
