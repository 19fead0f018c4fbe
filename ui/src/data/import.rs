//! Spreadsheet import: turns an uploaded workbook into a [`DashboardData`].
//!
//! Only the first worksheet is read. Its first row names the columns; column
//! meanings are guessed from fixed, ordered alias lists (case-sensitive, first
//! present alias wins). The whole file is processed in one pass and either
//! yields a complete dataset or an [`ImportError`].

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use thiserror::Error;
use time::{macros::format_description, Date, Duration, Month};

use super::model::{DashboardData, KpiMetrics, TimeSeriesPoint, TopPage};
use crate::core::format::{ratio_percent, round1};

const DATE_ALIASES: &[&str] = &["Date", "date"];
const VISITOR_ALIASES: &[&str] = &["Visitors", "visitors", "Visits", "visits"];
const CONVERSION_ALIASES: &[&str] = &["Conversions", "conversions", "Conv", "conv"];
const PAGE_ALIASES: &[&str] = &["Page", "page", "Path", "path"];
const PAGE_VIEW_ALIASES: &[&str] = &["PageViews", "pageViews", "Views", "views"];
const PAGE_CONVERSION_ALIASES: &[&str] = &["PageConversions", "pageConversions", "PageConv"];

/// Imported sheets carry no session timing, so the KPI card shows a fixed value.
pub const IMPORTED_SESSION_SECONDS: u32 = 180;

/// Path of the synthetic page entry used when the sheet has no page column.
pub const FALLBACK_PAGE_PATH: &str = "/from-excel";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read the workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("the workbook contains no worksheets")]
    NoSheets,
    #[error("the spreadsheet is empty or not readable")]
    EmptyInput,
    #[error("no valid rows found; expected columns like Date, Visitors, Conversions")]
    NoValidRows,
}

/// A single non-empty cell, reduced to what the importer cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Date(Date),
}

/// One data row keyed by header text. Empty cells are absent.
pub type SheetRow = HashMap<String, CellValue>;

/// Parse workbook bytes (xlsx, xls, xlsb or ods) into a dashboard dataset.
pub fn import_workbook(bytes: &[u8]) -> Result<DashboardData, ImportError> {
    let rows = read_first_sheet(bytes)?;
    let data = summarize_rows(&rows)?;
    tracing::info!(
        rows = rows.len(),
        points = data.time_series.len(),
        pages = data.top_pages.len(),
        "workbook imported"
    );
    Ok(data)
}

/// Read the first worksheet into header-keyed rows, skipping blank rows.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Vec<SheetRow>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheets)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<Option<String>> = header_row.iter().map(header_text).collect();

    let records = rows
        .filter_map(|cells| {
            let row: SheetRow = cells
                .iter()
                .zip(headers.iter())
                .filter_map(|(cell, header)| {
                    let header = header.as_ref()?;
                    cell_value(cell).map(|value| (header.clone(), value))
                })
                .collect();
            (!row.is_empty()).then_some(row)
        })
        .collect();

    Ok(records)
}

/// Aggregate parsed rows into a time series, per-page totals and KPIs.
pub fn summarize_rows(rows: &[SheetRow]) -> Result<DashboardData, ImportError> {
    if rows.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let mut time_series = Vec::new();
    let mut pages = PageTotals::default();

    for row in rows {
        let date = lookup(row, DATE_ALIASES).and_then(date_label);
        let visitors = lookup(row, VISITOR_ALIASES).and_then(numeric);
        let conversions = lookup(row, CONVERSION_ALIASES)
            .and_then(numeric)
            .unwrap_or(0.0);

        if let (Some(date), Some(visitors)) = (date, visitors) {
            time_series.push(TimeSeriesPoint {
                date,
                visitors: to_count(visitors),
                conversions: to_count(conversions),
            });
        }

        if let Some(path) = lookup(row, PAGE_ALIASES).and_then(page_path) {
            let views = match lookup(row, PAGE_VIEW_ALIASES) {
                Some(cell) => numeric(cell).unwrap_or(0.0),
                None => visitors.unwrap_or(0.0),
            };
            let page_conversions = match lookup(row, PAGE_CONVERSION_ALIASES) {
                Some(cell) => numeric(cell).unwrap_or(0.0),
                None => conversions,
            };
            pages.add(path, to_count(views), to_count(page_conversions));
        }
    }

    if time_series.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    let total_visitors: u64 = time_series.iter().map(|p| p.visitors).sum();
    let total_conversions: u64 = time_series.iter().map(|p| p.conversions).sum();
    let conversion_rate = ratio_percent(total_conversions, total_visitors);
    let bounce_rate = round1((60.0 - conversion_rate).clamp(10.0, 90.0));

    let top_pages = if pages.is_empty() {
        vec![TopPage {
            path: FALLBACK_PAGE_PATH.to_string(),
            views: total_visitors,
            conversions: total_conversions,
        }]
    } else {
        pages.into_pages()
    };

    Ok(DashboardData {
        kpis: KpiMetrics {
            total_visitors,
            bounce_rate,
            avg_session_duration: IMPORTED_SESSION_SECONDS,
            conversions: total_conversions,
        },
        time_series,
        top_pages,
    })
}

/// Per-page sums in first-seen order.
#[derive(Default)]
struct PageTotals {
    index: HashMap<String, usize>,
    pages: Vec<TopPage>,
}

impl PageTotals {
    fn add(&mut self, path: String, views: u64, conversions: u64) {
        let slot = match self.index.get(&path) {
            Some(&slot) => slot,
            None => {
                self.index.insert(path.clone(), self.pages.len());
                self.pages.push(TopPage {
                    path,
                    views: 0,
                    conversions: 0,
                });
                self.pages.len() - 1
            }
        };
        let page = &mut self.pages[slot];
        page.views = page.views.saturating_add(views);
        page.conversions = page.conversions.saturating_add(conversions);
    }

    fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn into_pages(self) -> Vec<TopPage> {
        self.pages
    }
}

fn lookup<'a>(row: &'a SheetRow, aliases: &[&str]) -> Option<&'a CellValue> {
    aliases.iter().find_map(|alias| row.get(*alias))
}

/// Numeric coercion; `None` means the value is not a number.
fn numeric(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Number(_) => None,
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        CellValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        CellValue::Date(_) => None,
    }
}

fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn date_label(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Date(date) => Some(format_day(*date)),
        CellValue::Number(serial) => excel_serial_to_date(*serial).map(format_day),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(normalize_iso_date(trimmed).unwrap_or_else(|| trimmed.to_string()))
            }
        }
        CellValue::Bool(_) => None,
    }
}

/// `2024-01-05T10:00:00Z` → `2024-01-05`; non-ISO text yields `None`.
fn normalize_iso_date(text: &str) -> Option<String> {
    let head = text.get(..10)?;
    let date = Date::parse(head, &format_description!("[year]-[month]-[day]")).ok()?;
    match text.as_bytes().get(10) {
        None | Some(b'T') | Some(b' ') => Some(format_day(date)),
        Some(_) => None,
    }
}

fn page_path(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) if !text.trim().is_empty() => Some(text.clone()),
        CellValue::Number(n) if *n != 0.0 && n.is_finite() => Some(number_text(*n)),
        _ => None,
    }
}

/// Serial of 9999-12-31, the last day Excel can represent.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Excel serial day number (1900 date system) to a calendar date.
pub fn excel_serial_to_date(serial: f64) -> Option<Date> {
    if !serial.is_finite() || !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = Date::from_calendar_date(1899, Month::December, 30).ok()?;
    epoch.checked_add(Duration::days(serial.floor() as i64))
}

fn format_day(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn header_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => number_text(dt.as_f64()),
        Data::Error(_) | Data::Empty => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(CellValue::Date)
            .or(Some(CellValue::Number(dt.as_f64()))),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(_) | Data::Empty => None,
    }
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn row(cells: &[(&str, CellValue)]) -> SheetRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(summarize_rows(&[]), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn rows_without_visitors_are_not_valid() {
        let rows = vec![
            row(&[("Date", text("2024-01-01")), ("Conversions", num(4.0))]),
            row(&[("Date", text("2024-01-02")), ("Visitors", text("n/a"))]),
            row(&[("Visitors", num(10.0))]),
        ];
        assert!(matches!(
            summarize_rows(&rows),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn aggregates_series_and_kpis() {
        let rows = vec![
            row(&[
                ("Date", text("2024-01-01")),
                ("Visitors", num(100.0)),
                ("Conversions", num(5.0)),
            ]),
            row(&[
                ("date", text("2024-01-02")),
                ("visits", text(" 300 ")),
                ("conv", text("oops")),
            ]),
        ];
        let data = summarize_rows(&rows).unwrap();
        assert_eq!(data.time_series.len(), 2);
        assert_eq!(data.time_series[1].visitors, 300);
        assert_eq!(data.time_series[1].conversions, 0);
        assert_eq!(data.kpis.total_visitors, 400);
        assert_eq!(data.kpis.conversions, 5);
        // 60 - 1.25 = 58.75 -> 58.8
        assert_eq!(data.kpis.bounce_rate, 58.8);
        assert_eq!(data.kpis.avg_session_duration, IMPORTED_SESSION_SECONDS);
    }

    #[test]
    fn first_present_alias_wins_even_when_invalid() {
        let rows = vec![
            row(&[
                ("Date", text("2024-01-01")),
                ("Visitors", text("abc")),
                ("visits", num(50.0)),
            ]),
            row(&[("Date", text("2024-01-02")), ("Visits", num(10.0))]),
        ];
        let data = summarize_rows(&rows).unwrap();
        assert_eq!(data.time_series.len(), 1);
        assert_eq!(data.time_series[0].visitors, 10);
    }

    #[test]
    fn header_aliases_are_case_sensitive() {
        let rows = vec![row(&[("DATE", text("2024-01-01")), ("VISITORS", num(5.0))])];
        assert!(matches!(
            summarize_rows(&rows),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn bounce_rate_is_clamped() {
        let high_conversion = vec![row(&[
            ("Date", text("2024-01-01")),
            ("Visitors", num(10.0)),
            ("Conversions", num(9.0)),
        ])];
        assert_eq!(summarize_rows(&high_conversion).unwrap().kpis.bounce_rate, 10.0);

        let zero_visitors = vec![row(&[("Date", text("2024-01-01")), ("Visitors", num(0.0))])];
        assert_eq!(summarize_rows(&zero_visitors).unwrap().kpis.bounce_rate, 60.0);
    }

    #[test]
    fn pages_accumulate_with_fallbacks() {
        let rows = vec![
            row(&[
                ("Date", text("2024-01-01")),
                ("Visitors", num(100.0)),
                ("Conversions", num(4.0)),
                ("Page", text("/home")),
            ]),
            row(&[
                ("Date", text("2024-01-02")),
                ("Visitors", num(50.0)),
                ("Page", text("/pricing")),
                ("Views", num(70.0)),
                ("PageConv", num(7.0)),
            ]),
            row(&[
                ("Path", text("/home")),
                ("PageViews", num(25.0)),
                ("pageConversions", num(1.0)),
            ]),
        ];
        let data = summarize_rows(&rows).unwrap();
        assert_eq!(
            data.top_pages,
            vec![
                TopPage {
                    path: "/home".into(),
                    views: 125,
                    conversions: 5
                },
                TopPage {
                    path: "/pricing".into(),
                    views: 70,
                    conversions: 7
                },
            ]
        );
        // The page-only row does not reach the time series.
        assert_eq!(data.time_series.len(), 2);
    }

    #[test]
    fn missing_page_column_yields_single_fallback_entry() {
        let rows = vec![
            row(&[
                ("Date", text("2024-01-01")),
                ("Visitors", num(10.0)),
                ("Conversions", num(1.0)),
            ]),
            row(&[
                ("Date", text("2024-01-02")),
                ("Visitors", num(20.0)),
                ("Conversions", num(2.0)),
            ]),
        ];
        let data = summarize_rows(&rows).unwrap();
        assert_eq!(
            data.top_pages,
            vec![TopPage {
                path: FALLBACK_PAGE_PATH.into(),
                views: 30,
                conversions: 3
            }]
        );
    }

    #[test]
    fn dates_are_normalized() {
        assert_eq!(
            date_label(&text("2024-02-03T10:11:12Z")).as_deref(),
            Some("2024-02-03")
        );
        assert_eq!(date_label(&text(" Week 5 ")).as_deref(), Some("Week 5"));
        assert_eq!(date_label(&text("   ")), None);
        assert_eq!(date_label(&num(45_000.0)).as_deref(), Some("2023-03-15"));
        assert_eq!(date_label(&num(0.0)), None);
        assert_eq!(
            date_label(&CellValue::Date(date!(2024 - 12 - 31))).as_deref(),
            Some("2024-12-31")
        );
    }

    #[test]
    fn excel_serials_map_to_calendar_days() {
        assert_eq!(excel_serial_to_date(61.0), Some(date!(1900 - 03 - 01)));
        assert_eq!(excel_serial_to_date(45_292.75), Some(date!(2024 - 01 - 01)));
        assert_eq!(excel_serial_to_date(f64::NAN), None);
        assert_eq!(excel_serial_to_date(2_958_465.0), Some(date!(9999 - 12 - 31)));
        assert_eq!(excel_serial_to_date(2_958_466.0), None);
    }

    #[test]
    fn out_of_range_serial_dates_are_not_valid() {
        assert_eq!(date_label(&num(1e15)), None);
        assert_eq!(date_label(&num(f64::MAX)), None);

        let rows = vec![row(&[("Date", num(2e14)), ("Visitors", num(10.0))])];
        assert!(matches!(
            summarize_rows(&rows),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn numeric_coercion_rules() {
        assert_eq!(numeric(&text("12.5")), Some(12.5));
        assert_eq!(numeric(&text("")), None);
        assert_eq!(numeric(&CellValue::Bool(true)), Some(1.0));
        assert_eq!(numeric(&CellValue::Date(date!(2024 - 01 - 01))), None);
        assert_eq!(to_count(-4.0), 0);
        assert_eq!(to_count(2.5), 3);
    }
}
