//! End-to-end workbook import using sheets built with `rust_xlsxwriter`.

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};
use ui::data::import::{import_workbook, ImportError, FALLBACK_PAGE_PATH, IMPORTED_SESSION_SECONDS};

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

fn workbook(rows: &[Vec<Cell<'_>>]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => sheet.write_string(r as u32, c as u16, *text)?,
                Cell::Number(n) => sheet.write_number(r as u32, c as u16, *n)?,
            };
        }
    }
    workbook.save_to_buffer()
}

fn header(names: &[&'static str]) -> Vec<Cell<'static>> {
    names.iter().map(|n| Cell::Text(*n)).collect()
}

#[test]
fn traffic_sheet_with_pages() {
    use Cell::{Number as N, Text as T};

    let bytes = workbook(&[
        header(&["Date", "Visitors", "Conversions", "Page", "Views", "PageConv"]),
        vec![T("2025-03-01"), N(1000.0), N(40.0), T("/home"), N(600.0), N(20.0)],
        vec![T("2025-03-02"), N(1200.0), N(60.0), T("/pricing"), N(300.0), N(15.0)],
        vec![T("2025-03-03"), N(800.0), N(20.0), T("/home"), N(400.0), N(10.0)],
    ])
    .unwrap();

    let data = import_workbook(&bytes).unwrap();
    let dates: Vec<&str> = data.time_series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, ["2025-03-01", "2025-03-02", "2025-03-03"]);

    assert_eq!(data.kpis.total_visitors, 3000);
    assert_eq!(data.kpis.conversions, 120);
    // 4% conversion → 60 - 4 = 56.
    assert_eq!(data.kpis.bounce_rate, 56.0);
    assert_eq!(data.kpis.avg_session_duration, IMPORTED_SESSION_SECONDS);

    assert_eq!(data.top_pages.len(), 2);
    assert_eq!(data.top_pages[0].path, "/home");
    assert_eq!(data.top_pages[0].views, 1000);
    assert_eq!(data.top_pages[0].conversions, 30);
    assert_eq!(data.top_pages[1].path, "/pricing");
    assert_eq!(data.top_pages[1].views, 300);
}

#[test]
fn lowercase_aliases_and_no_pages() {
    use Cell::{Number as N, Text as T};

    let bytes = workbook(&[
        header(&["date", "visits", "conv"]),
        vec![T("Mon"), N(100.0), N(5.0)],
        vec![T("Tue"), T("150"), T("n/a")],
    ])
    .unwrap();

    let data = import_workbook(&bytes).unwrap();
    assert_eq!(data.time_series.len(), 2);
    assert_eq!(data.time_series[1].visitors, 150);
    assert_eq!(data.time_series[1].conversions, 0);

    assert_eq!(data.top_pages.len(), 1);
    assert_eq!(data.top_pages[0].path, FALLBACK_PAGE_PATH);
    assert_eq!(data.top_pages[0].views, 250);
    assert_eq!(data.top_pages[0].conversions, 5);
}

#[test]
fn excel_date_cells_become_iso_dates() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    sheet.write_string(0, 0, "Date").unwrap();
    sheet.write_string(0, 1, "Visitors").unwrap();
    let day = ExcelDateTime::from_ymd(2024, 12, 31).unwrap();
    sheet
        .write_datetime_with_format(1, 0, &day, &date_format)
        .unwrap();
    sheet.write_number(1, 1, 42.0).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let data = import_workbook(&bytes).unwrap();
    assert_eq!(data.time_series[0].date, "2024-12-31");
    assert_eq!(data.time_series[0].visitors, 42);
}

#[test]
fn rows_without_visitors_are_skipped() {
    use Cell::{Number as N, Text as T};

    let bytes = workbook(&[
        header(&["Date", "Visitors"]),
        vec![T("2025-01-01"), T("lots")],
        vec![T("2025-01-02"), N(10.0)],
    ])
    .unwrap();

    let data = import_workbook(&bytes).unwrap();
    assert_eq!(data.time_series.len(), 1);
    assert_eq!(data.time_series[0].date, "2025-01-02");
}

#[test]
fn header_only_sheet_is_empty_input() {
    let bytes = workbook(&[header(&["Date", "Visitors"])]).unwrap();
    assert!(matches!(import_workbook(&bytes), Err(ImportError::EmptyInput)));
}

#[test]
fn blank_sheet_is_empty_input() {
    let bytes = workbook(&[]).unwrap();
    assert!(matches!(import_workbook(&bytes), Err(ImportError::EmptyInput)));
}

#[test]
fn unrecognised_columns_yield_no_valid_rows() {
    use Cell::{Number as N, Text as T};

    let bytes = workbook(&[
        header(&["Day", "Sessions"]),
        vec![T("2025-01-01"), N(10.0)],
    ])
    .unwrap();
    let err = import_workbook(&bytes).unwrap_err();
    assert!(matches!(err, ImportError::NoValidRows));
    assert!(err.to_string().contains("Date, Visitors"));
}

#[test]
fn garbage_bytes_are_a_workbook_error() {
    let err = import_workbook(b"definitely not a spreadsheet").unwrap_err();
    assert!(matches!(err, ImportError::Workbook(_)), "{err:?}");
}
