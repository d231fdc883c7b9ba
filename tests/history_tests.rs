use chart_resolve::HistoryPoint;
use chart_resolve::resolve::{normalize_history, parse_report_date};
use chrono::NaiveDate;

#[test]
fn normalization_sorts_ascending_by_date() {
    let points = vec![
        HistoryPoint::new("01.03.2023", 5.0),
        HistoryPoint::new("01.01.2023", 3.0),
        HistoryPoint::new("01.02.2023", 4.0),
    ];

    let values: Vec<f64> = normalize_history(&points)
        .into_iter()
        .map(|sample| sample.value)
        .collect();

    assert_eq!(values, [3.0, 4.0, 5.0]);
}

#[test]
fn equal_dates_keep_their_relative_order() {
    let points = vec![
        HistoryPoint::new("01.01.2023", 1.0),
        HistoryPoint::new("01.01.2023", 2.0),
        HistoryPoint::new("01.01.2023", 3.0),
    ];

    let values: Vec<f64> = normalize_history(&points)
        .into_iter()
        .map(|sample| sample.value)
        .collect();

    assert_eq!(values, [1.0, 2.0, 3.0]);
}

#[test]
fn points_without_value_are_dropped() {
    let points = vec![
        HistoryPoint::new("01.01.2023", 3.0),
        HistoryPoint {
            date: "01.02.2023".to_owned(),
            value: None,
            cut_off_area: None,
        },
        HistoryPoint::new("01.03.2023", 5.0),
    ];

    assert_eq!(normalize_history(&points).len(), points.len() - 1);
}

#[test]
fn points_with_unparsable_dates_are_dropped() {
    let points = vec![
        HistoryPoint::new("01.01.2023", 3.0),
        HistoryPoint::new("year of the dragon", 4.0),
        HistoryPoint::new("31.02.2023", 5.0),
    ];

    let normalized = normalize_history(&points);

    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].value, 3.0);
}

#[test]
fn labels_use_one_decimal_and_band_suffix() {
    let points = vec![
        HistoryPoint::new("01.01.2023", 3.0),
        HistoryPoint::new("01.02.2023", 4.5).with_band("grenzwertig"),
    ];

    let normalized = normalize_history(&points);

    assert_eq!(normalized[0].label, "3.0");
    assert_eq!(normalized[1].label, "4.5 (grenzwertig)");
}

#[test]
fn report_dates_parse_day_month_year() {
    assert_eq!(
        parse_report_date("07.03.2023"),
        NaiveDate::from_ymd_opt(2023, 3, 7)
    );
    assert_eq!(
        parse_report_date("1.3.2023"),
        NaiveDate::from_ymd_opt(2023, 3, 1)
    );
    assert_eq!(parse_report_date("2023-03-07"), None);
    assert_eq!(parse_report_date("31.02.2023"), None);
}
