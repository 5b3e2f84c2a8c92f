// src/domain/dates.rs

use chrono::{Datelike, NaiveDate};

/// Placeholder que o grid usa para "sem data".
pub const EMPTY_DATE: &str = "-";

/// Uma data só conta como preenchida se, depois do trim, não estiver vazia
/// e não for o placeholder `"-"`.
pub fn is_filled(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            !trimmed.is_empty() && trimmed != EMPTY_DATE
        }
        None => false,
    }
}

/// Lê datas com ano explícito: ISO `YYYY-MM-DD` (com ou sem hora depois,
/// ex. `2024-03-01T10:00:00`), `DD/MM/YYYY` e `DD/MM/YY` (ano 20YY).
pub fn parse_full_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    if !is_filled(Some(s)) {
        return None;
    }

    if s.contains('-') {
        let head = s.get(..10)?;
        return NaiveDate::parse_from_str(head, "%Y-%m-%d").ok();
    }

    match s.split('/').collect::<Vec<_>>().as_slice() {
        [day, month, year] => {
            let (day, month) = (parse_part(day, 2)?, parse_part(month, 2)?);
            let year = match year.len() {
                2 => 2000 + parse_part(year, 2)? as i32,
                4 => parse_part(year, 4)? as i32,
                _ => return None,
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    }
}

/// Como `parse_full_date`, mas também aceita `DD/MM`: assume o ano de
/// `today` e, se isso cair mais de 180 dias no futuro, volta um ano.
pub fn parse_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(date) = parse_full_date(value) {
        return Some(date);
    }

    match value.trim().split('/').collect::<Vec<_>>().as_slice() {
        [day, month] => {
            let (day, month) = (parse_part(day, 2)?, parse_part(month, 2)?);
            let candidate = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if (candidate - today).num_days() > 180 {
                NaiveDate::from_ymd_opt(today.year() - 1, month, day)
            } else {
                Some(candidate)
            }
        }
        _ => None,
    }
}

/// Dias corridos de `date` até `today`. Positivo quando a data já passou.
pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days()
}

fn parse_part(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn placeholder_and_blank_are_not_filled() {
        assert!(!is_filled(None));
        assert!(!is_filled(Some("")));
        assert!(!is_filled(Some("   ")));
        assert!(!is_filled(Some(" - ")));
        assert!(is_filled(Some("2024-01-05")));
    }

    #[test]
    fn parses_iso_with_time_suffix() {
        let today = day(2024, 6, 1);
        assert_eq!(parse_date("2024-03-01", today), Some(day(2024, 3, 1)));
        assert_eq!(parse_date("2024-03-01T08:30:00", today), Some(day(2024, 3, 1)));
        assert_eq!(parse_date("2024-3-1", today), None);
    }

    #[test]
    fn parses_brazilian_formats() {
        let today = day(2024, 6, 1);
        assert_eq!(parse_date("05/04/2023", today), Some(day(2023, 4, 5)));
        assert_eq!(parse_date("05/04/23", today), Some(day(2023, 4, 5)));
        assert_eq!(parse_date("31/02/2023", today), None);
        assert_eq!(parse_date("5/4/2023", today), None);
    }

    #[test]
    fn full_date_parser_rejects_day_month() {
        assert_eq!(parse_full_date("20/12"), None);
        assert_eq!(parse_full_date("20/12/2023"), Some(day(2023, 12, 20)));
    }

    #[test]
    fn day_month_far_in_future_rolls_back_a_year() {
        let today = day(2024, 1, 10);
        assert_eq!(parse_date("20/12", today), Some(day(2023, 12, 20)));
        assert_eq!(parse_date("20/02", today), Some(day(2024, 2, 20)));
    }

    #[test]
    fn days_since_counts_whole_days() {
        assert_eq!(days_since(day(2024, 1, 1), day(2024, 1, 31)), 30);
        assert_eq!(days_since(day(2024, 2, 1), day(2024, 1, 31)), -1);
    }
}
