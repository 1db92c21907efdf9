//! Locale-aware display labels for chart axes and window headings.
//!
//! The app supports exactly two display languages: Finnish when the runtime
//! language tag is `fi`, and US English for everything else. This is a
//! deliberate two-way choice rather than full locale support, so the tables
//! below are all that is needed.

use crate::interval::TimeInterval;
use crate::series::MetricSeries;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Display language for chart labels and window headings.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChartLocale {
    English,
    Finnish,
}

impl ChartLocale {
    /// Pick the display language from a BCP 47 language tag.
    ///
    /// Finnish if and only if the primary subtag is `fi`; US English
    /// otherwise.
    pub fn detect(lang_tag: &str) -> ChartLocale {
        let primary = lang_tag.split(['-', '_']).next().unwrap_or("");
        if primary.eq_ignore_ascii_case("fi") {
            ChartLocale::Finnish
        } else {
            ChartLocale::English
        }
    }
}

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_FI: [&str; 7] = [
    "maanantai",
    "tiistai",
    "keskiviikko",
    "torstai",
    "perjantai",
    "lauantai",
    "sunnuntai",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_FI: [&str; 12] = [
    "tammikuu",
    "helmikuu",
    "maaliskuu",
    "huhtikuu",
    "toukokuu",
    "kesäkuu",
    "heinäkuu",
    "elokuu",
    "syyskuu",
    "lokakuu",
    "marraskuu",
    "joulukuu",
];

// Conventional Finnish month stems, used for the fetch timestamp.
const MONTHS_FI_SHORT: [&str; 12] = [
    "tammi", "helmi", "maalis", "huhti", "touko", "kesä", "heinä", "elo", "syys", "loka",
    "marras", "joulu",
];

/// Full weekday name in the given language.
pub fn weekday_name(weekday: Weekday, locale: ChartLocale) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match locale {
        ChartLocale::English => WEEKDAYS_EN[idx],
        ChartLocale::Finnish => WEEKDAYS_FI[idx],
    }
}

/// Two-character weekday abbreviation ("Mo", "Tu" / "ma", "ti").
pub fn weekday_abbrev(weekday: Weekday, locale: ChartLocale) -> String {
    weekday_name(weekday, locale).chars().take(2).collect()
}

/// Full month name; `month` is 1-based.
pub fn month_name(month: u32, locale: ChartLocale) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match locale {
        ChartLocale::English => MONTHS_EN[idx],
        ChartLocale::Finnish => MONTHS_FI[idx],
    }
}

fn month_abbrev(month: u32, locale: ChartLocale) -> String {
    match locale {
        ChartLocale::English => month_name(month, locale).chars().take(3).collect(),
        ChartLocale::Finnish => MONTHS_FI_SHORT[(month.clamp(1, 12) - 1) as usize].to_string(),
    }
}

/// Detect a `YYYY-MM-DD` axis label.
fn parse_iso_date(label: &str) -> Option<NaiveDate> {
    if label.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()
}

fn format_label(label: &str, locale: ChartLocale) -> String {
    match parse_iso_date(label) {
        Some(date) => weekday_abbrev(date.weekday(), locale),
        None => label.to_string(),
    }
}

/// Replace `YYYY-MM-DD` keys with two-character weekday abbreviations.
///
/// Pure and total: keys that do not look like dates (hour indices, month
/// names) pass through unchanged, and the output always has the same length
/// and order as the input series.
pub fn format_labels(series: &MetricSeries, locale: ChartLocale) -> Vec<String> {
    series.labels().map(|label| format_label(label, locale)).collect()
}

/// Caption for an interval selector button.
pub fn interval_button_label(interval: TimeInterval, locale: ChartLocale) -> &'static str {
    match (interval, locale) {
        (TimeInterval::Months, ChartLocale::English) => "Months",
        (TimeInterval::Months, ChartLocale::Finnish) => "Kuukaudet",
        (TimeInterval::Weeks, ChartLocale::English) => "Weeks",
        (TimeInterval::Weeks, ChartLocale::Finnish) => "Viikot",
        (TimeInterval::Days, ChartLocale::English) => "Days",
        (TimeInterval::Days, ChartLocale::Finnish) => "Päivät",
        (TimeInterval::Hours, ChartLocale::English) => "Hours",
        (TimeInterval::Hours, ChartLocale::Finnish) => "Tunnit",
    }
}

/// Caption for a production-source selector button.
pub fn source_button_label(
    source: crate::interval::ProductionSource,
    locale: ChartLocale,
) -> &'static str {
    use crate::interval::ProductionSource;
    match (source, locale) {
        (ProductionSource::Solar, ChartLocale::English) => "Solar",
        (ProductionSource::Solar, ChartLocale::Finnish) => "Aurinko",
        (ProductionSource::Wind, ChartLocale::English) => "Wind",
        (ProductionSource::Wind, ChartLocale::Finnish) => "Tuuli",
        (ProductionSource::Total, ChartLocale::English) => "Total",
        (ProductionSource::Total, ChartLocale::Finnish) => "Yhteensä",
    }
}

fn day_and_month(date: NaiveDate, locale: ChartLocale) -> String {
    match locale {
        ChartLocale::English => format!("{}/{}", date.day(), date.month()),
        ChartLocale::Finnish => format!("{}.{}.", date.day(), date.month()),
    }
}

/// Heading shown between the paging arrows for the current window.
pub fn window_label(interval: TimeInterval, reference: NaiveDate, locale: ChartLocale) -> String {
    match interval {
        TimeInterval::Days => {
            let end = reference + Days::new(6);
            format!(
                "{} - {}",
                day_and_month(reference, locale),
                day_and_month(end, locale)
            )
        }
        TimeInterval::Hours => {
            format!(
                "{} ({})",
                weekday_name(reference.weekday(), locale),
                day_and_month(reference, locale)
            )
        }
        TimeInterval::Weeks => {
            format!("{} {}", month_name(reference.month(), locale), reference.year())
        }
        TimeInterval::Months => reference.year().to_string(),
    }
}

/// "Last updated" stamp for the temperature panel.
///
/// Finnish: `06. touko 2024 14:30`. English: `May 06 2024 2:30PM`.
pub fn format_fetch_timestamp(at: NaiveDateTime, locale: ChartLocale) -> String {
    let date = at.date();
    match locale {
        ChartLocale::Finnish => format!(
            "{:02}. {} {} {:02}:{:02}",
            date.day(),
            month_abbrev(date.month(), locale),
            date.year(),
            at.hour(),
            at.minute()
        ),
        ChartLocale::English => {
            let (is_pm, hour) = at.hour12();
            format!(
                "{} {:02} {} {}:{:02}{}",
                month_abbrev(date.month(), locale),
                date.day(),
                date.year(),
                hour,
                at.minute(),
                if is_pm { "PM" } else { "AM" }
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_of(labels: &[&str]) -> MetricSeries {
        MetricSeries::from_pairs(labels.iter().map(|l| (l.to_string(), Some(1.0))).collect())
    }

    #[test]
    fn test_detect_locale_two_way_choice() {
        assert_eq!(ChartLocale::detect("fi"), ChartLocale::Finnish);
        assert_eq!(ChartLocale::detect("fi-FI"), ChartLocale::Finnish);
        assert_eq!(ChartLocale::detect("en-US"), ChartLocale::English);
        // Not the full system locale: Swedish falls back to English
        assert_eq!(ChartLocale::detect("sv-FI"), ChartLocale::English);
        assert_eq!(ChartLocale::detect(""), ChartLocale::English);
    }

    #[test]
    fn test_date_labels_become_weekday_abbrevs() {
        // 2024-05-06 is a Monday
        let series = series_of(&["2024-05-06", "2024-05-07", "2024-05-08"]);
        assert_eq!(
            format_labels(&series, ChartLocale::English),
            vec!["Mo", "Tu", "We"]
        );
        assert_eq!(
            format_labels(&series, ChartLocale::Finnish),
            vec!["ma", "ti", "ke"]
        );
    }

    #[test]
    fn test_non_date_labels_pass_through() {
        let series = MetricSeries::from_pairs(vec![("13".to_string(), Some(4.2))]);
        assert_eq!(format_labels(&series, ChartLocale::English), vec!["13"]);
        let months = series_of(&["January", "February"]);
        assert_eq!(
            format_labels(&months, ChartLocale::Finnish),
            vec!["January", "February"]
        );
    }

    #[test]
    fn test_format_labels_preserves_length_and_order() {
        let series = series_of(&["2024-05-06", "13", "2024-05-08", "x"]);
        let formatted = format_labels(&series, ChartLocale::English);
        assert_eq!(formatted.len(), series.len());
        assert_eq!(formatted, vec!["Mo", "13", "We", "x"]);
    }

    #[test]
    fn test_window_label_per_interval() {
        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(
            window_label(TimeInterval::Days, monday, ChartLocale::English),
            "6/5 - 12/5"
        );
        assert_eq!(
            window_label(TimeInterval::Days, monday, ChartLocale::Finnish),
            "6.5. - 12.5."
        );
        assert_eq!(
            window_label(TimeInterval::Hours, monday, ChartLocale::English),
            "Monday (6/5)"
        );
        assert_eq!(
            window_label(TimeInterval::Weeks, monday, ChartLocale::Finnish),
            "toukokuu 2024"
        );
        assert_eq!(
            window_label(TimeInterval::Months, monday, ChartLocale::English),
            "2024"
        );
    }

    #[test]
    fn test_fetch_timestamp_formats() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            format_fetch_timestamp(at, ChartLocale::Finnish),
            "06. touko 2024 14:30"
        );
        assert_eq!(
            format_fetch_timestamp(at, ChartLocale::English),
            "May 06 2024 2:30PM"
        );
    }
}
