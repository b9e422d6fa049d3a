//! Date and time formatting shared by the views.
//!
//! The API speaks ISO dates (`2025-03-04`) and 24-hour times (`14:30` or
//! `14:30:00`); the views show `Mar 4, 2025` and `02:30 PM`. Values that do
//! not parse are shown as received.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc};

const CLOCK_12H: &str = "%I:%M %p";

/// `"02:30 PM"` to `"14:30"`. `None` if the input is not a 12-hour clock time.
pub fn to_24_hour(time: &str) -> Option<String> {
    NaiveTime::parse_from_str(time.trim(), CLOCK_12H)
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}

fn parse_24h(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// `"14:30"` or `"14:30:00"` to `"02:30 PM"`.
pub fn format_time_12h(time: &str) -> String {
    parse_24h(time)
        .map(|t| t.format(CLOCK_12H).to_string())
        .unwrap_or_else(|| time.to_string())
}

/// Length of a shift in hours; zero when `end` is not after `start`.
pub fn shift_hours(start: &str, end: &str) -> f64 {
    match (parse_24h(start), parse_24h(end)) {
        (Some(s), Some(e)) if e > s => (e - s).num_minutes() as f64 / 60.0,
        _ => 0.0,
    }
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// `"2025-03-04"` to `"Mar 4, 2025"`.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `"2025-03-04"` to `"Tuesday, March 4, 2025"`.
pub fn format_date_long(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Local wall-clock stamp for generated reports, e.g. `Mar 4, 2025 02:30 PM`.
pub fn generated_at() -> String {
    Local::now().format("%b %-d, %Y %I:%M %p").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Earliest date a client may book: the day after `today`, as `YYYY-MM-DD`.
pub fn min_booking_date(today: NaiveDate) -> String {
    today
        .succ_opt()
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// One page of a Sunday-first month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(self) -> Self {
        match self.month {
            1 => Self { year: self.year - 1, month: 12 },
            m => Self { year: self.year, month: m - 1 },
        }
    }

    pub fn next(self) -> Self {
        match self.month {
            12 => Self { year: self.year + 1, month: 1 },
            m => Self { year: self.year, month: m + 1 },
        }
    }

    fn first(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// `"March 2025"`.
    pub fn title(&self) -> String {
        self.first()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Empty cells before the 1st.
    pub fn leading_blanks(&self) -> u32 {
        self.first().map_or(0, |d| d.weekday().num_days_from_sunday())
    }

    pub fn days(&self) -> u32 {
        let next = self.next();
        match (self.first(), next.first()) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 0,
        }
    }

    /// ISO date of `day` in this month.
    pub fn iso(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }
}

/// `"3 hours ago"` style label for an RFC 3339 timestamp.
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let secs = (now - then.with_timezone(&Utc)).num_seconds().max(0);
    let (value, unit) = match secs {
        s if s < 60 => return "Just now".to_string(),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s => (s / 86_400, "day"),
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour("02:30 PM").as_deref(), Some("14:30"));
        assert_eq!(to_24_hour("12:00 AM").as_deref(), Some("00:00"));
        assert_eq!(to_24_hour("12:00 PM").as_deref(), Some("12:00"));
        assert_eq!(to_24_hour("08:00 AM").as_deref(), Some("08:00"));
        assert_eq!(to_24_hour("05:00 PM").as_deref(), Some("17:00"));
        assert_eq!(to_24_hour("25:00"), None);
    }

    #[test]
    fn test_format_time_12h() {
        assert_eq!(format_time_12h("14:30"), "02:30 PM");
        assert_eq!(format_time_12h("09:05:00"), "09:05 AM");
        assert_eq!(format_time_12h("soon"), "soon");
    }

    #[test]
    fn test_shift_hours() {
        assert_eq!(shift_hours("08:00", "17:00"), 9.0);
        assert_eq!(shift_hours("08:30:00", "12:00"), 3.5);
        assert_eq!(shift_hours("17:00", "08:00"), 0.0);
        assert_eq!(shift_hours("", "12:00"), 0.0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-04"), "Mar 4, 2025");
        assert_eq!(format_date_long("2025-03-04"), "Tuesday, March 4, 2025");
        assert_eq!(format_date("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_min_booking_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(min_booking_date(today), "2025-01-01");
    }

    #[test]
    fn test_month_view() {
        let march = MonthView { year: 2025, month: 3 };
        assert_eq!(march.title(), "March 2025");
        assert_eq!(march.leading_blanks(), 6);
        assert_eq!(march.days(), 31);
        assert_eq!(march.iso(4), "2025-03-04");

        let feb_leap = MonthView { year: 2024, month: 2 };
        assert_eq!(feb_leap.days(), 29);

        let dec = MonthView { year: 2024, month: 12 };
        assert_eq!(dec.next(), MonthView { year: 2025, month: 1 });
        assert_eq!(dec.next().previous(), dec);
        assert_eq!(
            MonthView::containing(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
            MonthView { year: 2025, month: 6 }
        );
    }

    #[test]
    fn test_time_ago() {
        let now = DateTime::parse_from_rfc3339("2025-01-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(time_ago("2025-01-02T11:59:30Z", now), "Just now");
        assert_eq!(time_ago("2025-01-02T11:00:00Z", now), "1 hour ago");
        assert_eq!(time_ago("2025-01-02T09:15:00+00:00", now), "2 hours ago");
        assert_eq!(time_ago("2024-12-30T12:00:00Z", now), "3 days ago");
        assert_eq!(time_ago("not a date", now), "not a date");
    }
}
