//! Calendar-day keys for the score store

use chrono::{Days, Local, NaiveDate};

/// Key of one calendar day's bucket in the store (`YYYYMMDD`)
pub type DateKey = String;

const DATE_KEY_FORMAT: &str = "%Y%m%d";
const DATE_LABEL_FORMAT: &str = "%A, %b %d";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Store key for a day, also used as the `dates=` query parameter
pub fn date_key(date: NaiveDate) -> DateKey {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Human readable label shown by the front end, e.g. "Sunday, Oct 18"
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// Inclusive window of days around `center`, oldest first.
///
/// Days that fall outside chrono's supported range are skipped.
pub fn date_window(center: NaiveDate, days_back: u32, days_forward: u32) -> Vec<NaiveDate> {
    let start = center
        .checked_sub_days(Days::new(u64::from(days_back)))
        .unwrap_or(center);
    let end = center
        .checked_add_days(Days::new(u64::from(days_forward)))
        .unwrap_or(center);

    start.iter_days().take_while(|d| *d <= end).collect()
}
