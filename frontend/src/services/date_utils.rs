use chrono::NaiveDate;
use portal_shared::format_date;

/// Today's date according to the browser's local clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Button text for a picker: the formatted date, or the placeholder when empty
pub fn display_text(selected: Option<NaiveDate>, placeholder: Option<&str>) -> String {
    match selected {
        Some(date) => format_date(date),
        None => placeholder.unwrap_or("Select a date").to_string(),
    }
}
