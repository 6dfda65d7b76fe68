//! Display timestamps and message ids.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour wall-clock time as `hh:mm AM/PM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let period = if hours % 24 < 12 { "AM" } else { "PM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour:02}:{minutes:02} {period}")
}

/// Current local time formatted for a message row.
///
/// Off the browser there is no local timezone source, so UTC is used.
pub fn now_display() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let minute_of_day = u32::try_from((secs / 60) % (24 * 60)).unwrap_or(0);
        format_clock(minute_of_day / 60, minute_of_day % 60)
    }
}

/// Fresh identifier for a message created in this widget.
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
