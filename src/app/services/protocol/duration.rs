//! Czech duration spellings for protocol tables
//!
//! The dispersion table uses the compact form (`1d 02h 03m 04s`), the
//! averaging blocks spell every component out with Czech plural forms.

use chrono::Duration;

/// Compact duration, omitting leading zero components
///
/// Seconds are always printed; days, hours and minutes only when non-zero.
/// Hours, minutes and seconds are zero-padded to two digits.
pub fn short_czech(duration: Duration) -> String {
    let (days, hours, minutes, seconds) = components(duration);

    let mut formatted = String::new();
    if days > 0 {
        formatted.push_str(&format!("{days}d "));
    }
    if hours > 0 {
        formatted.push_str(&format!("{hours:02}h "));
    }
    if minutes > 0 {
        formatted.push_str(&format!("{minutes:02}m "));
    }
    formatted.push_str(&format!("{seconds:02}s"));

    formatted
}

/// Spelled-out duration with Czech plural forms, all four components
pub fn long_czech(duration: Duration) -> String {
    let (days, hours, minutes, seconds) = components(duration);

    format!(
        "{} {} {} {} {} {} {} {}",
        days,
        plural_form(days, "den", "dny", "dnů"),
        hours,
        plural_form(hours, "hodina", "hodiny", "hodin"),
        minutes,
        plural_form(minutes, "minuta", "minuty", "minut"),
        seconds,
        plural_form(seconds, "vteřina", "vteřiny", "vteřin"),
    )
}

/// Czech plural selection: one, two-to-four, five-and-more
///
/// Zero picks the two-to-four form, matching how the protocol has always
/// rendered empty components.
fn plural_form<'a>(count: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else if count < 5 {
        few
    } else {
        many
    }
}

fn components(duration: Duration) -> (i64, i64, i64, i64) {
    let total_seconds = duration.num_seconds();

    (
        total_seconds / 86_400,
        (total_seconds % 86_400) / 3_600,
        (total_seconds % 3_600) / 60,
        total_seconds % 60,
    )
}
