//! Point identity inference
//!
//! Repeat occupations of one physical point are conventionally named
//! `<point>.<suffix>` or `<point>_<suffix>` in the field. The inferred
//! identity is the leading alphanumeric run of the raw name, so any
//! non-alphanumeric character acts as the suffix boundary.

use std::sync::OnceLock;

use regex::Regex;

/// Leading alphanumeric run of a point name
fn identity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]*").unwrap())
}

/// Infer the physical point name from a raw measurement name
///
/// Returns the prefix of `raw_name` up to the first non-alphanumeric
/// character. A name with no separator is its own point name.
///
/// # Examples
///
/// ```
/// use rtk_processor::app::services::aggregator::point_name;
///
/// assert_eq!(point_name("A.1"), "A");
/// assert_eq!(point_name("B_2"), "B");
/// assert_eq!(point_name("4001"), "4001");
/// ```
pub fn point_name(raw_name: &str) -> &str {
    identity_pattern()
        .find(raw_name)
        .map_or("", |matched| matched.as_str())
}
