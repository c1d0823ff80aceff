//! Template filters: Java-style date formatting and empty-value
//! defaulting.
//!
//! The legacy placeholder dialect carries Java date patterns
//! (`yyyy-MM-dd`, `MMMM d, yyyy`), so the `date` filter implements the
//! token subset those templates actually use. Unknown alphabetic tokens
//! pass through verbatim; `'...'` quotes literal text and `''` is an
//! escaped quote.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use minijinja::Environment;
use minijinja::value::Value;

/// Register the `date` and `default` filters on a template
/// environment.
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("date", date_filter);
    env.add_filter("default", default_filter);
}

/// `{{ value | date('yyyy-MM-dd') }}`: format an ISO-8601 timestamp.
///
/// Empty input stays empty; unparsable input is returned unchanged.
fn date_filter(value: Value, pattern: Option<String>) -> Value {
    if value.is_undefined() || value.is_none() {
        return Value::from("");
    }
    let Some(text) = value.as_str() else {
        return value;
    };
    let pattern = pattern.unwrap_or_else(|| "YYYY-MM-DD".to_owned());
    Value::from(format_date(text, &pattern))
}

/// `{{ value | default('fallback') }}`: substitute when the value is
/// absent or empty.
fn default_filter(value: Value, fallback: Option<Value>) -> Value {
    let fallback = fallback.unwrap_or_else(|| Value::from(""));
    if value.is_undefined() || value.is_none() {
        return fallback;
    }
    if value.as_str().is_some_and(str::is_empty) {
        return fallback;
    }
    value
}

/// Format an ISO-8601 string with a Java-style date pattern.
pub fn format_date(value: &str, pattern: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_iso(value) {
        Some(dt) => format_java_date(&dt, pattern),
        None => value.to_owned(),
    }
}

/// Parse ISO-8601 in its common shapes: offset or `Z` suffixed,
/// naive datetime, or bare date. The wall-clock fields are kept as
/// written; no timezone conversion happens.
fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

fn format_java_date(dt: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    let mut in_literal = false;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            in_literal = !in_literal;
            i += 1;
            continue;
        }

        if in_literal {
            out.push(ch);
            i += 1;
            continue;
        }

        if ch.is_ascii_alphabetic() {
            let mut j = i;
            while j < chars.len() && chars[j] == ch {
                j += 1;
            }
            out.push_str(&format_token(dt, ch, j - i));
            i = j;
            continue;
        }

        out.push(ch);
        i += 1;
    }

    out
}

fn format_token(dt: &NaiveDateTime, ch: char, length: usize) -> String {
    match ch {
        'y' | 'Y' => {
            if length == 2 {
                format!("{:02}", dt.year() % 100)
            } else {
                format!("{:04}", dt.year())
            }
        }
        'M' => match length {
            1 => dt.month().to_string(),
            2 => format!("{:02}", dt.month()),
            3 => dt.format("%b").to_string(),
            _ => dt.format("%B").to_string(),
        },
        'd' | 'D' => {
            if length == 2 {
                format!("{:02}", dt.day())
            } else {
                dt.day().to_string()
            }
        }
        'H' => {
            if length == 2 {
                format!("{:02}", dt.hour())
            } else {
                dt.hour().to_string()
            }
        }
        'h' => {
            let hour = match dt.hour() % 12 {
                0 => 12,
                h => h,
            };
            if length == 2 {
                format!("{hour:02}")
            } else {
                hour.to_string()
            }
        }
        'm' => {
            if length == 2 {
                format!("{:02}", dt.minute())
            } else {
                dt.minute().to_string()
            }
        }
        's' => {
            if length == 2 {
                format!("{:02}", dt.second())
            } else {
                dt.second().to_string()
            }
        }
        'a' => {
            if dt.hour() < 12 {
                "AM".to_owned()
            } else {
                "PM".to_owned()
            }
        }
        _ => std::iter::repeat_n(ch, length).collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const REFERENCE: &str = "2025-01-05T04:30:00Z";

    #[test]
    fn iso_date_pattern() {
        assert_eq!(format_date(REFERENCE, "yyyy-MM-dd"), "2025-01-05");
    }

    #[test]
    fn long_month_pattern() {
        assert_eq!(format_date(REFERENCE, "MMMM d, yyyy"), "January 5, 2025");
    }

    #[test]
    fn abbreviated_month_and_two_digit_year() {
        assert_eq!(format_date(REFERENCE, "MMM d ''yy"), "Jan 5 '25");
    }

    #[test]
    fn time_tokens() {
        assert_eq!(format_date(REFERENCE, "HH:mm:ss"), "04:30:00");
        assert_eq!(format_date(REFERENCE, "h:mm a"), "4:30 AM");
        assert_eq!(format_date("2025-01-05T16:05:09Z", "h:mm a"), "4:05 PM");
        assert_eq!(format_date("2025-01-05T12:00:00Z", "h a"), "12 PM");
        assert_eq!(format_date("2025-01-05T00:00:00Z", "h a"), "12 AM");
    }

    #[test]
    fn quoted_literals_pass_through() {
        assert_eq!(format_date(REFERENCE, "'on' yyyy-MM-dd"), "on 2025-01-05");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(format_date(REFERENCE, "yyyy QQ"), "2025 QQ");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_date("", "yyyy"), "");
    }

    #[test]
    fn unparsable_input_returned_unchanged() {
        assert_eq!(format_date("not a date", "yyyy"), "not a date");
    }

    #[test]
    fn bare_date_input() {
        assert_eq!(format_date("2025-01-05", "dd.MM.yyyy"), "05.01.2025");
    }

    #[test]
    fn naive_datetime_input() {
        assert_eq!(format_date("2025-01-05T04:30:00", "yyyy-MM-dd HH:mm"), "2025-01-05 04:30");
    }

    #[test]
    fn offset_input_keeps_wall_clock() {
        assert_eq!(format_date("2025-01-05T04:30:00+02:00", "HH:mm"), "04:30");
    }

    #[test]
    fn filters_work_in_templates() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let rendered = env
            .render_str(
                "{{ created | date('yyyy-MM-dd') | default('') }}|{{ missing | default('n/a') }}",
                minijinja::context! { created => REFERENCE },
            )
            .expect("render succeeds");
        assert_eq!(rendered, "2025-01-05|n/a");
    }

    #[test]
    fn default_filter_replaces_empty_string() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let rendered = env
            .render_str("{{ value | default('fallback') }}", minijinja::context! { value => "" })
            .expect("render succeeds");
        assert_eq!(rendered, "fallback");
    }
}
