use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Derives a url-safe slug from a post title: transliterate to ascii,
/// lowercase, whitespace becomes a hyphen, everything else non-alphanumeric
/// is stripped.
pub fn slugify(title: &str) -> String {
    let ascii = unidecode::unidecode(title);

    let mut slug = String::new();
    let mut prev_hyphen = true;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if c.is_whitespace() && !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Front matter dates are ISO 8601. Naive datetimes and bare dates are
/// accepted and read as UTC.
pub fn parse_datetime(buf: &str) -> Option<DateTime<FixedOffset>> {
    let buf = buf.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(buf) {
        return Some(dt);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(buf, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(naive.and_utc().fixed_offset());
    }

    None
}

pub fn format_datetime(date_time: &DateTime<FixedOffset>) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let time = date_time.format("%H:%M:%S").to_string();
    (date, time)
}
