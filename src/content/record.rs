use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Site;
use crate::content::front_matter::RawFrontMatter;
use crate::content::schema::{SchemaError, SchemaResult};
use crate::text_utils::{parse_datetime, slugify};

/// A validated, normalized post record. This is what the site generator
/// consumes; once built it is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    pub layout: String,
    pub title: String,
    pub author: String,
    pub pub_datetime: DateTime<FixedOffset>,
    pub mod_datetime: Option<DateTime<FixedOffset>>,
    pub slug: String,
    pub featured: bool,
    pub draft: bool,
    pub tags: Vec<String>,
    pub description: String,
}

impl ContentRecord {
    /// Validates raw front matter into a record. Pure - the same input
    /// always produces the same record or the same error.
    pub fn from_raw(raw: RawFrontMatter, site: &Site) -> SchemaResult<ContentRecord> {
        let title = required(raw.title, "title")?;
        let pub_raw = required(raw.pub_datetime, "pubDatetime")?;
        let description = required(raw.description, "description")?;
        let layout = required(raw.layout, "layout")?;

        if !site.layouts.iter().any(|known| known == &layout) {
            return Err(SchemaError::UnknownLayout(layout));
        }

        let pub_datetime = match parse_datetime(&pub_raw) {
            Some(dt) => dt,
            None => {
                return Err(SchemaError::InvalidTimestamp {
                    field: "pubDatetime",
                    raw: pub_raw,
                })
            }
        };

        let mod_datetime = match raw.mod_datetime {
            None => None,
            Some(mod_raw) => match parse_datetime(&mod_raw) {
                Some(dt) => Some(dt),
                None => {
                    return Err(SchemaError::InvalidTimestamp {
                        field: "modDatetime",
                        raw: mod_raw,
                    })
                }
            },
        };

        // A post can be modified the instant it is published, but not before
        if let Some(mod_dt) = mod_datetime {
            if mod_dt < pub_datetime {
                return Err(SchemaError::InconsistentDates {
                    pub_datetime: pub_datetime.to_rfc3339(),
                    mod_datetime: mod_dt.to_rfc3339(),
                });
            }
        }

        let slug = match raw.slug {
            Some(slug) => {
                let slug = slug.trim().to_string();
                if !is_url_safe(&slug) {
                    return Err(SchemaError::InvalidSlug(slug));
                }
                slug
            }
            None => {
                let slug = slugify(&title);
                if slug.is_empty() {
                    return Err(SchemaError::InvalidSlug(slug));
                }
                slug
            }
        };

        let author = match raw.author {
            Some(author) if !author.trim().is_empty() => author.trim().to_string(),
            _ => site.default_author.clone(),
        };

        Ok(ContentRecord {
            layout,
            title,
            author,
            pub_datetime,
            mod_datetime,
            slug,
            featured: raw.featured.unwrap_or(false),
            draft: raw.draft.unwrap_or(false),
            tags: normalize_tags(raw.tags),
            description,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> SchemaResult<String> {
    match value {
        Some(s) => {
            let s = s.trim().to_string();
            if s.is_empty() {
                Err(SchemaError::MissingField(name))
            } else {
                Ok(s)
            }
        }
        None => Err(SchemaError::MissingField(name)),
    }
}

fn is_url_safe(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    }
    SLUG_REGEX.is_match(slug)
}

/// Tags are a set: trimmed, deduplicated and sorted, so two posts tagged
/// the same way compare equal regardless of how the author listed them.
fn normalize_tags(tags: Option<Vec<String>>) -> Vec<String> {
    let mut tags: Vec<String> = tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            title: "Thiago Cafe".to_string(),
            base_url: "https://thiagocafe.com".to_string(),
            description: None,
            default_author: "thiago".to_string(),
            layouts: vec!["/Post".to_string(), "../layouts/AboutLayout.astro".to_string()],
        }
    }

    fn minimal_raw() -> RawFrontMatter {
        RawFrontMatter {
            layout: Some("/Post".to_string()),
            title: Some("Hello World".to_string()),
            pub_datetime: Some("2025-01-01T00:00:00Z".to_string()),
            description: Some("x".to_string()),
            ..RawFrontMatter::default()
        }
    }

    #[test]
    fn test_minimal_record() {
        let record = ContentRecord::from_raw(minimal_raw(), &site()).unwrap();
        assert_eq!(record.title, "Hello World");
        assert_eq!(record.description, "x");
        assert_eq!(record.slug, "hello-world");
        assert_eq!(record.author, "thiago");
        assert!(!record.featured);
        assert!(!record.draft);
        assert!(record.tags.is_empty());
        assert!(record.mod_datetime.is_none());
        assert_eq!(record.pub_datetime.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let first = ContentRecord::from_raw(minimal_raw(), &site()).unwrap();
        let second = ContentRecord::from_raw(minimal_raw(), &site()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_required_fields() {
        let raw = RawFrontMatter { title: None, ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("title")));

        let raw = RawFrontMatter { pub_datetime: None, ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("pubDatetime")));

        let raw = RawFrontMatter { description: None, ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("description")));

        let raw = RawFrontMatter { layout: None, ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("layout")));
    }

    #[test]
    fn test_empty_required_field_counts_as_missing() {
        let raw = RawFrontMatter { title: Some("   ".to_string()), ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("title")));
    }

    #[test]
    fn test_unknown_layout() {
        let raw = RawFrontMatter { layout: Some("/Gallery".to_string()), ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        match err {
            SchemaError::UnknownLayout(layout) => assert_eq!(layout, "/Gallery"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_timestamps() {
        let raw = RawFrontMatter {
            pub_datetime: Some("next tuesday".to_string()),
            ..minimal_raw()
        };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        match err {
            SchemaError::InvalidTimestamp { field, raw } => {
                assert_eq!(field, "pubDatetime");
                assert_eq!(raw, "next tuesday");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let raw = RawFrontMatter {
            mod_datetime: Some("2025-99-99".to_string()),
            ..minimal_raw()
        };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidTimestamp { field: "modDatetime", .. }));
    }

    #[test]
    fn test_mod_datetime_must_not_precede_pub_datetime() {
        let raw = RawFrontMatter {
            mod_datetime: Some("2024-12-31T23:59:59Z".to_string()),
            ..minimal_raw()
        };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::InconsistentDates { .. }));

        // Equal timestamps are fine
        let raw = RawFrontMatter {
            mod_datetime: Some("2025-01-01T00:00:00Z".to_string()),
            ..minimal_raw()
        };
        let record = ContentRecord::from_raw(raw, &site()).unwrap();
        assert_eq!(record.mod_datetime, Some(record.pub_datetime));

        let raw = RawFrontMatter {
            mod_datetime: Some("2025-03-01T10:00:00Z".to_string()),
            ..minimal_raw()
        };
        let record = ContentRecord::from_raw(raw, &site()).unwrap();
        assert!(record.mod_datetime.unwrap() > record.pub_datetime);
    }

    #[test]
    fn test_explicit_slug_is_kept_verbatim() {
        let raw = RawFrontMatter {
            slug: Some("my-own-slug".to_string()),
            ..minimal_raw()
        };
        let record = ContentRecord::from_raw(raw, &site()).unwrap();
        assert_eq!(record.slug, "my-own-slug");
    }

    #[test]
    fn test_explicit_slug_must_be_url_safe() {
        for bad in ["Hello World", "UPPER-case", "trailing-", "-leading", "double--hyphen", "über"] {
            let raw = RawFrontMatter {
                slug: Some(bad.to_string()),
                ..minimal_raw()
            };
            let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
            assert!(matches!(err, SchemaError::InvalidSlug(_)), "slug {:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_title_with_no_slug_material() {
        let raw = RawFrontMatter { title: Some("!!!".to_string()), ..minimal_raw() };
        let err = ContentRecord::from_raw(raw, &site()).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidSlug(_)));
    }

    #[test]
    fn test_tags_are_normalized() {
        let raw = RawFrontMatter {
            tags: Some(vec![
                "react".to_string(),
                "  testing ".to_string(),
                "react".to_string(),
                "".to_string(),
            ]),
            ..minimal_raw()
        };
        let record = ContentRecord::from_raw(raw, &site()).unwrap();
        assert_eq!(record.tags, vec!["react".to_string(), "testing".to_string()]);
    }

    #[test]
    fn test_explicit_author_wins_over_default() {
        let raw = RawFrontMatter {
            author: Some("Guest Writer".to_string()),
            ..minimal_raw()
        };
        let record = ContentRecord::from_raw(raw, &site()).unwrap();
        assert_eq!(record.author, "Guest Writer");
    }
}
