use serde::Deserialize;

use crate::content::schema::{SchemaError, SchemaResult};

/// Front matter exactly as the author wrote it. Every field is optional
/// here; requiredness and shape are the validator's business, so that a
/// missing `title` is reported as a missing title and not as a yaml error.
///
/// Datetime fields stay raw strings for the same reason.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawFrontMatter {
    pub layout: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "pubDatetime")]
    pub pub_datetime: Option<String>,
    #[serde(rename = "modDatetime")]
    pub mod_datetime: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    pub draft: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Example of post
/// ---
/// layout: ../layouts/PostDetails.astro
/// title: How to write a code review
/// pubDatetime: 2022-04-02T12:05:00Z
/// description: Notes from two decades of reviewing other people's code.
/// tags:
///   - engineering
/// ---
///
/// Body starts here.
pub fn parse_front_matter(content: &str) -> SchemaResult<(RawFrontMatter, String)> {
    let (block, body) = split_front_matter(content)?;

    let raw = if block.trim().is_empty() {
        RawFrontMatter::default()
    } else {
        match serde_yaml::from_str::<RawFrontMatter>(&block) {
            Ok(raw) => raw,
            Err(e) => return Err(SchemaError::FrontMatter(e.to_string())),
        }
    };

    Ok((raw, body))
}

/// Splits a document into its front matter block and body. Blank lines
/// before the opening delimiter are ok.
fn split_front_matter(content: &str) -> SchemaResult<(String, String)> {
    let mut lines = content.lines();
    let mut maybe_line = lines.next();

    loop {
        if let Some(line) = maybe_line {
            let line = line.trim();

            // Empty lines are ok
            if line.is_empty() {
                maybe_line = lines.next();
                continue;
            }

            if line == "---" {
                break;
            }
            return Err(SchemaError::MissingFrontMatter);
        } else {
            return Err(SchemaError::MissingFrontMatter);
        }
    }

    let mut block = String::new();
    let mut terminated = false;
    for line in lines.by_ref() {
        if line.trim() == "---" {
            terminated = true;
            break;
        }
        block.push_str(line);
        block.push('\n');
    }

    if !terminated {
        return Err(SchemaError::UnterminatedFrontMatter);
    }

    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }

    Ok((block, body))
}
