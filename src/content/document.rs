use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Site;
use crate::content::front_matter::parse_front_matter;
use crate::content::record::ContentRecord;
use crate::content::schema::SchemaResult;

/// A validated record together with where it came from and the markdown
/// that follows the front matter. The body is passed through untouched;
/// rendering is the site generator's job.
pub struct Document {
    pub record: ContentRecord,
    pub source: PathBuf,
    pub body: String,
}

impl Document {
    pub fn from_file(path: &Path, site: &Site) -> SchemaResult<Document> {
        let raw_content = fs::read_to_string(path)?;
        Self::from_string(path, &raw_content, site)
    }

    pub fn from_string(path: &Path, content: &str, site: &Site) -> SchemaResult<Document> {
        let (raw, body) = parse_front_matter(content)?;
        let record = ContentRecord::from_raw(raw, site)?;

        Ok(Document {
            record,
            source: path.to_path_buf(),
            body,
        })
    }
}
