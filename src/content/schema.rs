use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Everything that can disqualify a document from the collection. All of
/// these are fatal to the document and surfaced to the author; none are
/// silently recovered.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document does not open with a front matter block
    #[error("front matter block is missing")]
    MissingFrontMatter,

    /// The opening `---` has no matching closing delimiter
    #[error("front matter block is not terminated")]
    UnterminatedFrontMatter,

    /// The block is present but its key/value data does not parse
    #[error("invalid front matter: {0}")]
    FrontMatter(String),

    /// A required field is absent or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A datetime field that does not parse as ISO 8601
    #[error("field `{field}` is not a valid timestamp: `{raw}`")]
    InvalidTimestamp { field: &'static str, raw: String },

    /// modDatetime earlier than pubDatetime
    #[error("`modDatetime` ({mod_datetime}) is earlier than `pubDatetime` ({pub_datetime})")]
    InconsistentDates {
        pub_datetime: String,
        mod_datetime: String,
    },

    /// The referenced layout is not registered in the site configuration
    #[error("layout `{0}` is not a known layout")]
    UnknownLayout(String),

    /// An explicit slug that is not url-safe
    #[error("slug `{0}` is not url-safe")]
    InvalidSlug(String),

    /// Two published documents resolving to the same slug
    #[error("slug `{slug}` is already used by {}", first.display())]
    DuplicateSlug { slug: String, first: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = SchemaError::MissingField("title");
        assert_eq!(err.to_string(), "missing required field `title`");

        let err = SchemaError::InvalidTimestamp {
            field: "pubDatetime",
            raw: "next tuesday".to_string(),
        };
        assert_eq!(err.to_string(), "field `pubDatetime` is not a valid timestamp: `next tuesday`");

        let err = SchemaError::DuplicateSlug {
            slug: "hello-world".to_string(),
            first: PathBuf::from("content/blog/hello.md"),
        };
        assert_eq!(err.to_string(), "slug `hello-world` is already used by content/blog/hello.md");
    }
}
