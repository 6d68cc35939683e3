pub mod document;
pub mod front_matter;
pub mod record;
pub mod schema;

pub use document::Document;
pub use front_matter::RawFrontMatter;
pub use record::ContentRecord;
pub use schema::{SchemaError, SchemaResult};
