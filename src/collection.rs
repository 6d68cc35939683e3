use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use spdlog::debug;

use crate::config::Config;
use crate::content::{Document, SchemaError};
use crate::post_list::PostList;

/// A document the site cannot include, and why.
pub struct DocumentError {
    pub path: PathBuf,
    pub error: SchemaError,
}

/// The validated content of the whole site. Built once per run; documents
/// are immutable after loading, so consumers can iterate freely.
pub struct Collection {
    published: Vec<Document>,
    drafts: Vec<Document>,
    errors: Vec<DocumentError>,
}

impl Collection {
    pub fn load(config: &Config) -> io::Result<Collection> {
        let post_list = PostList {
            root_dir: config.content.content_dir.clone(),
            index_file: config.index_base_name().to_string(),
        };
        let sources = post_list.collect()?;

        Ok(Self::from_sources(sources, config))
    }

    fn from_sources(sources: Vec<PathBuf>, config: &Config) -> Collection {
        let mut published: Vec<Document> = vec![];
        let mut drafts: Vec<Document> = vec![];
        let mut errors: Vec<DocumentError> = vec![];
        let mut seen_slugs: HashMap<String, PathBuf> = HashMap::new();

        for path in sources {
            let doc = match Document::from_file(&path, &config.site) {
                Ok(doc) => doc,
                Err(error) => {
                    errors.push(DocumentError { path, error });
                    continue;
                }
            };

            debug!("Validated {} as /{}", path.display(), doc.record.slug);

            // Drafts stay in source but are outside the published set, so
            // they do not take part in the slug invariant either
            if doc.record.draft {
                drafts.push(doc);
                continue;
            }

            if let Some(first) = seen_slugs.get(&doc.record.slug) {
                let error = SchemaError::DuplicateSlug {
                    slug: doc.record.slug.clone(),
                    first: first.clone(),
                };
                errors.push(DocumentError { path, error });
                continue;
            }

            seen_slugs.insert(doc.record.slug.clone(), doc.source.clone());
            published.push(doc);
        }

        // Newest first
        published.sort_by(|a, b| b.record.pub_datetime.cmp(&a.record.pub_datetime));

        Collection {
            published,
            drafts,
            errors,
        }
    }

    pub fn published(&self) -> &[Document] {
        &self.published
    }

    pub fn drafts(&self) -> &[Document] {
        &self.drafts
    }

    pub fn errors(&self) -> &[DocumentError] {
        &self.errors
    }

    pub fn featured(&self) -> Vec<&Document> {
        self.published.iter().filter(|d| d.record.featured).collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&Document> {
        self.published
            .iter()
            .filter(|d| d.record.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Tag to published-post count, most used first. Ties break on the tag
    /// name to keep the listing stable between runs.
    pub fn tag_index(&self) -> Vec<(String, i32)> {
        let mut tag_map: HashMap<String, i32> = HashMap::new();
        for doc in &self.published {
            for tag in doc.record.tags.iter() {
                *tag_map.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let mut tag_list: Vec<(String, i32)> = tag_map.into_iter().collect();
        tag_list.sort_by(|a, b| {
            let (tag_a, count_a) = a;
            let (tag_b, count_b) = b;
            count_b.cmp(count_a).then(tag_a.cmp(tag_b))
        });
        tag_list
    }
}
