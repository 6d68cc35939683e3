use std::path::{Path, PathBuf};
use std::{fs, io};

/// Finds the markdown sources of the content directory. Two layouts are
/// accepted, matching how posts are usually organized: loose `.md` files,
/// and one directory per post holding an index file next to its images.
pub struct PostList {
    pub root_dir: PathBuf,
    pub index_file: String,
}

impl PostList {
    /// Collects every markdown source, sorted by path so that runs are
    /// deterministic regardless of directory iteration order.
    pub fn collect(&self) -> io::Result<Vec<PathBuf>> {
        let mut sources = self.retrieve_files()?;

        for dir in Self::list_dirs(self.root_dir.as_path())? {
            if let Some(index) = Self::contains_file(&dir, &self.index_file)? {
                sources.push(dir.join(index));
            }
        }

        sources.sort();
        Ok(sources)
    }

    fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.ends_with(".md") {
                    posts.push(entry.path());
                }
            }
        }
        Ok(posts)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        let entries = fs::read_dir(posts_dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn contains_file(dir: &Path, base_name: &str) -> io::Result<Option<String>> {
        let entries = fs::read_dir(dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if file_name == base_name {
                        return Ok(Some(file_name.to_string()));
                    }
                }
            }
        }

        Ok(None)
    }
}
