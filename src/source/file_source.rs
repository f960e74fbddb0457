use std::path::PathBuf;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Entry;
use crate::source::{parse_listing, EntrySource};

/// Reads the listing from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EntrySource for FileSource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let body = tokio::fs::read(&self.path).await?;
        parse_listing(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_listing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "x", "title": "Local", "date": "2024-09-09", "category": "research"}}]"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let entries = tokio_test::block_on(source.fetch_entries()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Local");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(tokio_test::block_on(source.fetch_entries()).is_err());
    }
}
