//! Document tree access

use crate::error::{RipenError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as documents.
const DOCUMENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Filesystem access to a tree of markdown documents.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pub root: PathBuf,
}

impl DocumentRepository {
    /// Create a repository with the given root directory.
    pub fn new(root: PathBuf) -> Self {
        DocumentRepository { root }
    }

    /// Open a repository rooted at an existing directory.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(RipenError::NotADirectory(root.to_path_buf()));
        }
        Ok(DocumentRepository::new(root.to_path_buf()))
    }

    /// List relative paths of all documents under the root.
    ///
    /// The tree is visited recursively; entries that are not regular files
    /// with a recognized extension are skipped silently. Results are sorted
    /// by relative path.
    pub fn list_documents(&self) -> Vec<String> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if !Self::has_document_extension(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(filename) = Self::normalize_relative_path(rel) {
                documents.push(filename);
            }
        }

        documents.sort();
        documents
    }

    fn has_document_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Read document content.
    pub fn read_document(&self, filename: &str) -> Result<String> {
        fs::read_to_string(self.root.join(filename)).map_err(RipenError::Io)
    }

    /// Write document content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_document_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        let tmp_name = format!(
            "{}.ripen-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
