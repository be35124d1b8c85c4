//! Reference literature: plain-text documents searched paragraph by paragraph.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AdvisorError, AdvisorResult};

/// A paragraph that matched a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// File name of the source document.
    pub citation: String,
    pub content: String,
}

#[derive(Clone, Debug)]
struct Document {
    citation: String,
    paragraphs: Vec<String>,
}

impl Document {
    fn parse(citation: String, text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        let paragraphs = normalized.split("\n\n").map(str::to_string).collect();
        Self {
            citation,
            paragraphs,
        }
    }
}

/// In-memory index over a directory of `.txt` documents.
#[derive(Clone, Debug, Default)]
pub struct LiteratureIndex {
    documents: Vec<Document>,
}

impl LiteratureIndex {
    /// Build from `(citation, text)` pairs.
    pub fn from_documents<I, C, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: AsRef<str>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(citation, text)| Document::parse(citation.into(), text.as_ref()))
                .collect(),
        }
    }

    /// Read every `*.txt` file in `dir`, ordered by file name.
    ///
    /// A missing directory gives an empty index.
    pub fn load(dir: &Path) -> AdvisorResult<Self> {
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "literature directory not found");
            return Ok(Self::default());
        }

        let io_err = |source| AdvisorError::Io {
            path: dir.display().to_string(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = std::fs::read_to_string(&path).map_err(|source| AdvisorError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let citation = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            documents.push(Document::parse(citation, &text));
        }

        debug!(dir = %dir.display(), documents = documents.len(), "literature loaded");
        Ok(Self { documents })
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Every paragraph containing `query`, case-insensitively, in document order.
    ///
    /// An empty query is contained in every paragraph, so it returns them all.
    pub fn search(&self, query: &str) -> Vec<Passage> {
        let needle = query.to_lowercase();
        self.documents
            .iter()
            .flat_map(|doc| {
                doc.paragraphs
                    .iter()
                    .filter(|p| p.to_lowercase().contains(&needle))
                    .map(|p| Passage {
                        citation: doc.citation.clone(),
                        content: p.trim().to_string(),
                    })
            })
            .collect()
    }
}
