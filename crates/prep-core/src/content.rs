/// Loading of the static content document.
///
/// Content is a JSON document with one object per tab (`roadmap`, `projects`,
/// `coding`, `strategy`). The short field names used by hand-written content
/// files (`q`, `a`, `why`, `category`, `sections`) are accepted as aliases.
/// A default document is compiled into the binary.
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Category, ContentStore, Question, QuestionKey, Snippet};

const BUILTIN_CONTENT: &str = include_str!("../content/mern.json");

impl ContentStore {
    /// Parse a content document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let store: ContentStore = serde_json::from_str(json)?;
        debug!(
            categories = store.roadmap.categories.len(),
            questions = store.question_count(),
            "content parsed"
        );
        Ok(store)
    }

    /// Read and parse a content file from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::ContentRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The document shipped with the binary.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn categories(&self) -> &[Category] {
        &self.roadmap.categories
    }

    pub fn question_count(&self) -> usize {
        self.roadmap.categories.iter().map(|c| c.questions.len()).sum()
    }

    pub fn question(&self, key: QuestionKey) -> Option<&Question> {
        self.roadmap
            .categories
            .get(key.category)?
            .questions
            .get(key.question)
    }

    pub fn snippet(&self, index: usize) -> Option<&Snippet> {
        self.coding.snippets.get(index)
    }

    /// Hex SHA-256 of the canonical JSON form. Two stores with the same
    /// content always produce the same fingerprint, whatever aliases the
    /// source file used.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        // Serializing plain structs and strings cannot fail.
        if let Ok(json) = serde_json::to_vec(self) {
            hasher.update(&json);
        }
        format!("{:x}", hasher.finalize())
    }
}
