pub mod skills;

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use skills::DEFAULT_SKILLS;

static DEFAULT_VOCABULARY: Lazy<SkillVocabulary> = Lazy::new(SkillVocabulary::new);

/// A canonical skill name and the extra spellings that also count as it.
///
/// An entry matches text that contains its name or any alias, ignoring case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    skills: Vec<VocabularyEntry>,
}

/// Ordered table of known skills used for resume skill detection.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<VocabularyEntry>,
    // Lowercased patterns per entry, same indexing as `entries`.
    patterns: Vec<Vec<String>>,
}

impl SkillVocabulary {
    pub fn new() -> Self {
        let entries = DEFAULT_SKILLS
            .iter()
            .map(|(name, aliases)| VocabularyEntry::new(name, aliases))
            .collect();

        // The built-in table is distinct and non-empty by construction.
        Self::build(entries)
    }

    /// Shared process-wide default vocabulary.
    pub fn global() -> &'static SkillVocabulary {
        &DEFAULT_VOCABULARY
    }

    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Result<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(Error::Vocabulary("skill name must not be empty".to_string()));
            }
            if entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(Error::Vocabulary(format!(
                    "skill '{}' has an empty alias",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(Error::Vocabulary(format!(
                    "duplicate skill name '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self::build(entries))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        Self::from_entries(file.skills)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let vocabulary = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} skills from vocabulary file {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    fn build(entries: Vec<VocabularyEntry>) -> Self {
        let patterns: Vec<Vec<String>> = entries
            .iter()
            .map(|e| e.patterns().map(|p| p.to_lowercase()).collect())
            .collect();

        Self { entries, patterns }
    }

    /// Names of every entry whose name or alias occurs in `text`, ignoring
    /// case, in table order.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();

        self.entries
            .iter()
            .zip(&self.patterns)
            .filter(|(_, patterns)| patterns.iter().any(|p| lower.contains(p.as_str())))
            .map(|(entry, _)| entry.name.clone())
            .collect()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&VocabularyEntry> {
        let lower = name.to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
