// SPDX-License-Identifier: MPL-2.0
//! Term list loading.
//!
//! Terms are read once at startup from a JSON array of
//! `{ "term": ..., "description": ... }` records and stay fixed for the
//! lifetime of the process. Any failure to obtain a usable list is recovered
//! locally by substituting a single placeholder term, so the widget always has
//! something to show.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the config directory and next to the executable.
pub const TERMS_FILE: &str = "terms.json";

pub const PLACEHOLDER_TERM: &str = "Error";
pub const PLACEHOLDER_DESCRIPTION: &str = "terms.json 확인 필요";

/// A displayable word or phrase paired with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    /// Older term files use the shorter `desc` key.
    #[serde(alias = "desc", default)]
    pub description: String,
}

impl Term {
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }

    /// The record shown when no term list could be loaded.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TERM, PLACEHOLDER_DESCRIPTION)
    }
}

/// Ordered, immutable list of terms for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    /// Wraps the given terms as-is. An empty set is allowed here; the
    /// rotation treats it as permanently idle.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(vec![Term::placeholder()])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }
}

/// Picks the term file to read.
///
/// An explicit path (from `--terms`) always wins. Otherwise `terms.json` is
/// looked up in the config directory, then next to the running executable.
#[must_use]
pub fn resolve_path(explicit: Option<PathBuf>, config_dir: Option<&Path>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    let beside_config = config_dir.map(|dir| dir.join(TERMS_FILE));
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TERMS_FILE)));

    [beside_config, beside_exe]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_file())
}

/// Reads and parses a term file without any fallback.
pub fn load_from_path(path: &Path) -> Result<Vec<Term>> {
    let content = fs::read_to_string(path)?;
    let terms: Vec<Term> = serde_json::from_str(&content)?;
    Ok(terms)
}

/// Loads the session's term set, falling back to the placeholder on any
/// failure. Never fails.
#[must_use]
pub fn load(path: Option<&Path>) -> TermSet {
    let Some(path) = path else {
        tracing::warn!("no {} found, using placeholder term", TERMS_FILE);
        return TermSet::placeholder();
    };

    match load_from_path(path) {
        Ok(terms) if terms.is_empty() => {
            tracing::warn!(path = %path.display(), "term file is empty, using placeholder term");
            TermSet::placeholder()
        }
        Ok(terms) => {
            tracing::info!(path = %path.display(), count = terms.len(), "loaded terms");
            TermSet::new(terms)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load terms, using placeholder term");
            TermSet::placeholder()
        }
    }
}
