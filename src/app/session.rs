// SPDX-License-Identifier: MPL-2.0
//! Everything loaded from disk at startup, handed to the app as one value.

use super::config::{self, Config};
use super::Flags;
use crate::content::{self, TermSet};
use crate::error::{Error, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    /// Where `config` is saved. `None` when no config directory exists, in
    /// which case changes are kept in memory only.
    pub config_path: Option<PathBuf>,
    pub terms: TermSet,
    pub seed: Option<u64>,
}

impl Session {
    #[must_use]
    pub fn new(config: Config, config_path: Option<PathBuf>, terms: TermSet) -> Self {
        Self {
            config,
            config_path,
            terms,
            seed: None,
        }
    }

    /// Loads settings and terms the way the binary does.
    #[must_use]
    pub fn load(flags: &Flags) -> Self {
        let config_path = config::config_path_with_override(flags.config_dir.clone());
        let (config, _warning) = match &config_path {
            Some(path) => config::load_or_default(path),
            None => (Config::default(), None),
        };

        let config_dir = config_path.as_deref().and_then(|path| path.parent());
        let terms_path = content::resolve_path(flags.terms_path.clone(), config_dir);
        let terms = content::load(terms_path.as_deref());

        Self {
            config,
            config_path,
            terms,
            seed: flags.seed,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Writes the current configuration.
    pub fn save(&self) -> Result<()> {
        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
        config::save_to_path(&self.config, path)
    }

    /// Saves and logs a failure instead of returning it. Nothing retries.
    pub fn persist(&self) {
        if let Err(error) = self.save() {
            tracing::warn!(%error, "failed to save settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeName;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_reads_config_and_terms_from_config_dir() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(config::CONFIG_FILE),
            "theme_name = \"Green\"\ninterval_seconds = 15\n",
        )
        .expect("write settings");
        fs::write(
            dir.path().join(content::TERMS_FILE),
            r#"[{"term": "Crate", "description": "A compilation unit"}]"#,
        )
        .expect("write terms");

        let session = Session::load(&Flags {
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        });

        assert_eq!(session.config.theme_name, ThemeName::Green);
        assert_eq!(session.config.interval_seconds, 15);
        assert_eq!(session.terms.len(), 1);
        assert_eq!(session.terms.get(0).map(|t| t.term.as_str()), Some("Crate"));
    }

    #[test]
    fn explicit_terms_path_wins() {
        let dir = tempdir().expect("temp dir");
        let explicit = dir.path().join("custom.json");
        fs::write(&explicit, r#"[{"term": "A", "description": ""}, {"term": "B"}]"#)
            .expect("write terms");

        let session = Session::load(&Flags {
            config_dir: Some(dir.path().join("config")),
            terms_path: Some(explicit),
            seed: Some(3),
        });

        assert_eq!(session.terms.len(), 2);
        assert_eq!(session.seed, Some(3));
        assert_eq!(session.config, Config::default());
    }

    #[test]
    fn save_round_trips_through_load() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(config::CONFIG_FILE);
        let mut session = Session::new(Config::default(), Some(path), TermSet::placeholder());
        session.config.theme_name = ThemeName::Pink;
        session.save().expect("save");

        let reloaded = Session::load(&Flags {
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        });
        assert_eq!(reloaded.config.theme_name, ThemeName::Pink);
    }

    #[test]
    fn save_without_path_errors_and_persist_does_not_panic() {
        let session = Session::new(Config::default(), None, TermSet::placeholder());
        assert!(matches!(session.save(), Err(Error::Config(_))));
        session.persist();
    }
}
