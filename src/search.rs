// SPDX-License-Identifier: MPL-2.0
//! Web search for the term on display.

use crate::content::Term;
use crate::error::{Error, Result};
use url::Url;

pub const SEARCH_ENGINE: &str = "https://www.google.com";

/// Appended to every query ("meaning").
pub const MEANING_SUFFIX: &str = "뜻";

/// Builds `<engine>/search?q=<term 뜻>` with the query form-encoded.
pub fn search_url(term: &str) -> Result<Url> {
    let query = format!("{} {}", term, MEANING_SUFFIX);
    let url = Url::parse_with_params(&format!("{}/search", SEARCH_ENGINE), [("q", query)])?;
    Ok(url)
}

/// Opens URLs outside the application.
pub trait Launcher {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Hands URLs to the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        open::that(url.as_str()).map_err(|err| Error::Browser(err.to_string()))
    }
}

/// Searches for `term`, logging instead of failing.
pub fn search(launcher: &dyn Launcher, term: &Term) {
    let result = search_url(&term.term).and_then(|url| {
        tracing::info!(term = %term.term, %url, "opening search");
        launcher.open(&url)
    });
    if let Err(error) = result {
        tracing::warn!(term = %term.term, %error, "search failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
    }

    impl Launcher for Recorder {
        fn open(&self, url: &Url) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Launcher for Broken {
        fn open(&self, _url: &Url) -> Result<()> {
            Err(Error::Browser("no browser".into()))
        }
    }

    #[test]
    fn url_targets_search_endpoint() {
        let url = search_url("Borrow checker").expect("valid url");
        assert_eq!(url.host_str(), Some("www.google.com"));
        assert_eq!(url.path(), "/search");
    }

    #[test]
    fn query_carries_term_and_suffix() {
        let url = search_url("C++ & Rust").expect("valid url");
        let (key, value) = url.query_pairs().next().expect("one query pair");
        assert_eq!(key, "q");
        assert_eq!(value, "C++ & Rust 뜻");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn search_opens_once() {
        let recorder = Recorder::default();
        search(&recorder, &Term::new("Lifetime", "scope of a reference"));
        let opened = recorder.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://www.google.com/search?q="));
    }

    #[test]
    fn launcher_failure_is_swallowed() {
        search(&Broken, &Term::new("Trait", "shared behavior"));
    }
}
