//! LocaleState - Current Language and Displayed Text
//!
//! The view synchronizer. Owns the current language, the window title, and
//! the string currently shown for every tagged text key. A language switch
//! rewrites each entry that resolves in the new bundle; entries that miss
//! keep showing their prior text.

use std::collections::HashMap;

use crate::i18n::{Bundles, Lang, TEXT_KEYS};

/// State for the page language and localized text
#[derive(Debug, Clone)]
pub struct LocaleState {
    bundles: Bundles,
    lang: Lang,
    title: String,
    text: HashMap<&'static str, String>,
}

impl LocaleState {
    /// Create the state over a set of bundles. No text is displayed until
    /// the first `set_language` call.
    pub fn new(bundles: Bundles) -> Self {
        Self {
            bundles,
            lang: Lang::default(),
            title: String::new(),
            text: HashMap::new(),
        }
    }

    /// Current language
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Localized window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Displayed string for a tagged key (empty before the first apply)
    pub fn text(&self, key: &str) -> &str {
        self.text.get(key).map(String::as_str).unwrap_or("")
    }

    /// Switch the page language. Every tagged key that resolves in the new
    /// bundle is rewritten; a lookup miss leaves the prior text in place.
    /// `appTitle` also feeds the window title.
    pub fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        for key in TEXT_KEYS {
            if let Some(value) = self.bundles.get(lang, key) {
                self.text.insert(*key, value.to_string());
                if *key == "appTitle" {
                    self.title = value.to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(lang: Lang) -> LocaleState {
        let mut state = LocaleState::new(Bundles::builtin());
        state.set_language(lang);
        state
    }

    #[test]
    fn test_set_language_updates_current_language() {
        for lang in Lang::all() {
            assert_eq!(applied(*lang).lang(), *lang);
        }
    }

    #[test]
    fn test_every_resolving_key_is_rewritten() {
        let bundles = Bundles::builtin();
        let state = applied(Lang::Zh);
        for key in TEXT_KEYS {
            let expected = bundles.get(Lang::Zh, key).expect("builtin bundles are complete");
            assert_eq!(state.text(key), expected);
        }
    }

    #[test]
    fn test_app_title_feeds_window_title() {
        let state = applied(Lang::En);
        assert_eq!(state.title(), "FlashMint | NFT Income Engine");
    }

    #[test]
    fn test_switch_twice_equals_direct_switch() {
        let mut twice = applied(Lang::En);
        twice.set_language(Lang::Zh);
        twice.set_language(Lang::En);

        let direct = applied(Lang::En);
        for key in TEXT_KEYS {
            assert_eq!(twice.text(key), direct.text(key));
        }
        assert_eq!(twice.title(), direct.title());
    }

    #[test]
    fn test_lookup_miss_keeps_prior_text() {
        // Without the fallback merge the chart-label keys never resolve,
        // so they keep their prior (here: initial empty) text.
        let mut state = LocaleState::new(Bundles::from_catalog());
        state.set_language(Lang::En);
        assert_eq!(state.text("heroCta"), "Explore the Tiers");
        assert_eq!(state.text("burnYear0"), "");
        assert_eq!(state.lang(), Lang::En);
    }
}
