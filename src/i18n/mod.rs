//! i18n - Internationalization Module
//!
//! HashMap-based language bundles for the page copy, with a one-time
//! fallback merge that back-fills the chart-label keys. Lookups return
//! `Option`; a miss is the caller's cue to keep whatever it showed before.

mod catalog;
pub mod rich;

use std::collections::HashMap;

pub use catalog::TEXT_KEYS;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    /// Thai
    #[default]
    Th,
    /// English
    En,
    /// Chinese (Simplified)
    Zh,
}

impl Lang {
    /// All supported languages, in dropdown order
    pub fn all() -> &'static [Lang] {
        &[Lang::Th, Lang::En, Lang::Zh]
    }

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Lang::Th => "th",
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Parse a language code; unknown codes yield `None` and callers drop
    /// them without comment
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "th" => Some(Lang::Th),
            "en" => Some(Lang::En),
            "zh" => Some(Lang::Zh),
            _ => None,
        }
    }

    /// Label shown on the language-picker button
    pub fn button_label(self) -> &'static str {
        match self {
            Lang::Th => "TH - ไทย",
            Lang::En => "EN - English",
            Lang::Zh => "CN - 中文",
        }
    }

    /// Embedded flag asset for this language (English uses the UK flag)
    pub fn flag_asset(self) -> &'static str {
        match self {
            Lang::Th => "flags/th.svg",
            Lang::En => "flags/gb.svg",
            Lang::Zh => "flags/cn.svg",
        }
    }

    /// Digit group separator used by this locale's number formatting
    pub fn group_separator(self) -> char {
        match self {
            Lang::Th | Lang::En | Lang::Zh => ',',
        }
    }
}

/// Hardcoded defaults for the chart-label keys: (key, th, en, zh).
/// Merged into the bundles once at startup, never overwriting the catalog.
const CHART_DEFAULTS: &[(&str, &str, &str, &str)] = &[
    ("distributionLabel1", "ชุมชน / Airdrop", "Community / Airdrop", "社区 / 空投"),
    ("distributionLabel2", "สภาพคล่องเริ่มต้น", "Initial Liquidity", "初始流动性"),
    ("distributionLabel3", "ทีมงาน / พัฒนา", "Team / Development", "团队 / 开发"),
    ("distributionLabel4", "ระบบนิเวศ", "Ecosystem", "生态系统"),
    ("burnYear0", "ปีที่ 0", "Year 0", "第 0 年"),
    ("burnYear", "ปีที่", "Year", "第"),
    ("burnLabel", "อุปทานคงเหลือ", "Remaining Supply", "剩余供应"),
    ("burnTooltipText", "อุปทาน", "Supply", "供应"),
];

/// Translation bundles for all supported languages
#[derive(Debug, Clone)]
pub struct Bundles {
    map: HashMap<Lang, HashMap<&'static str, &'static str>>,
}

impl Bundles {
    /// Bundles as authored in the catalog, before the fallback merge
    pub fn from_catalog() -> Self {
        Self {
            map: catalog::catalog(),
        }
    }

    /// Catalog bundles with the chart-label defaults merged in
    pub fn builtin() -> Self {
        let mut bundles = Self::from_catalog();
        bundles.merge_chart_defaults();
        bundles
    }

    /// Back-fill chart-label keys that the catalog does not provide.
    /// Existing keys are kept as-is. Returns the number of keys inserted.
    pub fn merge_chart_defaults(&mut self) -> usize {
        let mut inserted = 0;
        for (key, th, en, zh) in CHART_DEFAULTS {
            for (lang, value) in [(Lang::Th, th), (Lang::En, en), (Lang::Zh, zh)] {
                let bundle = self.map.entry(lang).or_default();
                if !bundle.contains_key(*key) {
                    bundle.insert(*key, *value);
                    inserted += 1;
                }
            }
        }
        inserted
    }

    /// Look up a key in the given language's bundle
    pub fn get(&self, lang: Lang, key: &str) -> Option<&'static str> {
        self.map.get(&lang).and_then(|bundle| bundle.get(key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_catalog_covers_page_keys_in_every_language() {
        let bundles = Bundles::from_catalog();
        for lang in Lang::all() {
            for key in TEXT_KEYS {
                if CHART_DEFAULTS.iter().any(|(k, ..)| k == key) {
                    continue;
                }
                assert!(
                    bundles.get(*lang, key).is_some(),
                    "missing {key} in {:?}",
                    lang
                );
            }
        }
    }

    #[test]
    fn test_chart_labels_absent_until_merged() {
        let mut bundles = Bundles::from_catalog();
        assert_eq!(bundles.get(Lang::En, "burnYear0"), None);

        let inserted = bundles.merge_chart_defaults();
        assert_eq!(inserted, CHART_DEFAULTS.len() * Lang::all().len());
        assert_eq!(bundles.get(Lang::En, "burnYear0"), Some("Year 0"));
        assert_eq!(bundles.get(Lang::Th, "burnTooltipText"), Some("อุปทาน"));
    }

    #[test]
    fn test_merge_never_overwrites() {
        let mut bundles = Bundles::builtin();
        assert_eq!(bundles.merge_chart_defaults(), 0);
    }

    #[test]
    fn test_unknown_key_misses() {
        let bundles = Bundles::builtin();
        assert_eq!(bundles.get(Lang::Zh, "noSuchKey"), None);
    }
}
