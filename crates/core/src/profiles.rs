//! Language expansion profiles and their content-category multipliers.
//!
//! The built-in factors follow published translation-expansion guidance:
//! Romance and Germanic languages grow English text (German is the worst
//! case at +30% base), CJK languages contract it. Shorter strings expand
//! proportionally more, which the short-string bonus models; strings past
//! 100 characters get a penalty instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Content categories
// ────────────────────────────────────────────────────────────────────────────

/// Content domain of a string table.
///
/// Used only as a key into a profile's multiplier map. An unrecognized
/// category name never fails — it contributes a neutral 1.0 multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Ui,
    Technical,
    Marketing,
    Legal,
}

impl ContentCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ui" => Some(Self::Ui),
            "technical" => Some(Self::Technical),
            "marketing" => Some(Self::Marketing),
            "legal" => Some(Self::Legal),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language profiles
// ────────────────────────────────────────────────────────────────────────────

/// Expansion model for one target language. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub code: String,
    pub name: String,
    /// Base expansion rate (1.0 = no change).
    pub base_expansion: f64,
    /// Added in full for very short strings, scaled down through the length
    /// tiers.
    pub short_bonus: f64,
    /// Subtracted for strings longer than 100 characters.
    pub long_penalty: f64,
    /// Multipliers per content category.
    pub content_multipliers: HashMap<ContentCategory, f64>,
}

impl LanguageProfile {
    /// Multiplier for a raw category name. Unrecognized names are neutral.
    pub fn category_multiplier(&self, category: &str) -> f64 {
        ContentCategory::parse(category)
            .and_then(|c| self.content_multipliers.get(&c))
            .copied()
            .unwrap_or(1.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Policy table
// ────────────────────────────────────────────────────────────────────────────

/// All known language profiles, keyed by language code.
///
/// Built once at process start and read-only afterwards, so concurrent
/// callers share one instance without locks.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    profiles: HashMap<String, LanguageProfile>,
}

impl PolicyTable {
    pub fn new(profiles: impl IntoIterator<Item = LanguageProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.code.clone(), p)).collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&LanguageProfile> {
        self.profiles.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.profiles.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The built-in profile set: es, fr, de, zh, ja.
    pub fn builtin() -> Self {
        use ContentCategory::{Legal, Marketing, Technical, Ui};

        Self::new([
            profile(
                "es",
                "Spanish",
                1.25,
                0.60,
                0.15,
                [(Ui, 1.0), (Technical, 0.8), (Marketing, 1.1), (Legal, 0.9)],
            ),
            profile(
                "fr",
                "French",
                1.23,
                0.60,
                0.15,
                [(Ui, 1.0), (Technical, 0.8), (Marketing, 1.1), (Legal, 0.9)],
            ),
            profile(
                "de",
                "German",
                1.30,
                0.75,
                0.20,
                [(Ui, 1.0), (Technical, 0.85), (Marketing, 1.2), (Legal, 0.9)],
            ),
            profile(
                "zh",
                "Chinese",
                0.85,
                0.30,
                0.10,
                [(Ui, 1.0), (Technical, 1.0), (Marketing, 0.9), (Legal, 1.0)],
            ),
            profile(
                "ja",
                "Japanese",
                0.90,
                0.30,
                0.10,
                [(Ui, 1.0), (Technical, 1.0), (Marketing, 0.9), (Legal, 1.0)],
            ),
        ])
    }
}

fn profile(
    code: &str,
    name: &str,
    base_expansion: f64,
    short_bonus: f64,
    long_penalty: f64,
    multipliers: [(ContentCategory, f64); 4],
) -> LanguageProfile {
    LanguageProfile {
        code: code.to_string(),
        name: name.to_string(),
        base_expansion,
        short_bonus,
        long_penalty,
        content_multipliers: multipliers.into_iter().collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
