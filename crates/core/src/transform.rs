//! Batch transformer — the pipeline that turns a source string table into
//! its pseudo-localized counterpart.
//!
//! Per entry: expansion rate → target length → glyph substitution →
//! elongation. Entries are independent and processed in no particular
//! order; the output carries exactly the input's key set. A missing
//! language profile fails the whole batch before any entry is touched.

use std::collections::HashMap;
use std::sync::Arc;

use crate::elongate::elongate;
use crate::error::EngineError;
use crate::glyphs::GlyphTable;
use crate::policy::{target_length, ExpansionPolicy};

/// The transformation engine.
///
/// Cheap to share: the glyph table is a static and the policy is
/// reference-counted, so one instance serves concurrent callers without
/// locks. Each call owns its input and output maps.
pub struct Transformer {
    glyphs: &'static GlyphTable,
    policy: Arc<dyn ExpansionPolicy>,
}

impl Transformer {
    pub fn new(glyphs: &'static GlyphTable, policy: Arc<dyn ExpansionPolicy>) -> Self {
        Self { glyphs, policy }
    }

    /// Pseudo-localizes every entry of `strings`.
    ///
    /// Keys are opaque and carried through untouched. Fails atomically: on
    /// any error the caller gets no partially-transformed mapping.
    pub fn transform(
        &self,
        strings: &HashMap<String, String>,
        language: &str,
        category: &str,
    ) -> Result<HashMap<String, String>, EngineError> {
        self.policy.ensure_language(language)?;

        let mut out = HashMap::with_capacity(strings.len());
        for (key, source) in strings {
            out.insert(key.clone(), self.transform_one(source, language, category)?);
        }
        Ok(out)
    }

    /// Pseudo-localizes a single string. Empty input is a no-op success.
    pub fn transform_one(
        &self,
        source: &str,
        language: &str,
        category: &str,
    ) -> Result<String, EngineError> {
        if source.is_empty() {
            return Ok(String::new());
        }
        let source_len = source.chars().count();
        let rate = self.policy.expansion_rate(source_len, language, category)?;
        let target = target_length(source_len, rate);
        Ok(elongate(&self.glyphs.substitute(source), target))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::DEFAULT_GLYPHS;
    use crate::policy::{FixedTierPolicy, ProfileBasedPolicy};
    use crate::profiles::{ContentCategory, LanguageProfile, PolicyTable};

    fn builtin_transformer() -> Transformer {
        Transformer::new(
            &DEFAULT_GLYPHS,
            Arc::new(ProfileBasedPolicy::new(PolicyTable::builtin())),
        )
    }

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_key_set_is_preserved() {
        let transformer = builtin_transformer();
        let input = table(&[
            ("HELLO", "Hello there"),
            ("TITLE", "The coolest developer tool"),
            ("EMPTY", ""),
        ]);

        let out = transformer.transform(&input, "es", "ui").unwrap();

        assert_eq!(out.len(), input.len());
        for key in input.keys() {
            assert!(out.contains_key(key), "missing key '{key}'");
        }
    }

    #[test]
    fn test_german_short_string_worked_example() {
        // "Hi" in de/ui: rate 2.05 → target 4; substituted "Ḥḭ" repeats to 4.
        let transformer = builtin_transformer();
        let out = transformer.transform(&table(&[("HELLO", "Hi")]), "de", "ui").unwrap();

        let value = &out["HELLO"];
        assert!(value.starts_with("Ḥḭ"));
        assert!(value.chars().count() >= 4);
    }

    #[test]
    fn test_empty_value_stays_empty() {
        let transformer = builtin_transformer();
        let out = transformer.transform(&table(&[("K", "")]), "ja", "ui").unwrap();
        assert_eq!(out["K"], "");
    }

    #[test]
    fn test_unknown_language_fails_whole_batch() {
        let transformer = builtin_transformer();
        let err = transformer
            .transform(&table(&[("A", "one"), ("B", "two")]), "xx", "ui")
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownLanguage("xx".to_string()));
    }

    #[test]
    fn test_unknown_language_fails_even_for_all_empty_values() {
        // Empty values skip the per-entry policy call, so the batch-level
        // language check has to catch this case.
        let transformer = builtin_transformer();
        let err = transformer
            .transform(&table(&[("A", ""), ("B", "")]), "xx", "ui")
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownLanguage("xx".to_string()));
    }

    #[test]
    fn test_output_at_least_as_long_as_substituted_source() {
        let transformer = builtin_transformer();
        let sources = ["Hi", "Save changes?", "a somewhat longer UI string here"];
        for source in sources {
            let out = transformer.transform_one(source, "de", "ui").unwrap();
            assert!(
                out.chars().count() >= source.chars().count(),
                "'{source}' shrank under an expanding profile"
            );
        }
    }

    #[test]
    fn test_injected_fake_profile() {
        // A do-nothing profile: rate 1.0 at medium length, so the output is
        // exactly the substituted source.
        let fake = LanguageProfile {
            code: "tlh".to_string(),
            name: "Klingon".to_string(),
            base_expansion: 1.0,
            short_bonus: 0.0,
            long_penalty: 0.0,
            content_multipliers: [(ContentCategory::Ui, 1.0)].into_iter().collect(),
        };
        let transformer = Transformer::new(
            &DEFAULT_GLYPHS,
            Arc::new(ProfileBasedPolicy::new(PolicyTable::new([fake]))),
        );

        let source = "a string inside the medium length band so no tiers";
        let out = transformer.transform_one(source, "tlh", "ui").unwrap();
        assert_eq!(out, DEFAULT_GLYPHS.substitute(source));
    }

    #[test]
    fn test_fixed_tier_transformer_accepts_any_language() {
        let transformer = Transformer::new(&DEFAULT_GLYPHS, Arc::new(FixedTierPolicy));
        let out = transformer
            .transform(&table(&[("GREETING", "Hello")]), "whatever", "whatever")
            .unwrap();
        // Length 5 falls in the ≤10 bucket: 300% → target 15.
        assert!(out["GREETING"].chars().count() >= 15);
    }

    #[test]
    fn test_non_letter_content_survives_the_pipeline() {
        let transformer = builtin_transformer();
        let out = transformer.transform_one("v2.1 — beta", "fr", "technical").unwrap();
        assert!(out.contains("2.1"));
        assert!(out.contains('—'));
    }
}
