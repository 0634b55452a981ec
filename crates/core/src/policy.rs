//! Expansion policies — how much longer (or shorter) pseudo-localized text
//! should be than its source.
//!
//! Two implementations behind one trait: [`ProfileBasedPolicy`] computes a
//! continuous rate from a per-language profile (primary), and
//! [`FixedTierPolicy`] consults the legacy ordered bucket table (deprecated,
//! kept only for configurations that supply no per-language profiles).
//! The caller picks one at startup and carries it as
//! `Arc<dyn ExpansionPolicy>`.

use crate::error::EngineError;
use crate::profiles::PolicyTable;

/// Never propose shrinking below 80% of source length, even for contracting
/// languages. There is no ceiling.
pub const RATE_FLOOR: f64 = 0.8;

/// A pluggable expansion-rate model.
///
/// Implementations must be deterministic: identical inputs, identical rate.
pub trait ExpansionPolicy: Send + Sync {
    /// Expansion rate for a source of `source_len` decoded characters.
    fn expansion_rate(
        &self,
        source_len: usize,
        language: &str,
        category: &str,
    ) -> Result<f64, EngineError>;

    /// Up-front language check, so batch callers can fail before touching
    /// any entry.
    fn ensure_language(&self, language: &str) -> Result<(), EngineError>;
}

/// Converts a resolved expansion rate into an absolute character target.
pub fn target_length(source_len: usize, rate: f64) -> usize {
    (source_len as f64 * rate).floor() as usize
}

// ────────────────────────────────────────────────────────────────────────────
// ProfileBasedPolicy
// ────────────────────────────────────────────────────────────────────────────

/// Continuous per-language rate: base expansion, length-tier adjustment,
/// category multiplier, floor clamp.
pub struct ProfileBasedPolicy {
    table: PolicyTable,
}

impl ProfileBasedPolicy {
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }
}

impl ExpansionPolicy for ProfileBasedPolicy {
    fn expansion_rate(
        &self,
        source_len: usize,
        language: &str,
        category: &str,
    ) -> Result<f64, EngineError> {
        let profile = self
            .table
            .get(language)
            .ok_or_else(|| EngineError::UnknownLanguage(language.to_string()))?;

        // Length tiers, inclusive upper bounds: the shorter the string, the
        // larger the share of the short-string bonus it receives. The medium
        // band (31–100) uses the base rate unmodified.
        let adjustment = match source_len {
            0..=5 => profile.short_bonus,
            6..=15 => profile.short_bonus * 0.7,
            16..=30 => profile.short_bonus * 0.3,
            31..=100 => 0.0,
            _ => -profile.long_penalty,
        };

        let rate = (profile.base_expansion + adjustment) * profile.category_multiplier(category);
        Ok(rate.max(RATE_FLOOR))
    }

    fn ensure_language(&self, language: &str) -> Result<(), EngineError> {
        if self.table.contains(language) {
            Ok(())
        } else {
            Err(EngineError::UnknownLanguage(language.to_string()))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FixedTierPolicy (legacy)
// ────────────────────────────────────────────────────────────────────────────

/// Ordered length buckets with the upper percentage bound each one proposes.
/// The final entry is the catch-all for long strings.
const LENGTH_TIERS: [(usize, u32); 6] = [
    (10, 300),
    (20, 200),
    (30, 180),
    (50, 160),
    (70, 170),
    (usize::MAX, 130),
];

/// Deprecated fixed-tier rate: a percentage of source length chosen from the
/// smallest bucket the source fits into.
///
/// Knows nothing about languages or categories, so any language code is
/// accepted.
pub struct FixedTierPolicy;

impl ExpansionPolicy for FixedTierPolicy {
    fn expansion_rate(
        &self,
        source_len: usize,
        _language: &str,
        _category: &str,
    ) -> Result<f64, EngineError> {
        let mut pct = LENGTH_TIERS[LENGTH_TIERS.len() - 1].1;
        for (bound, tier_pct) in LENGTH_TIERS {
            if source_len <= bound {
                pct = tier_pct;
                break;
            }
        }
        Ok(f64::from(pct) / 100.0)
    }

    fn ensure_language(&self, _language: &str) -> Result<(), EngineError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_policy() -> ProfileBasedPolicy {
        ProfileBasedPolicy::new(PolicyTable::builtin())
    }

    #[test]
    fn test_expansion_rate_is_deterministic() {
        let policy = builtin_policy();
        let a = policy.expansion_rate(12, "fr", "ui").unwrap();
        let b = policy.expansion_rate(12, "fr", "ui").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let policy = builtin_policy();
        let err = policy.expansion_rate(10, "xx", "ui").unwrap_err();
        assert_eq!(err, EngineError::UnknownLanguage("xx".to_string()));
        assert!(policy.ensure_language("xx").is_err());
        assert!(policy.ensure_language("de").is_ok());
    }

    #[test]
    fn test_german_short_string_gets_full_bonus() {
        // de: base 1.30 + full bonus 0.75 at length ≤ 5, ui multiplier 1.0.
        let rate = builtin_policy().expansion_rate(2, "de", "ui").unwrap();
        assert!((rate - 2.05).abs() < 1e-9);
        assert!(rate > 1.8);
    }

    #[test]
    fn test_length_tier_boundaries_are_inclusive() {
        let policy = builtin_policy();
        let at = |len: usize| policy.expansion_rate(len, "de", "ui").unwrap();

        // Full bonus through 5, 70% through 15, 30% through 30, base
        // through 100, penalty after.
        assert!((at(5) - (1.30 + 0.75)).abs() < 1e-9);
        assert!((at(6) - (1.30 + 0.75 * 0.7)).abs() < 1e-9);
        assert!((at(15) - (1.30 + 0.75 * 0.7)).abs() < 1e-9);
        assert!((at(16) - (1.30 + 0.75 * 0.3)).abs() < 1e-9);
        assert!((at(30) - (1.30 + 0.75 * 0.3)).abs() < 1e-9);
        assert!((at(31) - 1.30).abs() < 1e-9);
        assert!((at(100) - 1.30).abs() < 1e-9);
        assert!((at(101) - (1.30 - 0.20)).abs() < 1e-9);
    }

    #[test]
    fn test_category_multiplier_applies_after_tier_adjustment() {
        // de marketing at medium length: 1.30 × 1.2.
        let rate = builtin_policy()
            .expansion_rate(50, "de", "marketing")
            .unwrap();
        assert!((rate - 1.56).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_is_neutral() {
        let policy = builtin_policy();
        let plain = policy.expansion_rate(50, "es", "ui").unwrap();
        let odd = policy.expansion_rate(50, "es", "poetry").unwrap();
        assert_eq!(plain, odd);
    }

    #[test]
    fn test_floor_clamp_on_contracting_language() {
        // zh long marketing: (0.85 − 0.10) × 0.9 = 0.675, clamped to 0.8.
        let rate = builtin_policy()
            .expansion_rate(150, "zh", "marketing")
            .unwrap();
        assert_eq!(rate, RATE_FLOOR);
    }

    #[test]
    fn test_rate_never_below_floor_across_builtin_profiles() {
        let policy = builtin_policy();
        for lang in ["es", "fr", "de", "zh", "ja"] {
            for category in ["ui", "technical", "marketing", "legal", "poetry"] {
                for len in [0, 1, 5, 6, 15, 16, 30, 31, 100, 101, 500] {
                    let rate = policy.expansion_rate(len, lang, category).unwrap();
                    assert!(
                        rate >= RATE_FLOOR,
                        "rate {rate} below floor for {lang}/{category}/len {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_fixed_tier_buckets() {
        let policy = FixedTierPolicy;
        let at = |len: usize| policy.expansion_rate(len, "anything", "ui").unwrap();

        assert_eq!(at(0), 3.0);
        assert_eq!(at(10), 3.0);
        assert_eq!(at(11), 2.0);
        assert_eq!(at(20), 2.0);
        assert_eq!(at(21), 1.8);
        assert_eq!(at(31), 1.6);
        assert_eq!(at(50), 1.6);
        assert_eq!(at(51), 1.7);
        assert_eq!(at(70), 1.7);
        assert_eq!(at(71), 1.3);
        assert_eq!(at(10_000), 1.3);
    }

    #[test]
    fn test_fixed_tier_accepts_any_language() {
        assert!(FixedTierPolicy.ensure_language("klingon").is_ok());
    }

    #[test]
    fn test_target_length_floors() {
        assert_eq!(target_length(2, 2.05), 4);
        assert_eq!(target_length(3, 1.5), 4);
        assert_eq!(target_length(10, 0.8), 8);
        assert_eq!(target_length(0, 3.0), 0);
    }
}
