// Pseudo-localization engine.
// Implements: glyph substitution, expansion policies, length targets,
// elongation, and the batch transformer. Pure and synchronous — no I/O and
// no logging; the file and HTTP adapters live in apps/.

pub mod elongate;
pub mod error;
pub mod glyphs;
pub mod policy;
pub mod profiles;
pub mod transform;

// Re-export the public API consumed by the adapters (cli, api).
pub use elongate::elongate;
pub use error::EngineError;
pub use glyphs::{GlyphTable, DEFAULT_GLYPHS};
pub use policy::{target_length, ExpansionPolicy, FixedTierPolicy, ProfileBasedPolicy, RATE_FLOOR};
pub use profiles::{ContentCategory, LanguageProfile, PolicyTable};
pub use transform::Transformer;
