//! Heuristic rule engine for moderation short-circuits.
//!
//! Three independent pure predicates over normalized text: invalid/noise
//! detection, abuse word matching, and negative phrase matching. The rules
//! carry no model dependency, so they stay evaluable (and testable) without
//! any trained artifact.

pub mod engine;
pub mod lexicon;

pub use engine::RuleEngine;
pub use lexicon::Lexicon;
