//! The genus identification engine.
//!
//! Pure functions from an observation plus the static datasets to one
//! immutable identification result. No I/O, no sessions, no shared state:
//! the external question-answer loop re-supplies the accumulated
//! observation on each call and passes the clock in. Hosts own the tracing
//! subscriber; the engine only emits.
//!
//! The pipeline, in order: contextual inference, notes mining, candidate
//! scoring, then the advisory layers (ambiguity, questions, heuristics,
//! safety, edibility). `assemble::identify` wires it together.

pub mod ambiguity;
pub mod assemble;
pub mod config;
pub mod heuristics;
pub mod inference;
pub mod notes;
pub mod questions;
pub mod safety;
pub mod scoring;

pub use ambiguity::detect_ambiguities;
pub use assemble::{identify, identify_with_builtins};
pub use config::{EngineConfig, ScoringWeights};
pub use heuristics::{find_applicable_heuristics, heuristic_actions};
pub use inference::infer;
pub use notes::{preprocess_notes, NotesAnalysis};
pub use questions::{field_prompt, select_questions};
pub use safety::{assess_edibility, build_safety_report, STANDING_ADVISORY};
pub use scoring::{score_all, score_genus};
