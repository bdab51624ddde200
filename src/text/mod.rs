//! Text utilities shared by the normalizer and the layout engine.
//!
//! These are small, independently testable pieces: markup stripping,
//! line-classification predicates, and splitting of generative-model output
//! into its JSON and prose halves.

pub mod markup;
pub mod model_output;
pub mod predicates;

pub use markup::strip_markup;
pub use model_output::split_model_output;
pub use predicates::{is_placeholder_value, is_section_header_line, split_label_value};
