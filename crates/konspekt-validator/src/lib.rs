//! Konspekt Schema Validator
//!
//! Enforces the per-profile field contract on generated results before
//! they are allowed to reach storage.
//!
//! - `digest_topics` / `mentor_session`: required top-level keys must be
//!   present; extra keys are tolerated
//! - `lesson_analysis`: exact key-set match plus per-field structural and
//!   numeric checks; the first violation encountered wins
//!
//! # Examples
//!
//! ```
//! use konspekt_domain::Profile;
//! use konspekt_validator::validate_result;
//! use serde_json::json;
//!
//! let result = json!({
//!     "topics": ["Пайплайн обработки"],
//!     "summary": "Краткое содержание",
//!     "metrics": {"word_count": 120, "chunk_count": 1},
//! });
//! assert!(validate_result(Profile::DigestTopics, &result).is_ok());
//! ```

#![warn(missing_docs)]

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{validate_result, LESSON_REQUIRED_FIELDS};
