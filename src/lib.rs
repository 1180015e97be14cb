//! Senado Generator: procedural bills of law.
//!
//! Expands root sentence templates into absurd but grammatical bills by
//! recursively substituting `{placeholder}` tokens with entries from a
//! swappable lexicon, inflected to agree with the surrounding sentence.

pub mod core;
pub mod schema;

pub use crate::core::generator::{
    ConfigError, GenerationError, Generator, GeneratorBuilder, GeneratorConfig,
};
pub use crate::core::random::{FixedSource, RandomSource};
pub use crate::schema::lexicon::{Lexicon, LexiconOverride};
