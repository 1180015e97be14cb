//! Data model: grammatical entries and the lexicon that groups them.

pub mod action;
mod defaults;
pub mod lexicon;
pub mod noun;
