use serde::{Deserialize, Serialize};

/// Grammatical gender of a noun, kept so future renderers can agree
/// articles and adjectives with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    /// Nouns like "estudante" that take either gender.
    Either,
}

/// Anything that inflects for number.
pub trait Inflected {
    fn singular(&self) -> &str;
    fn plural(&self) -> &str;
}

/// A person category or concept with number inflection ("pessoa" /
/// "pessoas"). Used for subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    pub singular: String,
    pub plural: String,
    pub gender: Gender,
}

impl Noun {
    pub fn new(singular: &str, plural: &str, gender: Gender) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
            gender,
        }
    }
}

impl Inflected for Noun {
    fn singular(&self) -> &str {
        &self.singular
    }

    fn plural(&self) -> &str {
        &self.plural
    }
}

/// A noun carrying the definite article that matches its gender. Used for
/// objects and establishments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticledNoun {
    pub singular: String,
    pub plural: String,
    pub gender: Gender,
    pub article: String,
}

impl ArticledNoun {
    pub fn new(singular: &str, plural: &str, gender: Gender, article: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
            gender,
            article: article.to_string(),
        }
    }
}

impl Inflected for ArticledNoun {
    fn singular(&self) -> &str {
        &self.singular
    }

    fn plural(&self) -> &str {
        &self.plural
    }
}
