use serde::{Deserialize, Serialize};

/// A verb phrase in the three moods the sentence frames need:
/// declarative infinitive ("fumar"), singular subjunctive/imperative
/// ("fume") and plural ("fumem").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub infinitive: String,
    pub third_person: String,
    pub plural: String,
}

impl Action {
    pub fn new(infinitive: &str, third_person: &str, plural: &str) -> Self {
        Self {
            infinitive: infinitive.to_string(),
            third_person: third_person.to_string(),
            plural: plural.to_string(),
        }
    }
}

/// Who performs an action; selects between the person and establishment
/// action tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Person,
    Establishment,
}

impl Actor {
    /// Only the literal `person` selects people; anything else, including
    /// a missing parameter, means establishments.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("person") => Self::Person,
            _ => Self::Establishment,
        }
    }
}
