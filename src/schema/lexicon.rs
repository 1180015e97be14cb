/// Lexicon: the data tables the generator draws from, and the partial
/// overrides that replace them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use super::action::Action;
use super::defaults;
use super::noun::{ArticledNoun, Noun};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Names one table of a [`Lexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Skeletons,
    Predicates,
    Subjects,
    Objects,
    Establishments,
    PersonActions,
    EstablishmentActions,
    Resources,
    Problems,
    Diseases,
    Drugs,
}

impl Table {
    pub const ALL: [Table; 11] = [
        Table::Skeletons,
        Table::Predicates,
        Table::Subjects,
        Table::Objects,
        Table::Establishments,
        Table::PersonActions,
        Table::EstablishmentActions,
        Table::Resources,
        Table::Problems,
        Table::Diseases,
        Table::Drugs,
    ];

    /// The field name used for this table in RON override files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skeletons => "skeletons",
            Self::Predicates => "predicates",
            Self::Subjects => "subjects",
            Self::Objects => "objects",
            Self::Establishments => "establishments",
            Self::PersonActions => "person_actions",
            Self::EstablishmentActions => "establishment_actions",
            Self::Resources => "resources",
            Self::Problems => "problems",
            Self::Diseases => "diseases",
            Self::Drugs => "drugs",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied replacement tables. Every field left as `None` falls
/// back to the built-in table; a `Some` table replaces the built-in one
/// wholesale, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconOverride {
    pub skeletons: Option<Vec<String>>,
    pub predicates: Option<Vec<String>>,
    pub subjects: Option<Vec<Noun>>,
    pub objects: Option<Vec<ArticledNoun>>,
    pub establishments: Option<Vec<ArticledNoun>>,
    pub person_actions: Option<Vec<Action>>,
    pub establishment_actions: Option<Vec<Action>>,
    pub resources: Option<Vec<String>>,
    pub problems: Option<Vec<String>>,
    pub diseases: Option<Vec<String>>,
    pub drugs: Option<Vec<String>>,
}

impl LexiconOverride {
    /// Load an override from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<LexiconOverride, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let overrides = Self::parse_ron(&contents)?;
        tracing::info!(
            target: "senado_generator::lexicon",
            path = %path.display(),
            tables = overrides.overridden().len(),
            "lexicon override loaded"
        );
        Ok(overrides)
    }

    /// Parse an override from a RON string.
    pub fn parse_ron(input: &str) -> Result<LexiconOverride, LexiconError> {
        Ok(ron::from_str(input)?)
    }

    /// Tables this override replaces.
    pub fn overridden(&self) -> Vec<Table> {
        Table::ALL
            .into_iter()
            .filter(|table| match table {
                Table::Skeletons => self.skeletons.is_some(),
                Table::Predicates => self.predicates.is_some(),
                Table::Subjects => self.subjects.is_some(),
                Table::Objects => self.objects.is_some(),
                Table::Establishments => self.establishments.is_some(),
                Table::PersonActions => self.person_actions.is_some(),
                Table::EstablishmentActions => self.establishment_actions.is_some(),
                Table::Resources => self.resources.is_some(),
                Table::Problems => self.problems.is_some(),
                Table::Diseases => self.diseases.is_some(),
                Table::Drugs => self.drugs.is_some(),
            })
            .collect()
    }
}

/// The full set of tables a generator draws from. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    pub skeletons: Vec<String>,
    pub predicates: Vec<String>,
    pub subjects: Vec<Noun>,
    pub objects: Vec<ArticledNoun>,
    pub establishments: Vec<ArticledNoun>,
    pub person_actions: Vec<Action>,
    pub establishment_actions: Vec<Action>,
    pub resources: Vec<String>,
    pub problems: Vec<String>,
    pub diseases: Vec<String>,
    pub drugs: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_override(LexiconOverride::default())
    }
}

impl Lexicon {
    /// Resolve each table from the override, or from the built-in data
    /// when the override leaves it out.
    pub fn from_override(overrides: LexiconOverride) -> Self {
        Self {
            skeletons: overrides
                .skeletons
                .unwrap_or_else(|| strings(defaults::SKELETONS)),
            predicates: overrides
                .predicates
                .unwrap_or_else(|| strings(defaults::PREDICATES)),
            subjects: overrides.subjects.unwrap_or_else(|| {
                defaults::SUBJECTS
                    .iter()
                    .map(|&(singular, plural, gender)| Noun::new(singular, plural, gender))
                    .collect()
            }),
            objects: overrides
                .objects
                .unwrap_or_else(|| articled(defaults::OBJECTS)),
            establishments: overrides
                .establishments
                .unwrap_or_else(|| articled(defaults::ESTABLISHMENTS)),
            person_actions: overrides
                .person_actions
                .unwrap_or_else(|| actions(defaults::PERSON_ACTIONS)),
            establishment_actions: overrides
                .establishment_actions
                .unwrap_or_else(|| actions(defaults::ESTABLISHMENT_ACTIONS)),
            resources: overrides
                .resources
                .unwrap_or_else(|| strings(defaults::RESOURCES)),
            problems: overrides
                .problems
                .unwrap_or_else(|| strings(defaults::PROBLEMS)),
            diseases: overrides
                .diseases
                .unwrap_or_else(|| strings(defaults::DISEASES)),
            drugs: overrides.drugs.unwrap_or_else(|| strings(defaults::DRUGS)),
        }
    }

    /// Number of entries in a table.
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Skeletons => self.skeletons.len(),
            Table::Predicates => self.predicates.len(),
            Table::Subjects => self.subjects.len(),
            Table::Objects => self.objects.len(),
            Table::Establishments => self.establishments.len(),
            Table::PersonActions => self.person_actions.len(),
            Table::EstablishmentActions => self.establishment_actions.len(),
            Table::Resources => self.resources.len(),
            Table::Problems => self.problems.len(),
            Table::Diseases => self.diseases.len(),
            Table::Drugs => self.drugs.len(),
        }
    }

    /// Every raw string stored in a table, all inflections included. Used
    /// to inspect which placeholders a table can introduce.
    pub fn texts(&self, table: Table) -> Vec<&str> {
        fn nouns<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<&'a str> {
            items.flat_map(|(s, p)| [s, p]).collect()
        }
        fn verbs(items: &[Action]) -> Vec<&str> {
            items
                .iter()
                .flat_map(|a| [&a.infinitive[..], &a.third_person[..], &a.plural[..]])
                .collect()
        }

        match table {
            Table::Skeletons => self.skeletons.iter().map(String::as_str).collect(),
            Table::Predicates => self.predicates.iter().map(String::as_str).collect(),
            Table::Subjects => nouns(
                self.subjects
                    .iter()
                    .map(|n| (n.singular.as_str(), n.plural.as_str())),
            ),
            Table::Objects => nouns(
                self.objects
                    .iter()
                    .map(|n| (n.singular.as_str(), n.plural.as_str())),
            ),
            Table::Establishments => nouns(
                self.establishments
                    .iter()
                    .map(|n| (n.singular.as_str(), n.plural.as_str())),
            ),
            Table::PersonActions => verbs(&self.person_actions),
            Table::EstablishmentActions => verbs(&self.establishment_actions),
            Table::Resources => self.resources.iter().map(String::as_str).collect(),
            Table::Problems => self.problems.iter().map(String::as_str).collect(),
            Table::Diseases => self.diseases.iter().map(String::as_str).collect(),
            Table::Drugs => self.drugs.iter().map(String::as_str).collect(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn articled(items: &[(&str, &str, super::noun::Gender, &str)]) -> Vec<ArticledNoun> {
    items
        .iter()
        .map(|&(singular, plural, gender, article)| {
            ArticledNoun::new(singular, plural, gender, article)
        })
        .collect()
}

fn actions(items: &[(&str, &str, &str)]) -> Vec<Action> {
    items
        .iter()
        .map(|&(infinitive, third_person, plural)| Action::new(infinitive, third_person, plural))
        .collect()
}
