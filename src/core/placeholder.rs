/// Placeholder parsing and resolution.
///
/// A placeholder token has the shape
/// `category[:form]|category[:form]|...` where the selected alternative may
/// carry a comma-separated parameter list: `action:plural,person` or
/// `number,0,1000,2`. Alternatives are chosen first; only the chosen one's
/// parameters are read.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::concordancy::{resolve_action, resolve_noun, FormTag};
use crate::core::number::format_range;
use crate::core::random::{pick, RandomSource};
use crate::schema::action::Actor;
use crate::schema::lexicon::{Lexicon, Table};

/// Largest accepted number of fractional digits.
pub const MAX_PRECISION: usize = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceholderError {
    #[error("unrecognized placeholder category '{0}'")]
    UnrecognizedCategory(String),
    #[error("lexicon table '{0}' is empty")]
    EmptyTable(Table),
    #[error("malformed number placeholder '{token}': {reason}")]
    MalformedNumber { token: String, reason: String },
}

/// The category named before the `:` of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Predicate,
    Number,
    Subject,
    Establishment,
    Object,
    Action,
    Disease,
    Resource,
    Problem,
    Drug,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Predicate => "predicate",
            Self::Number => "number",
            Self::Subject => "subject",
            Self::Establishment => "establishment",
            Self::Object => "object",
            Self::Action => "action",
            Self::Disease => "disease",
            Self::Resource => "resource",
            Self::Problem => "problem",
            Self::Drug => "drug",
        }
    }
}

impl FromStr for Category {
    type Err = PlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "predicate" => Ok(Self::Predicate),
            "number" => Ok(Self::Number),
            "subject" => Ok(Self::Subject),
            "establishment" => Ok(Self::Establishment),
            "object" => Ok(Self::Object),
            "action" => Ok(Self::Action),
            "disease" => Ok(Self::Disease),
            "resource" => Ok(Self::Resource),
            "problem" => Ok(Self::Problem),
            "drug" => Ok(Self::Drug),
            other => Err(PlaceholderError::UnrecognizedCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed alternative of a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRequest<'a> {
    pub category: Category,
    pub form: FormTag,
    pub extras: Vec<&'a str>,
}

impl<'a> PlaceholderRequest<'a> {
    /// Parse a single alternative, e.g. `action:infinitive,person`.
    pub fn parse(alternative: &'a str) -> Result<Self, PlaceholderError> {
        let mut parameters = alternative.split(',');
        let main = parameters.next().unwrap_or_default();
        let (category, form) = match main.split_once(':') {
            Some((category, form)) => (category, FormTag::parse(form)),
            None => (main, FormTag::Default),
        };

        Ok(Self {
            category: category.parse()?,
            form,
            extras: parameters.collect(),
        })
    }

    /// The lexicon table this request draws from; `None` for numbers.
    pub fn table(&self) -> Option<Table> {
        match self.category {
            Category::Predicate => Some(Table::Predicates),
            Category::Number => None,
            Category::Subject => Some(Table::Subjects),
            Category::Establishment => Some(Table::Establishments),
            Category::Object => Some(Table::Objects),
            Category::Action => Some(match Actor::from_param(self.extras.first().copied()) {
                Actor::Person => Table::PersonActions,
                Actor::Establishment => Table::EstablishmentActions,
            }),
            Category::Disease => Some(Table::Diseases),
            Category::Resource => Some(Table::Resources),
            Category::Problem => Some(Table::Problems),
            Category::Drug => Some(Table::Drugs),
        }
    }

    /// Validate and read `min, max[, precision]` for a `number` request.
    pub fn number_params(&self, token: &str) -> Result<(f64, f64, usize), PlaceholderError> {
        number_params(token, &self.extras)
    }
}

/// Split a token into its `|` alternatives.
pub fn alternatives(token: &str) -> Vec<&str> {
    token.split('|').collect()
}

/// Resolve one placeholder token (delimiters already stripped) into text.
///
/// The returned fragment may itself contain placeholders.
pub fn resolve<S>(lexicon: &Lexicon, source: &mut S, token: &str) -> Result<String, PlaceholderError>
where
    S: RandomSource + ?Sized,
{
    let options = alternatives(token);
    let chosen = options[source.choose(options.len())];
    let request = PlaceholderRequest::parse(chosen)?;

    let text = match request.table() {
        Some(table) => draw(lexicon, source, table, request.form)?,
        None => {
            let (min, max, precision) = request.number_params(chosen)?;
            format_range(source, min, max, precision)
        }
    };

    tracing::trace!(
        target: "senado_generator::placeholder",
        token,
        category = %request.category,
        text = %text,
        "placeholder resolved"
    );

    Ok(text)
}

/// Draw one entry from `table`, inflected to `form` where the table has
/// inflections.
fn draw<S>(lexicon: &Lexicon, source: &mut S, table: Table, form: FormTag) -> Result<String, PlaceholderError>
where
    S: RandomSource + ?Sized,
{
    let text = match table {
        Table::Skeletons => pick(source, table, &lexicon.skeletons)?.clone(),
        Table::Predicates => pick(source, table, &lexicon.predicates)?.clone(),
        Table::Subjects => resolve_noun(pick(source, table, &lexicon.subjects)?, form).to_string(),
        Table::Objects => resolve_noun(pick(source, table, &lexicon.objects)?, form).to_string(),
        Table::Establishments => {
            resolve_noun(pick(source, table, &lexicon.establishments)?, form).to_string()
        }
        Table::PersonActions => {
            resolve_action(pick(source, table, &lexicon.person_actions)?, form).to_string()
        }
        Table::EstablishmentActions => {
            resolve_action(pick(source, table, &lexicon.establishment_actions)?, form).to_string()
        }
        Table::Resources => pick(source, table, &lexicon.resources)?.clone(),
        Table::Problems => pick(source, table, &lexicon.problems)?.clone(),
        Table::Diseases => pick(source, table, &lexicon.diseases)?.clone(),
        Table::Drugs => pick(source, table, &lexicon.drugs)?.clone(),
    };
    Ok(text)
}

/// Read `min, max[, precision]` from the extras of a `number` request.
fn number_params(token: &str, extras: &[&str]) -> Result<(f64, f64, usize), PlaceholderError> {
    let malformed = |reason: String| PlaceholderError::MalformedNumber {
        token: token.to_string(),
        reason,
    };
    let bound = |name: &str, raw: Option<&&str>| -> Result<f64, PlaceholderError> {
        let raw = raw
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| malformed(format!("missing {name}")))?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| malformed(format!("{name} '{raw}' is not a number")))
    };

    let min = bound("min", extras.first())?;
    let max = bound("max", extras.get(1))?;
    if min > max {
        return Err(malformed(format!("min {min} is greater than max {max}")));
    }

    let precision = match extras.get(2).map(|s| s.trim()) {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(|| malformed(format!("precision '{raw}' is not in 0..={MAX_PRECISION}")))?,
    };

    Ok((min, max, precision))
}
