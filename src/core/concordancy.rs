/// Concordancy: picking the inflected form a sentence frame asks for.

use crate::schema::action::Action;
use crate::schema::noun::Inflected;

/// The form requested after the `:` of a placeholder.
///
/// Parsing never fails: unknown tags become [`FormTag::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormTag {
    #[default]
    Default,
    Singular,
    Plural,
    Infinitive,
    ThirdPerson,
}

impl FormTag {
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "singular" => Self::Singular,
            "plural" => Self::Plural,
            "infinitive" => Self::Infinitive,
            "thirdPerson" | "third_person" => Self::ThirdPerson,
            _ => Self::Default,
        }
    }
}

/// Nouns default to the plural, the register bills are written in.
pub fn resolve_noun<N: Inflected + ?Sized>(noun: &N, form: FormTag) -> &str {
    match form {
        FormTag::Singular => noun.singular(),
        FormTag::Plural | FormTag::Default | FormTag::Infinitive | FormTag::ThirdPerson => {
            noun.plural()
        }
    }
}

/// Actions default to the infinitive.
pub fn resolve_action(action: &Action, form: FormTag) -> &str {
    match form {
        FormTag::ThirdPerson => &action.third_person,
        FormTag::Plural => &action.plural,
        FormTag::Infinitive | FormTag::Default | FormTag::Singular => &action.infinitive,
    }
}
