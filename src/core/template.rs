/// Template scanning: splitting text into literals and `{...}` placeholders.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedDelimiter { position: usize },
    #[error("unmatched closing brace at byte {position}")]
    UnmatchedClose { position: usize },
    #[error("nested opening brace at byte {position}")]
    NestedDelimiter { position: usize },
    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },
}

/// A segment of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, emitted as-is.
    Literal(&'a str),
    /// The content between one `{` and the next `}`, delimiters stripped.
    Placeholder(&'a str),
}

/// Split a template into segments.
///
/// Placeholders are the shortest span from a `{` to the next `}`. Braces
/// have no escape syntax: a `{` inside a placeholder, a `}` outside one,
/// or a `{` that is never closed are errors.
pub fn scan(input: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (i, c) in input.char_indices() {
        match (c, open) {
            ('{', None) => {
                if literal_start < i {
                    segments.push(Segment::Literal(&input[literal_start..i]));
                }
                open = Some(i);
            }
            ('{', Some(_)) => return Err(TemplateError::NestedDelimiter { position: i }),
            ('}', Some(start)) => {
                if start + 1 == i {
                    return Err(TemplateError::EmptyPlaceholder { position: start });
                }
                segments.push(Segment::Placeholder(&input[start + 1..i]));
                open = None;
                literal_start = i + 1;
            }
            ('}', None) => return Err(TemplateError::UnmatchedClose { position: i }),
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(TemplateError::UnclosedDelimiter { position: start });
    }
    if literal_start < input.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }

    Ok(segments)
}

/// Whether the text contains any placeholder delimiter at all.
pub fn has_placeholders(input: &str) -> bool {
    input.contains(['{', '}'])
}
