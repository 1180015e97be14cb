/// Lexicon linting: static checks over every template in a lexicon.
///
/// Finds what would otherwise only surface at generation time: unknown
/// categories, malformed templates and numbers, empty tables that are
/// reachable from the skeletons, and tables that can expand into
/// themselves.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::placeholder::{alternatives, Category, PlaceholderRequest};
use crate::core::template::{scan, Segment};
use crate::schema::lexicon::{Lexicon, Table};

/// Tables with fewer entries than this get a variety warning.
pub const MIN_RECOMMENDED_ENTRIES: usize = 3;

/// Errors and warnings found in a lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

type References = FxHashMap<Table, FxHashSet<Table>>;

/// Run every check over `lexicon`.
pub fn lint(lexicon: &Lexicon) -> LintReport {
    let mut report = LintReport::default();
    let references = collect_references(lexicon, &mut report);
    let reachable = reachable_from(&references, Table::Skeletons);

    for table in Table::ALL {
        let len = lexicon.len(table);
        if !reachable.contains(&table) {
            report.warnings.push(format!(
                "Table '{}' is never reached from the skeletons",
                table
            ));
            continue;
        }
        if len == 0 {
            report
                .errors
                .push(format!("Table '{}' is referenced but empty", table));
        } else if len < MIN_RECOMMENDED_ENTRIES {
            report.warnings.push(format!(
                "Table '{}' has only {} entries (minimum {} recommended)",
                table, len, MIN_RECOMMENDED_ENTRIES
            ));
        }
    }

    for table in Table::ALL {
        if !reachable.contains(&table) {
            continue;
        }
        let texts = lexicon.texts(table);
        let all_self_referencing = !texts.is_empty()
            && texts
                .iter()
                .all(|text| direct_tables(text).contains(&table));
        if all_self_referencing {
            report.errors.push(format!(
                "Table '{}' has no non-recursive entry (infinite expansion)",
                table
            ));
        } else if can_reach_itself(&references, table) {
            report.warnings.push(format!(
                "Table '{}' can expand back into itself; termination is probabilistic",
                table
            ));
        }
    }

    report
}

/// Record, per table, the tables its entries reference, reporting
/// malformed entries along the way.
fn collect_references(lexicon: &Lexicon, report: &mut LintReport) -> References {
    let mut references = References::default();

    for table in Table::ALL {
        let targets = references.entry(table).or_default();
        for text in lexicon.texts(table) {
            let segments = match scan(text) {
                Ok(segments) => segments,
                Err(e) => {
                    report
                        .errors
                        .push(format!("Table '{}' entry '{}': {}", table, text, e));
                    continue;
                }
            };
            for segment in segments {
                let Segment::Placeholder(token) = segment else {
                    continue;
                };
                for alternative in alternatives(token) {
                    match PlaceholderRequest::parse(alternative) {
                        Ok(request) => {
                            if request.category == Category::Number {
                                if let Err(e) = request.number_params(alternative) {
                                    report
                                        .errors
                                        .push(format!("Table '{}' entry '{}': {}", table, text, e));
                                }
                            }
                            targets.extend(request.table());
                        }
                        Err(e) => report
                            .errors
                            .push(format!("Table '{}' entry '{}': {}", table, text, e)),
                    }
                }
            }
        }
    }

    references
}

/// Tables referenced by the placeholders of one text, ignoring errors.
fn direct_tables(text: &str) -> FxHashSet<Table> {
    scan(text)
        .into_iter()
        .flatten()
        .filter_map(|segment| match segment {
            Segment::Placeholder(token) => Some(token),
            Segment::Literal(_) => None,
        })
        .flat_map(alternatives)
        .filter_map(|alternative| PlaceholderRequest::parse(alternative).ok())
        .filter_map(|request| request.table())
        .collect()
}

fn reachable_from(references: &References, start: Table) -> FxHashSet<Table> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![start];
    while let Some(table) = stack.pop() {
        if seen.insert(table) {
            if let Some(targets) = references.get(&table) {
                stack.extend(targets.iter().copied());
            }
        }
    }
    seen
}

fn can_reach_itself(references: &References, table: Table) -> bool {
    references
        .get(&table)
        .into_iter()
        .flatten()
        .any(|next| reachable_from(references, *next).contains(&table))
}
