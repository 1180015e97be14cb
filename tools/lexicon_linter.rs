/// Lexicon Linter: validates a lexicon override against the built-in tables.
///
/// Usage: lexicon_linter [<override.ron>]
///
/// With no file, lints the built-in lexicon.

use senado_generator::core::lint::lint;
use senado_generator::schema::lexicon::{Lexicon, LexiconOverride};
use std::path::Path;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: lexicon_linter [<override.ron>]");
        process::exit(0);
    }

    let lexicon = match args.get(1) {
        Some(path) => match LexiconOverride::load_from_ron(Path::new(path)) {
            Ok(overrides) => {
                let tables: Vec<&str> = overrides.overridden().iter().map(|t| t.name()).collect();
                println!("Loaded override for tables: {}", tables.join(", "));
                Lexicon::from_override(overrides)
            }
            Err(e) => {
                eprintln!("ERROR: Failed to load lexicon file: {}", e);
                process::exit(1);
            }
        },
        None => {
            println!("Linting the built-in lexicon");
            Lexicon::default()
        }
    };

    let report = lint(&lexicon);

    println!("\n=== Lexicon Lint Report ===\n");

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }

    for error in &report.errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    if report.is_clean() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}
