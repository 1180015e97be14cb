/// Lei: generate random bills of law from the command line.
///
/// Usage: lei [--quantity <n>] [--seed <n>] [--lexicon <file.ron>] [--config <file.ron>]
///
/// The lexicon override defaults to the file named by `SENADO_LEXICON`
/// when `--lexicon` is not given.

use senado_generator::Generator;
use std::path::PathBuf;
use std::process;

/// Most laws a single request may ask for.
const MAX_QUANTITY: usize = 10;

const USAGE: &str =
    "Usage: lei [--quantity <n>] [--seed <n>] [--lexicon <file.ron>] [--config <file.ron>]";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut quantity = 1usize;
    let mut seed: Option<u64> = None;
    let mut lexicon_path = std::env::var("SENADO_LEXICON").ok().map(PathBuf::from);
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--quantity" | "-n") => {
                i += 1;
                quantity = value(&args, i, flag).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --quantity must be a positive integer");
                    process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = Some(value(&args, i, "--seed").parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an unsigned integer");
                    process::exit(1);
                }));
            }
            "--lexicon" => {
                i += 1;
                lexicon_path = Some(PathBuf::from(value(&args, i, "--lexicon")));
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(value(&args, i, "--config")));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let quantity = match checked_quantity(quantity) {
        Ok(quantity) => quantity,
        Err(message) => {
            tracing::warn!(target: "senado_generator::lei", quantity, "quantity rejected");
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let mut builder = Generator::builder();
    if let Some(ref path) = config_path {
        builder = builder.config_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config '{}': {}", path.display(), e);
            process::exit(1);
        });
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(ref path) = lexicon_path {
        builder = builder.overrides_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading lexicon '{}': {}", path.display(), e);
            process::exit(1);
        });
    }
    let mut generator = builder.build();

    match generator.generate_many(quantity) {
        Ok(laws) => println!("{}", render(&laws)),
        Err(e) => {
            tracing::error!(target: "senado_generator::lei", error = %e, "generation failed");
            eprintln!("Desculpe o transtorno: {}", e);
            process::exit(1);
        }
    }
}

/// The value following a flag, or exit when the flag ends the command line.
fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    }
}

/// Zero means "not given" and becomes one; more than [`MAX_QUANTITY`] is
/// refused with a user-facing message.
fn checked_quantity(requested: usize) -> Result<usize, String> {
    match requested {
        0 => Ok(1),
        n if n > MAX_QUANTITY => Err(format!(
            "Não é possível gerar mais de {} leis de uma vez",
            MAX_QUANTITY
        )),
        n => Ok(n),
    }
}

/// A single law prints bare; several go under a header, one per paragraph.
fn render(laws: &[String]) -> String {
    match laws {
        [law] => law.clone(),
        _ => format!("Novas leis geradas:\n\n{}", laws.join("\n\n")),
    }
}
