/// The law generator: skeleton selection and placeholder expansion.
///
/// Expansion works in passes. Each pass scans the current text and
/// replaces every placeholder with its resolved fragment; fragments may
/// introduce new placeholders, so passes repeat until the text is stable.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::placeholder::{self, PlaceholderError};
use crate::core::random::{pick, RandomSource};
use crate::core::template::{self, Segment, TemplateError};
use crate::schema::lexicon::{Lexicon, LexiconError, LexiconOverride, Table};

/// Default limit on expansion passes per law.
pub const DEFAULT_MAX_PASSES: usize = 64;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("placeholder error: {0}")]
    Placeholder(#[from] PlaceholderError),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("expansion did not settle after {passes} passes")]
    DepthExceeded { passes: usize },
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Tunables for a [`Generator`], loadable from RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Expansion passes allowed before giving up with `DepthExceeded`.
    pub max_passes: usize,
    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_ron(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

/// Generates laws from a [`Lexicon`]. Built via `Generator::builder()`.
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    lexicon: Lexicon,
    source: R,
    max_passes: usize,
}

/// Builder for constructing a [`Generator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    lexicon: Option<Lexicon>,
    config: GeneratorConfig,
}

impl Generator<StdRng> {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }
}

impl<R: RandomSource> Generator<R> {
    /// Build a generator over an explicit random source.
    pub fn with_source(lexicon: Lexicon, source: R) -> Self {
        Self {
            lexicon,
            source,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Generate one fully resolved law.
    pub fn generate_one(&mut self) -> Result<String, GenerationError> {
        let skeleton = pick(&mut self.source, Table::Skeletons, &self.lexicon.skeletons)?.clone();
        self.expand(&skeleton)
    }

    /// Generate `count` independent laws, in generation order.
    pub fn generate_many(&mut self, count: usize) -> Result<Vec<String>, GenerationError> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    /// Expand every placeholder in `text` until none remain.
    pub fn expand(&mut self, text: &str) -> Result<String, GenerationError> {
        let mut current = text.to_string();
        let mut passes = 0;

        loop {
            if !template::has_placeholders(&current) {
                tracing::debug!(
                    target: "senado_generator::generator",
                    passes,
                    law = %current,
                    "law generated"
                );
                return Ok(current);
            }

            let segments = template::scan(&current)?;
            if passes == self.max_passes {
                return Err(GenerationError::DepthExceeded { passes });
            }

            let mut next = String::with_capacity(current.len());
            for segment in segments {
                match segment {
                    Segment::Literal(text) => next.push_str(text),
                    Segment::Placeholder(token) => {
                        next.push_str(&placeholder::resolve(&self.lexicon, &mut self.source, token)?)
                    }
                }
            }

            current = next;
            passes += 1;
        }
    }
}

impl GeneratorBuilder {
    /// Use a fully built lexicon.
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Use the built-in lexicon with some tables replaced.
    pub fn overrides(mut self, overrides: LexiconOverride) -> Self {
        self.lexicon = Some(Lexicon::from_override(overrides));
        self
    }

    /// Load table overrides from a RON file.
    pub fn overrides_file(self, path: &Path) -> Result<Self, GenerationError> {
        let overrides = LexiconOverride::load_from_ron(path)?;
        Ok(self.overrides(overrides))
    }

    /// Load tunables from a RON file.
    pub fn config_file(self, path: &Path) -> Result<Self, GenerationError> {
        let config = GeneratorConfig::load_from_ron(path)?;
        Ok(self.config(config))
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.config.max_passes = max_passes;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build over `StdRng`, seeded from the config or from entropy.
    pub fn build(self) -> Generator<StdRng> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_source(rng)
    }

    /// Build over a caller-provided random source. Any configured seed is
    /// ignored.
    pub fn build_with_source<R: RandomSource>(self, source: R) -> Generator<R> {
        Generator {
            lexicon: self.lexicon.unwrap_or_default(),
            source,
            max_passes: self.config.max_passes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedSource;
    use crate::schema::noun::{Gender, Noun};
    use pretty_assertions::assert_eq;

    fn fixed(overrides: LexiconOverride) -> Generator<FixedSource> {
        Generator::builder()
            .overrides(overrides)
            .build_with_source(FixedSource::first())
    }

    #[test]
    fn default_regression_oracle() {
        let mut generator = Generator::with_source(Lexicon::default(), FixedSource::first());
        assert_eq!(
            generator.generate_one().unwrap(),
            "Projeto de lei obriga pessoas a utilizar álcoois em gel dentro de restaurantes em horário comercial"
        );
    }

    #[test]
    fn expansion_reaches_nested_placeholders() {
        let mut generator = fixed(LexiconOverride {
            skeletons: Some(vec!["Lei {predicate}".to_string()]),
            predicates: Some(vec!["sobre {problem}".to_string()]),
            problems: Some(vec!["tráfico de {drug:singular}".to_string()]),
            drugs: Some(vec!["café".to_string()]),
            ..Default::default()
        });
        assert_eq!(generator.generate_one().unwrap(), "Lei sobre tráfico de café");
    }

    #[test]
    fn unknown_category_fails() {
        let mut generator = fixed(LexiconOverride {
            skeletons: Some(vec!["Lei {bogus}".to_string()]),
            ..Default::default()
        });
        let err = generator.generate_one().unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Placeholder(PlaceholderError::UnrecognizedCategory(ref name)) if name == "bogus"
        ));
    }

    #[test]
    fn empty_skeletons_fail() {
        let mut generator = fixed(LexiconOverride {
            skeletons: Some(vec![]),
            ..Default::default()
        });
        assert!(matches!(
            generator.generate_one(),
            Err(GenerationError::Placeholder(PlaceholderError::EmptyTable(Table::Skeletons)))
        ));
    }

    #[test]
    fn cyclic_lexicon_hits_pass_budget() {
        let mut generator = Generator::builder()
            .overrides(LexiconOverride {
                skeletons: Some(vec!["{problem}".to_string()]),
                problems: Some(vec!["mais {problem}".to_string()]),
                ..Default::default()
            })
            .max_passes(10)
            .build_with_source(FixedSource::first());
        assert!(matches!(
            generator.generate_one(),
            Err(GenerationError::DepthExceeded { passes: 10 })
        ));
    }

    #[test]
    fn pass_budget_counts_passes_not_placeholders() {
        let mut generator = Generator::builder()
            .overrides(LexiconOverride {
                subjects: Some(vec![Noun::new("juiz", "juízes", Gender::Masculine)]),
                ..Default::default()
            })
            .max_passes(1)
            .build_with_source(FixedSource::first());
        assert_eq!(
            generator.expand("{subject} {subject:singular} {subject}").unwrap(),
            "juízes juiz juízes"
        );
    }

    #[test]
    fn stray_delimiter_in_fragment_fails() {
        let mut generator = fixed(LexiconOverride {
            skeletons: Some(vec!["Lei {resource}".to_string()]),
            resources: Some(vec!["verba } solta".to_string()]),
            ..Default::default()
        });
        assert!(matches!(
            generator.generate_one(),
            Err(GenerationError::Template(TemplateError::UnmatchedClose { .. }))
        ));
    }

    #[test]
    fn generate_many_preserves_count() {
        let mut generator = Generator::builder().seed(3).build();
        let laws = generator.generate_many(5).unwrap();
        assert_eq!(laws.len(), 5);
        assert!(laws.iter().all(|law| !law.is_empty()));
        assert!(generator.generate_many(0).unwrap().is_empty());
    }

    #[test]
    fn same_seed_same_laws() {
        let a = Generator::builder().seed(42).build().generate_many(3).unwrap();
        let b = Generator::builder().seed(42).build().generate_many(3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn builder_defaults() {
        let generator = Generator::builder().build();
        assert_eq!(generator.max_passes(), DEFAULT_MAX_PASSES);
        assert_eq!(generator.lexicon(), &Lexicon::default());
    }

    #[test]
    fn config_from_ron_fills_defaults() {
        let config: GeneratorConfig = ron::from_str("(seed: Some(9))").unwrap();
        assert_eq!(config.max_passes, DEFAULT_MAX_PASSES);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn config_file_errors_are_config_errors() {
        let missing = GeneratorConfig::load_from_ron(Path::new("tests/fixtures/missing_config.ron"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
        assert!(matches!(
            Generator::builder().config_file(Path::new("tests/fixtures/missing_config.ron")),
            Err(GenerationError::Config(ConfigError::Io(_)))
        ));

        let err = ConfigError::from(
            ron::from_str::<GeneratorConfig>("(max_passes: \"many\")").unwrap_err(),
        );
        assert!(GenerationError::from(err)
            .to_string()
            .starts_with("config error: RON deserialization error"));
    }
}
