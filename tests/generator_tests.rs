/// Generator integration tests: end-to-end law generation over the
/// built-in lexicon and partial overrides.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rustc_hash::FxHashSet;
use senado_generator::core::generator::GenerationError;
use senado_generator::core::placeholder::PlaceholderError;
use senado_generator::schema::noun::{Gender, Noun};
use senado_generator::{FixedSource, Generator, Lexicon, LexiconOverride};

fn assert_fully_resolved(law: &str) {
    assert!(
        !law.contains('{') && !law.contains('}'),
        "unresolved placeholder in: {}",
        law
    );
    assert!(!law.trim().is_empty());
}

#[test]
fn default_lexicon_resolves_every_placeholder() {
    for seed in 0..200 {
        let mut generator = Generator::builder().seed(seed).build();
        let law = generator.generate_one().unwrap();
        assert_fully_resolved(&law);
    }
}

#[test]
fn every_default_skeleton_expands() {
    let lexicon = Lexicon::default();
    for (i, skeleton) in lexicon.skeletons.iter().enumerate() {
        let prefix = &skeleton[..skeleton.find('{').unwrap()];
        for seed in 0..20 {
            let mut generator = Generator::builder().seed(seed * 31 + i as u64).build();
            let law = generator.expand(skeleton).unwrap();
            assert_fully_resolved(&law);
            assert!(law.starts_with(prefix), "'{}' does not start with '{}'", law, prefix);
        }
    }
}

#[test]
fn bill_number_lands_in_range() {
    let mut generator = Generator::builder().seed(7).build();
    for _ in 0..50 {
        let law = generator
            .expand("AGORA É LEI! Senado aprova PL{number,1000,99999,0}, que {predicate}")
            .unwrap();
        let digits = law
            .trim_start_matches("AGORA É LEI! Senado aprova PL")
            .split(',')
            .next()
            .unwrap();
        let number: u32 = digits.parse().unwrap();
        assert!((1000..99999).contains(&number), "{} out of range", number);
    }
}

#[test]
fn same_seed_same_laws() {
    let a = Generator::builder().seed(2024).build().generate_many(10).unwrap();
    let b = Generator::builder().seed(2024).build().generate_many(10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn noun_forms_follow_tags() {
    let mut generator = Generator::with_source(Lexicon::default(), FixedSource::first());
    assert_eq!(
        generator.expand("{subject:singular} vs {subject:plural}").unwrap(),
        "pessoa vs pessoas"
    );
    assert_eq!(generator.expand("{subject}").unwrap(), "pessoas");
}

#[test]
fn action_forms_follow_tags() {
    let mut generator = Generator::with_source(Lexicon::default(), FixedSource::first());
    assert_eq!(
        generator.expand("{action:thirdPerson,person}").unwrap(),
        "utilize álcoois em gel dentro de restaurantes em horário comercial"
    );
    assert_eq!(
        generator.expand("{action:plural,person}").unwrap(),
        "utilizem álcoois em gel dentro de restaurantes em horário comercial"
    );
}

#[test]
fn action_without_actor_uses_establishment_table() {
    let mut generator = Generator::with_source(Lexicon::default(), FixedSource::first());
    assert_eq!(
        generator.expand("{action}").unwrap(),
        "disponibilizar álcoois em gel grátis para pessoas"
    );
}

#[test]
fn alternation_picks_one_branch() {
    let mut first = Generator::with_source(Lexicon::default(), FixedSource::first());
    let mut last = Generator::with_source(Lexicon::default(), FixedSource::last());
    assert_eq!(first.expand("{drug|disease}").unwrap(), "maconha");
    let disease = last.expand("{drug|disease}").unwrap();
    assert!(Lexicon::default().diseases.contains(&disease));
}

#[test]
fn override_replaces_only_named_tables() {
    let mut generator = Generator::builder()
        .overrides(LexiconOverride {
            subjects: Some(vec![Noun::new("vereador", "vereadores", Gender::Masculine)]),
            ..Default::default()
        })
        .build_with_source(FixedSource::first());
    assert_eq!(
        generator.generate_one().unwrap(),
        "Projeto de lei obriga vereadores a utilizar álcoois em gel dentro de restaurantes em horário comercial"
    );
    assert_eq!(generator.lexicon().objects, Lexicon::default().objects);
}

#[test]
fn unknown_category_is_reported() {
    let mut generator = Generator::builder().seed(1).build();
    let err = generator.expand("Lei {bogus}").unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Placeholder(PlaceholderError::UnrecognizedCategory(ref name)) if name == "bogus"
    ));
    assert_eq!(
        err.to_string(),
        "placeholder error: unrecognized placeholder category 'bogus'"
    );
}

#[test]
fn generate_many_returns_requested_count() {
    let mut generator = Generator::builder().seed(5).build();
    let laws = generator.generate_many(5).unwrap();
    assert_eq!(laws.len(), 5);
    for law in &laws {
        assert_fully_resolved(law);
    }
}

#[test]
fn output_varies_across_draws() {
    let mut generator = Generator::builder().seed(99).build();
    let laws: FxHashSet<String> = generator.generate_many(500).unwrap().into_iter().collect();
    assert!(laws.len() > 100, "only {} distinct laws", laws.len());
}

#[test]
fn independent_generators_on_threads() {
    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Generator::builder().seed(11).build().generate_many(3)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });
    for laws in &results[1..] {
        assert_eq!(laws, &results[0]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_seed_yields_a_resolved_law(seed in any::<u64>()) {
        let law = Generator::builder().seed(seed).build().generate_one().unwrap();
        prop_assert!(
            !law.contains('{') && !law.contains('}'),
            "unresolved placeholder in: {}",
            law
        );
    }
}
