use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use spell_charts::animation::{TransitionConfig, TransitionEngine};
use spell_charts::core::{ChartDimensions, Coordinate, LinearScale, Margins};
use spell_charts::spells::{
    BookIndex, SortMode, SpellCatalog, SpellRecord, SpellType, aggregate, list_unique_spells,
};

const SPELL_NAMES: [&str; 6] = ["Accio", "Lumos", "Nox", "Reparo", "Stupefy", "(Obliviate)"];

fn catalog_strategy() -> impl Strategy<Value = SpellCatalog> {
    prop::collection::vec(
        prop::collection::vec((0usize..SPELL_NAMES.len(), 0u32..500), 0..8),
        1..=7,
    )
    .prop_map(|books| {
        let mut catalog = SpellCatalog::new();
        for (index, records) in books.into_iter().enumerate() {
            let book = BookIndex::new(index as u8 + 1).expect("book in range");
            let records = records
                .into_iter()
                .map(|(name, mentions)| {
                    SpellRecord::new(SPELL_NAMES[name], SpellType::Charm, "", mentions)
                })
                .collect();
            catalog.insert_book(book, records);
        }
        catalog
    })
}

proptest! {
    #[test]
    fn scale_invert_round_trips(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.5f64..5_000.0,
        range_start in -2_000.0f64..2_000.0,
        range_span in prop_oneof![-2_000.0f64..-1.0, 1.0f64..2_000.0],
        value in -20_000.0f64..20_000.0
    ) {
        let scale = LinearScale::new(
            (domain_start, domain_start + domain_span),
            (range_start, range_start + range_span),
        ).expect("valid scale");

        let recovered = scale.invert(scale.scale(value)).expect("invert");
        prop_assert!((recovered - value).abs() <= 1e-6 * value.abs().max(1.0));
    }

    #[test]
    fn bounded_dimensions_are_never_negative(
        width in -1_000.0f64..5_000.0,
        height in -1_000.0f64..5_000.0,
        top in 0.0f64..400.0,
        bottom in 0.0f64..400.0,
        left in 0.0f64..400.0,
        right in 0.0f64..400.0
    ) {
        let dims = ChartDimensions::compute(width, height, Margins::new(top, bottom, left, right));
        prop_assert!(dims.bounded_width >= 0.0);
        prop_assert!(dims.bounded_height >= 0.0);
        prop_assert!(dims.bounded_width <= dims.width);
        prop_assert!(dims.bounded_height <= dims.height);
    }

    #[test]
    fn aggregate_is_unique_and_sums_exactly(catalog in catalog_strategy()) {
        let mut expected: HashMap<String, u64> = HashMap::new();
        for (_, records) in catalog.books() {
            for record in records {
                *expected.entry(record.spell.clone()).or_default() += u64::from(record.mentions);
            }
        }

        let aggregated = aggregate(&catalog);
        prop_assert_eq!(aggregated.len(), expected.len());
        for record in &aggregated {
            prop_assert_eq!(Some(&record.mentions), expected.get(&record.spell));
        }
    }

    #[test]
    fn popularity_listing_is_sorted_permutation(catalog in catalog_strategy()) {
        let unsorted = aggregate(&catalog);
        let sorted = list_unique_spells(&catalog, SortMode::Popularity);

        prop_assert_eq!(sorted.len(), unsorted.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].mentions >= pair[1].mentions);
        }
        let before: BTreeSet<&str> = unsorted.iter().map(|r| r.spell.as_str()).collect();
        let after: BTreeSet<&str> = sorted.iter().map(|r| r.spell.as_str()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn settled_engine_holds_exactly_the_last_key_set(
        key_sets in prop::collection::vec(prop::collection::btree_set(0usize..24, 0..12), 1..6),
        partial_tick in 0.0f64..400.0
    ) {
        let config = TransitionConfig::default();
        let mut engine: TransitionEngine<Coordinate> =
            TransitionEngine::new(config).expect("engine init");

        for keys in &key_sets {
            let items: Vec<Coordinate> = keys
                .iter()
                .map(|&key| Coordinate::new(key, key as f64, 0.0))
                .collect();
            engine.sync(items).expect("sync");
            engine.tick(partial_tick).expect("tick");

            let rendered: Vec<usize> = engine.rendered().map(|(&key, _)| key).collect();
            let unique: BTreeSet<usize> = rendered.iter().copied().collect();
            prop_assert_eq!(unique.len(), rendered.len());
            for key in keys {
                prop_assert!(engine.contains(key));
            }
        }

        engine.tick(config.duration_ms).expect("settle");
        let last = key_sets.last().expect("at least one key set");
        let active: BTreeSet<usize> = engine.rendered().map(|(&key, _)| key).collect();
        prop_assert_eq!(&active, last);
        prop_assert!(!engine.is_animating());
    }
}
