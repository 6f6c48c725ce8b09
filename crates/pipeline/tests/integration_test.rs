//! Integration tests for the pipeline.
//!
//! These tests check that filters, the summary line and the merchant
//! options work together the way the directory page uses them.

use data_loader::{Perk, PerkCollection};
use pipeline::traits::PARALLEL_THRESHOLD;
use pipeline::{FilterCriteria, FilterPipeline, MerchantSelection, Summary, merchant_options};

fn create_test_collection() -> PerkCollection {
    PerkCollection::from_perks(vec![
        Perk::new(1u64, "Coffee Deal", "CafeCo"),
        Perk::new(2u64, "Gym Pass", "FitCo"),
        Perk::new(3u64, "Iced Coffee Upgrade", "BeanBarn"),
        Perk::new(4u64, "Pastry Friday", "CafeCo"),
        Perk::new(5u64, "Yoga Month", "FitCo"),
    ])
    .unwrap()
}

fn ids(perks: &[Perk]) -> Vec<String> {
    perks.iter().map(|p| p.id.to_string()).collect()
}

/// Position of every visible perk in the full collection must be increasing.
fn assert_ordered_subset(visible: &[Perk], all: &PerkCollection) {
    let mut last = None;
    for perk in visible {
        let position = all
            .iter()
            .position(|p| p.id == perk.id)
            .expect("visible perk must come from the collection");
        if let Some(previous) = last {
            assert!(position > previous, "relative order must be preserved");
        }
        last = Some(position);
    }
}

#[test]
fn test_single_perk_scenario() {
    let collection =
        PerkCollection::from_perks(vec![Perk::new(1u64, "Coffee Deal", "CafeCo")]).unwrap();
    let pipeline = FilterPipeline::standard();

    // Default criteria
    let visible = pipeline.visible_subset(collection.as_slice(), &FilterCriteria::default());
    assert_eq!(visible.len(), 1);
    assert_eq!(
        Summary::new(visible.len(), collection.len()).to_string(),
        "Showing 1 of 1 perks"
    );

    // Lowercase partial query still matches
    let criteria = FilterCriteria::new().with_name_query("coffee");
    assert_eq!(pipeline.visible_subset(collection.as_slice(), &criteria).len(), 1);

    // Unrelated query hides it
    let criteria = FilterCriteria::new().with_name_query("pizza");
    let visible = pipeline.visible_subset(collection.as_slice(), &criteria);
    assert!(visible.is_empty());
    assert_eq!(
        Summary::new(visible.len(), collection.len()).to_string(),
        "Showing 0 of 1 perks"
    );

    // Its own merchant keeps it, another merchant hides it
    let criteria = FilterCriteria::new().with_merchant("CafeCo");
    assert_eq!(pipeline.visible_subset(collection.as_slice(), &criteria).len(), 1);
    let criteria = FilterCriteria::new().with_merchant("FitCo");
    assert!(pipeline.visible_subset(collection.as_slice(), &criteria).is_empty());
}

#[test]
fn test_unfiltered_is_identity() {
    let collection = create_test_collection();
    let visible =
        FilterPipeline::standard().visible_subset(collection.as_slice(), &FilterCriteria::new());

    assert_eq!(visible, collection.as_slice());
}

#[test]
fn test_every_title_finds_its_perk() {
    let collection = create_test_collection();
    let pipeline = FilterPipeline::standard();

    for perk in &collection {
        for query in [perk.title.clone(), perk.title.to_lowercase(), perk.title.to_uppercase()] {
            let criteria = FilterCriteria::new().with_name_query(query);
            let visible = pipeline.visible_subset(collection.as_slice(), &criteria);
            assert!(visible.contains(perk), "{} should be visible", perk.title);
            assert_ordered_subset(&visible, &collection);
        }
    }
}

#[test]
fn test_every_merchant_selects_only_its_perks() {
    let collection = create_test_collection();
    let pipeline = FilterPipeline::standard();

    for perk in &collection {
        let criteria = FilterCriteria::new().with_merchant(perk.merchant.clone());
        let visible = pipeline.visible_subset(collection.as_slice(), &criteria);

        assert!(visible.contains(perk));
        assert!(visible.iter().all(|p| p.merchant == perk.merchant));
        assert_ordered_subset(&visible, &collection);
    }
}

#[test]
fn test_combined_criteria_preserve_order() {
    let collection = create_test_collection();
    let criteria = FilterCriteria::new().with_merchant("CafeCo").with_name_query("a");

    let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);

    assert_eq!(ids(&visible), vec!["1", "4"]);
}

#[test]
fn test_options_ignore_current_filter() {
    let collection = create_test_collection();
    let criteria = FilterCriteria::new().with_merchant("FitCo");
    let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);
    assert_eq!(visible.len(), 2);

    // Options are derived from the full collection, not the filtered one.
    let options = merchant_options(collection.as_slice());
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["", "BeanBarn", "CafeCo", "FitCo"]);

    // Every merchant option selects exactly as many perks as it advertises.
    for option in options.iter().skip(1) {
        let criteria = FilterCriteria {
            merchant: option.selection(),
            ..FilterCriteria::default()
        };
        assert!(matches!(criteria.merchant, MerchantSelection::Merchant(_)));
        let selected = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);
        assert_eq!(selected.len(), option.count);
    }
}

#[test]
fn test_merchant_named_any_filters_exactly() {
    let collection = PerkCollection::from_perks(vec![
        Perk::new(1u64, "Coffee Deal", "CafeCo"),
        Perk::new(2u64, "Mystery Box", "any"),
    ])
    .unwrap();

    let options = merchant_options(collection.as_slice());
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["", "CafeCo", "any"]);

    let option = options
        .iter()
        .find(|o| o.label == "any")
        .expect("merchant 'any' must have its own option");
    let criteria = FilterCriteria {
        merchant: option.selection(),
        ..FilterCriteria::default()
    };
    let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);

    assert_eq!(ids(&visible), vec!["2"]);
    assert!(visible.iter().all(|p| p.merchant == "any"));

    // Typing the merchant name behaves the same as picking the option.
    let typed = FilterCriteria {
        merchant: MerchantSelection::from_option_value("any"),
        ..FilterCriteria::default()
    };
    assert_eq!(
        FilterPipeline::standard().visible_subset(collection.as_slice(), &typed),
        visible
    );
}

#[test]
fn test_whitespace_merchant_is_selectable() {
    let collection = PerkCollection::from_perks(vec![
        Perk::new(1u64, "Odd One", " "),
        Perk::new(2u64, "Coffee Deal", "CafeCo"),
    ])
    .unwrap();

    let options = merchant_options(collection.as_slice());
    let option = options
        .iter()
        .find(|o| o.value == " ")
        .expect("whitespace merchant must be offered");
    let criteria = FilterCriteria {
        merchant: option.selection(),
        ..FilterCriteria::default()
    };

    let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_large_collection_keeps_order() {
    let count = PARALLEL_THRESHOLD * 2 + 17;
    let perks: Vec<Perk> = (0..count as u64)
        .map(|i| {
            let title = if i % 3 == 0 { format!("Coffee #{}", i) } else { format!("Tea #{}", i) };
            let merchant = if i % 2 == 0 { "CafeCo" } else { "TeaHouse" };
            Perk::new(i, title, merchant)
        })
        .collect();
    let collection = PerkCollection::from_perks(perks).unwrap();

    let criteria = FilterCriteria::new().with_name_query("COFFEE").with_merchant("CafeCo");
    let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);

    let expected: Vec<String> = (0..count as u64)
        .filter(|i| i % 6 == 0)
        .map(|i| i.to_string())
        .collect();
    assert_eq!(ids(&visible), expected);
}
