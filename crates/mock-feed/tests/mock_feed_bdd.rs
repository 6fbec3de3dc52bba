//! Behavioural tests for the mock-feed crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering dataset generation, pairing, selection lifecycle, and catalog
//! validation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use mock_feed::{CatalogError, Dataset, FixtureCatalog, Selection, detail_card, summary_rows};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Seed used by every deterministic scenario.
const SCENARIO_SEED: u64 = 42;

/// Test world holding the catalog, generated datasets, and selection state.
#[derive(Default, ScenarioState)]
struct World {
    catalog: Slot<FixtureCatalog>,
    dataset: Slot<Dataset>,
    second_dataset: Slot<Dataset>,
    selection: Slot<Selection>,
    catalog_json: Slot<String>,
    catalog_result: Slot<Result<FixtureCatalog, CatalogError>>,
}

impl World {
    /// Extracts the catalog from the world state.
    fn catalog(&self) -> FixtureCatalog {
        self.catalog.get().expect("catalog should be set")
    }

    /// Extracts the generated dataset from the world state.
    fn dataset(&self) -> Dataset {
        self.dataset.get().expect("dataset should be generated")
    }

    /// Extracts the selection from the world state.
    fn selection(&self) -> Selection {
        self.selection.get().expect("selection should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the built-in fixture catalog")]
fn the_built_in_fixture_catalog(world: &World) {
    world.catalog.set(FixtureCatalog::builtin());
}

#[given("a dataset generated from seed 42")]
fn a_dataset_generated_from_seed(world: &World) {
    let catalog = world.catalog();
    let dataset = Dataset::from_seed(&catalog, SCENARIO_SEED).expect("generation succeeds");
    world.dataset.set(dataset);
    world.selection.set(Selection::default());
}

#[given("catalog JSON with an empty names pool")]
fn catalog_json_with_an_empty_names_pool(world: &World) {
    let json = r#"{
        "names": [],
        "sites": ["example.com"],
        "countries": ["Estonia"],
        "leagues": ["Bronze"],
        "messages": ["hello"]
    }"#;
    world.catalog_json.set(json.to_owned());
}

// ============================================================================
// When steps
// ============================================================================

#[when("a dataset is generated from seed 42")]
fn a_dataset_is_generated_from_seed(world: &World) {
    let catalog = world.catalog();
    let dataset = Dataset::from_seed(&catalog, SCENARIO_SEED).expect("generation succeeds");
    world.dataset.set(dataset);
}

#[when("a dataset is generated twice from the same seed")]
fn a_dataset_is_generated_twice_from_the_same_seed(world: &World) {
    let catalog = world.catalog();

    let first = Dataset::from_seed(&catalog, SCENARIO_SEED).expect("first generation");
    let second = Dataset::from_seed(&catalog, SCENARIO_SEED).expect("second generation");

    world.dataset.set(first);
    world.second_dataset.set(second);
}

#[when("the first message row is selected")]
fn the_first_message_row_is_selected(world: &World) {
    let dataset = world.dataset();
    let first = dataset.messages().first().expect("non-empty dataset").id;

    let mut selection = world.selection();
    selection.select(first);
    world.selection.set(selection);
}

#[when("the selection is cleared")]
fn the_selection_is_cleared(world: &World) {
    let mut selection = world.selection();
    selection.clear();
    world.selection.set(selection);
}

#[when("the catalog is parsed")]
fn the_catalog_is_parsed(world: &World) {
    let json = world.catalog_json.get().expect("catalog JSON should be set");
    world.catalog_result.set(FixtureCatalog::from_json(&json));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the dataset has matching message and user counts")]
fn the_dataset_has_matching_message_and_user_counts(world: &World) {
    let dataset = world.dataset();
    assert_eq!(dataset.messages().len(), dataset.users().len());
}

#[then("the dataset length is within the allowed bounds")]
fn the_dataset_length_is_within_the_allowed_bounds(world: &World) {
    let dataset = world.dataset();
    assert!(
        (1..20).contains(&dataset.len()),
        "unexpected dataset length: {}",
        dataset.len()
    );
}

#[then("every message has exactly one paired user")]
fn every_message_has_exactly_one_paired_user(world: &World) {
    let dataset = world.dataset();

    for message in dataset.messages() {
        let matching = dataset
            .users()
            .iter()
            .filter(|user| user.id == message.id)
            .count();
        let duplicates = dataset
            .messages()
            .iter()
            .filter(|other| other.id == message.id)
            .count();

        assert_eq!(matching, duplicates, "unpaired message id {}", message.id);
        assert!(matching >= 1, "no user paired with message id {}", message.id);
    }
}

#[then("both datasets are identical")]
fn both_datasets_are_identical(world: &World) {
    let first = world.dataset();
    let second = world
        .second_dataset
        .get()
        .expect("second dataset should be generated");

    assert_eq!(first, second, "generation should be deterministic");
}

#[then("exactly one summary row is marked visible")]
fn exactly_one_summary_row_is_marked_visible(world: &World) {
    let dataset = world.dataset();
    let selection = world.selection();
    let rows = summary_rows(&dataset, &selection);

    let visible = rows.iter().filter(|row| row.detail_visible).count();
    assert_eq!(visible, 1);
}

#[then("a detail card for the selected message is available")]
fn a_detail_card_for_the_selected_message_is_available(world: &World) {
    let dataset = world.dataset();
    let selection = world.selection();

    let card = detail_card(&dataset, &selection).expect("detail card for selection");
    assert_eq!(Some(card.id), selection.selected());
}

#[then("no summary row is marked visible")]
fn no_summary_row_is_marked_visible(world: &World) {
    let dataset = world.dataset();
    let selection = world.selection();
    let rows = summary_rows(&dataset, &selection);

    assert!(rows.iter().all(|row| !row.detail_visible));
}

#[then("no detail card is available")]
fn no_detail_card_is_available(world: &World) {
    let dataset = world.dataset();
    let selection = world.selection();

    assert!(detail_card(&dataset, &selection).is_none());
}

#[then("parsing fails with an empty pool error")]
fn parsing_fails_with_an_empty_pool_error(world: &World) {
    let result = world
        .catalog_result
        .get()
        .expect("catalog result should be set");

    assert_eq!(result, Err(CatalogError::EmptyPool { pool: "names" }));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/mock_feed.feature",
    name = "Generated dataset pairs messages with users"
)]
fn generated_dataset_pairs_messages_with_users(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_feed.feature",
    name = "Generation is deterministic for a fixed seed"
)]
fn generation_is_deterministic_for_a_fixed_seed(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_feed.feature",
    name = "Selecting a row shows exactly one detail panel"
)]
fn selecting_a_row_shows_exactly_one_detail_panel(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_feed.feature",
    name = "Clearing the selection hides every detail panel"
)]
fn clearing_the_selection_hides_every_detail_panel(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_feed.feature",
    name = "Empty fixture pools are rejected"
)]
fn empty_fixture_pools_are_rejected(world: World) {
    let _ = world;
}
