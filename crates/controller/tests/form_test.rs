//! Integration tests for the form controller workflows.

use std::sync::Arc;

use mr_or_ms_controller::FormController;
use mr_or_ms_core::{
    error::FetchError,
    mocks::{MockAnswerStore, MockPredictor, RecordingSink, UnavailableStore},
    traits::Region,
    types::{Gender, Prediction},
};
use mr_or_ms_store::InMemoryAnswerStore;

struct Harness {
    store: Arc<MockAnswerStore>,
    predictor: Arc<MockPredictor>,
    sink: Arc<RecordingSink>,
    controller: FormController,
}

fn harness(store: MockAnswerStore, predictor: MockPredictor) -> Harness {
    let store = Arc::new(store);
    let predictor = Arc::new(predictor);
    let sink = Arc::new(RecordingSink::new());
    let controller = FormController::new(store.clone(), predictor.clone(), sink.clone());
    Harness {
        store,
        predictor,
        sink,
        controller,
    }
}

// =============================================================================
// Submit workflow
// =============================================================================

#[tokio::test]
async fn submit_with_invalid_name_stops_before_any_io() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.submit("Alice2").await;

    assert_eq!(
        h.sink.last(Region::Error).as_deref(),
        Some("Name should only contain letters and spaces!")
    );
    assert_eq!(h.store.lookup_count(), 0);
    assert_eq!(h.predictor.call_count(), 0);
    assert_eq!(h.sink.last(Region::Prediction), None);
    assert_eq!(h.sink.last(Region::SavedAnswer), None);
}

#[tokio::test]
async fn submit_renders_prediction_and_saved_answer() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Female)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.submit("Alice").await;

    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Alice is female")
    );
    assert_eq!(
        h.sink.last(Region::Prediction).as_deref(),
        Some("98.00% female")
    );
    // Validation succeeded, so the error region was cleared.
    assert_eq!(h.sink.last(Region::Error).as_deref(), Some(""));
    assert_eq!(h.predictor.call_count(), 1);
}

#[tokio::test]
async fn submit_trims_the_name_before_everything_else() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Female)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.submit("  Alice  ").await;

    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Alice is female")
    );
}

#[tokio::test]
async fn submit_with_unknown_name_reports_nothing_saved() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    h.controller.submit("Alice").await;

    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("No gender is saved for Alice")
    );
}

#[tokio::test]
async fn saved_answer_renders_before_the_prediction() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Female)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.submit("Alice").await;

    let writes = h.sink.writes();
    let saved_pos = writes
        .iter()
        .position(|(r, _)| *r == Region::SavedAnswer)
        .unwrap();
    let prediction_pos = writes
        .iter()
        .position(|(r, _)| *r == Region::Prediction)
        .unwrap();
    assert!(saved_pos < prediction_pos);
}

#[tokio::test]
async fn submit_maps_not_found_to_the_no_prediction_message() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::failing(FetchError::NotFound),
    );

    h.controller.submit("Zzzz").await;

    assert_eq!(
        h.sink.last(Region::Error).as_deref(),
        Some("No prediction is available for this name!")
    );
}

#[tokio::test]
async fn submit_maps_rate_limiting_to_its_message() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::failing(FetchError::RateLimited),
    );

    h.controller.submit("Alice").await;

    assert_eq!(
        h.sink.last(Region::Error).as_deref(),
        Some("Too many requests! Please try again later.")
    );
}

#[tokio::test]
async fn submit_maps_server_and_transport_failures_to_the_generic_message() {
    for error in [
        FetchError::ServerError(500),
        FetchError::TransportError("connection reset".into()),
    ] {
        let h = harness(MockAnswerStore::new(), MockPredictor::failing(error));

        h.controller.submit("Alice").await;

        assert_eq!(
            h.sink.last(Region::Error).as_deref(),
            Some("An error occurred! Please try again later.")
        );
    }
}

#[tokio::test]
async fn null_gender_renders_the_no_prediction_message_in_both_regions() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::new(vec![Ok(Prediction {
            gender: None,
            probability: 0.0,
        })]),
    );

    h.controller.submit("Zzzz").await;

    assert_eq!(
        h.sink.last(Region::Error).as_deref(),
        Some("No prediction is available for this name!")
    );
    assert_eq!(
        h.sink.last(Region::Prediction).as_deref(),
        Some("No prediction is available for this name!")
    );
}

#[tokio::test]
async fn storage_failure_on_lookup_still_fetches_the_prediction() {
    let store = Arc::new(UnavailableStore);
    let predictor = Arc::new(MockPredictor::constant(Gender::Female, 0.98));
    let sink = Arc::new(RecordingSink::new());
    let controller = FormController::new(store, predictor.clone(), sink.clone());

    controller.submit("Alice").await;

    // The lookup failure lands in the error region, but the prediction
    // path is independent and still renders.
    assert_eq!(
        sink.last(Region::Prediction).as_deref(),
        Some("98.00% female")
    );
    assert_eq!(
        sink.last(Region::Error).as_deref(),
        Some("An error occurred! Please try again later.")
    );
    assert_eq!(predictor.call_count(), 1);
}

// =============================================================================
// Save workflow
// =============================================================================

#[tokio::test]
async fn save_persists_and_confirms() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    h.controller.save("Max", Some(Gender::Male)).await;

    assert_eq!(h.store.entry("Max"), Some(Gender::Male));
    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Max is male")
    );
    assert_eq!(h.sink.last(Region::Error).as_deref(), Some(""));
}

#[tokio::test]
async fn save_reports_the_name_failure_before_the_gender_failure() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    // Both the name and the selection are invalid; only the name error
    // may surface.
    h.controller.save("", None).await;

    assert_eq!(h.sink.last(Region::Error).as_deref(), Some("Name is Empty!"));
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn save_without_a_selection_reports_no_gender_selected() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    h.controller.save("Max", None).await;

    assert_eq!(
        h.sink.last(Region::Error).as_deref(),
        Some("Gender is not selected!")
    );
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn save_overwrites_a_previous_answer() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Male)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.save("Alice", Some(Gender::Female)).await;

    assert_eq!(h.store.entry("Alice"), Some(Gender::Female));
    assert_eq!(h.store.len(), 1);
}

#[tokio::test]
async fn save_surfaces_storage_failures_as_the_generic_error() {
    let store = Arc::new(UnavailableStore);
    let predictor = Arc::new(MockPredictor::constant(Gender::Male, 0.5));
    let sink = Arc::new(RecordingSink::new());
    let controller = FormController::new(store, predictor, sink.clone());

    controller.save("Max", Some(Gender::Male)).await;

    assert_eq!(
        sink.last(Region::Error).as_deref(),
        Some("An error occurred! Please try again later.")
    );
    assert_eq!(sink.last(Region::SavedAnswer), None);
}

// =============================================================================
// Clear workflow
// =============================================================================

#[tokio::test]
async fn save_then_clear_removes_the_entry() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    h.controller.save("Max", Some(Gender::Male)).await;
    h.controller.clear().await;

    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Cleared saved gender for Max")
    );
    assert_eq!(h.store.entry("Max"), None);
}

#[tokio::test]
async fn clear_targets_the_last_looked_up_name_not_the_input() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Female), ("Bob", Gender::Male)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    // The lookup for Alice becomes the held saved answer; a later invalid
    // submit does not change it.
    h.controller.submit("Alice").await;
    h.controller.submit("Bob!").await;
    h.controller.clear().await;

    assert_eq!(h.store.entry("Alice"), None);
    assert_eq!(h.store.entry("Bob"), Some(Gender::Male));
    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Cleared saved gender for Alice")
    );
}

#[tokio::test]
async fn clear_without_a_saved_answer_touches_nothing() {
    let h = harness(
        MockAnswerStore::with_entries(vec![("Alice", Gender::Female)]),
        MockPredictor::constant(Gender::Female, 0.98),
    );

    h.controller.clear().await;

    assert_eq!(h.store.len(), 1);
    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Cleared saved gender for ")
    );
}

#[tokio::test]
async fn clear_leaves_the_saved_answer_stale() {
    let h = harness(
        MockAnswerStore::new(),
        MockPredictor::constant(Gender::Male, 0.5),
    );

    h.controller.save("Max", Some(Gender::Male)).await;
    h.controller.clear().await;
    // A second clear re-renders the same message; the held name was not
    // reset.
    h.controller.clear().await;

    assert_eq!(
        h.sink.last(Region::SavedAnswer).as_deref(),
        Some("Cleared saved gender for Max")
    );
}

// =============================================================================
// Against a real store
// =============================================================================

#[tokio::test]
async fn workflows_compose_against_the_in_memory_store() {
    let store = Arc::new(InMemoryAnswerStore::new());
    let predictor = Arc::new(MockPredictor::constant(Gender::Female, 0.98));
    let sink = Arc::new(RecordingSink::new());
    let controller = FormController::new(store.clone(), predictor, sink.clone());

    controller.save("Alice", Some(Gender::Female)).await;
    controller.submit("Alice").await;

    assert_eq!(
        sink.last(Region::SavedAnswer).as_deref(),
        Some("Alice is female")
    );
    assert_eq!(
        sink.last(Region::Prediction).as_deref(),
        Some("98.00% female")
    );

    controller.clear().await;
    assert!(store.is_empty());
}
