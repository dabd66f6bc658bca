use std::sync::Once;

use assistant_core::{
    update, AppState, Effect, GenerationState, Msg, Page, GENERATION_DELAY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn on_main_app(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::Navigate("/app".to_string()));
    state
}

fn submit_query(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::GenerateRequested)
}

#[test]
fn submit_moves_idle_to_generating() {
    init_logging();
    let state = on_main_app(AppState::new());

    let (mut state, effects) = submit_query(state, "climate policy");

    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(state.session().results().is_none());
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleGeneration {
            delay: GENERATION_DELAY
        }]
    );
}

#[test]
fn empty_query_submit_is_unavailable() {
    init_logging();
    let mut state = on_main_app(AppState::new());
    assert!(state.consume_dirty());
    let before = state.clone();

    let (state, effects) = submit_query(state, "");
    assert_eq!(state.session().generation(), GenerationState::Idle);
    assert!(effects.is_empty());

    // All-whitespace is the same as empty once trimmed.
    let (mut state, effects) = submit_query(state, "   \t ");
    assert_eq!(state.session().generation(), GenerationState::Idle);
    assert!(effects.is_empty());
    assert!(!state.session().can_generate());

    // Beyond the recorded keystrokes nothing changed.
    let (state, _) = update(state, Msg::QueryChanged(String::new()));
    assert_eq!(state.session(), before.session());
}

#[test]
fn submit_while_generating_is_noop() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = submit_query(state, "renewable energy");

    let (state, effects) = update(state, Msg::GenerateRequested);
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(effects.is_empty());
}

#[test]
fn completed_report_can_be_resubmitted() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = submit_query(state, "renewable energy");
    let (state, _) = update(state, Msg::GenerationFinished);
    assert_eq!(state.session().generation(), GenerationState::Completed);

    // A completed session accepts a new submission and drops old results.
    let (state, effects) = update(state, Msg::GenerateRequested);
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(state.session().results().is_none());
    assert_eq!(
        effects,
        vec![Effect::ScheduleGeneration {
            delay: GENERATION_DELAY
        }]
    );
}

#[test]
fn navigation_away_discards_session_and_cancels_timer() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = submit_query(state, "renewable energy");
    assert_eq!(state.session().generation(), GenerationState::Generating);

    let (state, effects) = update(state, Msg::Navigate("/dashboard".to_string()));
    assert_eq!(state.page(), Page::Dashboard);
    assert_eq!(state.session().generation(), GenerationState::Idle);
    assert!(state.session().query().is_empty());
    assert_eq!(effects, vec![Effect::CancelGeneration]);
}

#[test]
fn navigation_without_generation_in_flight_emits_no_effects() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = update(state, Msg::QueryChanged("draft question".to_string()));

    let (state, effects) = update(state, Msg::Navigate("/billing".to_string()));
    assert_eq!(state.page(), Page::Billing);
    assert!(effects.is_empty());
}

#[test]
fn refresh_changes_nothing() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = submit_query(state, "renewable energy");
    let (mut state, _) = update(state, Msg::GenerationFinished);
    assert!(state.consume_dirty());
    let before = state.clone();
    assert!(state
        .session()
        .results()
        .map(|r| r.live_update_available)
        .unwrap_or(false));

    let (next, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(next, before);
    assert!(effects.is_empty());
}
