use std::sync::Once;

use assistant_core::{
    update, AppState, Confidence, Effect, GenerationState, Msg, GENERATION_DELAY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn on_main_app(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::Navigate("/app".to_string()));
    state
}

#[test]
fn finished_generation_attaches_fixed_payload() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = update(state, Msg::QueryChanged("renewable energy".to_string()));
    let (state, _) = update(state, Msg::GenerateRequested);

    let (state, effects) = update(state, Msg::GenerationFinished);
    assert!(effects.is_empty());
    assert_eq!(state.session().generation(), GenerationState::Completed);

    let report = state.session().results().expect("completed => results");
    assert_eq!(report.key_takeaways.len(), 5);
    assert!(!report.summary.is_empty());
    assert_eq!(report.evidence.len(), 3);
    assert_eq!(report.evidence[0].page, 45);
    assert_eq!(report.evidence[1].confidence, Confidence::Medium);
    assert!(report.live_update_available);
}

#[test]
fn finish_outside_generating_is_noop() {
    init_logging();
    let mut state = on_main_app(AppState::new());
    assert!(state.consume_dirty());
    let before = state.clone();

    // Idle: a stray timer callback must not fabricate results.
    let (state, effects) = update(state, Msg::GenerationFinished);
    assert_eq!(state, before);
    assert!(effects.is_empty());

    // Completed: a duplicate completion must not re-fire either.
    let (state, _) = update(state, Msg::QueryChanged("ai in healthcare".to_string()));
    let (state, _) = update(state, Msg::GenerateRequested);
    let (mut state, _) = update(state, Msg::GenerationFinished);
    assert!(state.consume_dirty());
    let completed = state.clone();

    let (state, effects) = update(state, Msg::GenerationFinished);
    assert_eq!(state, completed);
    assert!(effects.is_empty());
}

#[test]
fn results_exist_iff_completed() {
    init_logging();
    let state = on_main_app(AppState::new());
    assert!(state.session().results().is_none());

    let (state, _) = update(state, Msg::QueryChanged("coastal cities".to_string()));
    let (state, _) = update(state, Msg::GenerateRequested);
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(state.session().results().is_none());

    let (state, _) = update(state, Msg::GenerationFinished);
    assert_eq!(state.session().generation(), GenerationState::Completed);
    assert!(state.session().results().is_some());
}

#[test]
fn climate_policy_scenario_runs_with_no_attachments() {
    init_logging();
    let state = on_main_app(AppState::new());
    assert_eq!(state.session().generation(), GenerationState::Idle);

    let (state, _) = update(state, Msg::QueryChanged("climate policy".to_string()));
    let (state, effects) = update(state, Msg::GenerateRequested);
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(state.session().attachments().is_empty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleGeneration {
            delay: GENERATION_DELAY
        }]
    );

    let (state, _) = update(state, Msg::GenerationFinished);
    assert_eq!(state.session().generation(), GenerationState::Completed);
    assert!(state.session().attachments().is_empty());
    assert_eq!(state.session().query(), "climate policy");

    let view = state.view();
    assert!(view.report.is_some());
    assert!(view.attachments.is_empty());
}
