use std::sync::Once;

use assistant_core::{update, AppState, Attachment, GenerationState, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn file(name: &str, size_bytes: u64) -> Attachment {
    Attachment {
        name: name.to_string(),
        size_bytes,
    }
}

fn on_main_app(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::Navigate("/app".to_string()));
    state
}

#[test]
fn add_then_remove_leaves_list_empty() {
    init_logging();
    let state = on_main_app(AppState::new());

    let (state, effects) = update(state, Msg::FilesPicked(vec![file("a.pdf", 1_048_576)]));
    assert!(effects.is_empty());
    assert_eq!(state.session().attachments().len(), 1);
    assert_eq!(state.session().attachments()[0].name, "a.pdf");
    assert_eq!(state.session().attachments()[0].size_bytes, 1_048_576);

    let (state, effects) = update(state, Msg::AttachmentRemoved(0));
    assert!(effects.is_empty());
    assert!(state.session().attachments().is_empty());
}

#[test]
fn attachments_keep_selection_order_without_dedup() {
    init_logging();
    let state = on_main_app(AppState::new());

    let (state, _) = update(
        state,
        Msg::FilesPicked(vec![file("notes.docx", 2048), file("paper.pdf", 4096)]),
    );
    // Same handle again: no de-duplication is performed.
    let (state, _) = update(state, Msg::FilesPicked(vec![file("paper.pdf", 4096)]));

    let names: Vec<_> = state
        .session()
        .attachments()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["notes.docx", "paper.pdf", "paper.pdf"]);
}

#[test]
fn out_of_range_removal_is_silent_noop() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (mut state, _) = update(state, Msg::FilesPicked(vec![file("a.pdf", 100)]));
    assert!(state.consume_dirty());
    let before = state.clone();

    let (next, effects) = update(state, Msg::AttachmentRemoved(5));
    assert_eq!(next, before);
    assert!(effects.is_empty());

    let (next, effects) = update(next, Msg::AttachmentRemoved(usize::MAX));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn removal_targets_the_given_index() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = update(
        state,
        Msg::FilesPicked(vec![
            file("a.pdf", 1),
            file("b.doc", 2),
            file("c.docx", 3),
        ]),
    );

    let (state, _) = update(state, Msg::AttachmentRemoved(1));
    let names: Vec<_> = state
        .session()
        .attachments()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["a.pdf", "c.docx"]);
}

#[test]
fn file_handling_does_not_interrupt_generation() {
    init_logging();
    let state = on_main_app(AppState::new());
    let (state, _) = update(state, Msg::QueryChanged("remote work".to_string()));
    let (state, _) = update(state, Msg::GenerateRequested);
    assert_eq!(state.session().generation(), GenerationState::Generating);

    let (state, effects) = update(state, Msg::FilesPicked(vec![file("late.pdf", 9000)]));
    assert!(effects.is_empty());
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert_eq!(state.session().attachments().len(), 1);

    let (state, effects) = update(state, Msg::AttachmentRemoved(0));
    assert!(effects.is_empty());
    assert_eq!(state.session().generation(), GenerationState::Generating);
    assert!(state.session().attachments().is_empty());
}

#[test]
fn picking_no_files_changes_nothing() {
    init_logging();
    let mut state = on_main_app(AppState::new());
    assert!(state.consume_dirty());
    let before = state.clone();

    let (next, effects) = update(state, Msg::FilesPicked(Vec::new()));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}
