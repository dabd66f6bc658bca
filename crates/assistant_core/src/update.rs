use crate::{AppState, Effect, GenerationState, Msg, Page, Report, GENERATION_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(path) => {
            let target = Page::resolve(&path);
            if target == state.page() {
                return (state, Vec::new());
            }
            // Leaving a page discards its session; a generation still in
            // flight must not fire into the disposed instance.
            let in_flight = state.session().generation() == GenerationState::Generating;
            state.mount(target);
            state.mark_dirty();
            if in_flight {
                vec![Effect::CancelGeneration]
            } else {
                Vec::new()
            }
        }
        Msg::QueryChanged(query) => {
            state.session_mut().set_query(query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FilesPicked(files) => {
            if files.is_empty() {
                return (state, Vec::new());
            }
            state.session_mut().add_attachments(files);
            state.mark_dirty();
            Vec::new()
        }
        Msg::AttachmentRemoved(index) => {
            if state.session_mut().remove_attachment(index) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GenerateRequested => {
            // Submission is guarded, not failed: an empty query or a run
            // already in flight leaves the state untouched.
            if !state.session().can_generate() {
                return (state, Vec::new());
            }
            state.session_mut().begin_generation();
            state.mark_dirty();
            vec![Effect::ScheduleGeneration {
                delay: GENERATION_DELAY,
            }]
        }
        Msg::GenerationFinished => {
            // Guard against double completion or a stray timer.
            if state.session().generation() != GenerationState::Generating {
                return (state, Vec::new());
            }
            state.session_mut().complete_generation(Report::canned());
            state.mark_dirty();
            Vec::new()
        }
        Msg::RefreshRequested => {
            // Purely illustrative: available only on a completed report with
            // the live-update flag set, and even then changes nothing.
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
