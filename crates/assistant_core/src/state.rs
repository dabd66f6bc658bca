use crate::report::Report;
use crate::route::Page;
use crate::view_model::{AppViewModel, AttachmentRowView};

/// Progress of the upload-and-generate workflow. Transitions only move
/// forward; a session returns to `Idle` only by being discarded on
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Completed,
}

/// A user-selected file handle. Only name and byte size are ever read;
/// content is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

/// Per-page interaction state for the upload-and-generate workflow.
/// Held in memory only and discarded when the owning page unmounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    query: String,
    attachments: Vec<Attachment>,
    generation: GenerationState,
    results: Option<Report>,
}

impl Session {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn generation(&self) -> GenerationState {
        self.generation
    }

    /// Invariant: `Some` if and only if `generation() == Completed`.
    pub fn results(&self) -> Option<&Report> {
        self.results.as_ref()
    }

    /// Whether the submit control is enabled: a non-whitespace query and no
    /// generation currently in flight.
    pub fn can_generate(&self) -> bool {
        !self.query.trim().is_empty() && self.generation != GenerationState::Generating
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub(crate) fn add_attachments(&mut self, files: Vec<Attachment>) {
        self.attachments.extend(files);
    }

    /// Removes the attachment at `index`. Out-of-range indices are a no-op;
    /// returns whether anything changed.
    pub(crate) fn remove_attachment(&mut self, index: usize) -> bool {
        if index < self.attachments.len() {
            self.attachments.remove(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn begin_generation(&mut self) {
        self.generation = GenerationState::Generating;
        self.results = None;
    }

    pub(crate) fn complete_generation(&mut self, report: Report) {
        self.generation = GenerationState::Completed;
        self.results = Some(report);
    }
}

/// Whole-application state: the current page plus its session.
///
/// Only one page is mounted at a time, so a single session slot suffices;
/// navigating replaces it with a fresh one, which gives each page instance
/// exclusive, transient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: Page,
    session: Session,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            page: Page::Landing,
            session: Session::default(),
            dirty: true,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Mounts `page`, discarding the previous page's session.
    pub(crate) fn mount(&mut self, page: Page) {
        self.page = page;
        self.session = Session::default();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the dirty flag and clears it. The shell redraws only when
    /// this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            page: self.page,
            chrome: self.page.uses_chrome(),
            query: self.session.query.clone(),
            attachments: self
                .session
                .attachments
                .iter()
                .map(AttachmentRowView::from)
                .collect(),
            generation: self.session.generation,
            can_generate: self.session.can_generate(),
            report: self.session.results.clone(),
            dirty: self.dirty,
        }
    }
}
