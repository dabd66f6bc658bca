use crate::state::Attachment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User requested a different page by path; resolved through the router.
    Navigate(String),
    /// User edited the research question input.
    QueryChanged(String),
    /// User picked files; only name and size were read from the handles.
    FilesPicked(Vec<Attachment>),
    /// User removed the attachment at this index.
    AttachmentRemoved(usize),
    /// User pressed the generate control.
    GenerateRequested,
    /// The scheduled generation timer fired.
    GenerationFinished,
    /// User pressed refresh on the live-update banner.
    RefreshRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
