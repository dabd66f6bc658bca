//! Assistant core: pure routing and interaction state machine.
//!
//! No I/O and no timers live here. The shell feeds [`Msg`] values into
//! [`update`] and runs the returned [`Effect`]s; rendering reads the
//! [`AppViewModel`] projection.
mod effect;
mod msg;
mod report;
mod route;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, GENERATION_DELAY};
pub use msg::Msg;
pub use report::{Citation, Confidence, Report};
pub use route::{Page, NAV_PAGES};
pub use state::{AppState, Attachment, GenerationState, Session};
pub use update::update;
pub use view_model::{format_size, AppViewModel, AttachmentRowView};
