//! Runtime state: view ownership and the session signal

pub mod session;
pub mod view;

pub use session::{AuthStatus, SessionState};
pub use view::{SubmissionTicket, ViewClock, ViewHandle};
