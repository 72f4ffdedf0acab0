//! Interactive button menus.
//!
//! A menu is a small finite-state session: the screen currently shown plus the context
//! it needs. `state::transition` is a pure function from (state, event) to the next state
//! and the effects the bot must perform; `session::MenuSessions` stores live sessions,
//! enforces ownership and makes termination idempotent. Rendering and executing effects
//! is the bot's job.

pub mod session;
pub mod state;

pub use session::{MenuAnchor, MenuRejection, MenuSessions};
pub use state::{Effect, MenuAction, MenuEvent, Screen};
