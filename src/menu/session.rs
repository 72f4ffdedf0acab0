use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use rand::Rng;
use tokio::sync::RwLock;

use crate::menu::state::{transition, Effect, MenuEvent, MenuState, Screen};

/// Where a menu's message lives, so a timeout can edit it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAnchor {
    /// Response to a slash command, editable through its interaction token.
    Interaction { token: String },
    /// Normal message sent in reply to a prefix command.
    Message { channel_id: u64, message_id: u64 },
}

#[derive(Debug, Clone)]
struct MenuSession {
    owner_id: u64,
    anchor: Option<MenuAnchor>,
    state: MenuState,
    timeout: Duration,
    /// Bumped on every applied press; a pending timeout only fires for the generation
    /// it was scheduled for.
    generation: u64,
}

/// Why a button press was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRejection {
    /// Someone other than the invoking user pressed a button.
    NotOwner,
    /// The menu is finished, unknown (e.g. from before a restart) or the button does not
    /// belong to the current screen.
    Inactive,
}

/// A press applied to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub effects: Vec<Effect>,
    /// Present while the menu stays open: schedule a timeout for this generation.
    pub rearm: Option<Rearm>,
}

/// Timer to schedule after a press left the menu open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rearm {
    pub generation: u64,
    pub timeout: Duration,
}

/// A session that just timed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired {
    pub anchor: Option<MenuAnchor>,
    pub effects: Vec<Effect>,
}

/// Live menu sessions shared across event handlers.
///
/// All transitions run under the write lock, so a timeout and a press racing on the same
/// session cannot both act: whichever takes the lock first finishes or advances the
/// session and the other sees the result.
#[derive(Clone)]
pub struct MenuSessions {
    sessions: Arc<RwLock<HashMap<u64, MenuSession>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for MenuSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSessions {
    /// Creates an empty store.
    ///
    /// IDs start at a random offset. Buttons on messages from a previous run still carry
    /// that run's IDs, and they must not resolve to a session opened by this one.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(rand::rng().random())),
        }
    }

    /// Opens a session showing `screen`, returning its ID.
    ///
    /// The first timeout runs for generation 0.
    pub async fn open(&self, owner_id: u64, screen: Screen, timeout: Duration) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1);

        self.sessions.write().await.insert(
            id,
            MenuSession {
                owner_id,
                anchor: None,
                state: MenuState::Active(screen),
                timeout,
                generation: 0,
            },
        );

        id
    }

    /// Records where the session's message lives once it has been sent.
    pub async fn bind(&self, id: u64, anchor: MenuAnchor) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.anchor = Some(anchor);
        }
    }

    /// Drops a session whose message could not be sent.
    pub async fn discard(&self, id: u64) {
        self.sessions.write().await.remove(&id);
    }

    /// Applies a button press from `user_id`.
    ///
    /// Non-owners are rejected without touching the session. Finished sessions are
    /// removed, so later presses and timeouts find nothing to act on.
    pub async fn press(
        &self,
        id: u64,
        user_id: u64,
        event: MenuEvent,
    ) -> Result<Applied, MenuRejection> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(MenuRejection::Inactive)?;

        if session.owner_id != user_id {
            return Err(MenuRejection::NotOwner);
        }

        let next = transition(&session.state, event).ok_or(MenuRejection::Inactive)?;

        let rearm = match next.state {
            MenuState::Active(_) => {
                session.generation += 1;
                session.state = next.state;
                Some(Rearm {
                    generation: session.generation,
                    timeout: session.timeout,
                })
            }
            MenuState::Finished(_) => {
                sessions.remove(&id);
                None
            }
        };

        Ok(Applied {
            effects: next.effects,
            rearm,
        })
    }

    /// Times out a session if it is still active and untouched since `generation`.
    ///
    /// Returns `None` when the session already finished, was pressed again after the
    /// timer was scheduled, or has already timed out, so calling it twice is harmless.
    pub async fn expire(&self, id: u64, generation: u64) -> Option<Expired> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(&id)?;

        if session.generation != generation {
            return None;
        }

        let next = transition(&session.state, MenuEvent::TimedOut)?;
        let session = sessions.remove(&id)?;

        Some(Expired {
            anchor: session.anchor,
            effects: next.effects,
        })
    }

    #[cfg(test)]
    async fn live(&self) -> usize {
        self.sessions.read().await.len()
    }
}
