use crate::model::{
    account::AccountSlot,
    snapshot::{Metric, StatsCategory},
};

/// A button on a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Confirm,
    Decline,
    Slot(AccountSlot),
    Category(StatsCategory),
    ToggleNames,
}

impl MenuAction {
    /// Encodes the action for a component custom id.
    pub fn encode(self) -> String {
        match self {
            Self::Confirm => "yes".to_string(),
            Self::Decline => "no".to_string(),
            Self::Slot(slot) => format!("slot.{}", slot.key()),
            Self::Category(category) => format!("category.{}", category.key()),
            Self::ToggleNames => "toggle".to_string(),
        }
    }

    pub fn decode(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Confirm),
            "no" => Some(Self::Decline),
            "toggle" => Some(Self::ToggleNames),
            _ => {
                if let Some(slot) = value.strip_prefix("slot.") {
                    AccountSlot::from_key(slot).map(Self::Slot)
                } else if let Some(category) = value.strip_prefix("category.") {
                    StatsCategory::from_key(category).map(Self::Category)
                } else {
                    None
                }
            }
        }
    }
}

/// What a menu is currently showing, with the context it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// "Is this your account?" for a governor found in the general snapshot.
    LinkConfirm {
        governor_id: u64,
        governor_name: String,
    },
    /// Choose the slot to link the confirmed governor into.
    LinkSlot { governor_id: u64 },
    /// Choose which linked slot to unlink; only set slots are offered.
    UnlinkSlot { linked: Vec<(AccountSlot, u64)> },
    /// "Are you sure?" before clearing a slot.
    UnlinkConfirm { slot: AccountSlot, governor_id: u64 },
    /// Choose general or KvK stats; `slot` is already known when the caller named it.
    StatsCategory { slot: Option<AccountSlot> },
    /// Choose whose stats to show in the chosen category.
    StatsSlot { category: StatsCategory },
    /// KvK leaderboard, showing names or governor IDs.
    Leaderboard { metric: Metric, show_ids: bool },
}

impl Screen {
    /// Buttons offered on this screen, in display order.
    pub fn actions(&self) -> Vec<MenuAction> {
        match self {
            Self::LinkConfirm { .. } | Self::UnlinkConfirm { .. } => {
                vec![MenuAction::Confirm, MenuAction::Decline]
            }
            Self::LinkSlot { .. } | Self::StatsSlot { .. } => {
                AccountSlot::ALL.into_iter().map(MenuAction::Slot).collect()
            }
            Self::UnlinkSlot { linked } => linked
                .iter()
                .map(|(slot, _)| MenuAction::Slot(*slot))
                .collect(),
            Self::StatsCategory { .. } => StatsCategory::ALL
                .into_iter()
                .map(MenuAction::Category)
                .collect(),
            Self::Leaderboard { .. } => vec![MenuAction::ToggleNames],
        }
    }
}

/// How a finished menu ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Cancelled,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Active(Screen),
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Pressed(MenuAction),
    TimedOut,
}

/// Work the bot performs after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the message with this screen and its buttons.
    Render(Screen),
    /// Write the governor into the slot.
    Link { slot: AccountSlot, governor_id: u64 },
    /// Clear the slot.
    Unlink { slot: AccountSlot },
    /// Replace the message with the stats card of the slot's governor.
    ShowStats {
        category: StatsCategory,
        slot: AccountSlot,
    },
    /// Replace the message with a final text and no buttons.
    Notify(String),
    /// Keep the message but render this screen's buttons disabled.
    DisableControls(Screen),
}

/// Result of applying an event to an active menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: MenuState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(screen: Screen) -> Self {
        Self {
            state: MenuState::Active(screen.clone()),
            effects: vec![Effect::Render(screen)],
        }
    }

    fn finish(outcome: Outcome, effects: Vec<Effect>) -> Self {
        Self {
            state: MenuState::Finished(outcome),
            effects,
        }
    }
}

/// Computes the next state of a menu.
///
/// Returns `None` when the event does not apply: the menu already finished, or the
/// button is not one the current screen offers. A timeout applies to every active
/// screen and re-renders its buttons disabled.
pub fn transition(state: &MenuState, event: MenuEvent) -> Option<Transition> {
    let MenuState::Active(screen) = state else {
        return None;
    };

    let action = match event {
        MenuEvent::TimedOut => {
            return Some(Transition::finish(
                Outcome::TimedOut,
                vec![Effect::DisableControls(screen.clone())],
            ))
        }
        MenuEvent::Pressed(action) => action,
    };

    if !screen.actions().contains(&action) {
        return None;
    }

    let next = match (screen, action) {
        (Screen::LinkConfirm { governor_id, .. }, MenuAction::Confirm) => {
            Transition::to(Screen::LinkSlot {
                governor_id: *governor_id,
            })
        }
        (Screen::LinkConfirm { .. }, MenuAction::Decline) => Transition::finish(
            Outcome::Cancelled,
            vec![Effect::Notify("Confirmation declined by the user.".to_string())],
        ),
        (Screen::LinkSlot { governor_id }, MenuAction::Slot(slot)) => Transition::finish(
            Outcome::Committed,
            vec![
                Effect::Link {
                    slot,
                    governor_id: *governor_id,
                },
                Effect::Notify("You have been successfully registered.".to_string()),
            ],
        ),
        (Screen::UnlinkSlot { linked }, MenuAction::Slot(slot)) => {
            let (_, governor_id) = linked.iter().find(|(linked, _)| *linked == slot)?;
            Transition::to(Screen::UnlinkConfirm {
                slot,
                governor_id: *governor_id,
            })
        }
        (Screen::UnlinkConfirm { slot, .. }, MenuAction::Confirm) => Transition::finish(
            Outcome::Committed,
            vec![
                Effect::Unlink { slot: *slot },
                Effect::Notify(format!("{} account unlinked", slot.name())),
            ],
        ),
        (Screen::UnlinkConfirm { .. }, MenuAction::Decline) => Transition::finish(
            Outcome::Cancelled,
            vec![Effect::Notify("Account unlinking cancelled".to_string())],
        ),
        (Screen::StatsCategory { slot }, MenuAction::Category(category)) => match slot {
            Some(slot) => Transition::finish(
                Outcome::Committed,
                vec![Effect::ShowStats {
                    category,
                    slot: *slot,
                }],
            ),
            None => Transition::to(Screen::StatsSlot { category }),
        },
        (Screen::StatsSlot { category }, MenuAction::Slot(slot)) => Transition::finish(
            Outcome::Committed,
            vec![Effect::ShowStats {
                category: *category,
                slot,
            }],
        ),
        (Screen::Leaderboard { metric, show_ids }, MenuAction::ToggleNames) => {
            Transition::to(Screen::Leaderboard {
                metric: *metric,
                show_ids: !show_ids,
            })
        }
        _ => return None,
    };

    Some(next)
}
