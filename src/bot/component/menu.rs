//! Rendering and effect execution for menu sessions.

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use serenity::all::{
    ButtonStyle, ChannelId, CommandInteraction, Context, CreateActionRow, CreateButton,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse, EditMessage, Http, Message, MessageId,
};

use crate::{
    bot::{
        component::menu_custom_id,
        embed::{self, Requester},
    },
    error::{AppError, ErrorReply},
    menu::{session::Rearm, Effect, MenuAction, MenuAnchor, MenuSessions, Screen},
    model::{account::LinkAccountParam, snapshot::StatsCategory},
    service::{account::AccountService, stats::StatsService},
    state::AppState,
};

/// Message content, embeds and buttons of one menu render.
#[derive(Debug, Clone, Default)]
pub struct MenuView {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    pub components: Vec<CreateActionRow>,
}

impl MenuView {
    fn text(message: String) -> Self {
        Self {
            content: Some(message),
            ..Default::default()
        }
    }

    fn embed(embed: CreateEmbed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    /// Replaces the menu with the user-facing form of `err`; buttons are removed.
    pub fn from_error(err: AppError) -> Self {
        match err.into_reply() {
            ErrorReply::Notice { message, .. } => Self::text(message),
            ErrorReply::Failure => Self::embed(embed::error()),
        }
    }

    /// Initial response to a slash command.
    pub fn into_response(self) -> CreateInteractionResponseMessage {
        let response = CreateInteractionResponseMessage::new()
            .embeds(self.embeds)
            .components(self.components);

        match self.content {
            Some(content) => response.content(content),
            None => response,
        }
    }

    /// Reply to a prefix command message.
    pub fn into_message(self) -> CreateMessage {
        let message = CreateMessage::new()
            .embeds(self.embeds)
            .components(self.components);

        match self.content {
            Some(content) => message.content(content),
            None => message,
        }
    }

    /// In-place update after a button press.
    ///
    /// Every part is set so nothing from the previous screen lingers.
    pub fn into_update(self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content(self.content.unwrap_or_default())
            .embeds(self.embeds)
            .components(self.components)
    }
}

fn button(session_id: u64, action: MenuAction) -> CreateButton {
    let (label, style) = match action {
        MenuAction::Confirm => ("Yes", ButtonStyle::Success),
        MenuAction::Decline => ("No", ButtonStyle::Danger),
        MenuAction::Slot(slot) => (slot.label(), ButtonStyle::Primary),
        MenuAction::Category(StatsCategory::General) => ("General", ButtonStyle::Primary),
        MenuAction::Category(StatsCategory::Event) => ("KvK", ButtonStyle::Success),
        MenuAction::ToggleNames => ("Toggle names", ButtonStyle::Secondary),
    };

    CreateButton::new(menu_custom_id(session_id, action))
        .label(label)
        .style(style)
}

/// Buttons for every action the screen accepts.
pub fn buttons(session_id: u64, screen: &Screen, disabled: bool) -> Vec<CreateActionRow> {
    let buttons = screen
        .actions()
        .into_iter()
        .map(|action| button(session_id, action).disabled(disabled))
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Renders a screen with live buttons.
///
/// The leaderboard screen reads the current KvK snapshot on every render.
pub async fn render(
    db: &DatabaseConnection,
    session_id: u64,
    requester: &Requester,
    screen: &Screen,
) -> Result<MenuView, AppError> {
    let view = match screen {
        Screen::LinkConfirm {
            governor_id,
            governor_name,
        } => MenuView {
            content: Some("Please confirm if this is your account?".to_string()),
            embeds: vec![embed::governor_preview(*governor_id, governor_name)],
            ..Default::default()
        },
        Screen::LinkSlot { .. } => MenuView::text("Please choose your account type".to_string()),
        Screen::UnlinkSlot { .. } => {
            MenuView::text("Which account would you like to unlink?".to_string())
        }
        Screen::UnlinkConfirm { governor_id, .. } => MenuView {
            content: Some("Are you sure you want to unlink this account?".to_string()),
            embeds: vec![embed::governor_preview(*governor_id, &requester.name)],
            ..Default::default()
        },
        Screen::StatsCategory { .. } => MenuView::text("Choose your account".to_string()),
        Screen::StatsSlot { .. } => MenuView::text("Please specify".to_string()),
        Screen::Leaderboard { metric, show_ids } => {
            let rows = StatsService::new(db).top10(*metric).await?;
            MenuView::embed(embed::leaderboard(*metric, &rows, *show_ids))
        }
    };

    Ok(MenuView {
        components: buttons(session_id, screen, false),
        ..view
    })
}

/// Runs the effects of a button press in order and returns the resulting view.
///
/// Stops at the first failing effect.
pub async fn execute(
    db: &DatabaseConnection,
    updated_label: Option<&str>,
    session_id: u64,
    requester: &Requester,
    effects: Vec<Effect>,
) -> Result<MenuView, AppError> {
    let mut view = MenuView::default();

    for effect in effects {
        match effect {
            Effect::Render(screen) => {
                view = render(db, session_id, requester, &screen).await?;
            }
            Effect::Link { slot, governor_id } => {
                AccountService::new(db)
                    .link(LinkAccountParam {
                        user_id: requester.id,
                        display_name: requester.name.clone(),
                        slot,
                        governor_id,
                    })
                    .await?;
            }
            Effect::Unlink { slot } => {
                AccountService::new(db)
                    .unlink(requester.id, slot)
                    .await?;
            }
            Effect::ShowStats { category, slot } => {
                let snapshot = StatsService::new(db)
                    .linked_stats(requester.id, category, slot)
                    .await?;
                view = MenuView::embed(embed::stats_card(&snapshot, requester, updated_label));
            }
            Effect::Notify(message) => {
                view = MenuView::text(message);
            }
            Effect::DisableControls(screen) => {
                view.components = buttons(session_id, &screen, true);
            }
        }
    }

    Ok(view)
}

/// Opens a menu as the response to a slash command.
pub async fn open_from_command(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
    screen: Screen,
    timeout: Duration,
) -> Result<(), AppError> {
    let session_id = state
        .menus
        .open(command.user.id.get(), screen.clone(), timeout)
        .await;

    let requester = Requester::from(&command.user);
    let sent = async {
        let view = render(&state.db, session_id, &requester, &screen).await?;
        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(view.into_response()),
            )
            .await?;
        Ok::<(), AppError>(())
    }
    .await;

    if let Err(err) = sent {
        state.menus.discard(session_id).await;
        return Err(err);
    }

    state
        .menus
        .bind(
            session_id,
            MenuAnchor::Interaction {
                token: command.token.clone(),
            },
        )
        .await;

    schedule_timeout(
        ctx.http.clone(),
        state.menus.clone(),
        session_id,
        Rearm {
            generation: 0,
            timeout,
        },
    );

    Ok(())
}

/// Opens a menu as a reply to a prefix command message.
pub async fn open_from_message(
    ctx: &Context,
    state: &AppState,
    message: &Message,
    screen: Screen,
    timeout: Duration,
) -> Result<(), AppError> {
    let session_id = state
        .menus
        .open(message.author.id.get(), screen.clone(), timeout)
        .await;

    let requester = Requester::from(&message.author);
    let sent = async {
        let view = render(&state.db, session_id, &requester, &screen).await?;
        let reply = message
            .channel_id
            .send_message(&ctx.http, view.into_message().reference_message(message))
            .await?;
        Ok::<Message, AppError>(reply)
    }
    .await;

    let reply = match sent {
        Ok(reply) => reply,
        Err(err) => {
            state.menus.discard(session_id).await;
            return Err(err);
        }
    };

    state
        .menus
        .bind(
            session_id,
            MenuAnchor::Message {
                channel_id: reply.channel_id.get(),
                message_id: reply.id.get(),
            },
        )
        .await;

    schedule_timeout(
        ctx.http.clone(),
        state.menus.clone(),
        session_id,
        Rearm {
            generation: 0,
            timeout,
        },
    );

    Ok(())
}

/// Expires the session after `rearm.timeout` unless it was pressed or finished since.
pub fn schedule_timeout(http: Arc<Http>, menus: MenuSessions, session_id: u64, rearm: Rearm) {
    tokio::spawn(async move {
        tokio::time::sleep(rearm.timeout).await;

        let Some(expired) = menus.expire(session_id, rearm.generation).await else {
            return;
        };

        tracing::debug!("Menu {} timed out", session_id);

        let Some(anchor) = expired.anchor else {
            return;
        };

        for effect in expired.effects {
            if let Effect::DisableControls(screen) = effect {
                let components = buttons(session_id, &screen, true);

                if let Err(e) = disable_controls(&http, &anchor, components).await {
                    tracing::warn!("Failed to disable menu {}: {:?}", session_id, e);
                }
            }
        }
    });
}

async fn disable_controls(
    http: &Arc<Http>,
    anchor: &MenuAnchor,
    components: Vec<CreateActionRow>,
) -> Result<(), serenity::Error> {
    match anchor {
        MenuAnchor::Interaction { token } => {
            let edit = EditInteractionResponse::new().components(components);
            http.edit_original_interaction_response(token, &edit, Vec::new())
                .await?;
        }
        MenuAnchor::Message {
            channel_id,
            message_id,
        } => {
            ChannelId::new(*channel_id)
                .edit_message(
                    http,
                    MessageId::new(*message_id),
                    EditMessage::new().components(components),
                )
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::model::account::AccountSlot;

    const USER_ID: u64 = 123456789;

    fn requester() -> Requester {
        Requester {
            id: USER_ID,
            name: "ragnar".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        }
    }

    fn disabled_flags(view: &MenuView) -> Vec<bool> {
        let rows = serde_json::to_value(&view.components).unwrap();
        rows.as_array()
            .unwrap()
            .iter()
            .flat_map(|row| row["components"].as_array().unwrap().clone())
            .map(|button| button["disabled"].as_bool().unwrap())
            .collect()
    }

    /// Tests the effects of choosing a slot on the link menu.
    ///
    /// Expected: the governor is stored as main and the menu is replaced by the notice
    #[tokio::test]
    async fn link_effect_stores_governor_then_notifies() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::snapshot::GeneralSnapshotFactory::new(db)
            .governor_id("50001")
            .build()
            .await?;

        let notice = "You have been successfully registered.".to_string();
        let view = execute(
            db,
            None,
            1,
            &requester(),
            vec![
                Effect::Link {
                    slot: AccountSlot::Main,
                    governor_id: 50001,
                },
                Effect::Notify(notice.clone()),
            ],
        )
        .await?;

        assert_eq!(view.content, Some(notice));
        assert!(view.embeds.is_empty());
        assert!(view.components.is_empty());

        let linked = AccountService::new(db).require_linked(USER_ID).await?;
        assert_eq!(linked.main, Some(50001));
        assert_eq!(linked.alt, None);
        assert_eq!(linked.display_name, "ragnar");

        Ok(())
    }

    /// Tests linking a governor that a sync removed while the menu was open.
    ///
    /// Expected: Err(NotFound) and nothing stored
    #[tokio::test]
    async fn link_effect_fails_for_missing_governor() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = execute(
            db,
            None,
            1,
            &requester(),
            vec![
                Effect::Link {
                    slot: AccountSlot::Main,
                    governor_id: 50001,
                },
                Effect::Notify("You have been successfully registered.".to_string()),
            ],
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(AccountService::new(db).get_linked(USER_ID).await?.is_none());

        Ok(())
    }

    /// Tests rendering a screen and then disabling its controls.
    ///
    /// Expected: the screen's buttons are kept but all disabled
    #[tokio::test]
    async fn disable_controls_keeps_buttons_disabled() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let screen = Screen::LinkSlot { governor_id: 50001 };
        let view = execute(
            db,
            None,
            1,
            &requester(),
            vec![
                Effect::Render(screen.clone()),
                Effect::DisableControls(screen),
            ],
        )
        .await?;

        assert_eq!(disabled_flags(&view), vec![true; 3]);

        Ok(())
    }

    /// Tests the unlink confirmation screen.
    ///
    /// Expected: the preview names the requesting user and the governor, buttons are live
    #[tokio::test]
    async fn unlink_confirm_shows_username() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let screen = Screen::UnlinkConfirm {
            slot: AccountSlot::Alt,
            governor_id: 50002,
        };
        let view = render(db, 1, &requester(), &screen).await?;

        let preview = serde_json::to_value(&view.embeds[0]).unwrap();
        assert_eq!(
            preview["description"],
            "**Username:** ragnar\n**Governor ID:** 50002"
        );
        assert_eq!(disabled_flags(&view), vec![false, false]);

        Ok(())
    }
}
