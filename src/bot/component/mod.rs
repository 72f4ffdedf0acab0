//! Button presses on menu messages.
//!
//! Every menu button carries a custom ID of the form `menu:{session}:{action}`. Presses
//! are routed to the session store, which applies the pure menu transition; the
//! resulting effects are executed here and the message is updated in place.

pub mod menu;

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{component::menu::MenuView, embed::Requester},
    menu::{MenuAction, MenuEvent, MenuRejection},
    state::AppState,
};

static MENU_PREFIX: &str = "menu";
static NOT_OWNER_MESSAGE: &str = "You're not allowed to interact with this panel";
static INACTIVE_MESSAGE: &str = "This menu is no longer active";

pub fn menu_custom_id(session_id: u64, action: MenuAction) -> String {
    format!("{}:{}:{}", MENU_PREFIX, session_id, action.encode())
}

/// Splits a menu custom ID into session ID and action.
pub fn parse_menu_custom_id(custom_id: &str) -> Option<(u64, MenuAction)> {
    let mut parts = custom_id.splitn(3, ':');

    if parts.next()? != MENU_PREFIX {
        return None;
    }

    let session_id = parts.next()?.parse().ok()?;
    let action = MenuAction::decode(parts.next()?)?;

    Some((session_id, action))
}

/// Handle a button press
pub async fn handle_component(ctx: &Context, state: &AppState, component: &ComponentInteraction) {
    let Some((session_id, action)) = parse_menu_custom_id(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
        return;
    };

    let applied = match state
        .menus
        .press(session_id, component.user.id.get(), MenuEvent::Pressed(action))
        .await
    {
        Ok(applied) => applied,
        Err(rejection) => {
            let message = match rejection {
                MenuRejection::NotOwner => NOT_OWNER_MESSAGE,
                MenuRejection::Inactive => INACTIVE_MESSAGE,
            };
            reject(ctx, component, message).await;
            return;
        }
    };

    let executed = menu::execute(
        &state.db,
        state.stats_updated_label.as_deref(),
        session_id,
        &Requester::from(&component.user),
        applied.effects,
    )
    .await;

    let view = match executed {
        Ok(view) => view,
        Err(err) => MenuView::from_error(err),
    };

    if let Err(e) = component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(view.into_update()),
        )
        .await
    {
        tracing::error!("Failed to update menu {}: {:?}", session_id, e);
    }

    if let Some(rearm) = applied.rearm {
        menu::schedule_timeout(ctx.http.clone(), state.menus.clone(), session_id, rearm);
    }
}

async fn reject(ctx: &Context, component: &ComponentInteraction, message: &str) {
    let response = CreateInteractionResponseMessage::new()
        .content(message)
        .ephemeral(true);

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to reject menu press: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{account::AccountSlot, snapshot::StatsCategory};

    #[test]
    fn custom_id_round_trips() {
        for action in [
            MenuAction::Confirm,
            MenuAction::Slot(AccountSlot::Farm),
            MenuAction::Category(StatsCategory::Event),
            MenuAction::ToggleNames,
        ] {
            assert_eq!(
                parse_menu_custom_id(&menu_custom_id(12, action)),
                Some((12, action))
            );
        }
    }

    #[test]
    fn rejects_foreign_custom_ids() {
        assert_eq!(parse_menu_custom_id("menu:12:slot.unknown"), None);
        assert_eq!(parse_menu_custom_id("menu:abc:yes"), None);
        assert_eq!(parse_menu_custom_id("shop:12:yes"), None);
        assert_eq!(parse_menu_custom_id("menu:12"), None);
    }
}
