//! Embed builders for stats cards, account listings and leaderboards.
//!
//! Pure functions from domain models to serenity builders, so command handlers only
//! decide what to show.

use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter, Timestamp, User};

use crate::{
    model::{
        account::{AccountSlot, LinkedAccounts},
        snapshot::{AggregateTotals, Metric, PlayerSnapshot, SnapshotDetails},
    },
    util::format::{stat, thousands},
};

const STATS_COLOUR: Colour = Colour::from_rgb(0, 200, 250);
const ACCOUNTS_COLOUR: Colour = Colour::from_rgb(87, 242, 135);
const ERROR_COLOUR: Colour = Colour::from_rgb(250, 0, 0);
const SPACER: &str = "\u{200B}";

/// The Discord user a reply is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: u64,
    pub name: String,
    pub avatar_url: String,
}

impl From<&User> for Requester {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            avatar_url: user.face(),
        }
    }
}

/// Builds a governor's stats card.
///
/// The footer names the requesting user, plus the snapshot label when one is configured.
pub fn stats_card(
    snapshot: &PlayerSnapshot,
    requester: &Requester,
    updated_label: Option<&str>,
) -> CreateEmbed {
    let mut description = format!(
        "**Governor:** {}\n**Governor ID:** {}\n**Alliance:** {}\n**Power:** {}\n",
        snapshot.governor_name,
        snapshot.governor_id,
        snapshot.alliance_tag.as_deref().unwrap_or("-"),
        stat(snapshot.power),
    );

    let title = match &snapshot.details {
        SnapshotDetails::General { kill_points } => {
            description.push_str(&format!("**Kill Points:** {}", stat(*kill_points)));
            "Basic Stats :chart_with_upwards_trend:"
        }
        SnapshotDetails::Event {
            rank,
            dkp_required,
            dkp_achieved,
        } => {
            description.push_str(&format!(
                "**Rank:** {}\n**DKP Required:** {}\n**DKP Achieved:** {}",
                rank.map(|rank| rank.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                stat(*dkp_required),
                stat(*dkp_achieved),
            ));
            "KvK Stats :crossed_swords:"
        }
    };

    let mut footer = format!("Requested by @{}", requester.name);
    if let Some(label) = updated_label {
        footer.push_str(&format!(" • Updated: {}", label));
    }

    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(STATS_COLOUR)
        .field("T4 KILLS", stat(snapshot.tier4_kills), true)
        .field("T5 KILLS", stat(snapshot.tier5_kills), true)
        .field("DEATHS", stat(snapshot.deaths), true)
        .footer(CreateEmbedFooter::new(footer).icon_url(requester.avatar_url.as_str()))
        .timestamp(Timestamp::now())
}

/// Lists a user's linked governors; every slot reads "Not found" for an unknown user.
///
/// Inline fields wrap three per row, giving `Main | | Alt` over `| | Farm`.
pub fn linked_accounts(user: &Requester, accounts: Option<&LinkedAccounts>) -> CreateEmbed {
    let value = |slot: AccountSlot| {
        accounts
            .and_then(|accounts| accounts.get(slot))
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-# Not found".to_string())
    };

    CreateEmbed::new()
        .title(format!("Accounts linked to {}", user.name))
        .colour(ACCOUNTS_COLOUR)
        .field("Main", value(AccountSlot::Main), true)
        .field(SPACER, SPACER, true)
        .field("Alt", value(AccountSlot::Alt), true)
        .field(SPACER, SPACER, true)
        .field(SPACER, SPACER, true)
        .field("Farm", value(AccountSlot::Farm), true)
        .thumbnail(user.avatar_url.as_str())
}

/// Shown on the link and unlink confirmation screens.
pub fn governor_preview(governor_id: u64, username: &str) -> CreateEmbed {
    CreateEmbed::new()
        .colour(ACCOUNTS_COLOUR)
        .description(format!(
            "**Username:** {}\n**Governor ID:** {}",
            username, governor_id
        ))
}

/// KvK top 10 for a metric, listing names or governor IDs.
pub fn leaderboard(metric: Metric, rows: &[PlayerSnapshot], show_ids: bool) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(format!("Top 10 players by {}", metric.label()))
        .colour(STATS_COLOUR);

    if rows.is_empty() {
        return embed.description("No KvK stats available yet.");
    }

    rows.iter().enumerate().fold(embed, |embed, (index, row)| {
        let who = if show_ids {
            row.governor_id.to_string()
        } else {
            row.governor_name.clone()
        };

        embed.field(
            format!("{}. {}", index + 1, who),
            stat(metric.value(row)),
            false,
        )
    })
}

/// Kingdom totals over the top governors by power.
pub fn kingdom_totals(totals: &AggregateTotals, top_k: usize) -> CreateEmbed {
    totals.totals.iter().fold(
        CreateEmbed::new()
            .title(format!("KvK stats of Top {} by power", top_k))
            .description("- Born to Fight! Trained to Kill! Prepared to Die! -")
            .colour(STATS_COLOUR)
            .footer(CreateEmbedFooter::new(format!(
                "Summed over {} governors",
                totals.rows
            ))),
        |embed, total| {
            embed.field(
                format!("Total {}", total.metric.label()),
                thousands(total.total),
                true,
            )
        },
    )
}

/// Generic failure shown when a command hits an unexpected error.
pub fn error() -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description("Something went wrong during invocation of command")
        .colour(ERROR_COLOUR)
}
