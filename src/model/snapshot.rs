use std::cmp::Ordering;

use crate::{
    error::AppError,
    util::parse::{parse_grouped_number, parse_u64_from_string},
};

/// Which snapshot table a lookup reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsCategory {
    /// Basic account stats.
    General,
    /// Kingdom-vs-Kingdom event stats.
    Event,
}

impl StatsCategory {
    pub const ALL: [StatsCategory; 2] = [StatsCategory::General, StatsCategory::Event];

    pub fn key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Event => "kvk",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Event => "KvK",
        }
    }
}

/// A numeric stat that rows can be ranked or summed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Power,
    KillPoints,
    Deaths,
    Tier4Kills,
    Tier5Kills,
    Rank,
    DkpRequired,
    DkpAchieved,
}

impl Metric {
    /// Metrics offered on the leaderboard.
    pub const LEADERBOARD: [Metric; 3] = [Metric::Tier4Kills, Metric::Tier5Kills, Metric::Deaths];

    pub fn key(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::KillPoints => "kill_points",
            Self::Deaths => "deaths",
            Self::Tier4Kills => "tier4_kills",
            Self::Tier5Kills => "tier5_kills",
            Self::Rank => "rank",
            Self::DkpRequired => "dkp_required",
            Self::DkpAchieved => "dkp_achieved",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [
            Self::Power,
            Self::KillPoints,
            Self::Deaths,
            Self::Tier4Kills,
            Self::Tier5Kills,
            Self::Rank,
            Self::DkpRequired,
            Self::DkpAchieved,
        ]
        .into_iter()
        .find(|metric| metric.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::KillPoints => "Kill Points",
            Self::Deaths => "Deaths",
            Self::Tier4Kills => "T4 Kills",
            Self::Tier5Kills => "T5 Kills",
            Self::Rank => "Rank",
            Self::DkpRequired => "DKP Required",
            Self::DkpAchieved => "DKP Achieved",
        }
    }

    /// Reads this metric from a snapshot row.
    ///
    /// Returns `None` when the cell was empty or the metric does not exist in the row's
    /// category, e.g. kill points on an event row.
    pub fn value(self, snapshot: &PlayerSnapshot) -> Option<i64> {
        match (self, &snapshot.details) {
            (Self::Power, _) => snapshot.power,
            (Self::Deaths, _) => snapshot.deaths,
            (Self::Tier4Kills, _) => snapshot.tier4_kills,
            (Self::Tier5Kills, _) => snapshot.tier5_kills,
            (Self::KillPoints, SnapshotDetails::General { kill_points }) => *kill_points,
            (Self::Rank, SnapshotDetails::Event { rank, .. }) => *rank,
            (Self::DkpRequired, SnapshotDetails::Event { dkp_required, .. }) => *dkp_required,
            (Self::DkpAchieved, SnapshotDetails::Event { dkp_achieved, .. }) => *dkp_achieved,
            _ => None,
        }
    }
}

/// Stats that only one of the two snapshot tables carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotDetails {
    General {
        kill_points: Option<i64>,
    },
    Event {
        rank: Option<i64>,
        dkp_required: Option<i64>,
        dkp_achieved: Option<i64>,
    },
}

/// A governor's row in one snapshot table with numbers parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub governor_id: u64,
    pub governor_name: String,
    pub alliance_tag: Option<String>,
    pub power: Option<i64>,
    pub deaths: Option<i64>,
    pub tier4_kills: Option<i64>,
    pub tier5_kills: Option<i64>,
    pub details: SnapshotDetails,
}

impl PlayerSnapshot {
    /// Converts a general snapshot row, parsing comma-grouped stats.
    pub fn from_general(entity: entity::general_snapshot::Model) -> Result<Self, AppError> {
        Ok(Self {
            governor_id: parse_u64_from_string(entity.governor_id)?,
            governor_name: entity.governor_name,
            alliance_tag: non_empty(entity.alliance_tag),
            power: number(&entity.power),
            deaths: number(&entity.deaths),
            tier4_kills: number(&entity.tier4_kills),
            tier5_kills: number(&entity.tier5_kills),
            details: SnapshotDetails::General {
                kill_points: number(&entity.kill_points),
            },
        })
    }

    /// Converts an event snapshot row, parsing comma-grouped stats.
    pub fn from_event(entity: entity::event_snapshot::Model) -> Result<Self, AppError> {
        Ok(Self {
            governor_id: parse_u64_from_string(entity.governor_id)?,
            governor_name: entity.governor_name,
            alliance_tag: non_empty(entity.alliance_tag),
            power: number(&entity.power),
            deaths: number(&entity.deaths),
            tier4_kills: number(&entity.tier4_kills),
            tier5_kills: number(&entity.tier5_kills),
            details: SnapshotDetails::Event {
                rank: number(&entity.rank),
                dkp_required: number(&entity.dkp_required),
                dkp_achieved: number(&entity.dkp_achieved),
            },
        })
    }
}

fn number(cell: &Option<String>) -> Option<i64> {
    cell.as_deref().and_then(parse_grouped_number)
}

fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Sorts rows by `metric`, highest first.
///
/// Rows without a value sort after every row with one. Equal values are ordered by
/// ascending governor ID so the ranking is deterministic.
pub fn sort_descending(rows: &mut [PlayerSnapshot], metric: Metric) {
    rows.sort_by(|a, b| {
        let order = match (metric.value(a), metric.value(b)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        order.then_with(|| a.governor_id.cmp(&b.governor_id))
    });
}

/// Sum of one metric across an aggregated group of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTotal {
    pub metric: Metric,
    pub total: i64,
}

/// Result of summing metrics over the top rows of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTotals {
    /// Number of rows that were summed.
    pub rows: usize,
    pub totals: Vec<MetricTotal>,
}

impl AggregateTotals {
    pub fn get(&self, metric: Metric) -> Option<i64> {
        self.totals
            .iter()
            .find(|total| total.metric == metric)
            .map(|total| total.total)
    }
}
