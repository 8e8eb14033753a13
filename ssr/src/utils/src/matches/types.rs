use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tournament importance filter sent to the matches API
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    #[serde(rename = "1")]
    Top,
    #[serde(rename = "all")]
    All,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Top => "1",
            Tier::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Top => "Top Tier",
            Tier::All => "All",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Tier::Top),
            "all" => Ok(Tier::All),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Upcoming,
    Running,
    Finished,
    Past,
    NotStarted,
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Past)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Tournament {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub tier: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Team {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub acronym: Option<String>,
    pub image_url: Option<String>,
}

impl Team {
    fn display_name(&self) -> Option<&str> {
        non_empty(&self.name).or_else(|| non_empty(&self.acronym))
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Stream {
    pub raw_url: Option<String>,
    pub language: Option<String>,
    pub platform: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct MatchResult {
    pub team_id: Option<u64>,
    pub score: Option<i64>,
}

/// One esports match as returned by the matches API
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Match {
    pub id: u64,
    pub name: Option<String>,
    /// Actual start, set once the match is live or over
    pub begin_at: Option<String>,
    pub scheduled_at: Option<String>,
    pub status: Option<MatchStatus>,
    pub tournament: Option<Tournament>,
    pub opponents: Option<Vec<Team>>,
    pub winner_id: Option<u64>,
    pub streams: Option<Vec<Stream>>,
    pub results: Option<Vec<MatchResult>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Match {
    pub fn tournament_name(&self) -> &str {
        self.tournament
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .unwrap_or("")
    }

    pub fn start_time(&self) -> &str {
        non_empty(&self.begin_at)
            .or_else(|| non_empty(&self.scheduled_at))
            .unwrap_or("")
    }

    pub fn title(&self) -> &str {
        non_empty(&self.name).unwrap_or("Match")
    }

    /// "Team1 vs Team2" line, `None` when the opponents are not known yet
    pub fn matchup(&self) -> Option<String> {
        let opponents = self.opponents.as_deref().filter(|o| !o.is_empty())?;
        let first = opponents
            .first()
            .and_then(Team::display_name)
            .unwrap_or("Team1");
        let second = opponents
            .get(1)
            .and_then(Team::display_name)
            .unwrap_or("Team2");

        Some(format!("{first} vs {second}"))
    }

    pub fn winner_name(&self) -> Option<&str> {
        if !self.status.is_some_and(|s| s.is_over()) {
            return None;
        }
        let winner_id = self.winner_id?;

        self.opponents
            .as_deref()?
            .iter()
            .find(|team| team.id == Some(winner_id))
            .and_then(Team::display_name)
    }
}
