use utils::matches::{FetchError, Match};

/// What a match list shows, exactly one at a time
#[derive(Clone, Debug, PartialEq)]
pub enum MatchesView {
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<Match>),
}

impl MatchesView {
    pub fn from_result(result: Result<Vec<Match>, FetchError>) -> Self {
        match result {
            Ok(matches) if matches.is_empty() => Self::Empty,
            Ok(matches) => Self::Loaded(matches),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Failed("Error".to_string())
        } else {
            Self::Failed(message)
        }
    }

    pub fn matches(&self) -> &[Match] {
        match self {
            Self::Loaded(matches) => matches,
            _ => &[],
        }
    }
}
