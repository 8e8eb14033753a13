pub mod api;
pub mod types;

pub use api::{FetchError, MatchQuery, MatchesClient, MatchesSource};
pub use types::{Match, MatchResult, MatchStatus, Stream, Team, Tier, Tournament};
