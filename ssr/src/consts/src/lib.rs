mod limits;
mod remote;

pub use limits::*;
pub use remote::*;

pub const TIER_STORE: &str = "tier";

pub const UPCOMING_MATCHES_PATH: &str = "/api/matches/upcoming";
pub const LIVE_MATCHES_PATH: &str = "/api/matches/live";
pub const RECENT_MATCHES_PATH: &str = "/api/matches/recent";
