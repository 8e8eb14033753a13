use std::ops::RangeInclusive;

/// Page size requested by the match list views
pub const MATCHES_PAGE_LIMIT: u32 = 50;

/// Range of `limit` values the matches API accepts
pub const MATCHES_LIMIT_RANGE: RangeInclusive<u32> = 1..=200;

/// Sent as a `Cache-Control: max-age` request hint, not a server-side revalidation.
/// Cross-origin backends must allow the header in CORS preflight.
pub const MATCHES_MAX_AGE_SECS: u32 = 30;
