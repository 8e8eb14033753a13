#[cfg(feature = "ssr")]
pub mod server;
pub mod tier_pref;
