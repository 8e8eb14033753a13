pub mod match_card;
pub mod tier_toggle;
