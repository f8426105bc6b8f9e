pub mod review_badge;
pub mod search_bar;
pub mod stall_card;
