pub mod hero;
pub mod product_card;
pub mod stat_card;
