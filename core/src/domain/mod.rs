pub mod common;
pub mod health;
pub mod menu_item;
pub mod rate_limit;
