pub mod health;
pub mod menu_item;
pub mod server;
