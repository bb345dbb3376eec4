pub mod generate_item_details;
