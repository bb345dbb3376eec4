pub mod errors;
pub mod menu_item_details;
pub mod model_version;

pub use errors::*;
pub use menu_item_details::*;
pub use model_version::*;
