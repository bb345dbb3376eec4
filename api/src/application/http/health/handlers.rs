pub mod health_check;
pub mod service_info;
