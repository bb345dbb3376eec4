use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{HealthStatus, ServiceInfo},
};

pub trait HealthCheckService: Send + Sync {
    fn service_info(&self) -> ServiceInfo;

    fn health(&self) -> impl Future<Output = Result<HealthStatus, CoreError>> + Send;
}
