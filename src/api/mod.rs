mod app_storage;
mod drink_log_service;
mod resource_service;
mod resource_service_factory;
mod template_service;
mod template_service_factory;
mod template_store;
pub mod environment;
pub mod errors;
pub mod models;
pub mod template_codec;

pub use app_storage::*;
pub use drink_log_service::*;
pub use resource_service::*;
pub use resource_service_factory::*;
pub use template_service::*;
pub use template_service_factory::*;
pub use template_store::*;
