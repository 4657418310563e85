mod app_context;
mod config_warnings;
mod store_handle;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use store_handle::StoreHandle;
