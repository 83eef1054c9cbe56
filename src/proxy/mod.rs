//! Proxy preference model, persistence, and application launch.

pub mod config;
pub mod launcher;
pub mod store;

pub use config::{FormInput, ProxyConfig, ProxyType, UnknownProxyType};
pub use launcher::{
    LaunchPlan, LaunchReport, LaunchSummary, Launcher, ProcessSpawner, SystemSpawner,
    DEFAULT_EXECUTABLE, PROXY_ENV_KEYS, PROXY_SERVER_FLAG,
};
pub use store::ConfigStore;
