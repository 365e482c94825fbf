pub mod api;
pub mod config;
pub mod db;
pub mod middleware;
pub mod services;

pub use config::Settings;
pub use db::Db;
