pub mod check;
pub mod config;
pub mod dispatch;
pub mod render;
pub mod schema;
pub mod templates;
