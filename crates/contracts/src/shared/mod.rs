pub mod config;
pub mod notification;
pub mod shipping;
