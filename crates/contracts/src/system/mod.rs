pub mod auth;
pub mod router;
