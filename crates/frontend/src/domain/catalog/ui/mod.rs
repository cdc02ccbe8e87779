pub mod details;
pub mod home;
