pub mod hash;
pub mod navigation;
pub mod routes;
