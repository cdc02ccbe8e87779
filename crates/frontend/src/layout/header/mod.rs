pub mod cart_drawer;
pub mod header;

pub use header::Header;
