//! Domain model and navigation core of the LUMINA storefront.
//!
//! Platform independent: everything here runs and is tested natively. The
//! `frontend` crate wires it to the browser.

pub mod domain;
pub mod shared;
pub mod state;
pub mod system;
