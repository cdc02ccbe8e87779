//! Hash-based navigation and access control.
//!
//! - [`location`]: raw fragment -> [`Location`]
//! - [`resolver`]: (location, session, cart) -> [`Screen`] + optional rewrite
//! - [`continuation`]: where to go after login / logout
//! - [`navigator`]: applies rewrites through a [`LocationSink`] without looping

pub mod continuation;
pub mod location;
pub mod navigator;
pub mod resolver;
pub mod screen;

pub use continuation::{after_login, after_logout};
pub use location::Location;
pub use navigator::{LocationSink, MemoryLocation, NavigationOutcome, Navigator};
pub use resolver::{can_navigate, resolve, Resolution};
pub use screen::Screen;
