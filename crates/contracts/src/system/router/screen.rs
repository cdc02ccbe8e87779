use serde::{Deserialize, Serialize};

/// The screen selected for rendering.
///
/// Only `ProductDetail` carries data: the id of the product being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Auth,
    Admin,
    Checkout,
    OrderSuccess,
    ProductDetail(String),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Auth => "auth",
            Screen::Admin => "admin",
            Screen::Checkout => "checkout",
            Screen::OrderSuccess => "order-success",
            Screen::ProductDetail(_) => "product-detail",
        }
    }

    /// Selected product id, present only while the product page is active.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Screen::ProductDetail(id) => Some(id.as_str()),
            _ => None,
        }
    }
}
