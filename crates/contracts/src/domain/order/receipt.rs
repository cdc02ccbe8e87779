//! Snapshot of a just-paid cart, shown on the confirmation screen.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, CartItem};

/// Simulated tax share already included in the paid total.
pub const TAX_RATE: f64 = 0.07;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub number: String,
    pub date: NaiveDate,
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Receipt {
    /// `seed` picks the six-digit order number.
    pub fn capture(cart: &Cart, date: NaiveDate, seed: u32) -> Self {
        Self {
            number: order_number(seed),
            date,
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }

    pub fn taxes(&self) -> f64 {
        self.total * TAX_RATE
    }

    pub fn subtotal(&self) -> f64 {
        self.total - self.taxes()
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn delivery_estimate(&self, delivery_days: u32) -> NaiveDate {
        self.date + Duration::days(i64::from(delivery_days))
    }
}

/// `LMN-` followed by a number in 100000..=999999.
pub fn order_number(seed: u32) -> String {
    format!("LMN-{}", 100_000 + seed % 900_000)
}

/// "5 de março".
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{} de {}", date.day(), MONTHS_PT[date.month0() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_order_number_range() {
        assert_eq!(order_number(0), "LMN-100000");
        assert_eq!(order_number(899_999), "LMN-999999");
        assert_eq!(order_number(900_000), "LMN-100000");
    }

    #[test]
    fn test_capture_keeps_lines_and_total() {
        let catalog = Catalog::default();
        let mut cart = Cart::default();
        cart.add(catalog.find("1").unwrap().clone());
        cart.add(catalog.find("1").unwrap().clone());

        let receipt = Receipt::capture(&cart, date(2024, 3, 1), 42);
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total, cart.total());
        assert_eq!(receipt.formatted_date(), "01/03/2024");

        // the snapshot survives clearing the cart
        cart.clear();
        assert_eq!(receipt.items[0].quantity, 2);
    }

    #[test]
    fn test_taxes_are_included_in_total() {
        let receipt = Receipt {
            number: order_number(1),
            date: date(2024, 1, 1),
            items: Vec::new(),
            total: 100.0,
        };
        assert!((receipt.taxes() - 7.0).abs() < 1e-9);
        assert!((receipt.subtotal() - 93.0).abs() < 1e-9);
    }

    #[test]
    fn test_delivery_estimate_crosses_month() {
        let receipt = Receipt {
            number: order_number(1),
            date: date(2024, 1, 29),
            items: Vec::new(),
            total: 0.0,
        };
        let estimate = receipt.delivery_estimate(5);
        assert_eq!(estimate, date(2024, 2, 3));
        assert_eq!(format_day_month(estimate), "3 de fevereiro");
    }
}
