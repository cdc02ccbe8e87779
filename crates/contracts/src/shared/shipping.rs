//! Mock freight calculation by Brazilian postal code (CEP).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::ShippingConfig;

pub const CEP_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    #[error("CEP incompleto: {0} de 8 dígitos")]
    IncompleteCep(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cep: String,
    pub cost: f64,
    pub delivery_days: u32,
}

/// Digits of the input, capped at the CEP length.
pub fn cep_digits(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CEP_LEN)
        .collect()
}

/// Input mask `NNNNN-NNN`, applied while typing.
pub fn mask_cep(input: &str) -> String {
    let digits = cep_digits(input);
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

pub fn quote(input: &str, config: &ShippingConfig) -> Result<ShippingQuote, ShippingError> {
    let digits = cep_digits(input);
    if digits.len() != CEP_LEN {
        return Err(ShippingError::IncompleteCep(digits.len()));
    }
    let cost = if digits.starts_with(config.near_prefix.as_str()) {
        config.near_cost
    } else {
        config.far_cost
    };
    Ok(ShippingQuote {
        cep: mask_cep(&digits),
        cost,
        delivery_days: config.delivery_days,
    })
}

pub fn order_total(cart_total: f64, shipping: Option<&ShippingQuote>) -> f64 {
    cart_total + shipping.map(|q| q.cost).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_cep() {
        assert_eq!(mask_cep("01310"), "01310");
        assert_eq!(mask_cep("013102"), "01310-2");
        assert_eq!(mask_cep("01310-200"), "01310-200");
        assert_eq!(mask_cep("01a310200999"), "01310-200");
    }

    #[test]
    fn test_quote_near_and_far() {
        let config = ShippingConfig::default();
        let near = quote("01310-200", &config).unwrap();
        assert_eq!(near.cost, 15.90);
        assert_eq!(near.cep, "01310-200");
        assert_eq!(near.delivery_days, 5);

        let far = quote("20040-020", &config).unwrap();
        assert_eq!(far.cost, 29.90);
    }

    #[test]
    fn test_quote_incomplete() {
        let config = ShippingConfig::default();
        assert_eq!(
            quote("0131", &config),
            Err(ShippingError::IncompleteCep(4))
        );
    }

    #[test]
    fn test_order_total() {
        let config = ShippingConfig::default();
        let q = quote("01310200", &config).unwrap();
        assert!((order_total(100.0, Some(&q)) - 115.90).abs() < 1e-9);
        assert_eq!(order_total(100.0, None), 100.0);
    }
}
