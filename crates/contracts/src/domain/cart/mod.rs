use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Ordered line items. The router only cares whether it is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adding a product already in the cart bumps its quantity by one.
    pub fn add(&mut self, product: Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product,
                quantity: 1,
            }),
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// A quantity below one removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed::SEED_PRODUCTS;

    fn product(id: &str) -> Product {
        SEED_PRODUCTS.iter().find(|p| p.id == id).unwrap().clone()
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::default();
        cart.add(product("1"));
        cart.add(product("1"));
        cart.add(product("3"));
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::default();
        cart.add(product("1"));
        cart.add(product("1"));
        cart.add(product("2"));
        let expected = 89.99 * 2.0 + 249.0;
        assert!((cart.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add(product("2"));
        cart.update_quantity("2", 5);
        assert_eq!(cart.item_count(), 5);
        cart.update_quantity("2", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::default();
        cart.add(product("2"));
        cart.update_quantity("404", 3);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_clear_and_remove() {
        let mut cart = Cart::default();
        cart.add(product("1"));
        cart.add(product("2"));
        cart.remove("1");
        assert_eq!(cart.items().len(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
