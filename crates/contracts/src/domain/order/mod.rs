//! Back-office order and customer records (mock data only).

pub mod receipt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    /// CSS modifier used by the status badge.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge--warning",
            OrderStatus::Shipped => "badge--info",
            OrderStatus::Delivered => "badge--success",
            OrderStatus::Cancelled => "badge--danger",
        }
    }

    /// Pending -> Shipped -> Delivered; anything not yet delivered may be cancelled.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
                | (OrderStatus::Pending | OrderStatus::Shipped, OrderStatus::Cancelled)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
    pub items: u32,
}

impl Order {
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub orders: u32,
    pub total_spent: f64,
}

fn order(id: &str, customer: &str, day: u32, total: f64, status: OrderStatus, items: u32) -> Order {
    Order {
        id: id.to_string(),
        customer_name: customer.to_string(),
        date: NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default(),
        total,
        status,
        items,
    }
}

fn customer(id: &str, name: &str, email: &str, orders: u32, total_spent: f64) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        orders,
        total_spent,
    }
}

pub static SEED_ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        order("PED-001", "Alice Silva", 24, 155.48, OrderStatus::Delivered, 2),
        order("PED-002", "Roberto Santos", 25, 89.99, OrderStatus::Shipped, 1),
        order("PED-003", "Carlos Oliveira", 26, 345.00, OrderStatus::Pending, 3),
        order("PED-004", "Diana Prince", 27, 12.50, OrderStatus::Cancelled, 1),
    ]
});

pub static SEED_CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        customer("CLI-1", "Alice Silva", "alice@exemplo.com", 5, 750.00),
        customer("CLI-2", "Roberto Santos", "roberto@exemplo.com", 2, 180.50),
        customer("CLI-3", "Carlos Oliveira", "carlos@exemplo.com", 12, 2100.25),
    ]
});

/// Headline numbers for the back-office overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub revenue: f64,
    pub order_count: usize,
    pub customer_count: usize,
    pub low_stock_count: usize,
}

impl DashboardStats {
    /// Cancelled orders do not count towards revenue.
    pub fn compute(
        orders: &[Order],
        customers: &[Customer],
        products: &[Product],
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            revenue: orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(|o| o.total)
                .sum(),
            order_count: orders.len(),
            customer_count: customers.len(),
            low_stock_count: products
                .iter()
                .filter(|p| p.is_low_stock(low_stock_threshold))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed::SEED_PRODUCTS;

    #[test]
    fn test_formatted_date() {
        assert_eq!(SEED_ORDERS[0].formatted_date(), "24/10/2023");
    }

    #[test]
    fn test_status_flow() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Delivered));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Shipped));
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = DashboardStats::compute(&SEED_ORDERS, &SEED_CUSTOMERS, &SEED_PRODUCTS, 15);
        assert!((stats.revenue - (155.48 + 89.99 + 345.00)).abs() < 1e-9);
        assert_eq!(stats.order_count, 4);
        assert_eq!(stats.customer_count, 3);
        assert_eq!(stats.low_stock_count, 1);
    }
}
