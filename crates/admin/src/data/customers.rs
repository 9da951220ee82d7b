//! Demo customers and their profiles.

use graphphile_core::{CustomerStatus, OrderStatus, Price};

/// A customer as listed in the customers table.
#[derive(Debug, Clone, Copy)]
pub struct Customer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub total_orders: u32,
    pub total_spent: Price,
    pub last_purchase: Option<&'static str>,
    pub status: CustomerStatus,
}

impl Customer {
    /// Total spent divided by order count, or `None` without orders.
    #[must_use]
    pub fn average_order_value(&self) -> Option<Price> {
        (self.total_orders > 0)
            .then(|| Price::new(self.total_spent.amount() / u64::from(self.total_orders)))
    }
}

/// A saved address.
#[derive(Debug, Clone, Copy)]
pub struct CustomerAddress {
    pub label: &'static str,
    pub line1: &'static str,
    pub line2: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
    pub is_default: bool,
}

/// A past order in the customer's history.
#[derive(Debug, Clone, Copy)]
pub struct CustomerOrder {
    pub id: &'static str,
    pub date: &'static str,
    pub status: OrderStatus,
    pub total: Price,
    pub items: u32,
}

/// Profile data shown on the customer detail page.
#[derive(Debug, Clone, Copy)]
pub struct CustomerProfile {
    pub customer_id: &'static str,
    pub date_joined: &'static str,
    pub addresses: &'static [CustomerAddress],
    pub orders: &'static [CustomerOrder],
}

/// Every customer.
pub static CUSTOMERS: &[Customer] = &[
    Customer {
        id: "1",
        name: "Vikram Malhotra",
        email: "vikram@example.com",
        phone: "+91 98765 43210",
        total_orders: 12,
        total_spent: Price::new(32850),
        last_purchase: Some("2023-07-28"),
        status: CustomerStatus::Active,
    },
    Customer {
        id: "2",
        name: "Ananya Singh",
        email: "ananya@example.com",
        phone: "+91 87654 32109",
        total_orders: 5,
        total_spent: Price::new(12490),
        last_purchase: Some("2023-06-15"),
        status: CustomerStatus::Active,
    },
    Customer {
        id: "3",
        name: "Rajesh Kumar",
        email: "rajesh@example.com",
        phone: "+91 76543 21098",
        total_orders: 1,
        total_spent: Price::new(2999),
        last_purchase: Some("2023-08-01"),
        status: CustomerStatus::New,
    },
    Customer {
        id: "4",
        name: "Priya Patel",
        email: "priya@example.com",
        phone: "+91 65432 10987",
        total_orders: 0,
        total_spent: Price::ZERO,
        last_purchase: None,
        status: CustomerStatus::Inactive,
    },
];

static PROFILES: &[CustomerProfile] = &[CustomerProfile {
    customer_id: "1",
    date_joined: "2022-11-15",
    addresses: &[
        CustomerAddress {
            label: "Billing & Shipping",
            line1: "42 Park Avenue",
            line2: "Juhu",
            city: "Mumbai",
            state: "Maharashtra",
            postal_code: "400049",
            country: "India",
            is_default: true,
        },
        CustomerAddress {
            label: "Shipping Only",
            line1: "101 Work Plaza",
            line2: "Bandra West",
            city: "Mumbai",
            state: "Maharashtra",
            postal_code: "400050",
            country: "India",
            is_default: false,
        },
    ],
    orders: &[
        CustomerOrder {
            id: "ORD24001",
            date: "2023-07-28",
            status: OrderStatus::Delivered,
            total: Price::new(5499),
            items: 3,
        },
        CustomerOrder {
            id: "ORD23900",
            date: "2023-06-15",
            status: OrderStatus::Delivered,
            total: Price::new(2999),
            items: 1,
        },
        CustomerOrder {
            id: "ORD23850",
            date: "2023-05-20",
            status: OrderStatus::Delivered,
            total: Price::new(7999),
            items: 2,
        },
    ],
}];

/// Look up a customer by id.
#[must_use]
pub fn find_customer(id: &str) -> Option<&'static Customer> {
    CUSTOMERS.iter().find(|c| c.id == id)
}

/// Addresses and order history, where recorded.
#[must_use]
pub fn find_profile(id: &str) -> Option<&'static CustomerProfile> {
    PROFILES.iter().find(|p| p.customer_id == id)
}

/// Customers whose name, email or phone contains `query` (case-insensitive)
/// and whose status equals `status` when one is given.
#[must_use]
pub fn filter_customers(query: &str, status: Option<CustomerStatus>) -> Vec<&'static Customer> {
    let needle = query.trim().to_lowercase();
    CUSTOMERS
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.contains(&needle)
        })
        .filter(|c| status.is_none_or(|s| c.status == s))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_customers() {
        assert_eq!(filter_customers("", None).len(), 4);
        assert_eq!(filter_customers("ANANYA", None)[0].id, "2");
        assert_eq!(filter_customers("76543", None)[0].id, "3");
        assert_eq!(filter_customers("", Some(CustomerStatus::Active)).len(), 2);
        assert!(filter_customers("priya", Some(CustomerStatus::Active)).is_empty());
    }

    #[test]
    fn test_average_order_value() {
        assert_eq!(
            find_customer("1").unwrap().average_order_value(),
            Some(Price::new(2737))
        );
        assert_eq!(find_customer("4").unwrap().average_order_value(), None);
    }

    #[test]
    fn test_profile_lookup() {
        let profile = find_profile("1").unwrap();
        assert_eq!(profile.addresses.len(), 2);
        assert_eq!(profile.orders[0].id, "ORD24001");
        assert!(find_profile("2").is_none());
    }
}
