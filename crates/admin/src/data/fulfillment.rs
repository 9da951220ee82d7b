//! Returns and shipments.

use graphphile_core::Price;

use crate::components::Tone;

/// Where a return request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl ReturnStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Completed,
        Self::Rejected,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Warning,
            Self::Approved => Tone::Info,
            Self::Completed => Tone::Success,
            Self::Rejected => Tone::Danger,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A product line on a return or shipment.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub name: &'static str,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ReturnRequest {
    pub id: &'static str,
    pub order_id: &'static str,
    pub customer: &'static str,
    pub date: &'static str,
    pub items: &'static [Item],
    pub reason: &'static str,
    pub status: ReturnStatus,
    pub refund_amount: Price,
}

pub static RETURNS: &[ReturnRequest] = &[
    ReturnRequest {
        id: "RTN10001",
        order_id: "ORD23957",
        customer: "Vikram Malhotra",
        date: "2023-08-10",
        items: &[Item {
            name: "Classic White Sneakers",
            quantity: 1,
        }],
        reason: "Wrong size",
        status: ReturnStatus::Pending,
        refund_amount: Price::new(2499),
    },
    ReturnRequest {
        id: "RTN10002",
        order_id: "ORD23890",
        customer: "Neha Sharma",
        date: "2023-08-09",
        items: &[Item {
            name: "Denim Jacket",
            quantity: 1,
        }],
        reason: "Damaged product",
        status: ReturnStatus::Approved,
        refund_amount: Price::new(3999),
    },
    ReturnRequest {
        id: "RTN10003",
        order_id: "ORD23845",
        customer: "Rajesh Kumar",
        date: "2023-08-08",
        items: &[Item {
            name: "Cotton T-Shirt",
            quantity: 2,
        }],
        reason: "Didn't like the color",
        status: ReturnStatus::Completed,
        refund_amount: Price::new(1998),
    },
];

/// Carrier progress of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    Processing,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub const ALL: [Self; 3] = [Self::Processing, Self::InTransit, Self::Delivered];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Processing => Tone::Warning,
            Self::InTransit => Tone::Info,
            Self::Delivered => Tone::Success,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Shipment {
    pub id: &'static str,
    pub order_id: &'static str,
    pub customer: &'static str,
    pub date: &'static str,
    pub carrier: &'static str,
    pub tracking_number: &'static str,
    pub status: ShipmentStatus,
    pub items: &'static [Item],
}

impl Shipment {
    /// Units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

pub static SHIPMENTS: &[Shipment] = &[
    Shipment {
        id: "SHP10001",
        order_id: "ORD24001",
        customer: "Anil Kapoor",
        date: "2023-08-12",
        carrier: "Delhivery",
        tracking_number: "DL8374927493",
        status: ShipmentStatus::InTransit,
        items: &[
            Item {
                name: "Premium Leather Wallet",
                quantity: 1,
            },
            Item {
                name: "Classic White Sneakers",
                quantity: 1,
            },
        ],
    },
    Shipment {
        id: "SHP10002",
        order_id: "ORD23995",
        customer: "Meena Iyer",
        date: "2023-08-11",
        carrier: "Blue Dart",
        tracking_number: "BD6473829102",
        status: ShipmentStatus::Delivered,
        items: &[Item {
            name: "Denim Jacket",
            quantity: 1,
        }],
    },
    Shipment {
        id: "SHP10003",
        order_id: "ORD23990",
        customer: "Suresh Patel",
        date: "2023-08-11",
        carrier: "DTDC",
        tracking_number: "DT9374628192",
        status: ShipmentStatus::Processing,
        items: &[
            Item {
                name: "Cotton T-Shirt",
                quantity: 2,
            },
            Item {
                name: "Track Pants",
                quantity: 1,
            },
        ],
    },
];

fn matches(needle: &str, fields: &[&str]) -> bool {
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// Returns matching `query` on id, order or customer, and `status` when given.
#[must_use]
pub fn filter_returns(query: &str, status: Option<ReturnStatus>) -> Vec<&'static ReturnRequest> {
    let needle = query.trim().to_lowercase();
    RETURNS
        .iter()
        .filter(|r| matches(&needle, &[r.id, r.order_id, r.customer]))
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect()
}

/// Shipments matching `query` on id, order, customer or tracking number.
#[must_use]
pub fn filter_shipments(query: &str, status: Option<ShipmentStatus>) -> Vec<&'static Shipment> {
    let needle = query.trim().to_lowercase();
    SHIPMENTS
        .iter()
        .filter(|s| matches(&needle, &[s.id, s.order_id, s.customer, s.tracking_number]))
        .filter(|s| status.is_none_or(|st| s.status == st))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_returns() {
        assert_eq!(filter_returns("", None).len(), 3);
        assert_eq!(filter_returns("neha", None)[0].id, "RTN10002");
        assert_eq!(
            filter_returns("", ReturnStatus::parse("completed"))[0].id,
            "RTN10003"
        );
        assert!(filter_returns("", ReturnStatus::parse("rejected")).is_empty());
    }

    #[test]
    fn test_filter_shipments() {
        assert_eq!(filter_shipments("bd647", None)[0].id, "SHP10002");
        assert_eq!(
            filter_shipments("", ShipmentStatus::parse("in_transit"))[0].carrier,
            "Delhivery"
        );
        assert_eq!(SHIPMENTS[2].unit_count(), 3);
    }
}
