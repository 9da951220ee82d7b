//! Demo orders and the one fully detailed order.

use graphphile_core::{OrderStatus, PaymentStatus, Price};

/// Free shipping above this subtotal.
pub const FREE_SHIPPING_THRESHOLD: Price = Price::new(2000);

/// Flat shipping fee below the threshold.
pub const SHIPPING_FEE: Price = Price::new(99);

/// GST rate applied to the subtotal, in percent.
pub const GST_PERCENT: u64 = 18;

/// An order as listed in the orders table.
#[derive(Debug, Clone, Copy)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub date: &'static str,
    pub amount: Price,
    pub status: OrderStatus,
    pub items: u32,
    pub payment_method: &'static str,
}

/// Postal address.
#[derive(Debug, Clone, Copy)]
pub struct Address {
    pub line1: &'static str,
    pub line2: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

/// Buyer contact details.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// One purchased variant.
#[derive(Debug, Clone, Copy)]
pub struct OrderLine {
    pub product_id: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub quantity: u32,
    pub image: &'static str,
    pub sku: &'static str,
    pub color: &'static str,
    pub size: &'static str,
}

impl OrderLine {
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A step in the order's history.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub status: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

/// Everything the order detail page shows beyond the list row.
#[derive(Debug, Clone, Copy)]
pub struct OrderDetail {
    pub order_id: &'static str,
    pub contact: Contact,
    pub payment_status: PaymentStatus,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub lines: &'static [OrderLine],
    pub timeline: &'static [TimelineEntry],
}

impl OrderDetail {
    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Free above [`FREE_SHIPPING_THRESHOLD`], otherwise [`SHIPPING_FEE`].
    #[must_use]
    pub fn shipping(&self) -> Price {
        if self.subtotal() > FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            SHIPPING_FEE
        }
    }

    /// GST on the subtotal, rounded half up to the rupee.
    #[must_use]
    pub fn tax(&self) -> Price {
        let subtotal = self.subtotal().amount();
        Price::new((subtotal * GST_PERCENT + 50) / 100)
    }

    /// Subtotal plus shipping plus tax.
    #[must_use]
    pub fn total(&self) -> Price {
        Price::new(self.subtotal().amount() + self.shipping().amount() + self.tax().amount())
    }
}

/// Every order, newest last.
pub static ORDERS: &[Order] = &[
    Order {
        id: "ORD123456",
        customer: "Amit Sharma",
        date: "2023-05-15",
        amount: Price::new(4999),
        status: OrderStatus::Delivered,
        items: 3,
        payment_method: "UPI",
    },
    Order {
        id: "ORD123457",
        customer: "Priya Patel",
        date: "2023-05-16",
        amount: Price::new(2499),
        status: OrderStatus::Processing,
        items: 1,
        payment_method: "Credit Card",
    },
    Order {
        id: "ORD123458",
        customer: "Rahul Verma",
        date: "2023-05-16",
        amount: Price::new(9499),
        status: OrderStatus::Pending,
        items: 4,
        payment_method: "Cash on Delivery",
    },
    Order {
        id: "ORD123459",
        customer: "Anjali Singh",
        date: "2023-05-17",
        amount: Price::new(1999),
        status: OrderStatus::Cancelled,
        items: 1,
        payment_method: "Debit Card",
    },
    Order {
        id: "ORD123460",
        customer: "Vikram Reddy",
        date: "2023-05-17",
        amount: Price::new(6999),
        status: OrderStatus::Delivered,
        items: 2,
        payment_method: "Net Banking",
    },
];

const KORAMANGALA: Address = Address {
    line1: "123, Green Valley Apartments",
    line2: "Sector 18, Koramangala",
    city: "Bangalore",
    state: "Karnataka",
    postal_code: "560034",
    country: "India",
};

static DETAILS: &[OrderDetail] = &[OrderDetail {
    order_id: "ORD123456",
    contact: Contact {
        name: "Amit Sharma",
        email: "amit.sharma@example.com",
        phone: "+91 98765 43210",
    },
    payment_status: PaymentStatus::Paid,
    shipping_address: KORAMANGALA,
    billing_address: KORAMANGALA,
    lines: &[
        OrderLine {
            product_id: "1",
            name: "Geometric Harmony T-Shirt",
            price: Price::new(1499),
            quantity: 2,
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            sku: "TSH-GH-001",
            color: "White",
            size: "L",
        },
        OrderLine {
            product_id: "3",
            name: "Minimalist Line Art T-Shirt",
            price: Price::new(1299),
            quantity: 1,
            image: "https://images.unsplash.com/photo-1554568218-0f1715e72254?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            sku: "TSH-MLA-003",
            color: "Black",
            size: "M",
        },
    ],
    timeline: &[
        TimelineEntry {
            status: "Order Placed",
            date: "2023-05-15 10:30 AM",
            description: "Order #ORD123456 was placed",
        },
        TimelineEntry {
            status: "Payment Received",
            date: "2023-05-15 10:32 AM",
            description: "Payment of ₹4,999 received via UPI",
        },
        TimelineEntry {
            status: "Processing",
            date: "2023-05-15 02:45 PM",
            description: "Order has been processed and is being prepared for shipment",
        },
        TimelineEntry {
            status: "Shipped",
            date: "2023-05-16 11:20 AM",
            description: "Order has been shipped via BlueExpress. Tracking #BDX7890123",
        },
        TimelineEntry {
            status: "Delivered",
            date: "2023-05-18 04:15 PM",
            description: "Order has been delivered successfully",
        },
    ],
}];

/// Look up an order by id.
#[must_use]
pub fn find_order(id: &str) -> Option<&'static Order> {
    ORDERS.iter().find(|o| o.id == id)
}

/// Line items, addresses and timeline for an order, where recorded.
#[must_use]
pub fn find_detail(id: &str) -> Option<&'static OrderDetail> {
    DETAILS.iter().find(|d| d.order_id == id)
}

/// Orders whose id or customer contains `query` (case-insensitive) and whose
/// status equals `status` when one is given.
#[must_use]
pub fn filter_orders(query: &str, status: Option<OrderStatus>) -> Vec<&'static Order> {
    let needle = query.trim().to_lowercase();
    ORDERS
        .iter()
        .filter(|o| {
            needle.is_empty()
                || o.id.to_lowercase().contains(&needle)
                || o.customer.to_lowercase().contains(&needle)
        })
        .filter(|o| status.is_none_or(|s| o.status == s))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_orders_by_text_and_status() {
        assert_eq!(filter_orders("", None).len(), 5);
        assert_eq!(filter_orders("priya", None)[0].id, "ORD123457");
        assert_eq!(filter_orders("ord12345", None).len(), 4);
        assert_eq!(filter_orders("ord1234", None).len(), 5);

        let delivered = filter_orders("", Some(OrderStatus::Delivered));
        assert_eq!(
            delivered.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec!["ORD123456", "ORD123460"]
        );
        assert!(filter_orders("amit", Some(OrderStatus::Pending)).is_empty());
    }

    #[test]
    fn test_detail_totals() {
        let detail = find_detail("ORD123456").unwrap();
        assert_eq!(detail.subtotal(), Price::new(4297));
        assert_eq!(detail.shipping(), Price::ZERO);
        assert_eq!(detail.tax(), Price::new(773));
        assert_eq!(detail.total(), Price::new(5070));
    }

    static SMALL_ORDER: [OrderLine; 1] = [OrderLine {
        product_id: "3",
        name: "Line Art",
        price: Price::new(1299),
        quantity: 1,
        image: "",
        sku: "",
        color: "",
        size: "",
    }];

    #[test]
    fn test_small_orders_pay_shipping() {
        let detail = OrderDetail {
            lines: &SMALL_ORDER,
            ..*find_detail("ORD123456").unwrap()
        };
        assert_eq!(detail.shipping(), SHIPPING_FEE);
        assert_eq!(detail.tax(), Price::new(234));
    }

    #[test]
    fn test_only_listed_orders_have_detail() {
        assert!(find_order("ORD123458").is_some());
        assert!(find_detail("ORD123458").is_none());
        assert!(find_order("ORD999999").is_none());
    }
}
