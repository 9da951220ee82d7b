//! Customer segments, campaigns and product reviews.

use crate::components::Tone;

/// One rule of a segment.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub field: &'static str,
    pub operator: &'static str,
    pub value: &'static str,
}

/// A saved customer segment.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub customer_count: u32,
    pub criteria: &'static [Criterion],
    pub created: &'static str,
}

pub static SEGMENTS: &[Segment] = &[
    Segment {
        id: "1",
        name: "VIP Customers",
        description: "Customers who have spent over ₹20,000",
        customer_count: 24,
        criteria: &[Criterion {
            field: "Total Spent",
            operator: "greater than",
            value: "₹20,000",
        }],
        created: "2023-06-15",
    },
    Segment {
        id: "2",
        name: "New Customers",
        description: "Customers who registered in the last 30 days",
        customer_count: 42,
        criteria: &[Criterion {
            field: "Registration Date",
            operator: "is within",
            value: "Last 30 days",
        }],
        created: "2023-07-10",
    },
    Segment {
        id: "3",
        name: "Active Buyers",
        description: "Customers who have made a purchase in the last 60 days",
        customer_count: 78,
        criteria: &[
            Criterion {
                field: "Last Purchase",
                operator: "is within",
                value: "Last 60 days",
            },
            Criterion {
                field: "Total Orders",
                operator: "greater than",
                value: "2",
            },
        ],
        created: "2023-05-22",
    },
    Segment {
        id: "4",
        name: "Mumbai Customers",
        description: "Customers located in Mumbai",
        customer_count: 65,
        criteria: &[Criterion {
            field: "Location",
            operator: "is",
            value: "Mumbai",
        }],
        created: "2023-07-05",
    },
];

/// Delivery state of an email campaign.
#[derive(Debug, Clone, Copy)]
pub enum CampaignState {
    Sent {
        date: &'static str,
        open_rate: &'static str,
        click_rate: &'static str,
    },
    Scheduled {
        date: &'static str,
        time: &'static str,
    },
    Draft {
        last_edited: &'static str,
    },
}

impl CampaignState {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sent { .. } => "Sent",
            Self::Scheduled { .. } => "Scheduled",
            Self::Draft { .. } => "Draft",
        }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Sent { .. } => Tone::Success,
            Self::Scheduled { .. } => Tone::Info,
            Self::Draft { .. } => Tone::Neutral,
        }
    }
}

/// An email campaign.
#[derive(Debug, Clone, Copy)]
pub struct EmailCampaign {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub audience: &'static str,
    pub state: CampaignState,
}

pub static EMAIL_CAMPAIGNS: &[EmailCampaign] = &[
    EmailCampaign {
        id: "1",
        name: "Summer Sale Announcement",
        subject: "Exclusive Summer Sale - Up to 50% Off!",
        audience: "All Customers",
        state: CampaignState::Sent {
            date: "2023-07-10",
            open_rate: "35%",
            click_rate: "12%",
        },
    },
    EmailCampaign {
        id: "2",
        name: "New Collection Launch",
        subject: "Introducing Our Latest Collection",
        audience: "VIP Customers",
        state: CampaignState::Scheduled {
            date: "2023-08-15",
            time: "10:00 AM",
        },
    },
    EmailCampaign {
        id: "3",
        name: "Welcome Email Series",
        subject: "Welcome to Our Store - Here's What You Need to Know",
        audience: "New Customers",
        state: CampaignState::Draft {
            last_edited: "2023-08-01",
        },
    },
];

/// Delivery state of an SMS message.
#[derive(Debug, Clone, Copy)]
pub enum SmsState {
    Sent {
        date: &'static str,
        delivery_rate: &'static str,
    },
    /// Sent automatically whenever the trigger fires.
    Trigger { trigger: &'static str },
}

impl SmsState {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sent { .. } => "Sent",
            Self::Trigger { .. } => "Active Trigger",
        }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Sent { .. } => Tone::Success,
            Self::Trigger { .. } => Tone::Info,
        }
    }

    /// Delivery date and rate, or the trigger description.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Sent {
                date,
                delivery_rate,
            } => format!("Sent {date} · {delivery_rate} delivered"),
            Self::Trigger { trigger } => (*trigger).to_string(),
        }
    }
}

/// An SMS broadcast or triggered message.
#[derive(Debug, Clone, Copy)]
pub struct SmsMessage {
    pub id: &'static str,
    pub name: &'static str,
    pub content: &'static str,
    pub audience: &'static str,
    pub state: SmsState,
}

pub static SMS_MESSAGES: &[SmsMessage] = &[
    SmsMessage {
        id: "1",
        name: "Flash Sale Alert",
        content: "Flash Sale! Get 30% off on all products for the next 24 hours. Shop now: link.to/shop",
        audience: "All Customers",
        state: SmsState::Sent {
            date: "2023-07-20",
            delivery_rate: "95%",
        },
    },
    SmsMessage {
        id: "2",
        name: "Abandoned Cart Reminder",
        content: "You left items in your cart! Complete your purchase now to avoid missing out: link.to/cart",
        audience: "Cart Abandoners",
        state: SmsState::Trigger {
            trigger: "On cart abandonment",
        },
    },
];

/// Moderation state of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Pending,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Pending, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Approved => Tone::Success,
            Self::Pending => Tone::Warning,
            Self::Rejected => Tone::Danger,
        }
    }

    /// Parse a query value; anything unrecognised (including `all`) is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A customer's product review.
#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub id: &'static str,
    pub product_name: &'static str,
    pub customer_name: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
    pub status: ReviewStatus,
}

pub static REVIEWS: &[Review] = &[
    Review {
        id: "1",
        product_name: "Classic White Sneakers",
        customer_name: "Raj Sharma",
        rating: 5,
        comment: "Great quality and exactly as described. Very comfortable!",
        date: "2023-08-15",
        status: ReviewStatus::Approved,
    },
    Review {
        id: "2",
        product_name: "Denim Jacket",
        customer_name: "Priya Patel",
        rating: 4,
        comment: "Love the jacket! The material is good but runs slightly small.",
        date: "2023-08-14",
        status: ReviewStatus::Approved,
    },
    Review {
        id: "3",
        product_name: "Cotton T-Shirt",
        customer_name: "Vikram Singh",
        rating: 2,
        comment: "The color faded after just one wash. Not happy with the quality.",
        date: "2023-08-13",
        status: ReviewStatus::Pending,
    },
];

/// Reviews matching `query` against product, customer or comment and
/// `status` when given.
#[must_use]
pub fn filter_reviews(query: &str, status: Option<ReviewStatus>) -> Vec<&'static Review> {
    let needle = query.trim().to_lowercase();
    REVIEWS
        .iter()
        .filter(|r| {
            needle.is_empty()
                || [r.product_name, r.customer_name, r.comment]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect()
}

/// Campaigns whose name, subject or audience contains `query`.
#[must_use]
pub fn filter_campaigns(query: &str) -> Vec<&'static EmailCampaign> {
    let needle = query.trim().to_lowercase();
    EMAIL_CAMPAIGNS
        .iter()
        .filter(|c| {
            [c.name, c.subject, c.audience]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_reviews() {
        assert_eq!(filter_reviews("", None).len(), 3);
        assert_eq!(filter_reviews("", ReviewStatus::parse("pending")).len(), 1);
        assert_eq!(filter_reviews("faded", None)[0].id, "3");
        assert!(ReviewStatus::parse("all").is_none());
    }

    #[test]
    fn test_filter_campaigns() {
        assert_eq!(filter_campaigns("").len(), 3);
        assert_eq!(filter_campaigns("vip")[0].id, "2");
        assert_eq!(EMAIL_CAMPAIGNS[2].state.label(), "Draft");
    }

    #[test]
    fn test_sms_summary() {
        assert_eq!(SMS_MESSAGES[0].state.summary(), "Sent 2023-07-20 · 95% delivered");
        assert_eq!(SMS_MESSAGES[1].state.summary(), "On cart abandonment");
        assert_eq!(SMS_MESSAGES[1].state.label(), "Active Trigger");
    }
}
