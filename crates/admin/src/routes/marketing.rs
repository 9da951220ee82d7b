//! Segments, campaigns and reviews.

use askama::Template;
use axum::{extract::RawQuery, response::Html};
use tracing::instrument;

use crate::components::{
    Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter, TableRow,
};
use crate::data::marketing::{
    self, CampaignState, EmailCampaign, ReviewStatus, SEGMENTS, SMS_MESSAGES, Segment, SmsMessage,
};
use crate::filters;
use crate::middleware::AdminPage;

use super::{ListTemplate, param, query_pairs, render};

#[derive(Template)]
#[template(path = "marketing/segments.html")]
pub struct SegmentsTemplate {
    pub page: AdminPage,
    pub segments: &'static [Segment],
}

/// Segments page handler.
#[instrument(skip(page))]
pub async fn segments(page: AdminPage) -> Html<String> {
    render(&SegmentsTemplate {
        page,
        segments: SEGMENTS,
    })
}

/// Second column of the campaign table: what happened or will happen when.
#[must_use]
pub fn campaign_schedule(campaign: &EmailCampaign) -> Cell {
    match campaign.state {
        CampaignState::Sent {
            date,
            open_rate,
            click_rate,
        } => Cell::text(format!("Sent {date}"))
            .with_detail(format!("Open {open_rate} · Click {click_rate}")),
        CampaignState::Scheduled { date, time } => Cell::text(format!("{date} {time}")),
        CampaignState::Draft { last_edited } => {
            Cell::text("Not scheduled").with_detail(format!("Last edited {last_edited}"))
        }
    }
}

/// Campaigns page template: email table plus SMS cards.
#[derive(Template)]
#[template(path = "marketing/campaigns.html")]
pub struct CampaignsTemplate {
    pub page: AdminPage,
    pub table: DataTable,
    pub sms: &'static [SmsMessage],
}

/// Campaigns page handler.
#[instrument(skip(page))]
pub async fn campaigns(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let config = DataTableConfig::new("campaigns")
        .column(TableColumn::sortable("name", "Campaign"))
        .column(TableColumn::new("schedule", "Schedule"))
        .column(TableColumn::sortable("audience", "Audience"))
        .column(TableColumn::sortable("status", "Status"))
        .search_placeholder("Search campaigns...")
        .empty_state("No campaigns found", None);

    let rows = marketing::filter_campaigns(param(&pairs, "q"))
        .into_iter()
        .map(|c| {
            TableRow::new(
                c.id,
                vec![
                    Cell::text(c.name).with_detail(c.subject),
                    campaign_schedule(c),
                    Cell::text(c.audience),
                    Cell::badge(c.state.label(), c.state.tone()),
                ],
            )
        })
        .collect();

    render(&CampaignsTemplate {
        page,
        table: DataTable::new(config, rows, pairs),
        sms: SMS_MESSAGES,
    })
}

/// Reviews page handler.
#[instrument(skip(page))]
pub async fn reviews(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let mut statuses = vec![FilterOption::new("all", "All Reviews")];
    statuses.extend(
        ReviewStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );
    let config = DataTableConfig::new("reviews")
        .column(TableColumn::sortable("product", "Product"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("rating", "Rating"))
        .column(TableColumn::new("comment", "Comment"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", statuses))
        .search_placeholder("Search reviews...")
        .empty_state("No reviews found", Some("Try adjusting your search or filter"));

    let status = ReviewStatus::parse(param(&pairs, "status"));
    let rows = marketing::filter_reviews(param(&pairs, "q"), status)
        .into_iter()
        .map(|r| {
            TableRow::new(
                r.id,
                vec![
                    Cell::text(r.product_name),
                    Cell::text(r.customer_name),
                    Cell::rating(r.rating),
                    Cell::text(r.comment),
                    Cell::text(r.date),
                    Cell::badge(r.status.label(), r.status.tone()),
                ],
            )
        })
        .collect();

    render(&ListTemplate::new(
        page,
        "Product Reviews",
        DataTable::new(config, rows, pairs),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_schedule_text() {
        let cells: Vec<Cell> = marketing::EMAIL_CAMPAIGNS
            .iter()
            .map(campaign_schedule)
            .collect();
        assert_eq!(cells[0].text, "Sent 2023-07-10");
        assert_eq!(cells[0].detail.as_deref(), Some("Open 35% · Click 12%"));
        assert_eq!(cells[1].text, "2023-08-15 10:00 AM");
        assert_eq!(cells[2].detail.as_deref(), Some("Last edited 2023-08-01"));
    }
}
