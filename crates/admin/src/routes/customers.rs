//! Customer list and detail route handlers.

use askama::Template;
use axum::{
    extract::{Path, RawQuery},
    response::Html,
};
use graphphile_core::{CustomerStatus, OrderStatus, Price};
use tracing::instrument;

use crate::components::{
    Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter, TableRow, Tone,
};
use crate::data::customers::{self, Customer, CustomerProfile};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::AdminPage;

use super::orders::status_tone as order_tone;
use super::{ListTemplate, param, query_pairs, render};

#[must_use]
pub const fn status_tone(status: CustomerStatus) -> Tone {
    match status {
        CustomerStatus::Active => Tone::Success,
        CustomerStatus::New => Tone::Info,
        CustomerStatus::Inactive => Tone::Neutral,
    }
}

fn table_config() -> DataTableConfig {
    let mut statuses = vec![FilterOption::new("all", "All Customers")];
    statuses.extend(
        CustomerStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );

    DataTableConfig::new("customers")
        .column(TableColumn::sortable("name", "Customer"))
        .column(TableColumn::new("phone", "Phone"))
        .column(TableColumn::sortable("orders", "Orders"))
        .column(TableColumn::sortable("spent", "Total Spent"))
        .column(TableColumn::sortable("last_purchase", "Last Purchase"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", statuses))
        .search_placeholder("Search customers...")
        .empty_state("No customers found", Some("Try adjusting your search or filter"))
}

/// Customers list page handler.
#[instrument(skip(page))]
pub async fn index(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let status = param(&pairs, "status").parse::<CustomerStatus>().ok();
    let rows = customers::filter_customers(param(&pairs, "q"), status)
        .into_iter()
        .map(|c| {
            TableRow::new(
                c.id,
                vec![
                    Cell::text(c.name).with_detail(c.email),
                    Cell::text(c.phone),
                    Cell::number(c.total_orders),
                    Cell::price(c.total_spent),
                    Cell::text(c.last_purchase.unwrap_or("Never")),
                    Cell::badge(c.status.label(), status_tone(c.status)),
                ],
            )
            .link(format!("/customers/{}", c.id))
        })
        .collect();

    let table = DataTable::new(table_config(), rows, pairs);
    render(&ListTemplate::new(page, "Customers", table))
}

/// Customer detail page template.
#[derive(Template)]
#[template(path = "customers/show.html")]
pub struct CustomerShowTemplate {
    pub page: AdminPage,
    pub customer: &'static Customer,
    pub status_tone: Tone,
    pub average_order_value: Option<Price>,
    pub profile: Option<&'static CustomerProfile>,
}

impl CustomerShowTemplate {
    /// Badge class for a past order's status.
    #[must_use]
    pub const fn order_badge(&self, status: &OrderStatus) -> &'static str {
        order_tone(*status).css_class()
    }
}

/// Customer detail page handler.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown customer id.
#[instrument(skip(page))]
pub async fn show(page: AdminPage, Path(id): Path<String>) -> Result<Html<String>> {
    let customer =
        customers::find_customer(&id).ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    Ok(render(&CustomerShowTemplate {
        page,
        customer,
        status_tone: status_tone(customer.status),
        average_order_value: customer.average_order_value(),
        profile: customers::find_profile(&id),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::middleware::page::AdminUserView;

    fn page() -> AdminPage {
        AdminPage {
            admin_user: AdminUserView {
                name: "Admin User".to_string(),
                username: "admin".to_string(),
            },
            current_path: "/customers/1".to_string(),
            flash: None,
            storefront_url: "http://127.0.0.1:3000".to_string(),
        }
    }

    #[test]
    fn test_order_badge_follows_order_status() {
        let template = CustomerShowTemplate {
            page: page(),
            customer: customers::find_customer("1").unwrap(),
            status_tone: Tone::Success,
            average_order_value: None,
            profile: None,
        };
        assert_eq!(template.order_badge(&OrderStatus::Delivered), "badge-success");
        assert_eq!(template.order_badge(&OrderStatus::Cancelled), "badge-danger");
    }

    #[test]
    fn test_detail_renders_order_history() {
        let customer = customers::find_customer("1").unwrap();
        let html = CustomerShowTemplate {
            page: page(),
            customer,
            status_tone: status_tone(customer.status),
            average_order_value: customer.average_order_value(),
            profile: customers::find_profile("1"),
        }
        .render()
        .unwrap();

        assert!(html.contains("/orders/ORD24001"));
        assert!(html.contains("badge badge-success"));
        assert!(!html.contains("No profile details"));
    }
}
