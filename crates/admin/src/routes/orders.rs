//! Order list and detail route handlers.

use askama::Template;
use axum::{
    extract::{Path, RawQuery},
    response::Html,
};
use graphphile_core::{OrderStatus, Price};
use tracing::instrument;

use crate::components::{
    Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter, TableRow, Tone,
};
use crate::data::orders::{self, Order, OrderDetail};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::AdminPage;

use super::{ListTemplate, param, query_pairs, render};

/// Badge tone for an order status.
#[must_use]
pub const fn status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Shipped | OrderStatus::Processing => Tone::Info,
        OrderStatus::Pending => Tone::Warning,
        OrderStatus::Cancelled => Tone::Danger,
    }
}

fn table_config() -> DataTableConfig {
    let mut statuses = vec![FilterOption::new("all", "All Orders")];
    statuses.extend(
        OrderStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );

    DataTableConfig::new("orders")
        .column(TableColumn::sortable("id", "Order ID"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::sortable("amount", "Amount"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::sortable("items", "Items"))
        .column(TableColumn::new("payment", "Payment"))
        .filter(TableFilter::select("status", "Status", statuses))
        .search_placeholder("Search orders...")
        .empty_state("No orders found", Some("Try adjusting your search or filter"))
}

fn order_row(order: &Order) -> TableRow {
    TableRow::new(
        order.id,
        vec![
            Cell::text(order.id),
            Cell::text(order.customer),
            Cell::text(order.date),
            Cell::price(order.amount),
            Cell::badge(order.status.label(), status_tone(order.status)),
            Cell::number(order.items),
            Cell::text(order.payment_method),
        ],
    )
    .link(format!("/orders/{}", order.id))
}

/// Orders list page handler.
#[instrument(skip(page))]
pub async fn index(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let status = param(&pairs, "status").parse::<OrderStatus>().ok();
    let rows = orders::filter_orders(param(&pairs, "q"), status)
        .into_iter()
        .map(order_row)
        .collect();

    let table = DataTable::new(table_config(), rows, pairs);
    render(&ListTemplate::new(page, "Orders", table).subtitle("Manage and process customer orders"))
}

/// Order detail page template.
#[derive(Template)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub page: AdminPage,
    pub order: &'static Order,
    pub status_tone: Tone,
    pub detail: Option<OrderTotals>,
}

/// A detailed order with its computed totals.
#[derive(Debug, Clone, Copy)]
pub struct OrderTotals {
    pub detail: &'static OrderDetail,
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderTotals {
    fn new(detail: &'static OrderDetail) -> Self {
        Self {
            detail,
            subtotal: detail.subtotal(),
            shipping: detail.shipping(),
            tax: detail.tax(),
            total: detail.total(),
        }
    }

    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping == Price::ZERO
    }
}

/// Order detail page handler.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown order id.
#[instrument(skip(page))]
pub async fn show(page: AdminPage, Path(id): Path<String>) -> Result<Html<String>> {
    let order = orders::find_order(&id).ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(render(&OrderShowTemplate {
        page,
        order,
        status_tone: status_tone(order.status),
        detail: orders::find_detail(&id).map(OrderTotals::new),
    }))
}
