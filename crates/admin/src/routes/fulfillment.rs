//! Returns and shipments lists.

use axum::{extract::RawQuery, response::Html};
use tracing::instrument;

use crate::components::{
    Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter, TableRow,
};
use crate::data::fulfillment::{self, Item, ReturnStatus, ShipmentStatus};
use crate::middleware::AdminPage;

use super::{ListTemplate, param, query_pairs, render};

/// `Name ×qty` lines joined for a single cell.
fn item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("{} ×{}", i.name, i.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns & refunds page handler.
#[instrument(skip(page))]
pub async fn returns(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let mut statuses = vec![FilterOption::new("all", "All Returns")];
    statuses.extend(
        ReturnStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );
    let config = DataTableConfig::new("returns")
        .column(TableColumn::sortable("id", "Return ID"))
        .column(TableColumn::sortable("order", "Order"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::new("items", "Items"))
        .column(TableColumn::new("reason", "Reason"))
        .column(TableColumn::sortable("refund", "Refund"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", statuses))
        .search_placeholder("Search returns...")
        .empty_state("No returns found", None);

    let status = ReturnStatus::parse(param(&pairs, "status"));
    let rows = fulfillment::filter_returns(param(&pairs, "q"), status)
        .into_iter()
        .map(|r| {
            TableRow::new(
                r.id,
                vec![
                    Cell::text(r.id),
                    Cell::text(r.order_id),
                    Cell::text(r.customer),
                    Cell::text(r.date),
                    Cell::text(item_summary(r.items)),
                    Cell::text(r.reason),
                    Cell::price(r.refund_amount),
                    Cell::badge(r.status.label(), r.status.tone()),
                ],
            )
        })
        .collect();

    render(&ListTemplate::new(
        page,
        "Returns & Refunds",
        DataTable::new(config, rows, pairs),
    ))
}

/// Shipments page handler.
#[instrument(skip(page))]
pub async fn shipments(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let mut statuses = vec![FilterOption::new("all", "All Shipments")];
    statuses.extend(
        ShipmentStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );
    let config = DataTableConfig::new("shipments")
        .column(TableColumn::sortable("id", "Shipment ID"))
        .column(TableColumn::sortable("order", "Order"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::sortable("carrier", "Carrier"))
        .column(TableColumn::new("items", "Items"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select("status", "Status", statuses))
        .search_placeholder("Search by ID, order or tracking number...")
        .empty_state("No shipments found", None);

    let status = ShipmentStatus::parse(param(&pairs, "status"));
    let rows = fulfillment::filter_shipments(param(&pairs, "q"), status)
        .into_iter()
        .map(|s| {
            TableRow::new(
                s.id,
                vec![
                    Cell::text(s.id),
                    Cell::text(s.order_id),
                    Cell::text(s.customer),
                    Cell::text(s.date),
                    Cell::text(s.carrier).with_detail(s.tracking_number),
                    Cell::number(s.unit_count()).with_detail(item_summary(s.items)),
                    Cell::badge(s.status.label(), s.status.tone()),
                ],
            )
        })
        .collect();

    render(&ListTemplate::new(
        page,
        "Shipments",
        DataTable::new(config, rows, pairs),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_summary() {
        assert_eq!(
            item_summary(fulfillment::SHIPMENTS[2].items),
            "Cotton T-Shirt ×2, Track Pants ×1"
        );
    }
}
