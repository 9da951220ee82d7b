//! Data table component types.
//!
//! Every list screen in the console renders through one template
//! (`components/data_table.html`). A screen describes its table once with
//! [`DataTableConfig`], turns its records into [`TableRow`]s and hands both to
//! [`DataTable::new`] together with the request's query parameters. Sorting,
//! hidden columns and the filter form state are handled here so handlers only
//! do their own filtering.

use std::cmp::Ordering;

use graphphile_core::Price;

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column, used in `?sort=`.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            default_visible: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Select filter definition for a data table.
#[derive(Debug, Clone)]
pub struct TableFilter {
    /// Query parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Available options. The first one is treated as "no filter".
    pub options: Vec<FilterOption>,
}

/// Option for select filters.
#[derive(Debug, Clone)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }
}

/// Bulk action definition for data tables.
#[derive(Debug, Clone)]
pub struct BulkAction {
    /// Action key, posted as `action`.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether this is a destructive action.
    pub destructive: bool,
}

impl BulkAction {
    /// Create a new bulk action.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            destructive: false,
        }
    }

    /// Mark this action as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Bulk action definitions.
    pub bulk_actions: Vec<BulkAction>,
    /// Where the bulk action form posts.
    pub bulk_endpoint: String,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
    /// Whether to show bulk action bar.
    pub has_bulk_actions: bool,
    /// Whether to show filter panel.
    pub has_filters: bool,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            bulk_actions: vec![],
            bulk_endpoint: String::new(),
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
            has_bulk_actions: false,
            has_filters: false,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.has_filters = true;
        self.filters.push(filter);
        self
    }

    /// Add a bulk action posted to `endpoint`.
    #[must_use]
    pub fn bulk_action(mut self, endpoint: &str, action: BulkAction) -> Self {
        self.has_bulk_actions = true;
        self.bulk_endpoint = endpoint.to_string();
        self.bulk_actions.push(action);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Get default visible columns.
    #[must_use]
    pub fn default_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key.clone())
            .collect()
    }
}

/// Badge color for status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    /// CSS modifier used by the badge style.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "badge-success",
            Self::Info => "badge-info",
            Self::Warning => "badge-warning",
            Self::Danger => "badge-danger",
            Self::Neutral => "badge-neutral",
        }
    }
}

/// Value a column sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(u64),
    Text(String),
}

/// One table cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    /// Secondary line under the main text (e.g. an email under a name).
    pub detail: Option<String>,
    /// Rendered as a badge when set.
    pub tone: Option<Tone>,
    sort_key: SortKey,
}

impl Cell {
    /// Plain text cell, sorted case-insensitively.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            sort_key: SortKey::Text(text.to_lowercase()),
            text,
            detail: None,
            tone: None,
        }
    }

    /// Numeric cell, sorted by value.
    #[must_use]
    pub fn number(value: impl Into<u64> + Copy + ToString) -> Self {
        Self {
            text: value.to_string(),
            detail: None,
            tone: None,
            sort_key: SortKey::Number(value.into()),
        }
    }

    /// Rupee amount, sorted by value.
    #[must_use]
    pub fn price(price: Price) -> Self {
        Self {
            text: price.to_string(),
            detail: None,
            tone: None,
            sort_key: SortKey::Number(price.amount()),
        }
    }

    /// Out-of-five rating drawn as stars, sorted by value.
    #[must_use]
    pub fn rating(stars: u8) -> Self {
        let filled = usize::from(stars.min(5));
        Self {
            text: format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)),
            detail: None,
            tone: None,
            sort_key: SortKey::Number(u64::from(stars)),
        }
    }

    /// Status badge.
    #[must_use]
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            tone: Some(tone),
            ..Self::text(label)
        }
    }

    /// Add a secondary line.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// One table row: cells in column order.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Record identifier, posted with bulk actions.
    pub id: String,
    /// Detail page for the first cell's link.
    pub href: Option<String>,
    pub cells: Vec<Cell>,
}

impl TableRow {
    #[must_use]
    pub fn new(id: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            id: id.into(),
            href: None,
            cells,
        }
    }

    #[must_use]
    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A configured table with its rows, ready to render.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub config: DataTableConfig,
    /// Visible columns, in order.
    pub columns: Vec<TableColumn>,
    /// Rows with hidden-column cells removed, in display order.
    pub rows: Vec<TableRow>,
    /// Current search text.
    pub search: String,
    /// Request parameters other than sorting, kept in header links.
    params: Vec<(String, String)>,
    sort: Option<(String, SortDir)>,
}

impl DataTable {
    /// Build the table from rows and the request's query pairs.
    ///
    /// `?sort=<column key>&dir=asc|desc` orders the rows when the column is
    /// sortable; unknown or non-sortable keys leave the given order.
    #[must_use]
    pub fn new<I, K, V>(config: DataTableConfig, rows: Vec<TableRow>, query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Vec::new();
        let mut sort_key = None;
        let mut dir = SortDir::Asc;
        for (key, value) in query {
            match key.as_ref() {
                "sort" => sort_key = Some(value.as_ref().to_string()),
                "dir" => dir = SortDir::parse(value.as_ref()),
                key => params.push((key.to_string(), value.as_ref().to_string())),
            }
        }

        let visible = config.default_columns();
        let sort_index = sort_key.as_deref().and_then(|key| {
            config
                .columns
                .iter()
                .position(|c| c.key == key && c.sortable)
        });

        let mut rows = rows;
        if let Some(index) = sort_index {
            rows.sort_by(|a, b| {
                let ordering = compare_cells(a.cells.get(index), b.cells.get(index));
                match dir {
                    SortDir::Asc => ordering,
                    SortDir::Desc => ordering.reverse(),
                }
            });
        }

        let keep: Vec<bool> = config
            .columns
            .iter()
            .map(|c| visible.contains(&c.key))
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| TableRow {
                cells: row
                    .cells
                    .into_iter()
                    .zip(keep.iter())
                    .filter_map(|(cell, keep)| keep.then_some(cell))
                    .collect(),
                ..row
            })
            .collect();

        let search = params
            .iter()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();

        Self {
            columns: config
                .columns
                .iter()
                .filter(|c| c.default_visible)
                .cloned()
                .collect(),
            sort: sort_index.and(sort_key).map(|key| (key, dir)),
            config,
            rows,
            search,
            params,
        }
    }

    /// Whether `value` is the selected option of filter `key`.
    #[must_use]
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.params.iter().any(|(k, v)| k == key && v == value)
    }

    /// Header link that sorts by `column`, flipping direction when the table
    /// is already sorted by it ascending.
    #[must_use]
    pub fn sort_href(&self, column: &str) -> String {
        let dir = match &self.sort {
            Some((key, SortDir::Asc)) if key == column => SortDir::Desc,
            _ => SortDir::Asc,
        };
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.extend_pairs(self.params.iter());
        query.append_pair("sort", column);
        query.append_pair("dir", dir.as_str());
        format!("?{}", query.finish())
    }

    /// Arrow shown next to the sorted column's header.
    #[must_use]
    pub fn sort_indicator(&self, column: &str) -> &'static str {
        match &self.sort {
            Some((key, SortDir::Asc)) if key == column => "▲",
            Some((key, SortDir::Desc)) if key == column => "▼",
            _ => "",
        }
    }

    /// Whether any search text or filter is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.params.iter().any(|(key, value)| {
            !value.is_empty()
                && (key == "q"
                    || self.config.filters.iter().any(|f| {
                        f.key == *key && f.options.first().is_none_or(|o| o.value != *value)
                    }))
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn compare_cells(a: Option<&Cell>, b: Option<&Cell>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.sort_key.cmp(&b.sort_key),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DataTableConfig {
        DataTableConfig::new("orders")
            .column(TableColumn::sortable("id", "Order ID"))
            .column(TableColumn::new("phone", "Phone").visible(false))
            .column(TableColumn::sortable("amount", "Amount"))
            .filter(TableFilter::select(
                "status",
                "Status",
                vec![
                    FilterOption::new("all", "All Orders"),
                    FilterOption::new("pending", "Pending"),
                ],
            ))
    }

    fn rows() -> Vec<TableRow> {
        [("A", 900), ("B", 10_000), ("C", 4999)]
            .into_iter()
            .map(|(id, amount)| {
                TableRow::new(
                    id,
                    vec![
                        Cell::text(id),
                        Cell::text("+91"),
                        Cell::price(Price::new(amount)),
                    ],
                )
            })
            .collect()
    }

    fn ids(table: &DataTable) -> Vec<&str> {
        table.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_hidden_columns_are_dropped_from_rows() {
        let table = DataTable::new(config(), rows(), Vec::<(&str, &str)>::new());
        assert_eq!(table.columns.len(), 2);
        assert!(table.rows.iter().all(|r| r.cells.len() == 2));
        assert_eq!(config().default_columns(), vec!["id", "amount"]);
    }

    #[test]
    fn test_sorts_prices_numerically() {
        let table = DataTable::new(config(), rows(), [("sort", "amount")]);
        assert_eq!(ids(&table), vec!["A", "C", "B"]);
        assert_eq!(table.sort_indicator("amount"), "▲");

        let table = DataTable::new(config(), rows(), [("sort", "amount"), ("dir", "desc")]);
        assert_eq!(ids(&table), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_non_sortable_column_keeps_order() {
        let table = DataTable::new(config(), rows(), [("sort", "phone")]);
        assert_eq!(ids(&table), vec!["A", "B", "C"]);
        assert_eq!(table.sort_indicator("phone"), "");
    }

    #[test]
    fn test_sort_href_keeps_filters_and_flips_direction() {
        let table = DataTable::new(
            config(),
            rows(),
            [("status", "pending"), ("sort", "id"), ("dir", "asc")],
        );
        assert_eq!(table.sort_href("id"), "?status=pending&sort=id&dir=desc");
        assert_eq!(
            table.sort_href("amount"),
            "?status=pending&sort=amount&dir=asc"
        );
        assert!(table.is_selected("status", "pending"));
        assert!(table.is_filtered());
    }

    #[test]
    fn test_first_filter_option_is_not_a_filter() {
        let table = DataTable::new(config(), rows(), [("status", "all"), ("q", "")]);
        assert!(!table.is_filtered());

        let table = DataTable::new(config(), rows(), [("q", "amit")]);
        assert!(table.is_filtered());
        assert_eq!(table.search, "amit");
    }

    #[test]
    fn test_rating_cell() {
        assert_eq!(Cell::rating(4).text, "★★★★☆");
        assert_eq!(Cell::rating(9).text, "★★★★★");
        assert!(Cell::rating(2).sort_key < Cell::rating(5).sort_key);
    }
}
