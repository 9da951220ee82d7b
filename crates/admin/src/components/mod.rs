//! Reusable view components shared by the console screens.

pub mod data_table;

pub use data_table::{
    BulkAction, Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter,
    TableRow, Tone,
};
