//! Import/export page and CSV downloads.

use askama::Template;
use axum::{
    extract::Path,
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::export::{self, Dataset};
use crate::filters;
use crate::middleware::{AdminPage, RequireAdminAuth};

use super::render;

/// One downloadable dataset on the page.
#[derive(Debug, Clone)]
pub struct ExportLink {
    pub label: &'static str,
    pub href: String,
    pub records: usize,
}

#[derive(Template)]
#[template(path = "import_export.html")]
pub struct ImportExportTemplate {
    pub page: AdminPage,
    pub exports: Vec<ExportLink>,
    pub imports: [&'static str; 2],
}

/// Import/export page handler.
#[instrument(skip(page))]
pub async fn index(page: AdminPage) -> Html<String> {
    let exports = Dataset::ALL
        .into_iter()
        .map(|dataset| ExportLink {
            label: match dataset {
                Dataset::Products => "Products",
                Dataset::Orders => "Orders",
                Dataset::Customers => "Customers",
            },
            href: format!("/export/{}", dataset.file_name()),
            records: dataset.record_count(),
        })
        .collect();

    render(&ImportExportTemplate {
        page,
        exports,
        imports: ["Products", "Inventory"],
    })
}

/// CSV download handler for `/export/{products|orders|customers}.csv`.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown dataset and `AppError::Export`
/// if the CSV cannot be built.
#[instrument(skip(admin), fields(admin = %admin.username))]
pub async fn download(
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(file): Path<String>,
) -> Result<Response> {
    if !file.ends_with(".csv") {
        return Err(AppError::NotFound(format!("export {file}")));
    }
    let dataset: Dataset = file
        .parse()
        .map_err(|_| AppError::NotFound(format!("export {file}")))?;
    let body = export::to_csv_string(dataset)?;

    tracing::info!(dataset = dataset.as_str(), "CSV export");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", dataset.file_name()),
            ),
        ],
        body,
    )
        .into_response())
}
