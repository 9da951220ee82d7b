//! CSV export of the admin datasets.
//!
//! # Usage
//!
//! ```bash
//! # Write the product catalog to stdout
//! gp-cli export products
//!
//! # Write orders to a file
//! gp-cli export orders --output orders.csv
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use graphphile_admin::export::{self, Dataset, ExportError};

/// Export `dataset` as CSV to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record fails to
/// serialize.
pub fn run(dataset: Dataset, output: Option<&Path>) -> Result<(), ExportError> {
    if let Some(path) = output {
        let mut out = BufWriter::new(File::create(path)?);
        export::write_csv(dataset, &mut out)?;
        out.flush()?;

        tracing::info!(
            dataset = dataset.as_str(),
            records = dataset.record_count(),
            path = %path.display(),
            "Export written"
        );
    } else {
        let mut out = io::stdout().lock();
        export::write_csv(dataset, &mut out)?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");

        run(Dataset::Customers, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().count(),
            Dataset::Customers.record_count() + 1
        );
        assert!(written.starts_with("id,name,email"));
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("orders.csv");

        assert!(matches!(
            run(Dataset::Orders, Some(&path)),
            Err(ExportError::Io(_))
        ));
    }
}
