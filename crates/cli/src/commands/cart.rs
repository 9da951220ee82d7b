//! Saved cart inspection.
//!
//! Reads the JSON array a storefront session stores under
//! `graphphile_cart_v1` and prints one line per item followed by totals.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use graphphile_core::Cart;
use thiserror::Error;

/// Errors from the cart commands.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a saved cart file and render its summary.
///
/// Unreadable JSON is treated as an empty cart, the same way the storefront
/// restores a corrupt session value.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn inspect(path: &Path) -> Result<String, CartError> {
    let raw = fs::read_to_string(path).map_err(|source| CartError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let cart = Cart::restore(Some(&raw));
    tracing::debug!(path = %path.display(), lines = cart.items().len(), "Cart restored");

    Ok(summary(&cart))
}

/// One line per item, then the item count and subtotal.
#[must_use]
pub fn summary(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in cart.items() {
        let variant: Vec<&str> = [item.size.as_deref(), item.color.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        out.push_str(&format!(
            "{}  {} ({})  {} x {} = {}\n",
            item.id,
            item.name,
            variant.join(" / "),
            item.quantity,
            item.price,
            item.line_total()
        ));
    }
    out.push_str(&format!("Items: {}\n", cart.total_items()));
    out.push_str(&format!("Subtotal: {}\n", cart.subtotal()));
    out
}

#[cfg(test)]
mod tests {
    use graphphile_core::{AddOptions, catalog};

    use super::*;

    fn black_medium(quantity: i64) -> AddOptions {
        AddOptions {
            size: Some("M".to_string()),
            color: Some("Black".to_string()),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_summary_lists_items_and_totals() {
        let product = catalog::find_product("1").unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, black_medium(1));
        cart.add_item(product, black_medium(2));

        let text = summary(&cart);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1-M-Black  "));
        assert!(lines[0].contains("(M / Black)"));
        assert!(lines[0].ends_with("3 x ₹1,499 = ₹4,497"));
        assert_eq!(lines[1], "Items: 3");
        assert_eq!(lines[2], "Subtotal: ₹4,497");
    }

    #[test]
    fn test_inspect_reads_saved_json() {
        let product = catalog::find_product("1").unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, black_medium(1));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, cart.to_json()).unwrap();

        assert!(inspect(&path).unwrap().contains("Subtotal: ₹1,499"));
    }

    #[test]
    fn test_inspect_corrupt_file_is_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(inspect(&path).unwrap(), "Cart is empty\n");
    }

    #[test]
    fn test_inspect_missing_file() {
        let err = inspect(Path::new("/nonexistent/cart.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read /nonexistent/cart.json"));
    }
}
