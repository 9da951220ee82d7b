//! Askama filters for the console templates.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Year shown in the console footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

/// Product count label for catalog cards: "1 product", "4 products".
///
/// Usage in templates: `{{ entry.products|product_count }}`
#[askama::filter_fn]
pub fn product_count(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(count_label(count, "product"))
}

fn count_label(count: impl Display, noun: impl Display) -> String {
    let count = count.to_string();
    let suffix = if count == "1" { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "product"), "0 products");
        assert_eq!(count_label(1, "product"), "1 product");
        assert_eq!(count_label(4, "order"), "4 orders");
    }
}
