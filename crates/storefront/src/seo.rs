//! Per-page SEO metadata.

/// Site name used in titles and Open Graph tags.
pub const SITE_NAME: &str = "Graphphile";

/// Default description for pages that do not set their own.
pub const DEFAULT_DESCRIPTION: &str =
    "Premium graphic t-shirts with bold, artistic designs. Minimal geometry, fluid expressions, line art and more.";

/// Default social preview image.
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1523381210434-271e8be1f52b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80";

/// Metadata rendered into `<head>` by the base template.
#[derive(Debug, Clone)]
pub struct Seo {
    /// Full `<title>` text.
    pub title: String,
    pub description: String,
    /// Open Graph image URL.
    pub image: String,
    /// Open Graph type (`website` or `product`).
    pub og_type: &'static str,
    /// Whether search engines should skip this page.
    pub noindex: bool,
}

impl Seo {
    /// Metadata for a page titled `title`, suffixed with the site name.
    #[must_use]
    pub fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: format!("{title} | {SITE_NAME}"),
            description: description.into(),
            image: DEFAULT_IMAGE.to_string(),
            og_type: "website",
            noindex: false,
        }
    }

    /// Metadata for the home page.
    #[must_use]
    pub fn home() -> Self {
        Self {
            title: format!("{SITE_NAME} | Premium Graphic T-Shirts"),
            ..Self::new(SITE_NAME, DEFAULT_DESCRIPTION)
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        if !image.is_empty() {
            self.image = image;
        }
        self
    }

    #[must_use]
    pub const fn product(mut self) -> Self {
        self.og_type = "product";
        self
    }

    /// Mark the page as not for indexing (cart, account, auth forms).
    #[must_use]
    pub const fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_suffix() {
        assert_eq!(Seo::new("Cart", "").title, "Cart | Graphphile");
        assert_eq!(Seo::home().title, "Graphphile | Premium Graphic T-Shirts");
    }

    #[test]
    fn test_empty_image_keeps_default() {
        assert_eq!(Seo::new("x", "").with_image("").image, DEFAULT_IMAGE);
        assert_eq!(Seo::new("x", "").with_image("https://i").image, "https://i");
    }
}
