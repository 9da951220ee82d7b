//! Static content pages and the 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageChrome;
use crate::seo::Seo;
use crate::state::AppState;

/// A section of a content page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

/// A content page defined in source.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

/// All content pages, in footer order.
pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        path: "/about",
        title: "About Us",
        description: "Crafting unique Indian graphic tees since 2020.",
        intro: "At Graphphile, we're passionate about bringing authentic Indian artistic expression to premium quality t-shirts. Our journey began in 2020 with a simple mission: to celebrate the rich cultural heritage of India through wearable art.",
        sections: &[
            Section {
                heading: "Cultural Bridge",
                body: "We bridge traditional Indian artistry with contemporary global fashion trends, creating unique designs that resonate with cultural enthusiasts worldwide.",
            },
            Section {
                heading: "Ethical Production",
                body: "We're committed to ethical manufacturing, working with local producers who provide fair wages and maintain responsible environmental practices.",
            },
            Section {
                heading: "Premium Quality",
                body: "We use only the highest quality materials to ensure our t-shirts are comfortable, durable, and maintain their vibrancy wash after wash.",
            },
            Section {
                heading: "Our Team",
                body: "Ravi Kumar (Founder & Creative Director), Ananya Sharma (Head of Design), Vikram Singh (Production Manager) and Priya Patel (Marketing Specialist).",
            },
        ],
    },
    StaticPage {
        path: "/designers",
        title: "Our Designers",
        description: "Meet the creative minds behind Graphphile's graphic tees.",
        intro: "Discover the artists and illustrators crafting our unique designs.",
        sections: &[],
    },
    StaticPage {
        path: "/sustainability",
        title: "Sustainability",
        description: "Our commitment to ethical production and sustainable materials.",
        intro: "We prioritize responsible sourcing and eco-friendly processes in every step.",
        sections: &[],
    },
    StaticPage {
        path: "/careers",
        title: "Careers",
        description: "Join the Graphphile team and help create wearable art.",
        intro: "We're always looking for passionate creatives and builders. Check back for open roles.",
        sections: &[],
    },
    StaticPage {
        path: "/privacy",
        title: "Privacy Policy",
        description: "Read how Graphphile handles your data and privacy.",
        intro: "We value your privacy. This is a showcase site; no personal data is collected beyond what you give our sign-in provider.",
        sections: &[],
    },
    StaticPage {
        path: "/terms",
        title: "Terms of Service",
        description: "The terms governing the use of the Graphphile website.",
        intro: "This is a non-transactional showcase. All content is for demonstration only.",
        sections: &[],
    },
    StaticPage {
        path: "/shipping",
        title: "Shipping Info",
        description: "Information about shipping and delivery for the Graphphile showcase.",
        intro: "This is a showcase site; no physical shipments are made.",
        sections: &[Section {
            heading: "Free Delivery",
            body: "Free shipping across India.",
        }],
    },
    StaticPage {
        path: "/contact",
        title: "Contact",
        description: "Get in touch with Graphphile.",
        intro: "Email us at support@graphphile.com.",
        sections: &[],
    },
];

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub page: StaticPage,
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
}

impl NotFoundTemplate {
    /// 404 page without session data, for error responses.
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            chrome: PageChrome::default(),
            seo: Seo::new("Page Not Found", "Oops! Page not found").noindex(),
        }
    }
}

/// Look up a content page by path.
#[must_use]
pub fn find_page(path: &str) -> Option<&'static StaticPage> {
    STATIC_PAGES.iter().find(|p| p.path == path)
}

/// Routes for every content page.
pub fn routes() -> Router<AppState> {
    STATIC_PAGES.iter().fold(Router::new(), |router, page| {
        router.route(page.path, get(content_page))
    })
}

/// Render the content page matching the request path.
#[instrument(skip(chrome), fields(path = %chrome.path))]
pub async fn content_page(chrome: PageChrome) -> axum::response::Response {
    let Some(page) = find_page(&chrome.path) else {
        return not_found(chrome).await.into_response();
    };

    ContentPageTemplate {
        seo: Seo::new(page.title, page.description),
        page: *page,
        chrome,
    }
    .into_response()
}

/// Fallback handler: the 404 page with the normal header.
pub async fn not_found(chrome: PageChrome) -> impl IntoResponse {
    tracing::debug!(path = %chrome.path, "No route matched");
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            chrome,
            seo: Seo::new("Page Not Found", "Oops! Page not found").noindex(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_footer_page_is_defined() {
        for path in [
            "/about",
            "/designers",
            "/sustainability",
            "/careers",
            "/privacy",
            "/terms",
            "/shipping",
            "/contact",
        ] {
            assert!(find_page(path).is_some(), "missing {path}");
        }
        assert!(find_page("/blog").is_none());
    }
}
