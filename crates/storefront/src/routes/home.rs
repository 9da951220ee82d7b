//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use graphphile_core::{Collection, Product, catalog};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageChrome;
use crate::seo::Seo;

/// Hero banner content.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub cta_label: &'static str,
    pub cta_url: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Wearable Artistry",
    subtitle: "Premium graphic t-shirts crafted with precision and passion for design enthusiasts.",
    image: "https://images.unsplash.com/photo-1516762689617-e1cffcef479d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1920&q=80",
    cta_label: "Shop Now",
    cta_url: "/products",
};

/// Story section image.
const STORY_IMAGE: &str = "https://images.unsplash.com/photo-1606293459339-aa5ac42be048?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub hero: Hero,
    pub featured: Vec<&'static Product>,
    pub collections: &'static [Collection],
    pub story_image: &'static str,
}

/// Display the home page.
#[instrument(skip(chrome))]
pub async fn home(chrome: PageChrome) -> impl IntoResponse {
    HomeTemplate {
        chrome,
        seo: Seo::home(),
        hero: HERO,
        featured: catalog::featured_products(),
        collections: catalog::collections(),
        story_image: STORY_IMAGE,
    }
}
