//! Blog posts, banners, content blocks, media and the homepage layout.

use graphphile_core::PublishStatus;

use crate::components::Tone;

/// Badge tone for a publication state.
#[must_use]
pub const fn publish_tone(status: PublishStatus) -> Tone {
    match status {
        PublishStatus::Published => Tone::Success,
        PublishStatus::Scheduled => Tone::Info,
        PublishStatus::Draft => Tone::Neutral,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    /// Publication date; drafts have none.
    pub date: Option<&'static str>,
    pub status: PublishStatus,
    pub category: &'static str,
    pub views: u32,
}

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "Summer Fashion Trends 2023",
        excerpt: "Discover the hottest fashion trends for this summer season...",
        author: "Priya Sharma",
        date: Some("2023-07-15"),
        status: PublishStatus::Published,
        category: "Fashion",
        views: 1245,
    },
    BlogPost {
        id: "2",
        title: "How to Style Your New Denim Jacket",
        excerpt: "Get the most out of your denim jacket with these styling tips...",
        author: "Rahul Desai",
        date: Some("2023-07-28"),
        status: PublishStatus::Published,
        category: "Styling Tips",
        views: 890,
    },
    BlogPost {
        id: "3",
        title: "Sustainable Fashion: The Future of Clothing",
        excerpt: "Exploring eco-friendly materials and sustainable practices...",
        author: "Vikram Malhotra",
        date: None,
        status: PublishStatus::Draft,
        category: "Sustainability",
        views: 0,
    },
    BlogPost {
        id: "4",
        title: "Monsoon Essentials: What You Need",
        excerpt: "Stay stylish and dry with these monsoon fashion essentials...",
        author: "Ananya Patel",
        date: Some("2023-08-05"),
        status: PublishStatus::Scheduled,
        category: "Seasonal",
        views: 0,
    },
];

/// Posts whose title, author or category contains `query`.
#[must_use]
pub fn filter_posts(query: &str) -> Vec<&'static BlogPost> {
    let needle = query.trim().to_lowercase();
    BLOG_POSTS
        .iter()
        .filter(|p| {
            [p.title, p.author, p.category]
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Banner {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub active: bool,
}

impl Banner {
    /// Display form of the placement key, e.g. `homepage_hero` becomes
    /// `Homepage hero`.
    #[must_use]
    pub fn location_label(&self) -> String {
        let spaced = self.location.replacen('_', " ", 1);
        spaced.replacen("homepage", "Homepage", 1)
    }
}

pub static BANNERS: &[Banner] = &[
    Banner {
        id: "1",
        name: "Summer Sale Banner",
        location: "homepage_hero",
        start_date: "2023-08-01",
        end_date: "2023-08-31",
        active: true,
    },
    Banner {
        id: "2",
        name: "New Collection Promo",
        location: "category_pages",
        start_date: "2023-08-15",
        end_date: "2023-09-15",
        active: true,
    },
    Banner {
        id: "3",
        name: "Seasonal Discount",
        location: "product_pages",
        start_date: "2023-09-01",
        end_date: "2023-09-30",
        active: false,
    },
    Banner {
        id: "4",
        name: "Festival Special Offer",
        location: "homepage_middle",
        start_date: "2023-10-01",
        end_date: "2023-10-31",
        active: false,
    },
];

/// Banners matching `query` by name, restricted to `active` when given.
#[must_use]
pub fn filter_banners(query: &str, active: Option<bool>) -> Vec<&'static Banner> {
    let needle = query.trim().to_lowercase();
    BANNERS
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .filter(|b| active.is_none_or(|a| b.active == a))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ContentBlock {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub last_updated: &'static str,
    pub used_in: &'static [&'static str],
    pub status: PublishStatus,
}

impl ContentBlock {
    /// Comma-separated page list, or `Not used`.
    #[must_use]
    pub fn usage(&self) -> String {
        if self.used_in.is_empty() {
            "Not used".to_string()
        } else {
            self.used_in.join(", ")
        }
    }
}

pub static CONTENT_BLOCKS: &[ContentBlock] = &[
    ContentBlock {
        id: "1",
        name: "About Us Section",
        kind: "text",
        last_updated: "2023-07-20",
        used_in: &["About Page", "Homepage"],
        status: PublishStatus::Published,
    },
    ContentBlock {
        id: "2",
        name: "Shipping & Returns",
        kind: "text",
        last_updated: "2023-07-15",
        used_in: &["Product Page", "Footer"],
        status: PublishStatus::Published,
    },
    ContentBlock {
        id: "3",
        name: "Size Guide",
        kind: "html",
        last_updated: "2023-08-01",
        used_in: &["Product Page"],
        status: PublishStatus::Published,
    },
    ContentBlock {
        id: "4",
        name: "Store Locator",
        kind: "map",
        last_updated: "2023-06-30",
        used_in: &["Contact Page"],
        status: PublishStatus::Published,
    },
    ContentBlock {
        id: "5",
        name: "Holiday Announcement",
        kind: "text",
        last_updated: "2023-08-05",
        used_in: &[],
        status: PublishStatus::Draft,
    },
];

/// Blocks matching `query` by name and `kind` when given.
#[must_use]
pub fn filter_blocks(query: &str, kind: Option<&str>) -> Vec<&'static ContentBlock> {
    let needle = query.trim().to_lowercase();
    CONTENT_BLOCKS
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .filter(|b| kind.is_none_or(|k| b.kind == k))
        .collect()
}

/// Media file category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    /// Parse the `type` tab parameter (`images`, `videos`, `documents`).
    #[must_use]
    pub fn from_tab(tab: &str) -> Option<Self> {
        match tab {
            "images" => Some(Self::Image),
            "videos" => Some(Self::Video),
            "documents" => Some(Self::Document),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Document => "Document",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MediaItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: MediaKind,
    pub size: &'static str,
    pub dimensions: &'static str,
    pub uploaded: &'static str,
    pub url: &'static str,
}

impl MediaItem {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }
}

pub static MEDIA: &[MediaItem] = &[
    MediaItem {
        id: "1",
        name: "product-hero-1.jpg",
        kind: MediaKind::Image,
        size: "245 KB",
        dimensions: "1200 x 800",
        uploaded: "2023-07-15",
        url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
    },
    MediaItem {
        id: "2",
        name: "banner-summer.jpg",
        kind: MediaKind::Image,
        size: "1.2 MB",
        dimensions: "1920 x 600",
        uploaded: "2023-07-10",
        url: "https://images.unsplash.com/photo-1551489186-cf8726f514f8",
    },
    MediaItem {
        id: "3",
        name: "product-detail-2.jpg",
        kind: MediaKind::Image,
        size: "380 KB",
        dimensions: "1200 x 1200",
        uploaded: "2023-07-05",
        url: "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a",
    },
    MediaItem {
        id: "4",
        name: "catalog-video.mp4",
        kind: MediaKind::Video,
        size: "8.5 MB",
        dimensions: "1920 x 1080",
        uploaded: "2023-06-28",
        url: "https://example.com/video",
    },
    MediaItem {
        id: "5",
        name: "lookbook-spring.pdf",
        kind: MediaKind::Document,
        size: "3.2 MB",
        dimensions: "-",
        uploaded: "2023-06-20",
        url: "https://example.com/document",
    },
    MediaItem {
        id: "6",
        name: "product-white-shoes.jpg",
        kind: MediaKind::Image,
        size: "420 KB",
        dimensions: "1200 x 1200",
        uploaded: "2023-06-15",
        url: "https://images.unsplash.com/photo-1549298916-b41d501d3772",
    },
];

/// Media whose file name contains `query` and whose kind matches the tab.
#[must_use]
pub fn filter_media(query: &str, kind: Option<MediaKind>) -> Vec<&'static MediaItem> {
    let needle = query.trim().to_lowercase();
    MEDIA
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .filter(|m| kind.is_none_or(|k| m.kind == k))
        .collect()
}

/// A section currently placed on the homepage.
#[derive(Debug, Clone, Copy)]
pub struct HomepageSection {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub active: bool,
}

/// A starting layout.
#[derive(Debug, Clone, Copy)]
pub struct HomepageTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A section type that can be added to the layout.
#[derive(Debug, Clone, Copy)]
pub struct SectionComponent {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

pub static HOMEPAGE_SECTIONS: &[HomepageSection] = &[
    HomepageSection {
        id: "1",
        name: "Hero Banner",
        kind: "banner",
        active: true,
    },
    HomepageSection {
        id: "2",
        name: "Featured Products",
        kind: "product-grid",
        active: true,
    },
    HomepageSection {
        id: "3",
        name: "New Collection Promo",
        kind: "full-width-banner",
        active: true,
    },
    HomepageSection {
        id: "4",
        name: "Categories Grid",
        kind: "category-grid",
        active: true,
    },
    HomepageSection {
        id: "5",
        name: "Testimonials",
        kind: "testimonials",
        active: false,
    },
];

pub static HOMEPAGE_TEMPLATES: &[HomepageTemplate] = &[
    HomepageTemplate {
        id: "1",
        name: "Standard Homepage",
        description: "Classic layout with hero banner and product grids",
    },
    HomepageTemplate {
        id: "2",
        name: "Minimal Showcase",
        description: "Clean design focusing on product images",
    },
    HomepageTemplate {
        id: "3",
        name: "Full Collections",
        description: "Highlight multiple collections in full-width sections",
    },
];

pub static SECTION_COMPONENTS: &[SectionComponent] = &[
    SectionComponent {
        id: "1",
        name: "Hero Banner",
        kind: "banner",
        description: "Large hero image with text overlay",
    },
    SectionComponent {
        id: "2",
        name: "Product Grid",
        kind: "product-grid",
        description: "Display products in a grid layout",
    },
    SectionComponent {
        id: "3",
        name: "Featured Collection",
        kind: "collection",
        description: "Showcase a specific collection",
    },
    SectionComponent {
        id: "4",
        name: "Full Width Promo",
        kind: "promo",
        description: "Full-width promotional banner",
    },
    SectionComponent {
        id: "5",
        name: "Category Navigation",
        kind: "categories",
        description: "Grid or carousel of product categories",
    },
    SectionComponent {
        id: "6",
        name: "Testimonials",
        kind: "testimonials",
        description: "Customer reviews and testimonials",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_location_label() {
        assert_eq!(BANNERS[0].location_label(), "Homepage hero");
        assert_eq!(BANNERS[1].location_label(), "category pages");
    }

    #[test]
    fn test_filter_media_by_tab() {
        assert_eq!(filter_media("", None).len(), 6);
        assert_eq!(filter_media("", MediaKind::from_tab("images")).len(), 4);
        assert_eq!(filter_media("", MediaKind::from_tab("videos")).len(), 1);
        assert_eq!(filter_media("lookbook", None)[0].kind, MediaKind::Document);
        assert!(MediaKind::from_tab("all").is_none());
    }

    #[test]
    fn test_block_usage() {
        assert_eq!(CONTENT_BLOCKS[0].usage(), "About Page, Homepage");
        assert_eq!(CONTENT_BLOCKS[4].usage(), "Not used");
        assert_eq!(filter_blocks("", Some("html")).len(), 1);
    }

    #[test]
    fn test_filter_posts_and_banners() {
        assert_eq!(filter_posts("denim")[0].id, "2");
        assert_eq!(filter_banners("", Some(false)).len(), 2);
    }
}
