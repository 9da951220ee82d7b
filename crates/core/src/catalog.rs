//! The static product and collection catalog.
//!
//! Products and collections are defined in source and never change at
//! runtime. Listing pages narrow them with a [`ProductQuery`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// A named swatch color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub images: Vec<String>,
    pub category: String,
    /// Display name of the collection this product belongs to.
    pub collection: String,
    pub sizes: Vec<String>,
    pub colors: Vec<Color>,
    pub featured: bool,
}

impl Product {
    /// First image URL, or an empty string when the product has none.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }

    /// Whether `size` is one of this product's sizes.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` names one of this product's colors.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.name == color)
    }
}

/// A themed collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// URL slug, e.g. `minimal-geometry`.
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

const IMG: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{IMG}")
}

fn colors(pairs: &[(&str, &str)]) -> Vec<Color> {
    pairs
        .iter()
        .map(|(name, hex)| Color {
            name: (*name).to_string(),
            hex: (*hex).to_string(),
        })
        .collect()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: "1".into(),
            name: "Geometric Harmony".into(),
            description: "A meticulously designed t-shirt featuring balanced geometric patterns inspired by mathematical precision and natural harmony.".into(),
            price: Price::new(1499),
            images: vec![
                unsplash("photo-1521572163474-6864f9cf17ab"),
                unsplash("photo-1503341504253-dff4815485f1"),
            ],
            category: "Graphic".into(),
            collection: "Minimal Geometry".into(),
            sizes: labels(&["S", "M", "L", "XL"]),
            colors: colors(&[("White", "#FFFFFF"), ("Black", "#000000"), ("Gray", "#808080")]),
            featured: true,
        },
        Product {
            id: "2".into(),
            name: "Abstract Waves".into(),
            description: "Fluid lines and subtle color gradients create a sense of movement and depth in this artistic design.".into(),
            price: Price::new(1699),
            images: vec![
                unsplash("photo-1583743814966-8936f5b7be1a"),
                unsplash("photo-1576566588028-4147f3842f27"),
            ],
            category: "Abstract".into(),
            collection: "Fluid Expressions".into(),
            sizes: labels(&["S", "M", "L", "XL", "XXL"]),
            colors: colors(&[("Blue", "#1E3A8A"), ("White", "#FFFFFF"), ("Cream", "#F5F5DC")]),
            featured: true,
        },
        Product {
            id: "3".into(),
            name: "Minimalist Line Art".into(),
            description: "Simple yet profound, this design uses a single continuous line to create a striking visual statement.".into(),
            price: Price::new(1299),
            images: vec![
                unsplash("photo-1554568218-0f1715e72254"),
                unsplash("photo-1618354691373-d851c5c3a990"),
            ],
            category: "Minimal".into(),
            collection: "Line Essence".into(),
            sizes: labels(&["XS", "S", "M", "L", "XL"]),
            colors: colors(&[("Black", "#000000"), ("White", "#FFFFFF")]),
            featured: true,
        },
        Product {
            id: "4".into(),
            name: "Architectural Elements".into(),
            description: "A tribute to modernist architecture, featuring clean lines and structural elements in perfect balance.".into(),
            price: Price::new(1899),
            images: vec![
                unsplash("photo-1586790170083-2f9ceadc732d"),
                unsplash("photo-1512400930990-e0bc0bd669b4"),
            ],
            category: "Architectural".into(),
            collection: "Structure Series".into(),
            sizes: labels(&["S", "M", "L", "XL"]),
            colors: colors(&[
                ("Slate Gray", "#708090"),
                ("Off White", "#FAF9F6"),
                ("Charcoal", "#36454F"),
            ]),
            featured: true,
        },
        Product {
            id: "5".into(),
            name: "Typographic Rhythm".into(),
            description: "Letters and words arranged to create visual patterns and rhythms, celebrating the beauty of typography.".into(),
            price: Price::new(1499),
            images: vec![
                unsplash("photo-1592878904946-b3cd8ae243d0"),
                unsplash("photo-1593183534075-3516ec1e38ba"),
            ],
            category: "Typography".into(),
            collection: "Word Play".into(),
            sizes: labels(&["XS", "S", "M", "L", "XL", "XXL"]),
            colors: colors(&[("Black", "#000000"), ("White", "#FFFFFF"), ("Navy", "#000080")]),
            featured: false,
        },
        Product {
            id: "6".into(),
            name: "Optical Illusion".into(),
            description: "Mind-bending patterns that play with perception and create fascinating visual effects.".into(),
            price: Price::new(1799),
            images: vec![
                unsplash("photo-1578587018452-892bacefd3f2"),
                unsplash("photo-1503342331862-c0d3e1a08419"),
            ],
            category: "Optical".into(),
            collection: "Visual Paradox".into(),
            sizes: labels(&["S", "M", "L", "XL"]),
            colors: colors(&[("Black", "#000000"), ("White", "#FFFFFF")]),
            featured: false,
        },
    ]
});

static COLLECTIONS: LazyLock<Vec<Collection>> = LazyLock::new(|| {
    let collection = |id: &str, name: &str, description: &str, photo: &str| Collection {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: unsplash(photo),
    };

    vec![
        collection(
            "minimal-geometry",
            "Minimal Geometry",
            "Clean lines and perfect shapes create harmonious designs inspired by mathematical precision.",
            "photo-1523371537394-e7da61b2379f",
        ),
        collection(
            "fluid-expressions",
            "Fluid Expressions",
            "Organic forms and flowing patterns that evoke movement and emotional responses.",
            "photo-1613387275674-cb92af1c29d1",
        ),
        collection(
            "line-essence",
            "Line Essence",
            "The beauty of simplicity, expressed through minimal line art and negative space.",
            "photo-1516762689617-e1cffcef479d",
        ),
        collection(
            "structure-series",
            "Structure Series",
            "Inspired by architecture and structural design principles, these pieces celebrate form and function.",
            "photo-1518544897598-6827b231fff1",
        ),
    ]
});

/// Every product, in catalog order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Every collection, in catalog order.
#[must_use]
pub fn collections() -> &'static [Collection] {
    &COLLECTIONS
}

/// Look up a product by id.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

/// Look up a collection by slug.
#[must_use]
pub fn find_collection(slug: &str) -> Option<&'static Collection> {
    collections().iter().find(|c| c.id == slug)
}

/// Products whose collection name equals `collection_name`.
#[must_use]
pub fn products_by_collection(collection_name: &str) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| p.collection == collection_name)
        .collect()
}

/// Products flagged as featured.
#[must_use]
pub fn featured_products() -> Vec<&'static Product> {
    products().iter().filter(|p| p.featured).collect()
}

/// Distinct categories, in first-seen order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for product in products() {
        if !seen.contains(&product.category.as_str()) {
            seen.push(product.category.as_str());
        }
    }
    seen
}

/// Distinct size labels across the catalog, in first-seen order.
#[must_use]
pub fn all_sizes() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for size in products().iter().flat_map(|p| p.sizes.iter()) {
        if !seen.contains(&size.as_str()) {
            seen.push(size.as_str());
        }
    }
    seen
}

/// Distinct colors across the catalog, keyed by name, in first-seen order.
#[must_use]
pub fn all_colors() -> Vec<&'static Color> {
    let mut names = BTreeSet::new();
    products()
        .iter()
        .flat_map(|p| p.colors.iter())
        .filter(|c| names.insert(c.name.as_str()))
        .collect()
}

/// Case-insensitive substring search over name, description, category and
/// collection. An empty query matches nothing.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products()
        .iter()
        .filter(|p| {
            [&p.name, &p.description, &p.category, &p.collection]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl ProductSort {
    /// All sort options, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::NameAsc => "Name: A to Z",
            Self::NameDesc => "Name: Z to A",
        }
    }

    /// Parse a query-string value; unknown values fall back to `Featured`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Listing filters: category, colors, sizes and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub sort: ProductSort,
}

impl ProductQuery {
    /// Build a query from decoded query-string pairs.
    ///
    /// Recognised keys are `category`, `color` and `size` (both repeatable)
    /// and `sort`. Empty values are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" => query.category = Some(value.to_string()),
                "color" => push_unique(&mut query.colors, value),
                "size" => push_unique(&mut query.sizes, value),
                "sort" => query.sort = ProductSort::parse_lenient(value),
                _ => {}
            }
        }
        query
    }

    /// Whether any filter (not the sort) is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || !self.colors.is_empty() || !self.sizes.is_empty()
    }

    /// Whether `product` passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self
            .category
            .as_ref()
            .is_some_and(|category| &product.category != category)
        {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.iter().any(|c| product.has_color(c)) {
            return false;
        }
        if !self.sizes.is_empty() && !self.sizes.iter().any(|s| product.has_size(s)) {
            return false;
        }
        true
    }

    /// Filter and sort `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            ProductSort::Featured => result.sort_by_key(|p| !p.featured),
            ProductSort::PriceAsc => result.sort_by_key(|p| p.price),
            ProductSort::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
            ProductSort::NameAsc => result.sort_by(|a, b| a.name.cmp(&b.name)),
            ProductSort::NameDesc => result.sort_by(|a, b| b.name.cmp(&a.name)),
        }

        result
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(products().len(), 6);
        assert_eq!(collections().len(), 4);
        assert_eq!(find_product("1").map(|p| p.price), Some(Price::new(1499)));
        assert!(find_product("99").is_none());
        assert_eq!(
            find_collection("line-essence").map(|c| c.name.as_str()),
            Some("Line Essence")
        );
    }

    #[test]
    fn test_featured_and_by_collection() {
        assert_eq!(ids(&featured_products()), ["1", "2", "3", "4"]);
        assert_eq!(ids(&products_by_collection("Structure Series")), ["4"]);
        assert!(products_by_collection("Nope").is_empty());
    }

    #[test]
    fn test_distinct_facets() {
        assert_eq!(
            categories(),
            ["Graphic", "Abstract", "Minimal", "Architectural", "Typography", "Optical"]
        );
        assert_eq!(all_sizes(), ["S", "M", "L", "XL", "XXL", "XS"]);
        let color_names: Vec<&str> = all_colors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(color_names.first(), Some(&"White"));
        assert_eq!(color_names.iter().filter(|n| **n == "Black").count(), 1);
    }

    #[test]
    fn test_filter_by_category_color_and_size() {
        let query = ProductQuery::from_pairs([("category", "Minimal")]);
        assert_eq!(ids(&query.apply(products())), ["3"]);

        let query = ProductQuery::from_pairs([("color", "Navy"), ("color", "Cream")]);
        assert_eq!(ids(&query.apply(products())), ["2", "5"]);

        let query = ProductQuery::from_pairs([("size", "XXL")]);
        assert_eq!(ids(&query.apply(products())), ["2", "5"]);

        let query = ProductQuery::from_pairs([("size", "XS"), ("color", "Navy")]);
        assert_eq!(ids(&query.apply(products())), ["5"]);
    }

    #[test]
    fn test_sorting() {
        let by = |sort: &str| ids(&ProductQuery::from_pairs([("sort", sort)]).apply(products()));

        assert_eq!(by("featured"), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(by("price-asc"), ["3", "1", "5", "2", "6", "4"]);
        assert_eq!(by("price-desc"), ["4", "6", "2", "1", "5", "3"]);
        assert_eq!(by("name-asc"), ["2", "4", "1", "3", "6", "5"]);
        assert_eq!(by("name-desc"), ["5", "6", "3", "1", "4", "2"]);
        assert_eq!(by("bogus"), by("featured"));
    }

    #[test]
    fn test_from_pairs_ignores_blanks_and_duplicates() {
        let query = ProductQuery::from_pairs([
            ("category", ""),
            ("color", "Black"),
            ("color", "Black"),
            ("page", "2"),
        ]);
        assert_eq!(query.category, None);
        assert_eq!(query.colors, ["Black"]);
        assert!(query.has_filters());
        assert!(!ProductQuery::default().has_filters());
    }

    #[test]
    fn test_search() {
        assert_eq!(ids(&search("WAVES")), ["2"]);
        assert_eq!(ids(&search("typography")), ["5"]);
        assert_eq!(ids(&search("structure")), ["4"]);
        assert!(search("   ").is_empty());
        assert!(search("sneakers").is_empty());
    }
}
