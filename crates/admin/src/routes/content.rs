//! Content management pages: homepage builder, banners, blocks, blog and
//! the media library.

use askama::Template;
use axum::{extract::RawQuery, response::Html};
use graphphile_core::PublishStatus;
use tracing::instrument;

use crate::components::{
    Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter, TableRow, Tone,
};
use crate::data::content::{
    self, HOMEPAGE_SECTIONS, HOMEPAGE_TEMPLATES, HomepageSection, HomepageTemplate, MediaItem,
    MediaKind, SECTION_COMPONENTS, SectionComponent, publish_tone,
};
use crate::filters;
use crate::middleware::AdminPage;

use super::{ListTemplate, PageAction, param, query_pairs, render};

#[derive(Template)]
#[template(path = "content/homepage.html")]
pub struct HomepageTemplateView {
    pub page: AdminPage,
    pub sections: &'static [HomepageSection],
    pub templates: &'static [HomepageTemplate],
    pub components: &'static [SectionComponent],
}

/// Homepage builder handler.
#[instrument(skip(page))]
pub async fn homepage(page: AdminPage) -> Html<String> {
    render(&HomepageTemplateView {
        page,
        sections: HOMEPAGE_SECTIONS,
        templates: HOMEPAGE_TEMPLATES,
        components: SECTION_COMPONENTS,
    })
}

/// Banners page handler.
#[instrument(skip(page))]
pub async fn banners(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let config = DataTableConfig::new("banners")
        .column(TableColumn::sortable("name", "Banner"))
        .column(TableColumn::sortable("location", "Location"))
        .column(TableColumn::sortable("start", "Start Date"))
        .column(TableColumn::sortable("end", "End Date"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select(
            "status",
            "Status",
            vec![
                FilterOption::new("all", "All Banners"),
                FilterOption::new("active", "Active"),
                FilterOption::new("inactive", "Inactive"),
            ],
        ))
        .search_placeholder("Search banners...")
        .empty_state("No banners found", None);

    let active = match param(&pairs, "status") {
        "active" => Some(true),
        "inactive" => Some(false),
        _ => None,
    };
    let rows = content::filter_banners(param(&pairs, "q"), active)
        .into_iter()
        .map(|b| {
            let status = if b.active {
                Cell::badge("Active", Tone::Success)
            } else {
                Cell::badge("Inactive", Tone::Neutral)
            };
            TableRow::new(
                b.id,
                vec![
                    Cell::text(b.name),
                    Cell::text(b.location_label()),
                    Cell::text(b.start_date),
                    Cell::text(b.end_date),
                    status,
                ],
            )
        })
        .collect();

    render(
        &ListTemplate::new(page, "Banner Management", DataTable::new(config, rows, pairs))
            .action(PageAction::new("/media", "Media Library")),
    )
}

/// Content blocks page handler.
#[instrument(skip(page))]
pub async fn blocks(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let config = DataTableConfig::new("blocks")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("type", "Type"))
        .column(TableColumn::sortable("updated", "Last Updated"))
        .column(TableColumn::new("used_in", "Used In"))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::select(
            "type",
            "Type",
            vec![
                FilterOption::new("all", "All Types"),
                FilterOption::new("text", "Text"),
                FilterOption::new("html", "HTML"),
                FilterOption::new("map", "Map"),
            ],
        ))
        .search_placeholder("Search content blocks...")
        .empty_state("No content blocks found", None);

    let kind = Some(param(&pairs, "type")).filter(|k| !k.is_empty() && *k != "all");
    let rows = content::filter_blocks(param(&pairs, "q"), kind)
        .into_iter()
        .map(|b| {
            TableRow::new(
                b.id,
                vec![
                    Cell::text(b.name),
                    Cell::text(b.kind),
                    Cell::text(b.last_updated),
                    Cell::text(b.usage()),
                    Cell::badge(b.status.label(), publish_tone(b.status)),
                ],
            )
        })
        .collect();

    render(&ListTemplate::new(
        page,
        "Content Blocks",
        DataTable::new(config, rows, pairs),
    ))
}

/// Blog posts page handler.
#[instrument(skip(page))]
pub async fn blog(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let config = DataTableConfig::new("blog")
        .column(TableColumn::sortable("title", "Title"))
        .column(TableColumn::sortable("author", "Author"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::sortable("views", "Views"))
        .column(TableColumn::sortable("status", "Status"))
        .search_placeholder("Search posts...")
        .empty_state("No blog posts found", None);

    let rows = content::filter_posts(param(&pairs, "q"))
        .into_iter()
        .map(|p| {
            let date = match (p.date, p.status) {
                (Some(date), _) => date,
                (None, PublishStatus::Draft) => "Draft",
                (None, _) => "",
            };
            TableRow::new(
                p.id,
                vec![
                    Cell::text(p.title).with_detail(p.excerpt),
                    Cell::text(p.author),
                    Cell::text(p.category),
                    Cell::text(date),
                    Cell::number(p.views),
                    Cell::badge(p.status.label(), publish_tone(p.status)),
                ],
            )
        })
        .collect();

    render(&ListTemplate::new(
        page,
        "Blog Posts",
        DataTable::new(config, rows, pairs),
    ))
}

/// One media tab.
#[derive(Debug, Clone)]
pub struct MediaTab {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Media library page template.
#[derive(Template)]
#[template(path = "content/media.html")]
pub struct MediaTemplate {
    pub page: AdminPage,
    pub tabs: Vec<MediaTab>,
    pub tab: String,
    pub search: String,
    pub items: Vec<&'static MediaItem>,
}

/// Media library handler.
#[instrument(skip(page))]
pub async fn media(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let tab = param(&pairs, "type");
    let kind = MediaKind::from_tab(tab);
    let tab = if kind.is_some() { tab } else { "all" };

    let tabs = [
        ("all", "All Media"),
        ("images", "Images"),
        ("videos", "Videos"),
        ("documents", "Documents"),
    ]
    .into_iter()
    .map(|(value, label)| MediaTab {
        value,
        label,
        active: value == tab,
    })
    .collect();

    render(&MediaTemplate {
        items: content::filter_media(param(&pairs, "q"), kind),
        tab: tab.to_string(),
        search: param(&pairs, "q").to_string(),
        tabs,
        page,
    })
}
