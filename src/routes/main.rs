use actix_web::{Responder, get, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::types::{BusinessType, Category, DateFilter, SortBy};
use crate::dto::listing::{ListingQueryParams, ListingState};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{IdeaView, render_template};
use crate::services::catalog::{full_catalog_stats, show_listing};

#[get("/")]
pub async fn index(
    params: web::Query<ListingQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let state = ListingState::from_params(&params);
    let today = Utc::now().date_naive();

    let page = show_listing(&state, today, server_config.items_per_page, repo.get_ref());
    let stats = full_catalog_stats(repo.get_ref());

    let mut context = Context::new();
    context.insert("ideas", &IdeaView::from_ideas(page.items, today));
    context.insert("page", &page.page);
    context.insert("pages", &page.pages);
    context.insert("total", &page.total);
    context.insert("stats", &stats);
    context.insert("state", &state.to_params());
    context.insert("query_string", &state.to_query_string());
    context.insert(
        "categories",
        &Category::ALL.map(Category::as_str).to_vec(),
    );
    context.insert(
        "business_types",
        &BusinessType::ALL.map(BusinessType::as_str).to_vec(),
    );
    context.insert(
        "date_filters",
        &DateFilter::ALL.map(DateFilter::as_str).to_vec(),
    );
    context.insert("sort_options", &SortBy::ALL.map(SortBy::as_str).to_vec());

    render_template(&tera, "main/index.html", &context)
}
