use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{IdeaView, render_not_found, render_template};
use crate::services::ServiceError;
use crate::services::browse::{
    BrowsePage, show_business_type, show_category, show_creator, show_tag,
};

fn respond(result: Result<BrowsePage, ServiceError>, heading: &str, tera: &Tera) -> HttpResponse {
    match result {
        Ok(page) => {
            let today = Utc::now().date_naive();
            let mut context = Context::new();
            context.insert("heading", heading);
            context.insert("name", &page.name);
            context.insert("ideas", &IdeaView::from_ideas(page.ideas, today));
            context.insert("stats", &page.stats);
            render_template(tera, "browse/index.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(tera),
        Err(err) => {
            log::error!("Failed to render browse page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/category/{slug}")]
pub async fn category(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(show_category(&slug, repo.get_ref()), "Category", &tera)
}

#[get("/type/{slug}")]
pub async fn business_type(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(
        show_business_type(&slug, repo.get_ref()),
        "Business Type",
        &tera,
    )
}

#[get("/creator/{slug}")]
pub async fn creator(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(show_creator(&slug, repo.get_ref()), "Creator", &tera)
}

#[get("/tag/{slug}")]
pub async fn tag(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(show_tag(&slug, repo.get_ref()), "Tag", &tera)
}
