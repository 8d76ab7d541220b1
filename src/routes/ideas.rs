use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::{IdeaView, permanent_redirect, redirect, render_not_found, render_template};
use crate::services::ServiceError;
use crate::services::detail::{legacy_idea_path, show_idea};

#[get("/{category}/{type}/{slug}")]
pub async fn show(
    path: web::Path<(String, String, String)>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (category_slug, type_slug, idea_slug) = path.into_inner();

    match show_idea(&category_slug, &type_slug, &idea_slug, repo.get_ref()) {
        Ok(page) => {
            let today = Utc::now().date_naive();
            let mut context = Context::new();
            context.insert("idea", &IdeaView::new(page.idea, today));
            context.insert("related", &IdeaView::from_ideas(page.related, today));
            context.insert("canonical_path", &page.canonical_path);
            render_template(&tera, "ideas/show.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to render idea page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Legacy URL scheme keyed solely by numeric id. Resolvable ids get a
/// permanent redirect to the canonical three-segment path, preserving the
/// query string; everything else falls back to the listing root.
#[get("/idea/{id}")]
pub async fn legacy(
    id: web::Path<String>,
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match legacy_idea_path(&id, repo.get_ref()) {
        Some(path) => {
            let location = if req.query_string().is_empty() {
                path
            } else {
                format!("{path}?{}", req.query_string())
            };
            permanent_redirect(&location)
        }
        None => redirect("/"),
    }
}
