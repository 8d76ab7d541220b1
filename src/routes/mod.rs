use actix_web::HttpResponse;
use actix_web::http::header;
use chrono::NaiveDate;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::idea::Idea;
use crate::domain::slug::idea_path;

pub mod browse;
pub mod ideas;
pub mod main;

/// Renders a Tera template, logging render failures instead of exposing them.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

/// Renders the shared not-found page with a 404 status.
pub fn render_not_found(tera: &Tera) -> HttpResponse {
    let context = Context::new();
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(tera.render("main/not_found.html", &context).unwrap_or_else(|e| {
            log::error!("Failed to render template 'main/not_found.html': {e}");
            String::new()
        }))
}

/// See-other redirect used after non-canonical requests.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, location))
        .finish()
}

/// Permanent redirect used for the legacy URL scheme.
pub fn permanent_redirect(location: &str) -> HttpResponse {
    HttpResponse::MovedPermanently()
        .append_header((header::LOCATION, location))
        .finish()
}

/// Template-facing projection of an idea: the record plus its canonical
/// path and the "new" badge flag.
#[derive(Serialize)]
pub struct IdeaView {
    #[serde(flatten)]
    pub idea: Idea,
    pub path: String,
    pub is_new: bool,
}

impl IdeaView {
    pub fn new(idea: Idea, today: NaiveDate) -> Self {
        let path = idea_path(&idea);
        let is_new = idea.is_new(today);
        Self { idea, path, is_new }
    }

    pub fn from_ideas(ideas: Vec<Idea>, today: NaiveDate) -> Vec<Self> {
        ideas
            .into_iter()
            .map(|idea| Self::new(idea, today))
            .collect()
    }
}
