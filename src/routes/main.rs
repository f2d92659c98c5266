use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::i18n::{FALLBACK_LOCALE, LANG_COOKIE, Locale};
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(
    locale: Locale,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, locale, "index");

    match show_index_service(repo.get_ref()) {
        Ok(best_sellers) => {
            context.insert("best_sellers", &best_sellers);
        }
        Err(err) => {
            log::error!("Failed to load best sellers: {err}");
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "main/index.html", &context)
}

/// Persist the visitor's locale choice in a cookie and bounce back.
#[get("/lang/{locale}")]
pub async fn set_language(path: web::Path<String>, req: HttpRequest) -> impl Responder {
    let locale = Locale::parse(&path).unwrap_or(FALLBACK_LOCALE);

    let back = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();

    let cookie = actix_web::cookie::Cookie::build(LANG_COOKIE, locale.as_str())
        .path("/")
        .max_age(actix_web::cookie::time::Duration::days(365))
        .finish();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, back))
        .finish()
}
