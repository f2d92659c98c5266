use actix_web::http::StatusCode;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::products::{AddProductForm, LikeForm};
use crate::i18n::{Locale, translate};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, render_template_with_status};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, show_product as show_product_service,
    show_products as show_products_service, toggle_like as toggle_like_service,
};

#[get("/products")]
pub async fn show_products(
    locale: Locale,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, locale, "products");

    match show_products_service(repo.get_ref()) {
        Ok(groups) => {
            context.insert("groups", &groups);
        }
        Err(err) => {
            log::error!("Failed to load products: {err}");
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "products/index.html", &context)
}

#[get("/products/{key}")]
pub async fn show_product(
    key: web::Path<String>,
    locale: Locale,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, locale, "products");

    match show_product_service(&key, repo.get_ref()) {
        Ok(product) => {
            context.insert("product", &product);
            render_template(&tera, "products/detail.html", &context)
        }
        Err(ServiceError::NotFound) => render_template_with_status(
            &tera,
            "products/not_found.html",
            &context,
            StatusCode::NOT_FOUND,
        ),
        Err(err) => {
            log::error!("Failed to load product '{key}': {err}");
            context.insert("load_error", &true);
            render_template_with_status(
                &tera,
                "products/detail.html",
                &context,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

#[post("/products/{id}/like")]
pub async fn like_product(
    id: web::Path<i32>,
    locale: Locale,
    web::Form(form): web::Form<LikeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match toggle_like_service(id.into_inner(), &form, repo.get_ref()) {
        Ok(_) => {}
        Err(ServiceError::NotFound) => {
            FlashMessage::error(translate(locale, "not_found_title")).send();
        }
        Err(err) => {
            log::error!("Failed to toggle like: {err}");
            FlashMessage::error(translate(locale, "error_loading_products")).send();
        }
    }
    redirect("/products")
}

#[get("/admin")]
pub async fn show_admin(
    locale: Locale,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, locale, "admin");
    render_template(&tera, "admin/index.html", &context)
}

#[post("/admin")]
pub async fn add_product(
    locale: Locale,
    web::Form(form): web::Form<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_product_service(form, repo.get_ref()) {
        Ok(_) => {
            FlashMessage::success(translate(locale, "product_added")).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add product: {err}");
            FlashMessage::error(translate(locale, "product_add_failed")).send();
        }
    }
    redirect("/admin")
}
