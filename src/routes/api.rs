//! JSON API mirroring the storefront's external interface.
//!
//! All three endpoints go through the same Diesel repository as the pages;
//! there is no separate document-store write path. None of them is gated by
//! authentication.

use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{DieselRepository, ProductReader};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, edit_product as edit_product_service,
};

#[derive(Serialize)]
struct CreatedResponse {
    message: &'static str,
    data: Product,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Deserialize)]
pub struct EditQueryParams {
    id: i32,
}

/// `GET /api/products` returns the full product set as a bare JSON array.
#[get("/api/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match repo.get_ref().list_products() {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            error!("Failed to list products: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Something went wrong",
            })
        }
    }
}

/// `POST /api/products/add` creates a record and responds `201` with it.
#[post("/api/products/add")]
pub async fn add_product(
    web::Json(form): web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_product_service(form, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(CreatedResponse {
            message: "Product added successfully",
            data: product,
        }),
        Err(e) => {
            error!("Failed to add product: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Something went wrong",
            })
        }
    }
}

/// `PUT /api/products/edit?id=<id>` merges supplied fields into a record.
///
/// Registered as a single-method resource so that other verbs receive a
/// `405`. No storefront page invokes this; it exists as an external
/// capability only.
pub async fn edit_product(
    params: web::Query<EditQueryParams>,
    web::Json(form): web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match edit_product_service(params.id, form, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Product updated successfully",
        }),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Product not found",
        }),
        Err(e) => {
            error!("Failed to update product: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Error updating product",
            })
        }
    }
}
