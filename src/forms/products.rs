//! Typed request structures for the catalog write paths.
//!
//! Raw form/JSON bodies are deserialized into `*Form` structs and converted
//! into validated `*Payload` structs before they reach the repository,
//! replacing the unchecked object spreads of the legacy write paths.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::{ProductPrice, ProductSlug};

/// Body of the add-product form and of `POST /api/products/add`.
///
/// Every field is an open-ended string; missing fields default to empty.
/// A malformed price is coerced to the canonical not-a-number value rather
/// than rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub image: String,
    pub brand: Option<String>,
    #[serde(default)]
    pub outlets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddProductPayload {
    pub slug: Option<ProductSlug>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub price: ProductPrice,
    pub image: String,
    pub brand: Option<String>,
    pub outlets: Vec<String>,
}

impl AddProductPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            slug: self.slug,
            name_en: self.name_en,
            name_ar: self.name_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            price: self.price,
            image: self.image,
            brand: self.brand,
            best_selling: false,
            outlets: self.outlets,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddProductFormError {
    #[error("Add product form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for AddProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<AddProductForm> for AddProductPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            // An empty or whitespace slug is treated as absent.
            slug: ProductSlug::new(value.slug).ok(),
            name_en: value.name_en,
            name_ar: value.name_ar,
            description_en: value.description_en,
            description_ar: value.description_ar,
            price: ProductPrice::parse(&value.price),
            image: value.image,
            brand: value.brand.filter(|b| !b.trim().is_empty()),
            outlets: value.outlets,
        })
    }
}

/// Arbitrary partial record accepted by `PUT /api/products/edit`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    pub slug: Option<String>,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub price: Option<String>,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "bestSelling")]
    pub best_selling: Option<bool>,
}

#[derive(Debug, Error)]
pub enum EditProductFormError {
    #[error("Edit product form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for EditProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<EditProductForm> for ProductUpdate {
    type Error = EditProductFormError;

    fn try_from(value: EditProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            slug: value.slug.and_then(|s| ProductSlug::new(s).ok()),
            name_en: value.name_en,
            name_ar: value.name_ar,
            description_en: value.description_en,
            description_ar: value.description_ar,
            price: value.price.as_deref().map(ProductPrice::parse),
            image: value.image,
            brand: value.brand,
            best_selling: value.best_selling,
        })
    }
}

/// Body of the like-toggle form.
///
/// `liked` is client-held state indicating whether the visitor already
/// liked the product; it is not verified server-side and a reload resets
/// it, so the same visitor may increment repeatedly.
#[derive(Debug, Deserialize)]
pub struct LikeForm {
    #[serde(default)]
    pub liked: bool,
}

impl LikeForm {
    /// Increment direction chosen from the client-held flag.
    pub fn delta(&self) -> i32 {
        if self.liked { -1 } else { 1 }
    }
}
