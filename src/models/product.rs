use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product as DomainProduct, ProductUpdate};
use crate::domain::types::{ProductId, ProductPrice, ProductSlug, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub slug: Option<String>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub price: Option<f64>,
    pub image: String,
    pub brand: Option<String>,
    pub best_selling: bool,
    pub likes: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Attach an ordered outlet list and lift the row into the domain type.
    ///
    /// A NULL price column reads back as the canonical not-a-number value.
    /// Slugs that fail the non-empty constraint are treated as absent rather
    /// than rejected; older records populated them inconsistently.
    pub fn into_domain(self, outlets: Vec<String>) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: ProductId::new(self.id)?,
            slug: self.slug.and_then(|s| ProductSlug::new(s).ok()),
            name_en: self.name_en,
            name_ar: self.name_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            price: ProductPrice::new(self.price.unwrap_or(f64::NAN)),
            image: self.image,
            brand: self.brand,
            best_selling: self.best_selling,
            likes: self.likes,
            outlets,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Stored price column value for a canonical price.
fn price_column(price: ProductPrice) -> Option<f64> {
    price.is_known().then(|| price.get())
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProductRow {
    pub slug: Option<String>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub price: Option<f64>,
    pub image: String,
    pub brand: Option<String>,
    pub best_selling: bool,
}

impl From<NewProduct> for NewProductRow {
    fn from(product: NewProduct) -> Self {
        Self {
            slug: product.slug.map(ProductSlug::into_inner),
            name_en: product.name_en,
            name_ar: product.name_ar,
            description_en: product.description_en,
            description_ar: product.description_ar,
            price: price_column(product.price),
            image: product.image,
            brand: product.brand,
            best_selling: product.best_selling,
        }
    }
}

/// Field-level merge; `None` fields are skipped by Diesel.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub slug: Option<String>,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub price: Option<Option<f64>>,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub best_selling: Option<bool>,
}

impl From<ProductUpdate> for ProductChangeset {
    fn from(update: ProductUpdate) -> Self {
        Self {
            slug: update.slug.map(ProductSlug::into_inner),
            name_en: update.name_en,
            name_ar: update.name_ar,
            description_en: update.description_en,
            description_ar: update.description_ar,
            price: update.price.map(price_column),
            image: update.image,
            brand: update.brand,
            best_selling: update.best_selling,
        }
    }
}
