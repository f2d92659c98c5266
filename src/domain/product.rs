use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, ProductPrice, ProductSlug};

/// A single catalog item with bilingual text, price, image and social
/// metadata.
///
/// Bilingual fields carry no non-null invariant; an absent translation is
/// stored and rendered as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// Secondary routing key; inconsistently populated by older records.
    pub slug: Option<ProductSlug>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub price: ProductPrice,
    pub image: String,
    /// Free-text grouping key for the brand listing view.
    pub brand: Option<String>,
    /// Display-only badge flag.
    #[serde(rename = "bestSelling")]
    pub best_selling: bool,
    /// Anonymous like counter, mutated only via atomic increments.
    pub likes: i32,
    /// Ordered list of outlet names, display-only.
    pub outlets: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Name in the requested language, falling back to the other one.
    pub fn display_name(&self, arabic: bool) -> &str {
        let (primary, secondary) = if arabic {
            (&self.name_ar, &self.name_en)
        } else {
            (&self.name_en, &self.name_ar)
        };
        if primary.is_empty() { secondary } else { primary }
    }
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub slug: Option<ProductSlug>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub price: ProductPrice,
    pub image: String,
    pub brand: Option<String>,
    pub best_selling: bool,
    pub outlets: Vec<String>,
}

/// A field-level merge applied to an existing record.
///
/// `None` fields are left untouched. The like counter is deliberately
/// absent; it is only ever changed through the atomic increment primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub slug: Option<ProductSlug>,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub price: Option<ProductPrice>,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub best_selling: Option<bool>,
}
