//! Locale resource store for the bilingual storefront.
//!
//! Static English/Arabic translation tables selected by the visitor's
//! stored preference (a `lang` cookie) or the `Accept-Language` header.
//! Arabic is the fallback locale.

use std::collections::HashMap;
use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

/// Name of the cookie persisting the visitor's locale choice.
pub const LANG_COOKIE: &str = "lang";

/// Supported locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    En,
    /// Arabic (fallback).
    Ar,
}

pub const FALLBACK_LOCALE: Locale = Locale::Ar;

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for templates.
    pub const fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub const fn is_arabic(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Parse a locale value, tolerant of case and region tags.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Detection order: `lang` cookie, `Accept-Language` header, fallback.
    pub fn detect(req: &HttpRequest) -> Self {
        if let Some(cookie) = req.cookie(LANG_COOKIE)
            && let Some(locale) = Self::parse(cookie.value())
        {
            return locale;
        }

        if let Some(header) = req.headers().get(actix_web::http::header::ACCEPT_LANGUAGE)
            && let Ok(header) = header.to_str()
        {
            for entry in header.split(',') {
                let tag = entry.split(';').next().unwrap_or("");
                if let Some(locale) = Self::parse(tag) {
                    return locale;
                }
            }
        }

        FALLBACK_LOCALE
    }
}

impl FromRequest for Locale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::detect(req)))
    }
}

/// Look up a single key, falling back to Arabic and then to the key itself.
pub fn translate(locale: Locale, key: &str) -> &str {
    lookup(table(locale), key)
        .or_else(|| lookup(table(FALLBACK_LOCALE), key))
        .unwrap_or(key)
}

/// Full catalog for the given locale, with fallback entries filled in.
///
/// Inserted into every template context under the `t` variable.
pub fn catalog(locale: Locale) -> HashMap<&'static str, &'static str> {
    let mut catalog: HashMap<&'static str, &'static str> =
        table(FALLBACK_LOCALE).iter().copied().collect();
    for (key, value) in table(locale) {
        catalog.insert(key, value);
    }
    catalog
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ar => AR,
    }
}

const EN: &[(&str, &str)] = &[
    ("site_title", "Souq Storefront"),
    ("nav_home", "Home"),
    ("nav_products", "Products"),
    ("nav_admin", "Admin"),
    ("hero_title", "Care products you can trust"),
    ("hero_subtitle", "A journey worth the experience"),
    ("about_title", "About us"),
    ("about_years", "Years of experience"),
    ("about_outlets", "Sales outlets"),
    ("about_products", "Products"),
    ("products_title", "Our products"),
    ("brand_message", "A journey worth the experience"),
    ("best_sellers_title", "Best sellers"),
    ("best_seller", "Best Seller"),
    ("no_brand", "Other products"),
    ("currency", "SAR"),
    ("price_unavailable", "Price on request"),
    ("likes", "Likes"),
    ("like", "Like"),
    ("brand", "Brand"),
    ("available_at", "Available at"),
    ("loading", "Loading"),
    ("error_loading_products", "An error occurred while loading products."),
    ("not_found_title", "Product not found"),
    ("not_found_message", "The product you are looking for does not exist."),
    ("back_to_products", "Back to products"),
    ("admin_title", "Add a product"),
    ("form_slug", "Slug"),
    ("form_name_en", "Name (English)"),
    ("form_name_ar", "Name (Arabic)"),
    ("form_description_en", "Description (English)"),
    ("form_description_ar", "Description (Arabic)"),
    ("form_price", "Price"),
    ("form_image", "Image URL"),
    ("form_brand", "Brand"),
    ("form_submit", "Add"),
    ("product_added", "Product added successfully"),
    ("product_add_failed", "Something went wrong"),
    ("language_name", "العربية"),
];

const AR: &[(&str, &str)] = &[
    ("site_title", "متجر السوق"),
    ("nav_home", "الرئيسية"),
    ("nav_products", "المنتجات"),
    ("nav_admin", "الإدارة"),
    ("hero_title", "منتجات عناية تثق بها"),
    ("hero_subtitle", "رحلة تستحق التجربة"),
    ("about_title", "من نحن"),
    ("about_years", "سنوات من الخبرة"),
    ("about_outlets", "منافذ البيع"),
    ("about_products", "المنتجات"),
    ("products_title", "منتجاتنا"),
    ("brand_message", "رحلة تستحق التجربة"),
    ("best_sellers_title", "الأكثر مبيعًا"),
    ("best_seller", "الأكثر مبيعًا"),
    ("no_brand", "منتجات أخرى"),
    ("currency", "ر.س"),
    ("price_unavailable", "السعر عند الطلب"),
    ("likes", "إعجابات"),
    ("like", "أعجبني"),
    ("brand", "العلامة التجارية"),
    ("available_at", "متوفر لدى"),
    ("loading", "جار التحميل"),
    ("error_loading_products", "حدث خطأ أثناء تحميل المنتجات."),
    ("not_found_title", "المنتج غير موجود"),
    ("not_found_message", "المنتج الذي تبحث عنه غير موجود."),
    ("back_to_products", "العودة إلى المنتجات"),
    ("admin_title", "إضافة منتج"),
    ("form_slug", "المعرف"),
    ("form_name_en", "الاسم (إنجليزي)"),
    ("form_name_ar", "الاسم (عربي)"),
    ("form_description_en", "الوصف (إنجليزي)"),
    ("form_description_ar", "الوصف (عربي)"),
    ("form_price", "السعر"),
    ("form_image", "رابط الصورة"),
    ("form_brand", "العلامة التجارية"),
    ("form_submit", "إضافة"),
    ("product_added", "تمت إضافة المنتج بنجاح"),
    ("product_add_failed", "حدث خطأ ما"),
    ("language_name", "English"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_tags_case_insensitively() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("AR_SA"), Some(Locale::Ar));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key_itself() {
        assert_eq!(translate(Locale::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn english_catalog_overrides_fallback_entries() {
        let catalog = catalog(Locale::En);
        assert_eq!(catalog["currency"], "SAR");
        assert_eq!(catalog["brand_message"], "A journey worth the experience");
    }

    #[test]
    fn every_english_key_has_an_arabic_counterpart() {
        for (key, _) in EN {
            assert!(
                AR.iter().any(|(k, _)| k == key),
                "missing Arabic translation for {key}"
            );
        }
    }
}
