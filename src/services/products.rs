use serde::Serialize;

use crate::domain::product::{Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::forms::products::{AddProductForm, AddProductPayload, EditProductForm, LikeForm};
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Products sharing one brand on the listing page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrandGroup {
    pub brand: Option<String>,
    pub products: Vec<Product>,
}

/// Partition products by brand into insertion-ordered groups.
///
/// Every product lands in exactly one group; products without a brand form
/// their own group. Group order follows the first occurrence of each brand.
pub fn group_by_brand(products: Vec<Product>) -> Vec<BrandGroup> {
    let mut groups: Vec<BrandGroup> = Vec::new();
    for product in products {
        match groups.iter().position(|g| g.brand == product.brand) {
            Some(index) => groups[index].products.push(product),
            None => groups.push(BrandGroup {
                brand: product.brand.clone(),
                products: vec![product],
            }),
        }
    }
    groups
}

/// Core business logic for the product listing page.
///
/// Fetches the entire product set and partitions it by brand. Repository
/// errors are translated into `ServiceError` so that the HTTP route can
/// remain a thin wrapper.
pub fn show_products<R>(repo: &R) -> ServiceResult<Vec<BrandGroup>>
where
    R: ProductReader,
{
    let products = repo.list_products()?;
    Ok(group_by_brand(products))
}

/// Resolve a detail-page key as a slug first, then as a numeric identifier.
pub fn show_product<R>(key: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    if let Some(product) = repo.get_product_by_slug(key)? {
        return Ok(product);
    }

    if let Ok(id) = key.parse::<i32>()
        && let Ok(id) = ProductId::new(id)
        && let Some(product) = repo.get_product_by_id(id)?
    {
        return Ok(product);
    }

    Err(ServiceError::NotFound)
}

/// Products carrying the best-seller badge, for the landing strip.
pub fn best_sellers<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    let mut products = repo.list_products()?;
    products.retain(|p| p.best_selling);
    Ok(products)
}

/// Persist a new product from a submitted form and return the created
/// record.
pub fn create_product<R>(form: AddProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let payload = AddProductPayload::try_from(form)?;
    let created = repo.create_product(&payload.into_new_product())?;
    Ok(created)
}

/// Apply a partial merge to an existing product.
///
/// Exposed through the JSON API only; no page in the storefront invokes it.
pub fn edit_product<R>(id: i32, form: EditProductForm, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let id = ProductId::new(id).map_err(|_| ServiceError::NotFound)?;
    let update = ProductUpdate::try_from(form)?;

    match repo.update_product(id, &update)? {
        0 => Err(ServiceError::NotFound),
        _ => Ok(()),
    }
}

/// Toggle the like counter of a product by exactly one.
///
/// The direction comes from the client-held `liked` flag; the server keeps
/// no per-visitor state and performs no idempotency check.
pub fn toggle_like<R>(id: i32, form: &LikeForm, repo: &R) -> ServiceResult<i32>
where
    R: ProductWriter,
{
    let id = ProductId::new(id).map_err(|_| ServiceError::NotFound)?;
    let likes = repo.adjust_likes(id, form.delta())?;
    Ok(likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{TestRepository, sample_product};

    fn sample_form() -> AddProductForm {
        AddProductForm {
            slug: "day-cream".to_string(),
            name_en: "Day Cream".to_string(),
            name_ar: "كريم نهاري".to_string(),
            description_en: String::new(),
            description_ar: String::new(),
            price: "19.99".to_string(),
            image: "/assets/images/cream.jpg".to_string(),
            brand: None,
            outlets: vec![],
        }
    }

    #[test]
    fn grouping_is_a_total_partition() {
        let products = vec![
            sample_product(1, Some("bonn")),
            sample_product(2, Some("medix")),
            sample_product(3, Some("bonn")),
            sample_product(4, None),
        ];
        let total = products.len();

        let groups = group_by_brand(products);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].brand.as_deref(), Some("bonn"));
        assert_eq!(groups[0].products.len(), 2);
        assert_eq!(groups[1].brand.as_deref(), Some("medix"));
        assert_eq!(groups[2].brand, None);
        let regrouped: usize = groups.iter().map(|g| g.products.len()).sum();
        assert_eq!(regrouped, total);
    }

    #[test]
    fn empty_store_renders_zero_groups() {
        let repo = TestRepository::new(vec![]);
        assert!(show_products(&repo).unwrap().is_empty());
    }

    #[test]
    fn detail_key_resolves_slug_then_id() {
        let repo = TestRepository::new(vec![sample_product(3, None)]);

        assert_eq!(show_product("product-3", &repo).unwrap().id, 3);
        assert_eq!(show_product("3", &repo).unwrap().id, 3);
    }

    #[test]
    fn unknown_key_is_not_found() {
        let repo = TestRepository::new(vec![sample_product(1, None)]);

        assert_eq!(show_product("no-such-slug", &repo), Err(ServiceError::NotFound));
        assert_eq!(show_product("99", &repo), Err(ServiceError::NotFound));
        assert_eq!(show_product("-1", &repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn best_sellers_keeps_only_badged_products() {
        let mut badged = sample_product(2, None);
        badged.best_selling = true;
        let repo = TestRepository::new(vec![sample_product(1, None), badged]);

        let result = best_sellers(&repo).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn created_product_carries_parsed_price() {
        let repo = TestRepository::new(vec![]);

        let created = create_product(sample_form(), &repo).unwrap();

        assert_eq!(created.price.get(), 19.99);
        assert_eq!(created.slug.as_ref().unwrap().as_str(), "day-cream");
    }

    #[test]
    fn malformed_price_is_stored_as_nan() {
        let repo = TestRepository::new(vec![]);
        let mut form = sample_form();
        form.price = "free".to_string();

        let created = create_product(form, &repo).unwrap();

        assert!(!created.price.is_known());
    }

    #[test]
    fn like_then_unlike_restores_the_counter() {
        let repo = TestRepository::new(vec![sample_product(1, None)]);

        let after_like = toggle_like(1, &LikeForm { liked: false }, &repo).unwrap();
        assert_eq!(after_like, 1);
        let after_unlike = toggle_like(1, &LikeForm { liked: true }, &repo).unwrap();
        assert_eq!(after_unlike, 0);
    }

    #[test]
    fn liking_an_unknown_product_is_not_found() {
        let repo = TestRepository::new(vec![]);

        let result = toggle_like(5, &LikeForm { liked: false }, &repo);

        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn edit_merges_fields_into_the_record() {
        let repo = TestRepository::new(vec![sample_product(1, None)]);
        let form = EditProductForm {
            name_en: Some("Renamed".to_string()),
            best_selling: Some(true),
            ..EditProductForm::default()
        };

        edit_product(1, form, &repo).unwrap();

        let product = repo
            .get_product_by_id(ProductId::new(1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(product.name_en, "Renamed");
        assert!(product.best_selling);
    }

    #[test]
    fn editing_an_unknown_product_is_not_found() {
        let repo = TestRepository::new(vec![]);

        let result = edit_product(9, EditProductForm::default(), &repo);

        assert_eq!(result, Err(ServiceError::NotFound));
    }
}
