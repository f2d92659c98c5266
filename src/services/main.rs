use crate::domain::product::Product;
use crate::repository::ProductReader;
use crate::services::products::best_sellers;

use super::ServiceResult;

/// Core business logic for the landing page.
///
/// The hero and capability stats are static translated content; the only
/// fetched data is the best-seller strip.
pub fn show_index<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    best_sellers(repo)
}
