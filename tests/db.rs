use souq_storefront::repository::{DieselRepository, ProductReader};

mod common;

#[test]
fn migrated_store_starts_empty_and_hands_out_connections() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    assert!(pool.get().is_ok());

    let repo = DieselRepository::new(pool);
    let products = repo.list_products().expect("listing should succeed");
    assert!(products.is_empty());
}
