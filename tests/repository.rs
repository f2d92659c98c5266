use souq_storefront::domain::product::{NewProduct, ProductUpdate};
use souq_storefront::domain::types::{ProductId, ProductPrice, ProductSlug};
use souq_storefront::repository::errors::RepositoryError;
use souq_storefront::repository::{DieselRepository, ProductReader, ProductWriter};

mod common;

fn new_product(slug: &str, brand: Option<&str>, price: &str) -> NewProduct {
    NewProduct {
        slug: ProductSlug::new(slug).ok(),
        name_en: "Night Cream".to_string(),
        name_ar: "كريم ليلي".to_string(),
        description_en: "Rich moisturizer".to_string(),
        description_ar: "مرطب غني".to_string(),
        price: ProductPrice::parse(price),
        image: "/assets/images/cream.jpg".to_string(),
        brand: brand.map(str::to_string),
        best_selling: false,
        outlets: vec!["Riyadh Park".to_string(), "Jeddah Mall".to_string()],
    }
}

#[test]
fn create_returns_record_with_canonical_price() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("night-cream", Some("bonn"), "19.99"))
        .expect("should create product");

    assert_eq!(created.price.get(), 19.99);
    assert_eq!(created.slug.as_ref().unwrap().as_str(), "night-cream");
    assert_eq!(created.likes, 0);
    assert_eq!(
        created.outlets,
        vec!["Riyadh Park".to_string(), "Jeddah Mall".to_string()]
    );
}

#[test]
fn malformed_price_round_trips_as_nan() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("mystery", None, "nineteen"))
        .expect("should create product");
    assert!(!created.price.is_known());

    let fetched = repo
        .get_product_by_id(created.id)
        .expect("should read product")
        .expect("product should exist");
    assert!(!fetched.price.is_known());
}

#[test]
fn list_preserves_insertion_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for slug in ["first", "second", "third"] {
        repo.create_product(&new_product(slug, None, "5"))
            .expect("should create product");
    }

    let products = repo.list_products().expect("should list products");
    let slugs: Vec<_> = products
        .iter()
        .map(|p| p.slug.as_ref().unwrap().as_str().to_string())
        .collect();
    assert_eq!(slugs, vec!["first", "second", "third"]);
}

#[test]
fn lookup_by_slug_and_unknown_slug() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("day-cream", None, "12"))
        .expect("should create product");

    let found = repo
        .get_product_by_slug("day-cream")
        .expect("should query by slug");
    assert!(found.is_some());

    let missing = repo
        .get_product_by_slug("no-such-product")
        .expect("should query by slug");
    assert!(missing.is_none());
}

#[test]
fn like_increment_then_decrement_restores_counter() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("likeable", None, "9.5"))
        .expect("should create product");

    let after_like = repo
        .adjust_likes(created.id, 1)
        .expect("should increment likes");
    assert_eq!(after_like, 1);

    let after_unlike = repo
        .adjust_likes(created.id, -1)
        .expect("should decrement likes");
    assert_eq!(after_unlike, 0);
}

#[test]
fn liking_a_missing_product_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = repo.adjust_likes(ProductId::new(42).unwrap(), 1);

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn update_merges_only_supplied_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("editable", Some("medix"), "30"))
        .expect("should create product");

    let update = ProductUpdate {
        name_en: Some("Renamed".to_string()),
        price: Some(ProductPrice::new(25.0)),
        best_selling: Some(true),
        ..ProductUpdate::default()
    };
    let affected = repo
        .update_product(created.id, &update)
        .expect("should update product");
    assert_eq!(affected, 1);

    let fetched = repo
        .get_product_by_id(created.id)
        .expect("should read product")
        .expect("product should exist");
    assert_eq!(fetched.name_en, "Renamed");
    assert_eq!(fetched.price.get(), 25.0);
    assert!(fetched.best_selling);
    // Untouched fields keep their values.
    assert_eq!(fetched.name_ar, "كريم ليلي");
    assert_eq!(fetched.brand.as_deref(), Some("medix"));
}

#[test]
fn updating_a_missing_product_affects_no_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let affected = repo
        .update_product(ProductId::new(7).unwrap(), &ProductUpdate::default())
        .expect("should run update");

    assert_eq!(affected, 0);
}
