use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::models::outlet::{NewOutletRow, Outlet as OutletRow};
use crate::models::product::{NewProductRow, Product as ProductRow, ProductChangeset};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

fn load_outlets(
    conn: &mut crate::db::DbConnection,
    product_id: i32,
) -> RepositoryResult<Vec<String>> {
    use crate::schema::outlets;

    let names = outlets::table
        .filter(outlets::product_id.eq(product_id))
        .order(outlets::position.asc())
        .select(outlets::name)
        .load::<String>(conn)?;

    Ok(names)
}

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{outlets, products};

        let mut conn = self.conn()?;

        let rows = products::table
            .order(products::id.asc())
            .load::<ProductRow>(&mut conn)?;

        let mut outlet_map: HashMap<i32, Vec<String>> = HashMap::new();
        let outlet_rows = outlets::table
            .order((outlets::product_id.asc(), outlets::position.asc()))
            .load::<OutletRow>(&mut conn)?;
        for outlet in outlet_rows {
            outlet_map
                .entry(outlet.product_id)
                .or_default()
                .push(outlet.name);
        }

        rows.into_iter()
            .map(|row| {
                let outlets = outlet_map.remove(&row.id).unwrap_or_default();
                row.into_domain(outlets).map_err(Into::into)
            })
            .collect()
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::id.eq(id.get()))
            .first::<ProductRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let outlets = load_outlets(&mut conn, row.id)?;
                Ok(Some(row.into_domain(outlets)?))
            }
            None => Ok(None),
        }
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::slug.eq(Some(slug.to_string())))
            .order(products::id.asc())
            .first::<ProductRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let outlets = load_outlets(&mut conn, row.id)?;
                Ok(Some(row.into_domain(outlets)?))
            }
            None => Ok(None),
        }
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::{outlets, products};

        let mut conn = self.conn()?;
        let row: NewProductRow = product.clone().into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(products::table)
                .values(row)
                .get_result::<ProductRow>(conn)?;

            let outlet_rows = product
                .outlets
                .iter()
                .enumerate()
                .map(|(position, name)| NewOutletRow {
                    product_id: created.id,
                    position: position as i32,
                    name: name.clone(),
                })
                .collect::<Vec<_>>();
            if !outlet_rows.is_empty() {
                diesel::insert_into(outlets::table)
                    .values(outlet_rows)
                    .execute(conn)?;
            }

            Ok(created.into_domain(product.outlets.clone())?)
        })
    }

    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset: ProductChangeset = update.clone().into();

        // updated_at is always touched so the changeset is never empty.
        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set((changeset, products::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn adjust_likes(&self, id: ProductId, delta: i32) -> RepositoryResult<i32> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // Single-statement increment; the store guarantees atomicity under
        // concurrent visitors.
        let likes = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(products::likes.eq(products::likes + delta))
            .returning(products::likes)
            .get_result::<i32>(&mut conn)
            .optional()?;

        likes.ok_or(RepositoryError::NotFound)
    }
}
