use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::outlets)]
pub struct Outlet {
    pub id: i32,
    pub product_id: i32,
    pub position: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::outlets)]
pub struct NewOutletRow {
    pub product_id: i32,
    pub position: i32,
    pub name: String,
}
