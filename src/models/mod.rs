pub mod config;
pub mod outlet;
pub mod product;
