//! Core library exports for the Souq storefront.
//!
//! This crate exposes the domain, persistence, forms, routes and service
//! layers used by the bilingual product-catalog web application.

pub mod db;
pub mod domain;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
