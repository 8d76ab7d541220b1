//! Core library exports for the idea directory service.
//!
//! The `data` feature compiles the reusable persistence/domain layer
//! (`domain`, `models`, `schema`, `repository`); the default `server`
//! feature adds the Actix-web application on top (`dto`, `services`,
//! `routes`).

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
