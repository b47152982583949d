//! # API crate — HTTP service layer for the Lunch4Less client
//!
//! Everything the views know about the backend lives here. The backend is an
//! external REST collaborator; this crate wraps its endpoints, maps its JSON
//! shapes onto client-side records, and turns its failures into [`ApiError`]s
//! the views can show as-is.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URLs and image URL resolution |
//! | [`envelope`] | The uniform `{success, message, data}` response wrapper |
//! | [`error`] | Error taxonomy: domain / transport / payload |
//! | [`models`] | Entity records and their explicit mapping functions |
//! | [`claims`] | Versioned identity claims decoded from the credential token |
//! | [`session`] | [`SessionVault`]: persisted credential + cached user |
//! | [`client`] | [`Client`]: one method per backend operation |
//!
//! Endpoint methods are grouped per entity in `auth`, `categories`,
//! `products` and `recipes`, all as `impl Client` blocks.

pub mod claims;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod session;

mod auth;
mod categories;
mod products;
mod recipes;

pub use auth::AuthSession;
pub use claims::Claims;
pub use client::Client;
pub use config::ApiConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use models::{
    Category, CategoryDraft, Product, ProductDraft, ProductUpdate, Recipe, RecipeImage,
    RecipeIngredient, RecipeUpdate, Review, User,
};
pub use session::SessionVault;
