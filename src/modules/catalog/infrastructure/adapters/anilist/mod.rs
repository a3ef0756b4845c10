//! AniList adapter: query templates, decode contracts and the client that
//! ties them together. Keep all three in step when the upstream schema moves.

pub mod client;
pub mod mapper;
pub mod models;
pub mod queries;

pub use client::CatalogClient;
pub use mapper::AniListMapper;
