// CatalogView - core/mod.rs
//
// Core business logic layer: the filter -> sort -> paginate view pipeline.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod sort;
pub mod view;
