// CatalogView - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and embedding the view pipeline in other shells.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
