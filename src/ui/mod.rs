// CatalogView - ui/mod.rs
//
// Presentation layer: terminal rendering of computed views.
// Dependencies: core layer, comfy-table.

pub mod table;
