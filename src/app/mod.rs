// CatalogView - app/mod.rs
//
// Application layer: record loading, state management, shell commands.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod command;
pub mod source;
pub mod state;
