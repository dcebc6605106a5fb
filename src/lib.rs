//! Script Injector Frontend
//!
//! Leptos pages of the script injector extension: the popup (list, reorder,
//! editor) and the options page.

pub mod app;
pub mod commands;
pub mod components;
pub mod context;
pub mod file_import;
pub mod highlight;
pub mod options_app;
pub mod page;
pub mod store;
