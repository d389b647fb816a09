//! Per-collection operations.
//!
//! Each module declares its attribute/relationship shapes, its parameter
//! objects with their filter tables, and thin `impl Client` adapters over
//! the generic fetcher.

pub mod i18n_formats;
pub mod languages;
pub mod organizations;
pub mod projects;
pub mod resource_string_comments;
pub mod resource_strings;
pub mod resource_translations;
pub mod resources;
pub mod statistics;
pub mod team_memberships;
pub mod teams;
pub mod users;
