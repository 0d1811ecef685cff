//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `admin` composes the drafts, the entity stores and the catalog records
//! into one page-scoped controller. `notice` is the only app-wide context;
//! menu and tab state stay local to the components that own them.

pub mod admin;
pub mod catalog;
pub mod draft;
pub mod notice;
pub mod store;
pub mod ui;
