//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the admin forms and lists. Admin
//! components receive the page's `AdminState` signal as a prop; only the
//! notice tray reads shared context.

pub mod admin_tabs;
pub mod equipment_form;
pub mod equipment_grid;
pub mod layout;
pub mod notice_tray;
pub mod project_form;
pub mod project_table;
