//! Helpers with no reactive state.
//!
//! `id` mints entity ids; `image` turns a picked file into an inline data
//! URL. Browser calls are confined to `csr` builds so both stay testable
//! natively.

pub mod id;
pub mod image;
