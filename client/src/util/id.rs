//! Entity id minting.
//!
//! Ids are random UUID v4 strings so rapid automated submissions within the
//! same millisecond never collide.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

/// Mint a fresh opaque entity id.
pub fn mint_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
