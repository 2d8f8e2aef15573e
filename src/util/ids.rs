//! Resource id generation for fleet seeding.
//!
//! The dispatch core never mints ids; builders call into this module when a
//! seed omits one.

use uuid::Uuid;

use super::types::ResourceId;

/// Generate an id of the form `TAXI-{LOC}-{SUFFIX}` for a resource at `location`.
///
/// `LOC` is the first three alphabetic characters of the location, upper-cased.
/// `SUFFIX` is six hex characters taken from a random v4 UUID.
pub fn generate_resource_id(location: &str) -> ResourceId {
    let prefix: String = location
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let prefix = if prefix.is_empty() { "GEN".to_string() } else { prefix };
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_ascii_uppercase();
    ResourceId::new(format!("TAXI-{prefix}-{suffix}"))
}
