//! Call identifier generation

use uuid::Uuid;

/// Generate a fresh opaque call id (UUID v4, 122 random bits).
pub fn new_call_id() -> String {
    Uuid::new_v4().to_string()
}
