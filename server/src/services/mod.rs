//! Services used by the edge guard and the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Provider-facing logic lives here so route handlers stay focused on
//! cookie plumbing and status mapping.

pub mod gotrue;
pub mod identity;
