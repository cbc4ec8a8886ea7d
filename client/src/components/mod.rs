//! Layout chrome components.

pub mod footer;
pub mod header;
pub mod layout;
pub mod sidebar;
