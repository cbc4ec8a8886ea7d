//! Networking modules for the auth REST API and in-app auth events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server's `/api/auth/*` endpoints and
//! `auth_events` fans auth changes out to every mounted observer.

pub mod api;
pub mod auth_events;
