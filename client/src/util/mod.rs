//! Session wiring that sits between the browser and the page tree.
//!
//! `auth` owns the session observer, the client route policy, sign-out and
//! the cross-tab auth event bridge.

pub mod auth;
