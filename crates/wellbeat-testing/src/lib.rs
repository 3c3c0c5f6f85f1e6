//! Test utilities for Wellbeat services.
//!
//! Provides token minting and bearer-header helpers so tests can act as
//! authenticated collaborators or managers without a login round-trip.
//! Import in `#[cfg(test)]` blocks and `tests/` only — never in production
//! code.

pub mod auth;
