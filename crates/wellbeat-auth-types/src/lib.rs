//! Auth types shared across the Wellbeat workspace.
//!
//! Provides JWT claim definitions, access-token validation, and the
//! `Identity` bearer-token extractor.

pub mod identity;
pub mod token;
