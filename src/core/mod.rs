//! Core library components.
//!
//! This module contains the reusable secret resolution logic: key
//! classification, path encoding, the two GitLab backends and the
//! configuration they run with.

pub mod backend;
pub mod config;
pub mod constants;
pub mod domain;
pub mod key;
pub mod path;
pub mod resolver;
pub mod transport;
