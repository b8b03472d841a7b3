//! Crease API Library
//!
//! Core functionality for the cricket team management backend: the
//! player pool and team-selection domain, repositories, auth, and the
//! HTTP adapter layer.

pub mod api;
pub mod auth;
pub mod domain;
pub mod infrastructure;
