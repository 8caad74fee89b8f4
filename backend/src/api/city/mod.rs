//! Module for the city resource API.
//!
//! This module defines the public interface and structure for reading city
//! data over HTTP: the list endpoint with filtering and pagination, and the
//! single-city endpoint with optional nested points of interest.

pub mod handlers;
pub mod models;
pub mod routes;
