//! Module for the points-of-interest resource API.
//!
//! This module defines the full read/write surface for a city's points of
//! interest, including partial updates via patch documents and the
//! notification side effect on delete.

pub mod handlers;
pub mod models;
pub mod patch;
pub mod routes;
