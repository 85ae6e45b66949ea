//! API route handlers

pub mod estimate;
pub mod health;
pub mod openapi;
