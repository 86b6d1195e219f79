//! HTTP route handlers

pub mod import;
pub mod recipes;
