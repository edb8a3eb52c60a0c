//! HTTP handlers

pub mod index;
pub mod health;
pub mod predict;
