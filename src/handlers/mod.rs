//! HTTP handlers

pub mod health;
pub mod page;
pub mod features;
pub mod predict;
