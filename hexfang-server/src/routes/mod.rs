//! HTTP route handlers

pub mod board;
pub mod games;
pub mod status;
