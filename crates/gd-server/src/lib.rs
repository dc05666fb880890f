//! HTTP surface for glyphd.
//!
//! One endpoint: `POST /ascii` takes a multipart image upload plus
//! tuning query parameters and answers with a plain-text ASCII grid.

pub mod app;
pub mod cli;
pub mod error;
pub mod routes;
