//! Tourhub - a tour and activity marketplace web frontend
//!
//! This library provides the server-rendered frontend for the Tourhub
//! marketplace: routed page shells, session/auth, locale resolution and
//! typed wrappers over the backend HTTP service.

pub mod backend;
pub mod cache;
pub mod config;
pub mod models;
pub mod session;
pub mod ui;
pub mod view;
pub mod web;
