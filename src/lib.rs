//! LevelForge API - Backend for an in-browser drag-and-drop game level editor
//!
//! This crate provides the REST API for LevelForge, enabling:
//! - Publishing and browsing player-built game levels
//! - Play counts and star ratings with aggregated scores
//! - The element palette used by the grid editor

pub mod config;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod store;
