//! # BRCMS Common Library
//!
//! Shared code for the band site content management layer:
//! - Storage access over a local key-value store (whole JSON documents per key)
//! - Session and permission handling
//! - Content models (performances, tracks, gallery images, users)
//! - Generic collection editor and user registry
//! - Public landing-page views
//! - Configuration loading

pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod ids;
pub mod models;
pub mod public;
pub mod storage;
pub mod time;

pub use error::{Error, Result};
pub use storage::{FileStorage, MemoryStorage, Storage, Store};
