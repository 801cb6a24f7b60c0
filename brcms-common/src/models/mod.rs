//! Content models
//!
//! JSON field names are the persisted layout and stay compatible with
//! documents written by the browser pages.

pub mod asset;
pub mod gallery;
pub mod performance;
pub mod track;
pub mod user;

pub use asset::{capture_file, DataUri};
pub use gallery::{GalleryForm, GalleryImage};
pub use performance::{Performance, PerformanceForm};
pub use track::{Track, TrackForm};
pub use user::{seed_users, RoleLevel, User, ADMIN_ROLE_LABEL, ADMIN_USERNAME};

/// Numeric record identifier, unique within its collection
pub type RecordId = i64;
