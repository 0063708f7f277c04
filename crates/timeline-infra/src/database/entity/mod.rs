//! SeaORM entities.

pub mod timeline_post;
