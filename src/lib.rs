#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate lazy_static;
#[cfg(feature = "pg-storage")]
#[macro_use]
extern crate diesel;
#[cfg(feature = "pg-storage")]
#[macro_use]
extern crate diesel_migrations;

extern crate futures;
extern crate serde;

pub mod admin;
pub mod config;
#[cfg(feature = "pg-storage")]
pub mod db;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod geo;
pub mod logs;
pub mod models;
pub mod objects;
pub mod result;
#[cfg(feature = "pg-storage")]
mod schema;
pub mod search;
pub mod storage;
mod tools;
pub mod view;

pub use directory::{Directory, DirectoryBuilder};
