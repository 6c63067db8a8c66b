//! Domain types, the in-memory registry and the user-facing plumbing around it.
//!
//! - [`task`] and [`section`]: the value types
//! - [`repository`]: the persistence contract the registry depends on
//! - [`registry`]: the write-through cache of sections and tasks
//! - [`config`], [`data_storage`], [`messages`], [`view`], [`export`]: CLI support

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod registry;
pub mod repository;
pub mod section;
pub mod task;
pub mod view;
