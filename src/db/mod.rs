//! SQLite persistence for sections and tasks.
//!
//! - [`db`] opens connections and applies [`migrations`].
//! - [`sections`] and [`tasks`] are thin table gateways returning [`error::StoreError`].
//! - [`store`] turns them into the [`TaskRepository`](crate::libs::repository::TaskRepository)
//!   the registry talks to, one connection per call.

pub mod db;
pub mod error;
pub mod migrations;
pub mod sections;
pub mod store;
pub mod tasks;
