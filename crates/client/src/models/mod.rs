//! Data models for Pterodactyl application API responses.

pub mod common;
pub mod resource;
pub mod servers;
pub mod users;

pub use common::{ListItem, ListMeta, ListResponse, Pagination};
pub use resource::ResourceKind;
pub use servers::Server;
pub use users::User;
