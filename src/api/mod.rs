//! Role-store API access
//!
//! Command handlers only talk to [`DirectoryClient`]; [`ApiClient`] is the
//! HTTP implementation used by the binary.

mod client;
mod directory;
mod users;

pub use client::ApiClient;
pub use directory::DirectoryClient;
