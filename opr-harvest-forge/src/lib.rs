pub mod client;
pub mod error;
pub mod source;

pub use client::{ArmyForgeClient, ClientOptions, DEFAULT_BASE_URL, DEFAULT_REQUEST_INTERVAL};
pub use error::ForgeError;
pub use source::ArmyBookSource;
