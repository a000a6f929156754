//! Resource providers for locating slide images.
//!
//! This crate provides platform-specific implementations of the
//! `ResourceProvider` trait from lectern-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads resources relative to a base directory
//! - [`DirectPathProvider`]: Loads a reference as a filesystem path, as given
//! - [`ResolverChain`]: Tries a list of providers in order, first hit wins
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from lectern-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod chain;
mod filesystem;

pub use chain::ResolverChain;
pub use filesystem::{DirectPathProvider, FilesystemResourceProvider};

pub use lectern_traits::InMemoryResourceProvider;
