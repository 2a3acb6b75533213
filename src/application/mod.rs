// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the rest of the crate is written against.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The gateway and the UI only see the traits
//!
//! # Example
//!
//! ```ignore
//! use travel_desk::application::port::Transport;
//! use travel_desk::gateway::Gateway;
//!
//! // Infrastructure implements the port trait
//! struct RecordedTransport { /* ... */ }
//! impl Transport for RecordedTransport { /* ... */ }
//!
//! let gateway = Gateway::new(Arc::new(RecordedTransport::default()), settings)?;
//! ```

pub mod port;
