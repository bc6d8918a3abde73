//! # pc-crowd
//!
//! Atlassian Crowd directory client for pam-crowd.
//!
//! This crate talks to Crowd's `usermanagement/1` REST API using `reqwest`
//! and plugs into the decision pipeline through [`CrowdAuthenticator`],
//! which implements [`pc_core::AuthenticationPort`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;
pub mod error;
pub mod model;
pub mod provider;

pub use client::CrowdClient;
pub use error::{CrowdError, CrowdResult};
pub use model::CrowdUser;
pub use provider::CrowdAuthenticator;
