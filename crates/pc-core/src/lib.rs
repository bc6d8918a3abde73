//! # pc-core
//!
//! Decision pipeline of the pam-crowd authentication helper.
//!
//! This crate provides:
//! - Credential line parsing (`username password`)
//! - The directory client port that concrete clients implement
//! - Classification of directory results into an [`Outcome`]
//! - The orchestrator that runs one authentication attempt
//! - The mapping from [`Outcome`] to the process exit status
//!
//! ## Exit status contract
//!
//! | Outcome       | Status |
//! |---------------|--------|
//! | `Allowed`     | 0      |
//! | `Denied`      | 1      |
//! | `NoMatch`     | 2      |
//! | `SystemError` | 3      |

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod classify;
pub mod config;
pub mod credentials;
pub mod denial;
pub mod error;
pub mod exit;
pub mod orchestrator;
pub mod outcome;
pub mod port;

pub use classify::classify;
pub use config::Configuration;
pub use credentials::{read_credentials, Credentials};
pub use denial::{DenialReason, DENIAL_REASONS};
pub use error::{PortError, PortResult, ReadError, ReadResult};
pub use orchestrator::run;
pub use outcome::Outcome;
pub use port::AuthenticationPort;
