//! Checks passwords against the Have I Been Pwned range API without revealing them.
//!
//! Each password is hashed with SHA1 locally. Only the first 5 hex characters of
//! the digest are sent to `GET https://api.pwnedpasswords.com/range/{PREFIX}`;
//! the service answers with every known suffix under that prefix and the
//! remaining 35 characters are matched here (see [`hibp_range`]).
//!
//! # Installation
//!
//! ```sh
//! cargo install hibp-check
//! ```
//!
//! # Usage
//!
//! ```sh
//! hibp-check -- hunter2 'correct horse battery staple'
//! ```
//!
//! The `--` keeps a password that starts with `-` from being read as an option.
//!
//! One line is printed per password, with all but its first two characters masked:
//!
//! ```text
//! hu***** was found <count> times...you should consider changing your password
//! co************************** was not found. Carry on!
//! ```
//!
//! A count of zero means the password is not in the dataset, not that it is strong.
//! Any failed lookup aborts the run with a non-zero exit code; lookups are never
//! retried.

pub mod check;
pub mod client;
pub mod error;

pub use check::{Report, check_all, check_password, mask};
pub use client::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, RangeClient,
    RangeSource,
};
pub use error::{Error, LookupError};
