//! Client-side half of the Pwned Passwords k-anonymity range protocol.
//!
//! A password is hashed with SHA1 and split into a 5 character prefix and a
//! 35 character suffix. Only the prefix ever leaves the machine: the range API
//! answers with every known `SUFFIX:COUNT` pair under that prefix, and the
//! suffix is matched locally.
//!
//! This crate does no I/O. It covers the three pure steps of a check:
//!
//! - [`split`] turns a password into a [`Prefix`] and a [`Suffix`]
//! - [`parse_range`] turns a range response body into a typed [`RangeResultSet`]
//! - [`leak_count`] finds the suffix in the result set
//!
//! ```
//! use hibp_range::{leak_count, parse_range, split};
//!
//! let (prefix, suffix) = split("password");
//! assert_eq!(prefix.as_str(), "5BAA6");
//!
//! let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471\r\n";
//! let results = parse_range(body).unwrap();
//! assert_eq!(leak_count(&results, &suffix), 3730471);
//! ```

mod digest;
mod matcher;
mod range;

pub use digest::{DIGEST_HEX_LEN, HEX_CHARS, PREFIX_LEN, Prefix, SUFFIX_LEN, Suffix, digest_hex, split};
pub use matcher::leak_count;
pub use range::{ParseError, RangeEntry, RangeResultSet, parse_range};
