use std::fmt;

use futures_util::stream::{self, Stream, StreamExt};
use hibp_range::{leak_count, split};
use tracing::debug;

use crate::client::RangeSource;
use crate::error::LookupError;

/// Characters of the password left visible in reports
const VISIBLE_CHARS: usize = 2;

/// The outcome of checking one password, safe to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub masked: String,
    pub count: u64,
}

impl Report {
    pub fn new(password: &str, count: u64) -> Self {
        Self { masked: mask(password), count }
    }

    pub fn is_breached(&self) -> bool {
        self.count > 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_breached() {
            write!(
                f,
                "{} was found {} times...you should consider changing your password",
                self.masked, self.count
            )
        } else {
            write!(f, "{} was not found. Carry on!", self.masked)
        }
    }
}

/// Keeps the first two characters and replaces every other one with `*`.
///
/// Counts characters, not bytes. Passwords of two characters or fewer come back unchanged.
pub fn mask(password: &str) -> String {
    password
        .chars()
        .enumerate()
        .map(|(i, c)| if i < VISIBLE_CHARS { c } else { '*' })
        .collect()
}

/// Looks up one password and returns its breach count.
///
/// Only the 5 character prefix reaches `source`; the suffix is matched here.
pub async fn check_password<S: RangeSource>(source: &S, password: &str) -> Result<u64, LookupError> {
    let (prefix, suffix) = split(password);
    debug!(%prefix, "checking password");

    let results = source.lookup(&prefix).await?;
    Ok(leak_count(&results, &suffix))
}

/// Checks every password, keeping up to `jobs` lookups in flight.
///
/// Reports come out in input order regardless of which lookup finishes first.
/// The stream yields the first error and the caller is expected to stop there.
pub fn check_all<'a, S: RangeSource>(
    source: &'a S,
    passwords: &'a [String],
    jobs: usize,
) -> impl Stream<Item = Result<Report, LookupError>> + 'a {
    stream::iter(passwords)
        .map(move |password| async move {
            let count = check_password(source, password).await?;
            Ok::<_, LookupError>(Report::new(password, count))
        })
        .buffered(jobs.max(1))
}
