use crate::digest::Suffix;
use crate::range::RangeResultSet;

/// Returns how many times `suffix` appears in the breach data for its prefix.
///
/// Entries are scanned in the order the service sent them and the first exact
/// match wins, so a duplicated suffix reports its first count. Returns 0 when
/// nothing matches, which means "not seen", not "safe".
#[inline]
pub fn leak_count(results: &RangeResultSet, suffix: &Suffix) -> u64 {
    results.iter().find(|entry| entry.suffix == *suffix).map_or(0, |entry| entry.count)
}
