use hibp_range::{HEX_CHARS, RangeEntry, RangeResultSet, SUFFIX_LEN, Suffix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generates a specified number of random passwords with uniform distribution.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_passwords(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| ALL_CHARS[rng.gen_range(0..ALL_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

/// Builds a range response body the size of a typical prefix (~800 records).
pub fn generate_range_body(records: usize) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut suffixes: Vec<[u8; SUFFIX_LEN]> = (0..records)
        .map(|_| std::array::from_fn(|_| HEX_CHARS[rng.gen_range(0..16)]))
        .collect();
    suffixes.sort_unstable();

    let mut body = String::with_capacity(records * 45);
    for suffix in &suffixes {
        body.push_str(std::str::from_utf8(suffix).unwrap());
        body.push(':');
        body.push_str(&rng.gen_range(1..100_000u64).to_string());
        body.push_str("\r\n");
    }
    body
}

/// Returns a result set that contains `target` as its last record.
pub fn result_set_ending_with(target: Suffix, records: usize) -> RangeResultSet {
    let body = generate_range_body(records);
    let mut entries = hibp_range::parse_range(&body).unwrap().entries().to_vec();
    entries.push(RangeEntry { suffix: target, count: 1 });
    RangeResultSet::new(entries)
}
