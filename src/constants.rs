#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Weight given to an edge added without one.
pub const DEFAULT_WEIGHT: u64 = 1;

/// Exclusive upper bound for randomly generated edge weights.
pub const MAX_RANDOM_WEIGHT: u64 = 1000;

/// Exclusive upper bound for values in randomly generated integer sequences.
pub const MAX_RANDOM_INT: i64 = 1000;

/// Smallest and largest length of a randomly generated sequence
/// (inclusive, exclusive).
pub const RANDOM_SEQUENCE_LEN: (usize, usize) = (2, 20);

/// Number of random node/edge subsets drawn per graph case, at most.
pub const RANDOM_EDGE_SUBSETS: usize = 10;

/// Default number of random integer and string sequences per factory run.
pub const DEFAULT_RANDOM_CASES: usize = 10;

/// Default seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Printable ASCII characters in sorted order, with the smallest and the
/// largest removed so they stay available as guaranteed extremes.
pub fn str_chars() -> Vec<char> {
    let mut chars: Vec<char> = (' '..='~')
        .chain(['\t', '\n', '\x0b', '\x0c', '\r'])
        .collect();
    chars.sort_unstable();
    chars[1..chars.len() - 1].to_vec()
}
