//! Input patterns for testing and benchmarking sorts, all of them `i64`.
//!
//! Every random pattern takes an explicit `seed`, the same `(len, seed)` pair always yields the
//! same values. Tests derive their seeds from [`random_init_seed`], which is fixed per process and
//! can be set with the `OVERRIDE_SEED` env var to reproduce a failure.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize, seed: u64) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng(seed);

    (0..len).map(|_| rng.gen::<i64>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R, seed: u64) -> Vec<i64>
where
    R: Into<rand::distributions::Uniform<i64>>,
{
    // :.:.:.::
    let mut rng = seeded_rng(seed);

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i64> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64, seed: u64) -> Vec<i64> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng(seed);
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64, seed: u64) -> Vec<i64> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len, seed);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i64> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..len as i64).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize, seed: u64) -> Vec<i64> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len, seed);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1i64, seed ^ SAW_SEED_SALT);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize, seed: u64) -> Vec<i64> {
    //   .:.
    // .:::::.

    let mut vals = random(len, seed);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn interleaved(len: usize) -> Vec<i64> {
    // :.:.:.
    // ::::::
    //
    // The upper half of the values sits on even indices and the lower half on odd ones. Halving
    // gaps only ever compare even with even and odd with odd until the final pass, which then has
    // to move every element of the lower half.

    let half = (len / 2) as i64;
    (0..len as i64)
        .map(|i| if i % 2 == 0 { half + i / 2 } else { i / 2 })
        .collect()
}

/// Seed for the current process, printed by the test harness for repeatability.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(&seed).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

// Keeps the saw directions independent of the values they are applied to.
const SAW_SEED_SALT: u64 = 0x5A3_D1EC;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        assert_eq!(random(1000, 7), random(1000, 7));
        assert_eq!(
            random_uniform(1000, 0..=1_000_000i64, 3),
            random_uniform(1000, 0..=1_000_000i64, 3)
        );
        assert_eq!(random_zipf(500, 1.0, 11), random_zipf(500, 1.0, 11));
        assert_eq!(saw_mixed(300, 8, 5), saw_mixed(300, 8, 5));
    }

    #[test]
    fn different_seed_different_values() {
        assert_ne!(random(64, 0), random(64, 1));
        assert_ne!(
            random_uniform(64, 0..=1_000_000i64, 0),
            random_uniform(64, 0..=1_000_000i64, 1)
        );
    }

    #[test]
    fn uniform_in_range() {
        let v = random_uniform(10_000, 0..=1_000_000i64, 42);
        assert_eq!(v.len(), 10_000);
        assert!(v.iter().all(|&x| (0..=1_000_000).contains(&x)));
    }

    #[test]
    fn shapes() {
        assert_eq!(ascending(4), [0, 1, 2, 3]);
        assert_eq!(descending(4), [3, 2, 1, 0]);
        assert_eq!(all_equal(3), [66, 66, 66]);
        assert!(random_zipf(0, 1.0, 0).is_empty());
        assert!(saw_mixed(0, 4, 0).is_empty());

        let organ = pipe_organ(101, 9);
        assert!(organ[..50].windows(2).all(|w| w[0] <= w[1]));
        assert!(organ[50..].windows(2).all(|w| w[0] >= w[1]));

        let sorted = random_sorted(200, 95.0, 1);
        assert!(sorted[..190].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn interleaved_halves() {
        assert_eq!(interleaved(8), [4, 0, 5, 1, 6, 2, 7, 3]);
        assert_eq!(interleaved(5), [2, 0, 3, 1, 4]);
        assert!(interleaved(0).is_empty());

        let mut v = interleaved(1_000);
        v.sort_unstable();
        assert_eq!(v, ascending(1_000));
    }

    #[test]
    fn process_seed_is_stable() {
        assert_eq!(random_init_seed(), random_init_seed());
    }
}
