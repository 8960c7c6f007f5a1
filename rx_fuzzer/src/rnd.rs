/**
 * Random utilities.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static MY_RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::new(0));
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn set_seed(s: u64) {
    MY_RNG.with(|rng| {
        *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(s);
    });
}

/// Uniform in `r`, which must not be empty.
pub fn rand_range(r: &Range<usize>) -> usize {
    assert!(r.start < r.end, "empty range {:?}", r);
    MY_RNG.with(|rng| {
        rng.borrow_mut().gen_range(r.start, r.end)
    })
}

pub fn sample<T>(s: &[T]) -> &T {
    assert!(!s.is_empty());
    let idx = rand_range(&(0..s.len()));
    &s[idx]
}

pub fn rand_string(len: &Range<usize>, charset: &[char]) -> String {
    let len = rand_range(len);
    (0..len).map(|_| *sample(charset)).collect()
}

#[cfg(test)]
mod rnd_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        set_seed(42);
        let first: Vec<usize> = (0..16).map(|_| rand_range(&(0..1000))).collect();
        set_seed(42);
        let second: Vec<usize> = (0..16).map(|_| rand_range(&(0..1000))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn string_respects_length_and_charset() {
        set_seed(1);
        for _ in 0..100 {
            let s = rand_string(&(2..5), &['x', 'é']);
            let len = s.chars().count();
            assert!(len >= 2 && len < 5);
            assert!(s.chars().all(|c| c == 'x' || c == 'é'));
        }
    }
}
