use crate::domain::model::Person;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for the pairing engine.
pub trait Shuffler: Send + Sync {
    /// Permutes `people` in place.
    fn shuffle(&mut self, people: &mut [Person]);

    /// Uniform index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

pub struct RandomShuffler<R: Rng = StdRng> {
    rng: R,
}

impl RandomShuffler<StdRng> {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, otherwise OS entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng + Send + Sync> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, people: &mut [Person]) {
        people.shuffle(&mut self.rng);
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Leaves the roster in its given order and always picks the first team.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveOrder;

impl Shuffler for PreserveOrder {
    fn shuffle(&mut self, _people: &mut [Person]) {}

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> Vec<Person> {
        (1..=count).map(|i| format!("Person {}", i)).collect()
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let original = names(20);
        let mut shuffled = original.clone();
        RandomShuffler::seeded(7).shuffle(&mut shuffled);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected = original.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut first = names(10);
        let mut second = names(10);
        RandomShuffler::seeded(42).shuffle(&mut first);
        RandomShuffler::seeded(42).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_choose_index_in_range() {
        let mut shuffler = RandomShuffler::seeded(3);
        for len in 1..50 {
            assert!(shuffler.choose_index(len) < len);
        }
    }

    #[test]
    fn test_preserve_order() {
        let mut people = names(4);
        PreserveOrder.shuffle(&mut people);
        assert_eq!(people, names(4));
        assert_eq!(PreserveOrder.choose_index(5), 0);
    }
}
