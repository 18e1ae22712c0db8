use rand::Rng;

pub const FIRST_NAMES: [&str; 10] = [
    "Max", "Anna", "Lukas", "Sofia", "Paul", "Mia", "Jonas", "Lea", "Noah", "Emma",
];

pub const LAST_NAMES: [&str; 10] = [
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Hoffmann",
    "Schulz",
];

/// Immutable pool of names, fixed for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct NamePool {
    names: &'static [&'static str],
}

impl NamePool {
    pub fn first_names() -> Self {
        Self {
            names: &FIRST_NAMES,
        }
    }

    pub fn last_names() -> Self {
        Self { names: &LAST_NAMES }
    }

    /// Picks one name uniformly at random. The per-thread RNG keeps
    /// concurrent requests uncorrelated without locking.
    pub fn random_name(&self) -> &'static str {
        let index = rand::thread_rng().gen_range(0..self.names.len());
        self.names[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_name_stays_in_pool() {
        let pool = NamePool::first_names();
        for _ in 0..1_000 {
            assert!(pool.contains(pool.random_name()));
        }

        let pool = NamePool::last_names();
        for _ in 0..1_000 {
            assert!(pool.contains(pool.random_name()));
        }
    }

    #[test]
    fn test_random_name_roughly_uniform() {
        let pool = NamePool::first_names();
        let draws = 10_000;
        let expected = draws / pool.len();

        let mut counts = std::collections::HashMap::new();
        for _ in 0..draws {
            *counts.entry(pool.random_name()).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), pool.len());
        for (name, count) in counts {
            // ±20% tolerance around the expected 1000 per name
            assert!(
                count >= expected * 8 / 10 && count <= expected * 12 / 10,
                "{} appeared {} times, expected around {}",
                name,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_pools_are_the_fixed_ten_names() {
        assert_eq!(FIRST_NAMES.len(), 10);
        assert_eq!(LAST_NAMES.len(), 10);
        assert_eq!(FIRST_NAMES[0], "Max");
        assert_eq!(FIRST_NAMES[9], "Emma");
        assert_eq!(LAST_NAMES[0], "Müller");
        assert_eq!(LAST_NAMES[9], "Schulz");
    }
}
