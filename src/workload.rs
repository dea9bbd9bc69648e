//! Sample process sets.
//!
//! Provides the classic three-process demonstration set and random
//! workloads for exploring the policies.

use rand::Rng;

use crate::models::Process;

/// The textbook three-process set: `P1(0, 5)`, `P2(1, 3)`, `P3(2, 8)`.
pub fn classic() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5),
        Process::new("P2", 1, 3),
        Process::new("P3", 2, 8),
    ]
}

/// Generates a random workload.
///
/// Produces 3 to 6 processes named `P1..Pn`, with arrival times in
/// `0..=4`, burst times in `1..=10` and priorities in `1..=5`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = cpu_schedule::workload::random(&mut rng);
/// assert!((3..=6).contains(&processes.len()));
/// ```
pub fn random<R: Rng>(rng: &mut R) -> Vec<Process> {
    let count = rng.random_range(3..=6);
    random_with_count(rng, count)
}

/// Generates `count` random processes with the same ranges as [`random`].
pub fn random_with_count<R: Rng>(rng: &mut R, count: usize) -> Vec<Process> {
    (1..=count)
        .map(|i| {
            let burst = rng.random_range(1..=10);
            Process::new(format!("P{i}"), rng.random_range(0..=4), burst)
                .with_priority(rng.random_range(1..=5))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classic() {
        let ps = classic();
        assert_eq!(ps.len(), 3);
        assert_eq!(ps[2].burst_time, 8);
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let ps = random(&mut rng);
            assert!((3..=6).contains(&ps.len()));
            for p in &ps {
                assert!((0..=4).contains(&p.arrival_time));
                assert!((1..=10).contains(&p.burst_time));
                assert!((1..=5).contains(&p.effective_priority()));
            }
            assert!(validate_processes(&ps).is_ok());
        }
    }

    #[test]
    fn test_random_is_deterministic_when_seeded() {
        let a = random(&mut StdRng::seed_from_u64(3));
        let b = random(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_with_count_names() {
        let mut rng = StdRng::seed_from_u64(1);
        let ps = random_with_count(&mut rng, 4);
        let ids: Vec<_> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3", "P4"]);
    }
}
