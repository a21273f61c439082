//! Individual field generators.
//!
//! Each function consumes a fixed number of draws from the RNG it is given,
//! which keeps the per-ticket draw order in
//! [`TicketGenerator::next_ticket`](crate::TicketGenerator::next_ticket) stable.

pub mod attributes;
pub mod text;
pub mod timestamp;

use rand::Rng;

/// Pick one element of a fixed pool uniformly. One draw.
///
/// Pools are compile-time constants and never empty.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

/// Return `true` when a uniform draw in `[0, 1)` exceeds `threshold`. One draw.
///
/// `gate(rng, 0.4)` is true with probability 0.6.
pub fn gate<R: Rng + ?Sized>(rng: &mut R, threshold: f64) -> bool {
    rng.random::<f64>() > threshold
}

/// Draw `value` only when the gate opens. The gate draw always happens; the
/// value draw only on success.
pub fn gated<T, R, F>(rng: &mut R, threshold: f64, value: F) -> Option<T>
where
    R: Rng + ?Sized,
    F: FnOnce(&mut R) -> T,
{
    if gate(rng, threshold) {
        Some(value(rng))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["a", "b", "c"];

        for _ in 0..100 {
            assert!(pool.contains(pick(&mut rng, &pool)));
        }
    }

    #[test]
    fn test_gate_extremes() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert!(gate(&mut rng, -1.0));
            assert!(!gate(&mut rng, 1.0));
        }
    }

    #[test]
    fn test_gate_rate() {
        let mut rng = StdRng::seed_from_u64(3);
        let draws = 10_000;
        let open = (0..draws).filter(|_| gate(&mut rng, 0.4)).count();
        let share = open as f64 / draws as f64;

        assert!((share - 0.6).abs() < 0.03, "gate opened {share}");
    }

    #[test]
    fn test_gated_skips_value_draw_when_closed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let value: Option<u32> = gated(&mut rng1, 1.0, |r| r.random_range(0..10));
        assert_eq!(value, None);

        // Only the gate draw was consumed
        let _ = rng2.random::<f64>();
        assert_eq!(rng1.random::<u64>(), rng2.random::<u64>());
    }
}
