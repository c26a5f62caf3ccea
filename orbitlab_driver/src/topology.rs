//! Constellation size derivation.

/// Satellites per orbital plane needed to fit `sat_count` satellites
/// into `orbital_planes` planes: `ceil(sat_count / orbital_planes)`.
///
/// The last plane may end up partially filled; the emulator receives the
/// per-plane count, so the emulated constellation can be slightly larger
/// than `sat_count`.
///
/// # Panics
///
/// Panics if `orbital_planes` is zero. [`crate::Experiment::new`] rejects
/// such settings before this is reached.
pub fn sats_per_orbit(sat_count: u64, orbital_planes: u32) -> u64 {
    debug_assert!(orbital_planes > 0, "orbital_planes must be at least 1");
    sat_count.div_ceil(orbital_planes as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_multiples_fill_planes_evenly() {
        assert_eq!(sats_per_orbit(72, 72), 1);
        assert_eq!(sats_per_orbit(144, 72), 2);
    }

    #[test]
    fn remainders_round_up() {
        assert_eq!(sats_per_orbit(1, 72), 1);
        assert_eq!(sats_per_orbit(73, 72), 2);
        assert_eq!(sats_per_orbit(200, 72), 3);
    }

    #[test]
    #[should_panic(expected = "orbital_planes must be at least 1")]
    fn zero_planes_is_a_caller_bug() {
        sats_per_orbit(10, 0);
    }

    proptest! {
        #[test]
        fn matches_ceiling_division(n in 1u64..1_000_000, planes in 1u32..500) {
            let per_orbit = sats_per_orbit(n, planes);
            let planes = planes as u64;
            // smallest per-plane count whose total covers the request
            prop_assert!(per_orbit * planes >= n);
            prop_assert!((per_orbit - 1) * planes < n);
        }
    }
}
