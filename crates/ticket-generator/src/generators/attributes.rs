//! Small numeric and composite ticket attributes.

use rand::Rng;
use ticket_core::{CpuVendor, Environment, TicketKey, Version, WeightTable};

/// Windows versions seen on classroom workstations, inclusive.
pub const WINDOWS_VERSIONS: (u8, u8) = (7, 11);

/// Range of keys used for linked issues, inclusive.
pub const LINKED_ISSUE_KEYS: (u32, u32) = (900, 999);

/// Generate a product version with major in `1..=max_major`. Two draws.
pub fn generate_version<R: Rng + ?Sized>(rng: &mut R, max_major: u8) -> Version {
    let major = rng.random_range(1..=max_major);
    let minor = rng.random_range(0..=9);
    Version { major, minor }
}

/// Generate a workstation environment. Two draws.
pub fn generate_environment<R: Rng + ?Sized>(
    rng: &mut R,
    cpu: &WeightTable<CpuVendor, 2>,
) -> Environment {
    let windows = rng.random_range(WINDOWS_VERSIONS.0..=WINDOWS_VERSIONS.1);
    Environment {
        windows,
        cpu: cpu.sample(rng),
    }
}

/// Generate the key of an older linked issue. One draw.
pub fn generate_linked_issue<R: Rng + ?Sized>(rng: &mut R) -> TicketKey {
    TicketKey(rng.random_range(LINKED_ISSUE_KEYS.0..=LINKED_ISSUE_KEYS.1))
}
