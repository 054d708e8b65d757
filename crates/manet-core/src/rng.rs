//! Bounded uniform random draws with a never-fail degradation policy.
//!
//! # Sources
//!
//! Two implementations of [`RandomSource`]:
//!
//! - [`DeviceEntropy`] — production source.  Opens `/dev/urandom`, falling
//!   back to `/dev/random`, and reads four bytes per draw.  If neither
//!   device can be opened, or a read ever fails, it degrades permanently to
//!   a `SmallRng` seeded from the process id.  Callers never see an error:
//!   the contract is "a value in range, best effort", not "high-quality or
//!   bust".
//! - [`SeededEntropy`] — deterministic source for tests and reproducible
//!   runs.  Same seed, same draw sequence.
//!
//! Reduction into `[0, n)` is by modulo.  The bias is negligible for the
//! small ranges this engine draws (≤ 100) and keeps the draw sequence
//! identical across sources for a given bit stream.

use std::fs::File;
use std::io::Read;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Supplier of bounded uniform integers.
///
/// Implementations are infallible by contract: every degradation path ends
/// in a usable value, never an error or a panic.
pub trait RandomSource {
    /// 32 raw random bits.
    fn next_u32(&mut self) -> u32;

    /// A value uniformly distributed in `[0, n)`.
    ///
    /// `n` of 0 or 1 returns 0.
    #[inline]
    fn draw(&mut self, n: u32) -> u32 {
        if n <= 1 {
            return 0;
        }
        self.next_u32() % n
    }
}

// ── DeviceEntropy ─────────────────────────────────────────────────────────────

/// OS entropy device source with a seeded pseudo-random fallback.
///
/// The descriptor is opened once and held for the life of the source; a
/// failed read drops it and all further draws come from the fallback rng.
pub struct DeviceEntropy {
    device: Option<File>,
    fallback: SmallRng,
}

impl DeviceEntropy {
    /// Try `/dev/urandom`, then `/dev/random`; keep whichever opened.
    ///
    /// When neither opens (or on platforms without them) every draw comes
    /// from a `SmallRng` seeded by the process id.
    pub fn new() -> Self {
        let device = File::open("/dev/urandom")
            .or_else(|_| File::open("/dev/random"))
            .ok();
        Self {
            device,
            fallback: SmallRng::seed_from_u64(u64::from(std::process::id())),
        }
    }

    /// `true` while draws are served from the entropy device.
    pub fn is_degraded(&self) -> bool {
        self.device.is_none()
    }
}

impl Default for DeviceEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for DeviceEntropy {
    fn next_u32(&mut self) -> u32 {
        if let Some(dev) = self.device.as_mut() {
            let mut buf = [0u8; 4];
            match dev.read_exact(&mut buf) {
                Ok(()) => return u32::from_ne_bytes(buf),
                // Device went away mid-run: degrade for good.
                Err(_) => self.device = None,
            }
        }
        self.fallback.next_u32()
    }
}

// ── SeededEntropy ─────────────────────────────────────────────────────────────

/// Deterministic source for tests and seeded runs.
pub struct SeededEntropy(SmallRng);

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        SeededEntropy(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededEntropy {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}
