use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::resources::Color;

/// Uniform random choice over a fixed three-color palette.
///
/// A single `[0, 1)` draw is split at 1/3 and 2/3. The generator can be
/// seeded for reproducible sessions and tests.
#[derive(Debug)]
pub struct ColorPicker {
    palette: [Color; 3],
    rng: StdRng,
}

impl ColorPicker {
    /// A picker seeded from the thread-local generator.
    #[must_use]
    pub fn new(palette: [Color; 3]) -> Self {
        Self {
            palette,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// A picker whose sequence of picks is fully determined by `seed`.
    #[must_use]
    pub fn seeded(palette: [Color; 3], seed: u64) -> Self {
        Self {
            palette,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn pick(&mut self) -> Color {
        let u: f64 = self.rng.random();
        self.palette[Self::slot(u)]
    }

    #[must_use]
    pub fn palette(&self) -> &[Color; 3] {
        &self.palette
    }

    fn slot(u: f64) -> usize {
        if u < 1.0 / 3.0 {
            0
        } else if u < 2.0 / 3.0 {
            1
        } else {
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_split_unit_interval_in_thirds() {
        assert_eq!(ColorPicker::slot(0.0), 0);
        assert_eq!(ColorPicker::slot(0.333), 0);
        assert_eq!(ColorPicker::slot(0.334), 1);
        assert_eq!(ColorPicker::slot(0.666), 1);
        assert_eq!(ColorPicker::slot(0.667), 2);
        assert_eq!(ColorPicker::slot(0.999_999), 2);
    }
}
