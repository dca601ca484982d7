//! Population: a fixed-size collection of tours.
//!
//! A population is built once per generation and never resized; the
//! generational loop replaces the whole container instead of mutating it,
//! so the previous generation stays frozen while the next one is built.

use crate::city::City;
use crate::tour::Tour;
use rand::Rng;

/// A fixed-size set of candidate tours.
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Builds `size` independently shuffled tours over `cities`.
    ///
    /// Each tour gets its own Fisher–Yates shuffle; no shuffle is reused.
    ///
    /// # Panics
    /// Panics if `size` is zero or `cities` is empty.
    pub fn new<R: Rng>(size: usize, cities: &[City], rng: &mut R) -> Self {
        assert!(size > 0, "population size must be at least 1");
        assert!(!cities.is_empty(), "city set must not be empty");

        let tours = (0..size).map(|_| Tour::shuffled(cities, rng)).collect();
        Self { tours }
    }

    /// Wraps an already-built generation.
    pub(crate) fn from_tours(tours: Vec<Tour>) -> Self {
        debug_assert!(!tours.is_empty());
        Self { tours }
    }

    /// Number of tours (constant for the lifetime of the population).
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// True if the population holds no tours. Unreachable through the
    /// public constructor, which rejects `size == 0`.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// The member tours, in slot order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn tours_mut(&mut self) -> &mut [Tour] {
        &mut self.tours
    }

    /// The tour with the minimum total distance.
    ///
    /// Ties break toward the first tour in slot order, so the result is
    /// deterministic for a fixed population.
    pub fn fittest(&self) -> &Tour {
        let mut best = &self.tours[0];
        for tour in &self.tours[1..] {
            if tour.total_distance() < best.total_distance() {
                best = tour;
            }
        }
        best
    }
}
