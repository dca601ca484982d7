//! Tour: one candidate solution — a permutation of all cities, interpreted
//! as a closed loop (the last city connects back to the first).
//!
//! Total distance and fitness are derived fields, computed on first access
//! and cached together. The only in-place mutation a tour supports is
//! [`swap`](Tour::swap), which replaces the cache wholesale, so the caches
//! are always either both unset or both consistent with the city order.

use crate::city::City;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::OnceCell;
use std::fmt;

/// Cached derived values, set atomically.
#[derive(Debug, Clone, Copy)]
struct Metrics {
    distance: f64,
    fitness: f64,
}

/// An ordered permutation of the full city set.
#[derive(Debug, Clone)]
pub struct Tour {
    cities: Vec<City>,
    metrics: OnceCell<Metrics>,
}

impl Tour {
    /// Builds a tour from a copy of `cities`, shuffled with an unbiased
    /// Fisher–Yates permutation (every ordering equally likely).
    pub fn shuffled<R: Rng>(cities: &[City], rng: &mut R) -> Self {
        let mut cities = cities.to_vec();
        cities.shuffle(rng);
        Self {
            cities,
            metrics: OnceCell::new(),
        }
    }

    /// Builds a tour that visits `cities` in exactly the given order.
    ///
    /// This is the construction path for crossover children, whose city
    /// order must be taken as-is rather than re-randomized.
    pub fn from_order(cities: Vec<City>) -> Self {
        Self {
            cities,
            metrics: OnceCell::new(),
        }
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The city order of this tour.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Swaps the cities at positions `i` and `j` and invalidates both
    /// cached metrics. `i == j` is a no-op apart from the invalidation.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cities.swap(i, j);
        self.metrics = OnceCell::new();
    }

    fn metrics(&self) -> &Metrics {
        self.metrics.get_or_init(|| {
            let distance = closed_tour_distance(&self.cities);
            let fitness = if distance == 0.0 {
                // Degenerate tour (single city or all-coincident points):
                // a defined maximum instead of an arithmetic fault.
                f64::INFINITY
            } else {
                1.0 / distance
            };
            Metrics { distance, fitness }
        })
    }

    /// Total length of the closed tour, including the leg from the last
    /// city back to the first. Cached after the first call.
    pub fn total_distance(&self) -> f64 {
        self.metrics().distance
    }

    /// Inverse tour length, `1 / total_distance()`; higher is better.
    ///
    /// A zero-distance tour yields `f64::INFINITY`.
    pub fn fitness(&self) -> f64 {
        self.metrics().fitness
    }
}

/// Sum of consecutive city distances, treating the sequence as a cycle.
fn closed_tour_distance(cities: &[City]) -> f64 {
    let n = cities.len();
    let mut total = 0.0;
    for i in 0..n {
        total += cities[i].distance_to(&cities[(i + 1) % n]);
    }
    total
}

impl fmt::Display for Tour {
    /// Renders the tour as `|x1,y1|x2,y2|…|`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for city in &self.cities {
            write!(f, "{city}|")?;
        }
        Ok(())
    }
}
