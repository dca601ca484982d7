//! Evolutionary operators: one generational step, tournament selection,
//! ordered crossover, and per-position swap mutation.
//!
//! Each generation is computed entirely from the previous one; the input
//! population is only read, never mutated, so it stays frozen while the
//! next generation is assembled.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::city::City;
use crate::config::GaConfig;
use crate::population::Population;
use crate::tour::Tour;
use rand::Rng;

/// Produces the next generation from `pop`.
///
/// Slot 0 of the new population carries the current fittest tour unchanged
/// (elitism), so the best distance is monotonically non-increasing across
/// generations. Every other slot is filled with a crossover child of two
/// tournament-selected parents and then mutated in place; the elite slot is
/// never mutated.
pub fn evolve<R: Rng>(pop: &Population, config: &GaConfig, rng: &mut R) -> Population {
    let size = pop.len();
    let mut next: Vec<Tour> = Vec::with_capacity(size);

    next.push(pop.fittest().clone());

    for _ in 1..size {
        let parent1 = tournament_selection(pop, config.tournament_size, rng);
        let parent2 = tournament_selection(pop, config.tournament_size, rng);
        next.push(crossover(parent1, parent2));
    }

    for child in &mut next[1..] {
        mutate(child, config.mutation_rate, rng);
    }

    Population::from_tours(next)
}

/// Tournament selection: draws `k` tours uniformly at random **with
/// replacement** (the same tour may be drawn more than once) and returns
/// the fittest among them.
///
/// O(k) per selection, no population-wide sorting.
///
/// # Panics
/// Panics if `k` is zero.
pub fn tournament_selection<'a, R: Rng>(pop: &'a Population, k: usize, rng: &mut R) -> &'a Tour {
    assert!(k > 0, "tournament size must be at least 1");

    let tours = pop.tours();
    let n = tours.len();

    let mut best = &tours[rng.random_range(0..n)];
    for _ in 1..k {
        let candidate = &tours[rng.random_range(0..n)];
        if candidate.total_distance() < best.total_distance() {
            best = candidate;
        }
    }
    best
}

/// Ordered crossover with a fixed midpoint cut.
///
/// The child takes the first `len / 2` cities of `parent1` verbatim, then
/// appends `parent2`'s cities in `parent2`'s order, skipping any city
/// already present. Given two valid permutations of the same city set the
/// child is again a valid permutation. The cut point is fixed at the
/// midpoint rather than randomized; this lowers diversity but is the
/// intended recombination policy.
///
/// Cities are compared by coordinates, so the city set must not contain
/// two cities at identical coordinates.
pub fn crossover(parent1: &Tour, parent2: &Tour) -> Tour {
    let half = parent1.len() / 2;
    let mut child: Vec<City> = parent1.cities()[..half].to_vec();

    for city in parent2.cities() {
        if !child.contains(city) {
            child.push(*city);
        }
    }

    Tour::from_order(child)
}

/// Swap mutation, in place: for each position `i` left-to-right,
/// independently with probability `rate`, swap the city at `i` with the
/// city at a uniformly random position `j` (which may equal `i`).
///
/// A swap at `i` can affect what a later position sees; that left-to-right
/// order sensitivity is part of the operator.
pub fn mutate<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
