//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete run: initial population →
//! repeated generational steps → best tour, baseline and final distances.

use crate::city::City;
use crate::config::GaConfig;
use crate::engine;
use crate::population::Population;
use crate::random::create_rng;
use crate::tour::Tour;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest tour of the final generation.
    pub best: Tour,

    /// Fittest distance of the initial population, before any evolution.
    pub initial_distance: f64,

    /// Fittest distance of the final population
    /// (same as `best.total_distance()`).
    pub final_distance: f64,

    /// Number of generational steps executed.
    pub generations: usize,

    /// Fittest distance before evolution and after each generation;
    /// `generations + 1` entries. Non-increasing thanks to elitism.
    pub distance_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{City, GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new(0, 0),
///     City::new(0, 10),
///     City::new(10, 10),
///     City::new(10, 0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(42);
/// let result = GaRunner::run(&cities, &config);
///
/// assert!(result.final_distance <= result.initial_distance);
/// println!("best tour: {}", result.best);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over `cities`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error) or if `cities` is empty.
    pub fn run(cities: &[City], config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = Population::new(config.population_size, cities, &mut rng);
        evaluate_population(&mut population);

        let initial_distance = population.fittest().total_distance();
        let mut distance_history = Vec::with_capacity(config.generations + 1);
        distance_history.push(initial_distance);

        for _ in 0..config.generations {
            population = engine::evolve(&population, config, &mut rng);
            evaluate_population(&mut population);
            distance_history.push(population.fittest().total_distance());
        }

        let best = population.fittest().clone();
        GaResult {
            initial_distance,
            final_distance: best.total_distance(),
            generations: config.generations,
            distance_history,
            best,
        }
    }
}

/// Computes the metrics of every tour in a freshly built generation.
///
/// The generation is fully materialized and tours are independent, so the
/// work fans out across rayon's thread pool.
#[cfg(feature = "parallel")]
fn evaluate_population(population: &mut Population) {
    use rayon::prelude::*;

    population.tours_mut().par_iter_mut().for_each(|tour| {
        tour.total_distance();
    });
}

/// Without the `parallel` feature, metrics are computed lazily on first
/// access; nothing to do up front.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(_population: &mut Population) {}

// ============================================================================
// Tests
// ============================================================================
