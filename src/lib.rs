//! Genetic algorithm solver for the symmetric Euclidean Traveling Salesman
//! Problem.
//!
//! Maintains a population of candidate tours over a fixed city set, scores
//! each tour by inverse total path length, and repeatedly applies tournament
//! selection, ordered crossover, and swap mutation to improve the population
//! over a fixed number of generations, reporting the best tour found.
//!
//! # Key Types
//!
//! - [`City`]: immutable 2D point with Euclidean distance
//! - [`Tour`]: a permutation of all cities, interpreted as a closed loop,
//!   with cached distance and fitness
//! - [`Population`]: a fixed-size set of tours, replaced wholesale each
//!   generation
//! - [`GaConfig`]: algorithm parameters (population size, mutation rate,
//!   tournament size, generations, seed)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`engine`]: the individual operators, usable directly for custom loops
//!
//! # Example
//!
//! ```
//! use tsp_ga::{City, GaConfig, GaRunner};
//!
//! let cities = vec![
//!     City::new(0, 0),
//!     City::new(0, 10),
//!     City::new(10, 10),
//!     City::new(10, 0),
//! ];
//! let config = GaConfig::default().with_generations(50).with_seed(42);
//! let result = GaRunner::run(&cities, &config);
//!
//! assert!(result.final_distance <= result.initial_distance);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate each generation's tour metrics across rayon's
//!   thread pool (the loop itself stays sequential and deterministic for a
//!   fixed seed)
//! - `serde`: `Serialize`/`Deserialize` on [`City`] and [`GaConfig`]

pub mod city;
pub mod config;
pub mod engine;
pub mod population;
pub mod random;
pub mod runner;
pub mod tour;

pub use city::City;
pub use config::GaConfig;
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use tour::Tour;
