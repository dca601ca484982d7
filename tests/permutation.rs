//! Property tests for the invariants every tour-producing operation must
//! uphold: each produced tour is a permutation of the input city set, and
//! the elite never regresses across a generation.

use proptest::prelude::*;
use std::collections::HashSet;
use tsp_ga::engine::{crossover, evolve, mutate};
use tsp_ga::random::create_rng;
use tsp_ga::{City, GaConfig, Population, Tour};

/// A set of 2 to 20 cities with pairwise distinct coordinates.
fn city_set() -> impl Strategy<Value = Vec<City>> {
    proptest::collection::hash_set((-1000i32..1000, -1000i32..1000), 2..20)
        .prop_map(|set| set.into_iter().map(|(x, y)| City::new(x, y)).collect())
}

fn is_permutation_of(tour: &Tour, cities: &[City]) -> bool {
    if tour.len() != cities.len() {
        return false;
    }
    let expected: HashSet<City> = cities.iter().copied().collect();
    let actual: HashSet<City> = tour.cities().iter().copied().collect();
    actual.len() == cities.len() && actual == expected
}

proptest! {
    #[test]
    fn distance_is_symmetric(
        ax in -10_000i32..10_000, ay in -10_000i32..10_000,
        bx in -10_000i32..10_000, by in -10_000i32..10_000,
    ) {
        let a = City::new(ax, ay);
        let b = City::new(bx, by);
        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn shuffled_tour_is_permutation(cities in city_set(), seed: u64) {
        let mut rng = create_rng(seed);
        let tour = Tour::shuffled(&cities, &mut rng);
        prop_assert!(is_permutation_of(&tour, &cities));
    }

    #[test]
    fn crossover_child_is_permutation(cities in city_set(), seed: u64) {
        let mut rng = create_rng(seed);
        let p1 = Tour::shuffled(&cities, &mut rng);
        let p2 = Tour::shuffled(&cities, &mut rng);
        let child = crossover(&p1, &p2);
        prop_assert!(is_permutation_of(&child, &cities));
    }

    #[test]
    fn mutation_preserves_permutation(
        cities in city_set(),
        seed: u64,
        rate in 0.0f64..=1.0,
    ) {
        let mut rng = create_rng(seed);
        let mut tour = Tour::shuffled(&cities, &mut rng);
        mutate(&mut tour, rate, &mut rng);
        prop_assert!(is_permutation_of(&tour, &cities));
    }

    #[test]
    fn evolved_members_are_permutations(cities in city_set(), seed: u64) {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_tournament_size(4);
        let mut rng = create_rng(seed);
        let mut pop = Population::new(config.population_size, &cities, &mut rng);
        for _ in 0..3 {
            pop = evolve(&pop, &config, &mut rng);
            for tour in pop.tours() {
                prop_assert!(is_permutation_of(tour, &cities));
            }
        }
    }

    #[test]
    fn elite_never_regresses(cities in city_set(), seed: u64) {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_tournament_size(4);
        let mut rng = create_rng(seed);
        let mut pop = Population::new(config.population_size, &cities, &mut rng);
        let mut best = pop.fittest().total_distance();
        for _ in 0..5 {
            pop = evolve(&pop, &config, &mut rng);
            let next = pop.fittest().total_distance();
            prop_assert!(next <= best, "best regressed: {} > {}", next, best);
            best = next;
        }
    }

    #[test]
    fn shorter_tour_has_higher_fitness(cities in city_set(), seed: u64) {
        let mut rng = create_rng(seed);
        let a = Tour::shuffled(&cities, &mut rng);
        let b = Tour::shuffled(&cities, &mut rng);
        if a.total_distance() < b.total_distance() {
            prop_assert!(a.fitness() > b.fitness());
        }
    }
}
