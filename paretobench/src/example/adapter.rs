#[cfg(test)]
#[path = "../../tests/unit/example/adapter_test.rs"]
mod adapter_test;

use super::Zdt;
use crate::algorithms::nsga2::select_and_rank;
use crate::models::{Individual, ObjectiveConfig};
use crate::solver::OptimizerAdapter;
use crate::utils::{Float, parallel_into_collect};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// A distribution index of simulated binary crossover.
const CROSSOVER_DISTRIBUTION: Float = 20.;

/// A standard deviation of gaussian mutation relative to the variable range.
const MUTATION_SCALE: Float = 0.1;

/// An evolutionary optimizer for ZDT problems: simulated binary crossover, gaussian mutation and
/// NSGA-II survivor selection over parents and offspring. Offspring are evaluated in parallel.
pub struct EvolutionaryAdapter {
    problem: Zdt,
    config: ObjectiveConfig,
    population_size: usize,
    crossover_probability: Float,
    mutation_probability: Float,
    seed: Option<u64>,
    random: SmallRng,
    population: Vec<Individual>,
}

impl EvolutionaryAdapter {
    /// Creates a new instance of `EvolutionaryAdapter` with a random initial population.
    /// When seed is not specified, the random generator is seeded from entropy.
    pub fn new(problem: Zdt, population_size: usize, seed: Option<u64>) -> Self {
        assert!(population_size > 1, "population size must be greater than one");

        let random = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        let mutation_probability = 1. / problem.dimension() as Float;

        let mut adapter = Self {
            config: problem.config(),
            problem,
            population_size,
            crossover_probability: 0.9,
            mutation_probability,
            seed,
            random,
            population: Vec::new(),
        };

        let decisions = (0..population_size).map(|_| adapter.create_random_decision()).collect();
        adapter.population = adapter.evaluate(decisions);

        adapter
    }

    /// Sets crossover probability.
    /// Default is 0.9.
    pub fn with_crossover_probability(mut self, probability: Float) -> Self {
        self.crossover_probability = probability.clamp(0., 1.);
        self
    }

    /// Sets mutation probability of a single variable.
    /// Default is one divided by the amount of variables.
    pub fn with_mutation_probability(mut self, probability: Float) -> Self {
        self.mutation_probability = probability.clamp(0., 1.);
        self
    }

    /// Returns current population ranked by survivor selection.
    pub fn population(&self) -> &[Individual] {
        self.population.as_slice()
    }

    fn create_random_decision(&mut self) -> Vec<Float> {
        (0..self.problem.dimension())
            .map(|idx| {
                let (lower, upper) = self.problem.bounds(idx);
                self.random.gen_range(lower..=upper)
            })
            .collect()
    }

    fn evaluate(&self, decisions: Vec<Vec<Float>>) -> Vec<Individual> {
        let problem = &self.problem;
        parallel_into_collect(decisions, |x| Individual::new(problem.evaluate(x.as_slice()), x))
    }

    /// Binary tournament: population is ranked, so a lower index wins.
    fn select_parent(&mut self) -> usize {
        let first = self.random.gen_range(0..self.population.len());
        let second = self.random.gen_range(0..self.population.len());

        first.min(second)
    }

    fn create_offspring_pair(&mut self) -> [Vec<Float>; 2] {
        let (first_idx, second_idx) = (self.select_parent(), self.select_parent());
        let first = self.population[first_idx].decision().to_vec();
        let second = self.population[second_idx].decision().to_vec();

        let [mut first, mut second] = if self.random.gen_bool(self.crossover_probability) {
            self.crossover(first.as_slice(), second.as_slice())
        } else {
            [first, second]
        };

        self.mutate(&mut first);
        self.mutate(&mut second);

        [first, second]
    }

    /// Simulated binary crossover.
    fn crossover(&mut self, first: &[Float], second: &[Float]) -> [Vec<Float>; 2] {
        let mut children = [first.to_vec(), second.to_vec()];
        let exponent = 1. / (CROSSOVER_DISTRIBUTION + 1.);

        for idx in 0..first.len() {
            let (y1, y2) = if first[idx] < second[idx] { (first[idx], second[idx]) } else { (second[idx], first[idx]) };

            if !self.random.gen_bool(0.5) || (y2 - y1).abs() < 1E-14 {
                continue;
            }

            let (lower, upper) = self.problem.bounds(idx);
            let u: Float = self.random.gen_range(0. ..1.);

            let spread = |beta: Float| {
                let alpha = 2. - beta.powf(-(CROSSOVER_DISTRIBUTION + 1.));
                if u <= 1. / alpha { (u * alpha).powf(exponent) } else { (1. / (2. - u * alpha)).powf(exponent) }
            };

            let beta_q1 = spread(1. + 2. * (y1 - lower) / (y2 - y1));
            let beta_q2 = spread(1. + 2. * (upper - y2) / (y2 - y1));

            let c1 = (0.5 * ((y1 + y2) - beta_q1 * (y2 - y1))).clamp(lower, upper);
            let c2 = (0.5 * ((y1 + y2) + beta_q2 * (y2 - y1))).clamp(lower, upper);

            let (c1, c2) = if self.random.gen_bool(0.5) { (c2, c1) } else { (c1, c2) };
            children[0][idx] = c1;
            children[1][idx] = c2;
        }

        children
    }

    /// Gaussian mutation clamped to variable bounds.
    fn mutate(&mut self, decision: &mut [Float]) {
        for (idx, value) in decision.iter_mut().enumerate() {
            if !self.random.gen_bool(self.mutation_probability) {
                continue;
            }

            let (lower, upper) = self.problem.bounds(idx);
            let noise: Float = self.random.sample(StandardNormal);

            *value = (*value + noise * MUTATION_SCALE * (upper - lower)).clamp(lower, upper);
        }
    }
}

impl OptimizerAdapter for EvolutionaryAdapter {
    fn evolve(&mut self) -> Vec<Individual> {
        let size = self.population_size;
        let decisions = (0..size.div_ceil(2)).flat_map(|_| self.create_offspring_pair()).take(size).collect::<Vec<_>>();

        let offspring = self.evaluate(decisions);

        let combined = self.population.iter().chain(offspring.iter()).cloned().collect::<Vec<_>>();
        let objectives = combined.iter().map(|individual| individual.objectives()).collect::<Vec<_>>();
        let survivors = select_and_rank(objectives.as_slice(), self.population_size, &self.config);

        self.population = survivors.into_iter().map(|idx| combined[idx].clone()).collect();

        offspring
    }

    fn current_individuals(&self) -> Vec<Individual> {
        self.population.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn population_size(&self) -> Option<usize> {
        Some(self.population_size)
    }
}

/// Provides individuals sampled on the true Pareto set of a ZDT problem, no evolution happens.
pub struct OptimalAdapter {
    individuals: Vec<Individual>,
}

impl OptimalAdapter {
    /// Creates a new instance of `OptimalAdapter` with given amount of samples.
    pub fn new(problem: &Zdt, size: usize) -> Self {
        Self { individuals: problem.sample_optimal(size) }
    }
}

impl OptimizerAdapter for OptimalAdapter {
    fn evolve(&mut self) -> Vec<Individual> {
        Vec::new()
    }

    fn current_individuals(&self) -> Vec<Individual> {
        self.individuals.clone()
    }

    fn population_size(&self) -> Option<usize> {
        Some(self.individuals.len())
    }
}
