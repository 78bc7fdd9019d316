//! Fast non-dominated sorting from NSGA-II: solutions are split into Pareto fronts, the first
//! front contains solutions not dominated by any other one, the second front contains solutions
//! dominated only by the first front members, and so on.
//!
//! A pairwise dominance pass costs `O(K * N^2)` for `K` objectives and `N` solutions, every
//! following front is peeled off in time proportional to the amount of dominance links.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use std::cmp::Ordering;

/// Keeps dominance links between solutions which are not yet assigned to a front.
#[derive(Clone, Debug)]
struct DominanceGraph {
    /// For every solution, indices of solutions it dominates.
    dominated: Vec<Vec<usize>>,
    /// For every solution, amount of solutions dominating it which are not yet assigned to a front.
    dominators: Vec<usize>,
}

/// A Pareto front of solutions with its rank. Use [`Front::next_front`] to get the following one.
#[derive(Clone, Debug)]
pub struct Front<'s, S> {
    solutions: &'s [S],
    graph: DominanceGraph,
    members: Vec<usize>,
    rank: usize,
}

impl<'s, S> Front<'s, S> {
    /// Returns front rank: zero for the first (non-dominated) front.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns front members with their indices in the sorted slice.
    pub fn iter(&self) -> impl Iterator<Item = (&'s S, usize)> + '_ {
        let solutions = self.solutions;
        self.members.iter().map(move |&idx| (&solutions[idx], idx))
    }

    /// Returns indices of front members in the sorted slice.
    pub fn indices(&self) -> &[usize] {
        self.members.as_slice()
    }

    /// Returns amount of front members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if front has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the front and returns the next one: solutions whose dominators all belong to
    /// this or previous fronts.
    pub fn next_front(self) -> Self {
        let Front { solutions, mut graph, members, rank } = self;

        let mut next_members = Vec::new();
        for &member in members.iter() {
            for &dominated in graph.dominated[member].iter() {
                graph.dominators[dominated] -= 1;
                if graph.dominators[dominated] == 0 {
                    next_members.push(dominated);
                }
            }
        }

        Front { solutions, graph, members: next_members, rank: rank + 1 }
    }
}

/// Sorts `solutions` into Pareto fronts and returns the first one. The `dominance_order` returns
/// `Less` when the first argument dominates the second one, `Greater` when it is dominated and
/// `Equal` otherwise.
pub fn non_dominated_sort<S, F>(solutions: &[S], dominance_order: F) -> Front<'_, S>
where
    F: Fn(&S, &S) -> Ordering,
{
    let size = solutions.len();
    let mut graph = DominanceGraph { dominated: vec![Vec::new(); size], dominators: vec![0; size] };

    for first in 0..size {
        for second in (first + 1)..size {
            match dominance_order(&solutions[first], &solutions[second]) {
                Ordering::Less => {
                    graph.dominated[first].push(second);
                    graph.dominators[second] += 1;
                }
                Ordering::Greater => {
                    graph.dominated[second].push(first);
                    graph.dominators[first] += 1;
                }
                Ordering::Equal => {}
            }
        }
    }

    let members = (0..size).filter(|&idx| graph.dominators[idx] == 0).collect();

    Front { solutions, graph, members, rank: 0 }
}
