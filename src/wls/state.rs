//! Mutable solution state with incrementally maintained aggregates.
//!
//! A [`SolutionState`] owns one complete job-to-agent assignment together
//! with cached aggregates: per-agent resource usage, total objective,
//! weighted capacity penalty, and the inverse membership index. Moves are
//! evaluated in O(1) against the caches and applied in O(1); between
//! mutations the caches are always exact functions of the assignment and
//! the penalty weights. [`SolutionState::recompute`] re-derives every cache
//! from scratch and exists for construction and for tests; the hot path
//! never uses it.

use std::collections::BTreeSet;

use rand::Rng;

use crate::instance::Instance;

/// Exact change a move would make to the cached objective and weighted
/// penalty, computed from pre-move state only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDelta {
    /// Change in the raw objective.
    pub objective: f64,
    /// Change in the weighted capacity penalty.
    pub penalty: f64,
}

impl MoveDelta {
    /// Change in the weighted objective `cost + penalty`.
    #[inline]
    pub fn total(&self) -> f64 {
        self.objective + self.penalty
    }
}

/// One complete assignment of jobs to agents, with cached aggregates.
///
/// Cloning yields a fully independent copy; the membership sets are deep
/// copies, so a clone can be mutated without aliasing the original.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionState {
    /// Agent assigned to each job.
    pub(crate) assignment: Vec<usize>,
    /// Per-agent capacity penalty weight.
    pub(crate) weight: Vec<f64>,
    /// Per-agent resource usage under `assignment`.
    pub(crate) usage: Vec<i64>,
    /// Total assignment cost under `assignment`.
    pub(crate) objective: f64,
    /// Sum over agents of `weight * max(0, usage - cap)`.
    pub(crate) weighted_penalty: f64,
    /// Jobs currently assigned to each agent; inverse of `assignment`.
    pub(crate) membership: Vec<BTreeSet<usize>>,
}

impl SolutionState {
    /// Creates a state with every job assigned to a uniformly random agent.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let assignment = (0..instance.num_jobs())
            .map(|_| rng.random_range(0..instance.num_agents()))
            .collect();
        let mut state = Self {
            assignment,
            weight: vec![1.0; instance.num_agents()],
            usage: vec![0; instance.num_agents()],
            objective: 0.0,
            weighted_penalty: 0.0,
            membership: vec![BTreeSet::new(); instance.num_agents()],
        };
        state.recompute(instance);
        state
    }

    /// Re-derives every cached aggregate from `assignment` and `weight`.
    pub fn recompute(&mut self, instance: &Instance) {
        self.objective = self
            .assignment
            .iter()
            .enumerate()
            .map(|(job, &agent)| instance.cost(agent, job) as f64)
            .sum();
        for usage in &mut self.usage {
            *usage = 0;
        }
        for (job, &agent) in self.assignment.iter().enumerate() {
            self.usage[agent] += instance.res(agent, job);
        }
        for jobs in &mut self.membership {
            jobs.clear();
        }
        for (job, &agent) in self.assignment.iter().enumerate() {
            self.membership[agent].insert(job);
        }
        self.recompute_penalty(instance);
    }

    /// Recomputes the weighted penalty as an exact sum over agents.
    pub(crate) fn recompute_penalty(&mut self, instance: &Instance) {
        self.weighted_penalty = (0..instance.num_agents())
            .map(|agent| self.weight[agent] * self.violation(instance, agent) as f64)
            .sum();
    }

    /// Capacity violation of `agent`: `max(0, usage - cap)`.
    #[inline]
    pub fn violation(&self, instance: &Instance, agent: usize) -> i64 {
        (self.usage[agent] - instance.cap(agent)).max(0)
    }

    /// Largest capacity violation over all agents.
    pub fn max_violation(&self, instance: &Instance) -> i64 {
        (0..instance.num_agents())
            .map(|agent| self.violation(instance, agent))
            .max()
            .unwrap_or(0)
    }

    /// Whether no agent exceeds its capacity.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        (0..instance.num_agents()).all(|agent| self.violation(instance, agent) == 0)
    }

    /// Mean penalty weight over all agents.
    pub fn mean_weight(&self) -> f64 {
        self.weight.iter().sum::<f64>() / self.weight.len() as f64
    }

    /// Agent assigned to each job.
    #[inline]
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Total assignment cost.
    #[inline]
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Weighted capacity penalty.
    #[inline]
    pub fn weighted_penalty(&self) -> f64 {
        self.weighted_penalty
    }

    /// Evaluates moving `job` to `to_agent` without applying it.
    ///
    /// Uses pre-move cached usage and weights exclusively.
    pub fn shift_delta(&self, instance: &Instance, job: usize, to_agent: usize) -> MoveDelta {
        let from_agent = self.assignment[job];
        debug_assert_ne!(from_agent, to_agent);

        let objective = (instance.cost(to_agent, job) - instance.cost(from_agent, job)) as f64;

        let from_before = self.violation(instance, from_agent);
        let from_after =
            (self.usage[from_agent] - instance.res(from_agent, job) - instance.cap(from_agent))
                .max(0);
        let to_before = self.violation(instance, to_agent);
        let to_after = (self.usage[to_agent] + instance.res(to_agent, job)
            - instance.cap(to_agent))
        .max(0);

        let penalty = self.weight[from_agent] * (from_after - from_before) as f64
            + self.weight[to_agent] * (to_after - to_before) as f64;

        MoveDelta { objective, penalty }
    }

    /// Moves `job` to `to_agent`, updating all caches.
    ///
    /// Usage, objective, and membership are updated incrementally; the
    /// weighted penalty is recomputed as an exact sum.
    pub fn apply_shift(&mut self, instance: &Instance, job: usize, to_agent: usize) {
        let from_agent = self.assignment[job];
        debug_assert_ne!(from_agent, to_agent);

        self.assignment[job] = to_agent;
        self.usage[from_agent] -= instance.res(from_agent, job);
        self.usage[to_agent] += instance.res(to_agent, job);
        self.objective += (instance.cost(to_agent, job) - instance.cost(from_agent, job)) as f64;
        self.recompute_penalty(instance);
        self.membership[from_agent].remove(&job);
        self.membership[to_agent].insert(job);
    }

    /// Evaluates exchanging the agents of `job1` and `job2` without
    /// applying the move. The jobs must sit on different agents.
    pub fn swap_delta(&self, instance: &Instance, job1: usize, job2: usize) -> MoveDelta {
        let agent1 = self.assignment[job1];
        let agent2 = self.assignment[job2];
        debug_assert_ne!(agent1, agent2);

        let objective = (instance.cost(agent2, job1) + instance.cost(agent1, job2)
            - instance.cost(agent1, job1)
            - instance.cost(agent2, job2)) as f64;

        let before1 = self.violation(instance, agent1);
        let after1 = (self.usage[agent1] - instance.res(agent1, job1)
            + instance.res(agent1, job2)
            - instance.cap(agent1))
        .max(0);
        let before2 = self.violation(instance, agent2);
        let after2 = (self.usage[agent2] - instance.res(agent2, job2)
            + instance.res(agent2, job1)
            - instance.cap(agent2))
        .max(0);

        let penalty = self.weight[agent1] * (after1 - before1) as f64
            + self.weight[agent2] * (after2 - before2) as f64;

        MoveDelta { objective, penalty }
    }

    /// Exchanges the agents of `job1` and `job2`, updating all caches.
    pub fn apply_swap(&mut self, instance: &Instance, job1: usize, job2: usize) {
        let agent1 = self.assignment[job1];
        let agent2 = self.assignment[job2];
        debug_assert_ne!(agent1, agent2);

        self.assignment[job1] = agent2;
        self.assignment[job2] = agent1;
        self.usage[agent1] += instance.res(agent1, job2) - instance.res(agent1, job1);
        self.usage[agent2] += instance.res(agent2, job1) - instance.res(agent2, job2);
        self.objective += (instance.cost(agent2, job1) + instance.cost(agent1, job2)
            - instance.cost(agent1, job1)
            - instance.cost(agent2, job2)) as f64;
        self.recompute_penalty(instance);
        self.membership[agent1].remove(&job1);
        self.membership[agent2].insert(job1);
        self.membership[agent2].remove(&job2);
        self.membership[agent1].insert(job2);
    }
}


#[cfg(test)]
mod delta_properties {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn arb_instance() -> impl Strategy<Value = Instance> {
        (2usize..6, 2usize..8).prop_flat_map(|(agents, jobs)| {
            (
                prop::collection::vec(prop::collection::vec(0i64..100, jobs), agents),
                prop::collection::vec(prop::collection::vec(1i64..20, jobs), agents),
                prop::collection::vec(1i64..40, agents),
            )
                .prop_map(|(cost, res, cap)| Instance::new(cost, res, cap).unwrap())
        })
    }

    fn seeded_state(instance: &Instance, seed: u64) -> SolutionState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SolutionState::random(instance, &mut rng);
        for weight in &mut state.weight {
            *weight = rng.random_range(0.5..50.0);
        }
        state.recompute_penalty(instance);
        state
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn shift_delta_matches_recomputation(
            instance in arb_instance(),
            seed in 0u64..1000,
            job_sel in any::<prop::sample::Index>(),
            agent_sel in any::<prop::sample::Index>(),
        ) {
            let mut state = seeded_state(&instance, seed);
            let job = job_sel.index(instance.num_jobs());
            let offset = 1 + agent_sel.index(instance.num_agents() - 1);
            let to_agent = (state.assignment[job] + offset) % instance.num_agents();

            let delta = state.shift_delta(&instance, job, to_agent);
            let (obj_before, plt_before) = (state.objective, state.weighted_penalty);
            state.apply_shift(&instance, job, to_agent);

            let mut fresh = state.clone();
            fresh.recompute(&instance);
            prop_assert!((state.objective - fresh.objective).abs() < 1e-6);
            prop_assert!((state.weighted_penalty - fresh.weighted_penalty).abs() < 1e-6);
            prop_assert_eq!(&state.usage, &fresh.usage);
            prop_assert!((obj_before + delta.objective - fresh.objective).abs() < 1e-6);
            prop_assert!((plt_before + delta.penalty - fresh.weighted_penalty).abs() < 1e-6);
        }

        #[test]
        fn swap_delta_matches_recomputation(
            instance in arb_instance(),
            seed in 0u64..1000,
            job1_sel in any::<prop::sample::Index>(),
            job2_sel in any::<prop::sample::Index>(),
        ) {
            let mut state = seeded_state(&instance, seed);
            let job1 = job1_sel.index(instance.num_jobs());
            let job2 = job2_sel.index(instance.num_jobs());
            prop_assume!(state.assignment[job1] != state.assignment[job2]);

            let delta = state.swap_delta(&instance, job1, job2);
            let (obj_before, plt_before) = (state.objective, state.weighted_penalty);
            state.apply_swap(&instance, job1, job2);

            let mut fresh = state.clone();
            fresh.recompute(&instance);
            prop_assert!((state.objective - fresh.objective).abs() < 1e-6);
            prop_assert!((state.weighted_penalty - fresh.weighted_penalty).abs() < 1e-6);
            prop_assert_eq!(&state.usage, &fresh.usage);
            prop_assert!((obj_before + delta.objective - fresh.objective).abs() < 1e-6);
            prop_assert!((plt_before + delta.penalty - fresh.weighted_penalty).abs() < 1e-6);
        }
    }
}
