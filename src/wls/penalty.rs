//! Penalty weight initialization and strategic oscillation.
//!
//! The capacity constraints are relaxed into per-agent weights on the
//! violation `max(0, usage - cap)`. Once per outer iteration the weights
//! are steered against the incumbent objective: while the weighted cost of
//! the working solution cannot clearly beat the best known feasible
//! objective, every weight decays multiplicatively so the search can roam;
//! as soon as it can, the weights of the violated agents grow in proportion
//! to their relative violation, pushing the working solution toward
//! feasibility exactly when a new incumbent is within reach.

use crate::instance::Instance;

use super::config::WlsConfig;
use super::state::SolutionState;

/// Initializes each agent's weight to its largest cost coefficient
/// (never below the starting weight of 1), then refreshes the cached
/// weighted penalty.
pub(crate) fn init_weights(instance: &Instance, state: &mut SolutionState) {
    for agent in 0..instance.num_agents() {
        for job in 0..instance.num_jobs() {
            let cost = instance.cost(agent, job) as f64;
            if cost > state.weight[agent] {
                state.weight[agent] = cost;
            }
        }
    }
    state.recompute_penalty(instance);
}

/// One strategic-oscillation step against `threshold` (the incumbent
/// objective).
pub(crate) fn update_weights(
    instance: &Instance,
    state: &mut SolutionState,
    threshold: f64,
    config: &WlsConfig,
) {
    if state.objective + state.weighted_penalty > threshold - config.epsilon {
        for weight in &mut state.weight {
            *weight = config
                .epsilon
                .max((1.0 - config.weight_decrease_ratio) * *weight);
        }
    } else {
        // Reachable only from an infeasible state: a feasible working
        // solution beating the incumbent would already have replaced it
        // during neighborhood search.
        let max_violation = state.max_violation(instance);
        debug_assert!(
            max_violation > 0,
            "weight increase entered with no capacity violation"
        );
        let max_violation = max_violation as f64;
        for agent in 0..instance.num_agents() {
            let violation = state.violation(instance, agent) as f64;
            state.weight[agent] *=
                1.0 + config.weight_increase_ratio * violation / max_violation;
        }
    }
    state.recompute_penalty(instance);
}
