//! Shift and swap neighborhood search.
//!
//! Both searches walk the neighborhood of the current state and evaluate
//! every candidate twice: once against the incumbent (would this move land
//! on a feasible state that beats the best known feasible solution?) and
//! once against the current state (does it strictly improve the weighted
//! objective?). The incumbent check is opportunistic: it fires even for
//! moves the current state goes on to reject, so a feasible improvement is
//! captured the moment the scan sees it.

use crate::instance::Instance;

use super::config::WlsConfig;
use super::state::{MoveDelta, SolutionState};

/// Clones `current` into `incumbent` and applies the move there if the
/// post-move state is feasible and beats the incumbent (or the incumbent
/// is itself still infeasible).
fn consider_incumbent(
    config: &WlsConfig,
    current: &SolutionState,
    incumbent: &mut SolutionState,
    delta: MoveDelta,
    apply: impl FnOnce(&mut SolutionState),
) {
    let lands_feasible = current.weighted_penalty + delta.penalty < config.epsilon;
    if !lands_feasible {
        return;
    }
    let beats_incumbent = incumbent.weighted_penalty > config.epsilon
        || current.objective + delta.objective < incumbent.objective - config.epsilon;
    if beats_incumbent {
        *incumbent = current.clone();
        apply(incumbent);
    }
}

/// Exhausts the shift neighborhood on the current state.
///
/// Scans `(job, agent)` candidates in job-major order and applies the
/// first move that strictly improves the weighted objective, restarting
/// the scan from the top after every acceptance. Returns whether the
/// current state was improved at least once.
pub(crate) fn shift_search(
    instance: &Instance,
    config: &WlsConfig,
    current: &mut SolutionState,
    incumbent: &mut SolutionState,
) -> bool {
    let mut improved = false;
    'restart: loop {
        for job in 0..instance.num_jobs() {
            for agent in 0..instance.num_agents() {
                if agent == current.assignment[job] {
                    continue;
                }
                let delta = current.shift_delta(instance, job, agent);
                consider_incumbent(config, current, incumbent, delta, |state| {
                    state.apply_shift(instance, job, agent)
                });
                if delta.total() < -config.epsilon {
                    let before = current.objective + current.weighted_penalty;
                    current.apply_shift(instance, job, agent);
                    debug_assert!(
                        (before + delta.total()
                            - current.objective
                            - current.weighted_penalty)
                            .abs()
                            < config.epsilon,
                        "shift delta diverged from updated aggregates"
                    );
                    improved = true;
                    continue 'restart;
                }
            }
        }
        break;
    }
    improved
}

/// Attempts one improving swap on the current state.
///
/// Only jobs on over-capacity agents are considered as the first member
/// of a pair; the second ranges over later jobs on a different agent.
/// Returns immediately after the first accepted move.
pub(crate) fn swap_search(
    instance: &Instance,
    config: &WlsConfig,
    current: &mut SolutionState,
    incumbent: &mut SolutionState,
) -> bool {
    let candidates: Vec<usize> = (0..instance.num_agents())
        .filter(|&agent| current.violation(instance, agent) > 0)
        .flat_map(|agent| current.membership[agent].iter().copied())
        .collect();

    for job1 in candidates {
        for job2 in (job1 + 1)..instance.num_jobs() {
            if current.assignment[job2] == current.assignment[job1] {
                continue;
            }
            let delta = current.swap_delta(instance, job1, job2);
            consider_incumbent(config, current, incumbent, delta, |state| {
                state.apply_swap(instance, job1, job2)
            });
            if delta.total() < -config.epsilon {
                let before = current.objective + current.weighted_penalty;
                current.apply_swap(instance, job1, job2);
                debug_assert!(
                    (before + delta.total()
                        - current.objective
                        - current.weighted_penalty)
                        .abs()
                        < config.epsilon,
                    "swap delta diverged from updated aggregates"
                );
                return true;
            }
        }
    }
    false
}

/// Combined descent: shift neighborhood to exhaustion, then one swap;
/// repeat while the swap keeps succeeding.
///
/// A successful swap can re-open shift opportunities, so the loop only
/// terminates once neither neighborhood yields an improving move.
pub(crate) fn descend(
    instance: &Instance,
    config: &WlsConfig,
    current: &mut SolutionState,
    incumbent: &mut SolutionState,
) {
    loop {
        shift_search(instance, config, current, incumbent);
        if !swap_search(instance, config, current, incumbent) {
            break;
        }
    }
}
