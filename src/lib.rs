//! Weighting local search solver for the Generalized Assignment Problem (GAP).
//!
//! The GAP asks for an assignment of each of `n` jobs to exactly one of `m`
//! agents that minimizes the total assignment cost, subject to a resource
//! capacity per agent. The problem is NP-hard; this crate computes
//! near-optimal solutions with a penalty-weighting local search:
//!
//! - **Shift and swap neighborhoods**: single-job reassignments and pairwise
//!   job exchanges, evaluated with O(1) incremental deltas against cached
//!   per-agent aggregates.
//! - **Strategic oscillation**: capacity violations are charged a per-agent
//!   penalty weight instead of being forbidden, so the working solution may
//!   wander through infeasible space. Weights are decreased while the search
//!   explores and increased toward the violating agents whenever a new best
//!   feasible solution comes within reach.
//! - **Incumbent tracking**: the best feasible solution found so far is kept
//!   separately and only ever replaced by a feasible state that beats it.
//!
//! # Architecture
//!
//! [`instance`] holds the immutable problem data (cost matrix, resource
//! matrix, capacities) and the parser for the flat instance file format.
//! [`wls`] contains the solver: configuration, the mutable solution state
//! with its move evaluator, the neighborhood searches, the penalty weight
//! controller, and the time-budgeted runner. The crate is an in-process
//! library; argument parsing and output formatting belong to the caller.

pub mod instance;
pub mod wls;
