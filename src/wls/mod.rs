//! Weighting local search (WLS) for the generalized assignment problem.
//!
//! A single-solution metaheuristic that relaxes the capacity constraints
//! into per-agent penalty weights. The working solution descends through a
//! shift neighborhood (reassign one job) and a swap neighborhood (exchange
//! two jobs) on the weighted objective `cost + penalty`, and is allowed to
//! stay infeasible between descents. After each descent the weights
//! oscillate: they decay while the weighted cost cannot beat the incumbent,
//! and grow on the violated agents as soon as it can. The best feasible
//! solution seen is tracked separately and reported at the end of the
//! wall-clock budget.
//!
//! # References
//!
//! - Yagiura, M. & Ibaraki, T. (2007). "Generalized assignment problem",
//!   in *Handbook of Approximation Algorithms and Metaheuristics*, Ch. 48.
//! - Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//!   application to the traveling salesman problem", *European Journal of
//!   Operational Research* 113(2), 469-499.

mod config;
mod penalty;
mod runner;
mod search;
mod state;

pub use config::WlsConfig;
pub use runner::{WlsResult, WlsRunner};
pub use state::{MoveDelta, SolutionState};
