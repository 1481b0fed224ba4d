//! GAP problem instance: cost matrix, resource matrix, capacities.
//!
//! An [`Instance`] is immutable once constructed. It can be built directly
//! from matrices with [`Instance::new`] or read from the flat text format
//! with [`Instance::parse`]:
//!
//! ```text
//! num_agents num_jobs
//! cost[0][0] ... cost[0][num_jobs-1]      (num_agents rows)
//! res[0][0]  ... res[0][num_jobs-1]       (num_agents rows)
//! cap[0]     ... cap[num_agents-1]
//! ```
//!
//! All values are whitespace-separated integers.

use std::fmt;

/// Errors raised while constructing or parsing an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The instance declares zero agents.
    NoAgents,
    /// The instance declares zero jobs.
    NoJobs,
    /// A matrix does not match the declared dimensions.
    ShapeMismatch {
        /// Which matrix is malformed.
        matrix: &'static str,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        found: usize,
    },
    /// The token stream ends before all declared values are read.
    TruncatedData {
        /// Number of integer tokens required by the declared dimensions.
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
    },
    /// A token is not a valid integer.
    InvalidToken {
        /// Zero-based position of the offending token.
        position: usize,
        /// The token text.
        token: String,
    },
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::NoAgents => write!(f, "instance has no agents"),
            InstanceError::NoJobs => write!(f, "instance has no jobs"),
            InstanceError::ShapeMismatch {
                matrix,
                expected,
                found,
            } => write!(
                f,
                "{matrix} has {found} entries, expected {expected}"
            ),
            InstanceError::TruncatedData { expected, found } => write!(
                f,
                "instance data truncated: expected {expected} integers, found {found}"
            ),
            InstanceError::InvalidToken { position, token } => {
                write!(f, "invalid integer token '{token}' at position {position}")
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// Immutable GAP problem data.
///
/// `cost[i][j]` is the cost of assigning job `j` to agent `i`, `res[i][j]`
/// the resource the assignment consumes, and `cap[i]` the resource capacity
/// of agent `i`. All indices are zero-based and all matrices are fully
/// populated; this is established at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    num_agents: usize,
    num_jobs: usize,
    cost: Vec<Vec<i64>>,
    res: Vec<Vec<i64>>,
    cap: Vec<i64>,
}

impl Instance {
    /// Builds an instance from already-parsed matrices.
    ///
    /// Fails if there are zero agents or jobs, or if any matrix does not
    /// match the dimensions implied by `cap.len()` and `cost[0].len()`.
    pub fn new(
        cost: Vec<Vec<i64>>,
        res: Vec<Vec<i64>>,
        cap: Vec<i64>,
    ) -> Result<Self, InstanceError> {
        let num_agents = cap.len();
        if num_agents == 0 {
            return Err(InstanceError::NoAgents);
        }
        if cost.len() != num_agents {
            return Err(InstanceError::ShapeMismatch {
                matrix: "cost matrix",
                expected: num_agents,
                found: cost.len(),
            });
        }
        if res.len() != num_agents {
            return Err(InstanceError::ShapeMismatch {
                matrix: "resource matrix",
                expected: num_agents,
                found: res.len(),
            });
        }
        let num_jobs = cost[0].len();
        if num_jobs == 0 {
            return Err(InstanceError::NoJobs);
        }
        for row in &cost {
            if row.len() != num_jobs {
                return Err(InstanceError::ShapeMismatch {
                    matrix: "cost row",
                    expected: num_jobs,
                    found: row.len(),
                });
            }
        }
        for row in &res {
            if row.len() != num_jobs {
                return Err(InstanceError::ShapeMismatch {
                    matrix: "resource row",
                    expected: num_jobs,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            num_agents,
            num_jobs,
            cost,
            res,
            cap,
        })
    }

    /// Parses the flat whitespace-separated instance format.
    ///
    /// Tokens beyond the declared dimensions are ignored.
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        let mut values = Vec::new();
        for (position, token) in text.split_whitespace().enumerate() {
            let value: i64 = token.parse().map_err(|_| InstanceError::InvalidToken {
                position,
                token: token.to_string(),
            })?;
            values.push(value);
        }
        if values.len() < 2 {
            return Err(InstanceError::TruncatedData {
                expected: 2,
                found: values.len(),
            });
        }
        if values[0] <= 0 {
            return Err(InstanceError::NoAgents);
        }
        if values[1] <= 0 {
            return Err(InstanceError::NoJobs);
        }
        let num_agents = values[0] as usize;
        let num_jobs = values[1] as usize;

        let expected = 2 + 2 * num_agents * num_jobs + num_agents;
        if values.len() < expected {
            return Err(InstanceError::TruncatedData {
                expected,
                found: values.len(),
            });
        }

        let mut next = values[2..].iter().copied();
        let mut read_matrix = |rows: usize, cols: usize| -> Vec<Vec<i64>> {
            (0..rows)
                .map(|_| next.by_ref().take(cols).collect())
                .collect()
        };
        let cost = read_matrix(num_agents, num_jobs);
        let res = read_matrix(num_agents, num_jobs);
        let cap: Vec<i64> = next.by_ref().take(num_agents).collect();

        Self::new(cost, res, cap)
    }

    /// Number of agents.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Number of jobs.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Cost of assigning `job` to `agent`.
    #[inline]
    pub fn cost(&self, agent: usize, job: usize) -> i64 {
        self.cost[agent][job]
    }

    /// Resource consumed when `job` is assigned to `agent`.
    #[inline]
    pub fn res(&self, agent: usize, job: usize) -> i64 {
        self.res[agent][job]
    }

    /// Resource capacity of `agent`.
    #[inline]
    pub fn cap(&self, agent: usize) -> i64 {
        self.cap[agent]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_text() -> &'static str {
        "2 3\n\
         4 2 8\n\
         5 1 3\n\
         3 2 4\n\
         2 1 3\n\
         5 4\n"
    }

    #[test]
    fn test_parse_small_instance() {
        let inst = Instance::parse(small_text()).unwrap();
        assert_eq!(inst.num_agents(), 2);
        assert_eq!(inst.num_jobs(), 3);
        assert_eq!(inst.cost(0, 2), 8);
        assert_eq!(inst.cost(1, 1), 1);
        assert_eq!(inst.res(0, 0), 3);
        assert_eq!(inst.res(1, 2), 3);
        assert_eq!(inst.cap(0), 5);
        assert_eq!(inst.cap(1), 4);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let text = format!("{} 99 99", small_text());
        let inst = Instance::parse(&text).unwrap();
        assert_eq!(inst.cap(1), 4);
    }

    #[test]
    fn test_parse_truncated() {
        let err = Instance::parse("2 3 4 2 8 5 1 3").unwrap_err();
        assert_eq!(
            err,
            InstanceError::TruncatedData {
                expected: 16,
                found: 8
            }
        );
    }

    #[test]
    fn test_parse_empty() {
        let err = Instance::parse("").unwrap_err();
        assert_eq!(
            err,
            InstanceError::TruncatedData {
                expected: 2,
                found: 0
            }
        );
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = Instance::parse("2 x").unwrap_err();
        assert_eq!(
            err,
            InstanceError::InvalidToken {
                position: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zero_dimensions() {
        assert_eq!(Instance::parse("0 3").unwrap_err(), InstanceError::NoAgents);
        assert_eq!(Instance::parse("2 0").unwrap_err(), InstanceError::NoJobs);
        assert_eq!(
            Instance::parse("-1 3").unwrap_err(),
            InstanceError::NoAgents
        );
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Instance::new(
            vec![vec![1, 2], vec![3]],
            vec![vec![1, 1], vec![1, 1]],
            vec![5, 5],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InstanceError::ShapeMismatch {
                matrix: "cost row",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_row_count_mismatch() {
        let err = Instance::new(
            vec![vec![1, 2]],
            vec![vec![1, 1]],
            vec![5, 5],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InstanceError::ShapeMismatch {
                matrix: "cost matrix",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Instance::new(vec![], vec![], vec![]).unwrap_err(),
            InstanceError::NoAgents
        );
        assert_eq!(
            Instance::new(vec![vec![]], vec![vec![]], vec![5]).unwrap_err(),
            InstanceError::NoJobs
        );
    }

    #[test]
    fn test_error_display() {
        let err = InstanceError::InvalidToken {
            position: 3,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid integer token 'abc' at position 3");
    }
}
