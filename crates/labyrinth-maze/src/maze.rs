//! A grid plus the policies that turn it into a search problem.
//!
//! The same grid can be searched under different goal definitions and cost
//! models. [`GoalPolicy`] decides which cells are terminal and [`CostModel`]
//! prices each move; [`Maze`] bundles both with the grid and precomputes
//! what the heuristic needs.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use labyrinth_core::{CostGrid, GridError, Move, Pos, manhattan_to_nearest};

use crate::state::MazeState;

/// Cell ids treated as goals when no policy is given.
pub const DEFAULT_GOAL_IDS: [i32; 2] = [14, 18];

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Which cells end the search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GoalPolicy {
    /// A cell is a goal when its value is one of these ids.
    CellIds(BTreeSet<i32>),
    /// A cell is a goal when it sits at one of these positions.
    Positions(Vec<Pos>),
}

impl GoalPolicy {
    /// Goal by cell id.
    pub fn ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self::CellIds(ids.into_iter().collect())
    }

    /// Goal by position.
    pub fn positions(positions: impl IntoIterator<Item = Pos>) -> Self {
        Self::Positions(positions.into_iter().collect())
    }

    /// Whether the cell at `p` with value `value` is a goal.
    #[inline]
    pub fn matches(&self, p: Pos, value: i32) -> bool {
        match self {
            Self::CellIds(ids) => ids.contains(&value),
            Self::Positions(positions) => positions.contains(&p),
        }
    }
}

impl Default for GoalPolicy {
    fn default() -> Self {
        Self::ids(DEFAULT_GOAL_IDS)
    }
}

/// The price of entering a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostModel {
    /// Entering a cell costs its value.
    #[default]
    CellValue,
    /// Entering a cell costs `step`, unless its id has an override.
    Fixed {
        step: i32,
        overrides: BTreeMap<i32, i32>,
    },
}

impl CostModel {
    /// Uniform cost per move.
    pub fn fixed(step: i32) -> Self {
        Self::Fixed {
            step,
            overrides: BTreeMap::new(),
        }
    }

    /// Add an override for cell `id`. No effect on [`CostModel::CellValue`].
    pub fn with_override(mut self, id: i32, cost: i32) -> Self {
        if let Self::Fixed { overrides, .. } = &mut self {
            overrides.insert(id, cost);
        }
        self
    }

    /// Cost of entering a cell whose value is `value`.
    #[inline]
    pub fn entry_cost(&self, value: i32) -> i32 {
        match self {
            Self::CellValue => value,
            Self::Fixed { step, overrides } => overrides.get(&value).copied().unwrap_or(*step),
        }
    }

    fn validate(&self) -> Result<(), GridError> {
        if let Self::Fixed { step, overrides } = self {
            if *step < 0 {
                return Err(GridError::InvalidPolicy(format!(
                    "negative step cost {step}"
                )));
            }
            if let Some((id, cost)) = overrides.iter().find(|&(_, &c)| c < 0) {
                return Err(GridError::InvalidPolicy(format!(
                    "negative cost {cost} for cell {id}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A grid with its goal and cost policies.
///
/// Build one with [`Maze::new`], wrap it in an `Rc` and hand clones of that
/// to every state. Nothing in a `Maze` changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: CostGrid,
    goal: GoalPolicy,
    cost: CostModel,
    /// Passable goal cells, row-major.
    goals: Vec<Pos>,
    /// Cheapest entry cost over all passable cells.
    min_step: i32,
}

impl Maze {
    /// Combine a grid with its policies.
    ///
    /// Fails with [`GridError::InvalidPolicy`] if the cost model has negative
    /// costs.
    pub fn new(grid: CostGrid, goal: GoalPolicy, cost: CostModel) -> Result<Self, GridError> {
        cost.validate()?;
        if let GoalPolicy::Positions(positions) = &goal {
            for &p in positions {
                if !grid.is_passable(p) {
                    log::warn!("goal position {p} is not a passable cell and cannot be reached");
                }
            }
        }
        let goals: Vec<Pos> = grid
            .iter()
            .filter(|&(p, v)| v != labyrinth_core::WALL && goal.matches(p, v))
            .map(|(p, _)| p)
            .collect();
        let min_step = grid
            .iter()
            .filter(|&(_, v)| v != labyrinth_core::WALL)
            .map(|(_, v)| cost.entry_cost(v))
            .min()
            .unwrap_or(0);
        log::debug!(
            "maze {}: {} goal cells, min step cost {min_step}",
            grid.bounds(),
            goals.len()
        );
        Ok(Self {
            grid,
            goal,
            cost,
            goals,
            min_step,
        })
    }

    /// Build a root state at `(row, col)`.
    pub fn start(self: &Rc<Self>, row: i32, col: i32) -> Result<MazeState, GridError> {
        MazeState::new(Rc::clone(self), row, col)
    }

    #[inline]
    pub fn grid(&self) -> &CostGrid {
        &self.grid
    }

    #[inline]
    pub fn goal_policy(&self) -> &GoalPolicy {
        &self.goal
    }

    #[inline]
    pub fn cost_model(&self) -> &CostModel {
        &self.cost
    }

    /// Goal cells present in the grid.
    #[inline]
    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    /// The smallest cost any move can have. Scales the heuristic.
    #[inline]
    pub fn min_step(&self) -> i32 {
        self.min_step
    }

    /// Whether the passable cell `p` is a goal.
    #[inline]
    pub fn is_goal(&self, p: Pos) -> bool {
        self.grid
            .cell_id(p)
            .is_some_and(|v| self.goal.matches(p, v))
    }

    /// Cost of moving into `p`, or `None` if it is a wall or outside.
    #[inline]
    pub fn entry_cost(&self, p: Pos) -> Option<i32> {
        self.grid.cell_id(p).map(|v| self.cost.entry_cost(v))
    }

    /// Admissible estimate of the remaining cost from `p`: Manhattan
    /// distance to the nearest goal times [`min_step`](Self::min_step).
    /// Zero when the grid holds no goal.
    #[inline]
    pub fn estimate(&self, p: Pos) -> i32 {
        manhattan_to_nearest(p, &self.goals)
            .unwrap_or(0)
            .saturating_mul(self.min_step)
    }

    /// Walk `moves` from `start`. Returns the end position and the summed
    /// entry costs, or `None` if a move leaves the grid or hits a wall.
    pub fn replay(&self, start: Pos, moves: &[Move]) -> Option<(Pos, i32)> {
        let mut p = start;
        let mut total = 0;
        for &mv in moves {
            p = p.step(mv);
            total = self.entry_cost(p)?.saturating_add(total);
        }
        Some((p, total))
    }
}
