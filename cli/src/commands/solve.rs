use std::error::Error;
use std::rc::Rc;

use labyrinth_core::{Move, Pos, load_grid};
use labyrinth_maze::{CostModel, GoalPolicy, Maze, MazeState};
use labyrinth_search::{DEFAULT_MAX_DEPTH, Limits, Search, SearchResult, Stats, Strategy};
use serde::Serialize;

use super::{ConventionArg, StartArgs};

#[derive(clap::Args, Debug)]
pub struct Solve {
    #[command(flatten)]
    start: StartArgs,
    #[command(flatten)]
    convention: ConventionArg,
    /// Search strategy: bfs, dfs, ucs or astar.
    #[arg(short, long, default_value = "astar")]
    strategy: Strategy,
    /// Depth bound for dfs.
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,
    /// Goal cell ids, comma separated. Defaults to 14,18.
    #[arg(long, value_delimiter = ',', conflicts_with = "goal_cell")]
    goal_ids: Vec<i32>,
    /// Goal position as canonical `row,col`. Repeatable.
    #[arg(long, value_parser = parse_pos)]
    goal_cell: Vec<Pos>,
    /// How moves are priced.
    #[arg(long, value_enum, default_value_t = CostModelArg::CellValue)]
    cost_model: CostModelArg,
    /// Cost of every move under the fixed cost model.
    #[arg(long, default_value_t = 1)]
    step_cost: i32,
    /// Fixed-model cost override as `id=cost`. Repeatable.
    #[arg(long = "override", value_parser = parse_override)]
    overrides: Vec<(i32, i32)>,
    /// Give up after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Give up when more than this many nodes are pending.
    #[arg(long)]
    max_frontier: Option<usize>,
    /// Print the result as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostModelArg {
    /// Entering a cell costs its value.
    CellValue,
    /// Entering a cell costs --step-cost, or its --override.
    Fixed,
}

impl Solve {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let grid = load_grid(&self.start.path)?;
        let start = self
            .convention
            .convention
            .to_pos(self.start.x, self.start.y, grid.rows());
        log::info!(
            "start ({}, {}) read as {} -> {start}",
            self.start.x,
            self.start.y,
            self.convention.convention
        );

        let maze = Rc::new(Maze::new(grid, self.goal_policy(), self.cost_model())?);
        let root = MazeState::new(Rc::clone(&maze), start.row, start.col)?;
        let strategy = self.strategy.with_depth(self.depth);
        if !strategy.is_cost_optimal() {
            log::info!("{strategy} may return a path that is not the cheapest");
        }

        let mut search = Search::with_limits(self.limits());
        let result = search.run(strategy, root);
        let report = Report::new(strategy, start, &result, search.stats());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.render());
        }
        Ok(())
    }

    fn goal_policy(&self) -> GoalPolicy {
        if !self.goal_cell.is_empty() {
            GoalPolicy::positions(self.goal_cell.iter().copied())
        } else if !self.goal_ids.is_empty() {
            GoalPolicy::ids(self.goal_ids.iter().copied())
        } else {
            GoalPolicy::default()
        }
    }

    fn cost_model(&self) -> CostModel {
        match self.cost_model {
            CostModelArg::CellValue => CostModel::CellValue,
            CostModelArg::Fixed => self
                .overrides
                .iter()
                .fold(CostModel::fixed(self.step_cost), |m, &(id, cost)| {
                    m.with_override(id, cost)
                }),
        }
    }

    fn limits(&self) -> Limits {
        Limits {
            max_expansions: self.max_expansions,
            max_frontier: self.max_frontier,
        }
    }
}

fn parse_pos(s: &str) -> Result<Pos, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got \u{201c}{s}\u{201d}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok(Pos::new(row, col))
}

fn parse_override(s: &str) -> Result<(i32, i32), String> {
    let (id, cost) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=cost, got \u{201c}{s}\u{201d}"))?;
    let id = id.trim().parse().map_err(|e| format!("bad cell id: {e}"))?;
    let cost = cost.trim().parse().map_err(|e| format!("bad cost: {e}"))?;
    Ok((id, cost))
}

/// What a solve run prints.
#[derive(Serialize, Debug, Clone, PartialEq)]
struct Report {
    strategy: String,
    start: Pos,
    outcome: &'static str,
    cost: Option<i32>,
    steps: Option<usize>,
    path: Vec<Move>,
    goal: Option<Pos>,
    goal_id: Option<i32>,
    expanded: usize,
    generated: usize,
    max_frontier: usize,
}

impl Report {
    fn new(
        strategy: Strategy,
        start: Pos,
        result: &SearchResult<MazeState>,
        stats: Stats,
    ) -> Self {
        let solution = result.solution();
        Self {
            strategy: strategy.to_string(),
            start,
            outcome: result.label(),
            cost: solution.map(|s| s.cost),
            steps: solution.map(|s| s.steps()),
            path: solution.map(|s| s.path.clone()).unwrap_or_default(),
            goal: solution.map(|s| s.goal.pos()),
            goal_id: solution.map(|s| s.goal.cell_id()),
            expanded: stats.expanded,
            generated: stats.generated,
            max_frontier: stats.max_frontier,
        }
    }

    fn render(&self) -> String {
        let mut out = format!("Strategy: {}\nStart: {}\n", self.strategy, self.start);
        match (self.cost, self.goal) {
            (Some(cost), Some(goal)) => {
                let path: Vec<&str> = self.path.iter().map(|m| m.name()).collect();
                out.push_str("Solution found!\n");
                out.push_str(&format!(
                    "Goal: cell {} at {goal}\n",
                    self.goal_id.unwrap_or_default()
                ));
                out.push_str(&format!("Total cost: {cost}\n"));
                out.push_str(&format!("Steps: {}\n", self.path.len()));
                out.push_str(&format!("Actions: {}\n", path.join(";")));
            }
            _ if self.outcome == "limit reached" => {
                out.push_str(&format!(
                    "Search stopped after {} expansions (limit reached).\n",
                    self.expanded
                ));
            }
            _ => out.push_str("No solution found.\n"),
        }
        out
    }
}
