use std::rc::Rc;

use labyrinth_core::{GridError, Move, Pos};
use labyrinth_search::{InformedState, State};

use crate::maze::Maze;

/// One position in a maze search.
///
/// A state never exists on a wall or outside the grid: roots are checked by
/// [`MazeState::new`] and children are only generated onto passable cells.
#[derive(Debug, Clone)]
pub struct MazeState {
    maze: Rc<Maze>,
    pos: Pos,
    op: Option<Move>,
    step_cost: i32,
}

impl MazeState {
    /// Root state at `(row, col)` with no operator and cost 0.
    ///
    /// Fails with [`GridError::OutOfBounds`] or [`GridError::Wall`].
    pub fn new(maze: Rc<Maze>, row: i32, col: i32) -> Result<Self, GridError> {
        let pos = Pos::new(row, col);
        maze.grid().check(pos)?;
        Ok(Self {
            maze,
            pos,
            op: None,
            step_cost: 0,
        })
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// The id of the cell this state occupies. Never 0.
    pub fn cell_id(&self) -> i32 {
        self.maze.grid().cell_id(self.pos).unwrap_or_default()
    }

    #[inline]
    pub fn maze(&self) -> &Rc<Maze> {
        &self.maze
    }
}

impl PartialEq for MazeState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.maze, &other.maze)
            && self.pos == other.pos
            && self.op == other.op
            && self.step_cost == other.step_cost
    }
}

impl State for MazeState {
    type Key = Pos;
    type Op = Move;

    /// Children in up, down, left, right order, skipping walls and cells
    /// outside the grid.
    fn successors(&self, buf: &mut Vec<Self>) {
        for (mv, np) in self.pos.neighbors_4() {
            if let Some(cost) = self.maze.entry_cost(np) {
                buf.push(MazeState {
                    maze: Rc::clone(&self.maze),
                    pos: np,
                    op: Some(mv),
                    step_cost: cost,
                });
            }
        }
    }

    fn is_goal(&self) -> bool {
        self.maze.is_goal(self.pos)
    }

    fn cost(&self) -> i32 {
        self.step_cost
    }

    fn operator(&self) -> Option<Move> {
        self.op
    }

    fn signature(&self) -> Pos {
        self.pos
    }
}

impl InformedState for MazeState {
    fn heuristic(&self) -> i32 {
        self.maze.estimate(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{CostModel, GoalPolicy};
    use labyrinth_core::{CostGrid, parse_grid};
    use labyrinth_search::{
        Search, SearchResult, Strategy, astar, breadth_first, depth_first, uniform_cost,
    };
    use rand::{Rng, RngExt};

    fn corridor(cost: CostModel) -> Rc<Maze> {
        let grid = CostGrid::from_rows(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 14, 2, 2, 18],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap();
        Rc::new(Maze::new(grid, GoalPolicy::default(), cost).unwrap())
    }

    fn row_maze(text: &str) -> Rc<Maze> {
        let grid = parse_grid(text).unwrap();
        let goal = GoalPolicy::positions([Pos::new(0, 2)]);
        Rc::new(Maze::new(grid, goal, CostModel::CellValue).unwrap())
    }

    #[test]
    fn huge_cell_values_saturate_path_cost() {
        let maze = row_maze("1;2000000000;2000000000");
        let sol = uniform_cost(maze.start(0, 0).unwrap())
            .into_solution()
            .unwrap();
        assert_eq!(sol.path, vec![Move::Right, Move::Right]);
        assert_eq!(sol.cost, i32::MAX);
        assert_eq!(
            maze.replay(Pos::new(0, 0), &sol.path),
            Some((Pos::new(0, 2), i32::MAX))
        );
    }

    #[test]
    fn huge_min_step_saturates_heuristic() {
        let maze = row_maze("1500000000;1500000000;1500000000");
        assert_eq!(maze.estimate(Pos::new(0, 0)), i32::MAX);
        let root = maze.start(0, 0).unwrap();
        assert!(root.heuristic() >= 0);
        let sol = astar(root).into_solution().unwrap();
        assert_eq!(sol.goal.pos(), Pos::new(0, 2));
        assert_eq!(sol.cost, i32::MAX);
    }

    /// A random grid with about a quarter walls, values in `1..=9`, one goal
    /// position and a start, both passable.
    fn random_maze(rng: &mut impl Rng) -> Option<(Rc<Maze>, Pos)> {
        let rows = rng.random_range(2..6);
        let cols = rng.random_range(2..6);
        let cells: Vec<Vec<i32>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if rng.random_range(0..4u32) == 0 {
                            0
                        } else {
                            rng.random_range(1..=9)
                        }
                    })
                    .collect()
            })
            .collect();
        let grid = CostGrid::from_rows(cells).unwrap();
        let open = grid.positions(|v| v != 0);
        if open.is_empty() {
            return None;
        }
        let goal = open[rng.random_range(0..open.len())];
        let start = open[rng.random_range(0..open.len())];
        let cost = if rng.random_range(0..2u32) == 0 {
            CostModel::CellValue
        } else {
            CostModel::fixed(1).with_override(9, 4)
        };
        let maze = Maze::new(grid, GoalPolicy::positions([goal]), cost).unwrap();
        Some((Rc::new(maze), start))
    }

    #[test]
    fn cheapest_goal_in_corridor() {
        let maze = corridor(CostModel::CellValue);
        let root = maze.start(1, 2).unwrap();

        let ucs = uniform_cost(root.clone()).into_solution().unwrap();
        assert_eq!(ucs.goal.pos(), Pos::new(1, 1));
        assert_eq!(ucs.goal.cell_id(), 14);
        assert_eq!(ucs.cost, 14);
        assert_eq!(ucs.render_path(";"), "left");

        let a = astar(root.clone()).into_solution().unwrap();
        assert_eq!(a.cost, ucs.cost);

        let bfs = breadth_first(root).into_solution().unwrap();
        assert_eq!(bfs.goal.pos(), Pos::new(1, 1));
        assert_eq!(bfs.steps(), 1);
    }

    #[test]
    fn breadth_first_takes_nearer_costlier_goal() {
        let maze = corridor(CostModel::CellValue);
        let root = maze.start(1, 3).unwrap();

        let bfs = breadth_first(root.clone()).into_solution().unwrap();
        assert_eq!(bfs.goal.pos(), Pos::new(1, 4));
        assert_eq!(bfs.cost, 18);
        assert_eq!(bfs.render_path(";"), "right");

        let ucs = uniform_cost(root).into_solution().unwrap();
        assert_eq!(ucs.goal.pos(), Pos::new(1, 1));
        assert_eq!(ucs.cost, 16);
        assert_eq!(ucs.render_path(";"), "left;left");
    }

    #[test]
    fn fixed_costs_with_dear_goal_cell() {
        let maze = corridor(CostModel::fixed(2).with_override(14, 9));
        let root = maze.start(1, 2).unwrap();
        let sol = uniform_cost(root).into_solution().unwrap();
        // Left costs 9, right costs 2 + 2.
        assert_eq!(sol.goal.pos(), Pos::new(1, 4));
        assert_eq!(sol.cost, 4);
        assert_eq!(sol.edge_costs, vec![2, 2]);
    }

    #[test]
    fn start_on_wall_rejected() {
        let maze = corridor(CostModel::CellValue);
        let err = maze.start(0, 2).unwrap_err();
        assert!(matches!(err, GridError::Wall { .. }));
        assert!(err.is_out_of_bounds());
        let err = maze.start(1, 5).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert!(maze.start(-1, 0).is_err());
    }

    #[test]
    fn root_has_no_operator_and_zero_cost() {
        let maze = corridor(CostModel::CellValue);
        let root = maze.start(1, 2).unwrap();
        assert_eq!(root.operator(), None);
        assert_eq!(root.cost(), 0);
        assert_eq!(root.signature(), Pos::new(1, 2));
        assert!(!root.is_goal());
        assert!(maze.start(1, 4).unwrap().is_goal());
    }

    #[test]
    fn successors_in_move_order() {
        let grid = CostGrid::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ])
        .unwrap();
        let maze = Rc::new(Maze::new(grid, GoalPolicy::ids([]), CostModel::CellValue).unwrap());
        let mut buf = Vec::new();
        maze.start(1, 1).unwrap().successors(&mut buf);
        let got: Vec<(Move, Pos, i32)> = buf
            .iter()
            .map(|s| (s.operator().unwrap(), s.pos(), s.cost()))
            .collect();
        assert_eq!(
            got,
            vec![
                (Move::Up, Pos::new(0, 1), 2),
                (Move::Down, Pos::new(2, 1), 8),
                (Move::Left, Pos::new(1, 0), 4),
                (Move::Right, Pos::new(1, 2), 6),
            ]
        );

        buf.clear();
        maze.start(0, 0).unwrap().successors(&mut buf);
        let moves: Vec<Move> = buf.iter().filter_map(|s| s.operator()).collect();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
    }

    #[test]
    fn successors_stay_on_passable_cells() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let Some((maze, _)) = random_maze(&mut rng) else {
                continue;
            };
            let mut buf = Vec::new();
            for (p, v) in maze.grid().iter() {
                if v == 0 {
                    continue;
                }
                buf.clear();
                maze.start(p.row, p.col).unwrap().successors(&mut buf);
                for child in &buf {
                    assert!(maze.grid().contains(child.pos()));
                    assert_ne!(maze.grid().at(child.pos()), Some(0));
                    assert_eq!(child.cost(), maze.entry_cost(child.pos()).unwrap());
                }
            }
        }
    }

    #[test]
    fn heuristic_is_admissible() {
        let mut rng = rand::rng();
        for _ in 0..60 {
            let Some((maze, _)) = random_maze(&mut rng) else {
                continue;
            };
            // True remaining cost from every cell, by exhaustive search.
            for (p, v) in maze.grid().iter() {
                if v == 0 {
                    continue;
                }
                let state = maze.start(p.row, p.col).unwrap();
                let h = state.heuristic();
                assert!(h >= 0);
                if let Some(true_cost) = uniform_cost(state).cost() {
                    assert!(h <= true_cost, "h({p}) = {h} > {true_cost}");
                }
            }
        }
    }

    #[test]
    fn optimal_strategies_agree_and_dominate() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let Some((maze, start)) = random_maze(&mut rng) else {
                continue;
            };
            let root = maze.start(start.row, start.col).unwrap();
            let ucs = uniform_cost(root.clone());
            let a = astar(root.clone());
            assert_eq!(ucs.cost(), a.cost());
            let Some(best) = ucs.cost() else {
                assert_eq!(breadth_first(root), SearchResult::NotFound);
                continue;
            };
            let bfs = breadth_first(root.clone()).into_solution().unwrap();
            assert!(best <= bfs.cost);
            // Within the fewest-edges bound a path is guaranteed to exist.
            let dfs = depth_first(root, bfs.steps()).into_solution().unwrap();
            assert!(best <= dfs.cost);
        }
    }

    #[test]
    fn depth_first_respects_bound() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let Some((maze, start)) = random_maze(&mut rng) else {
                continue;
            };
            let root = maze.start(start.row, start.col).unwrap();
            let m = rng.random_range(0..6usize);
            if let Some(sol) = depth_first(root, m).into_solution() {
                assert!(sol.steps() <= m);
            }
        }
    }

    #[test]
    fn replayed_paths_reach_reported_goal() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let Some((maze, start)) = random_maze(&mut rng) else {
                continue;
            };
            let root = maze.start(start.row, start.col).unwrap();
            for strategy in [
                Strategy::BreadthFirst,
                Strategy::DepthFirst { max_depth: 8 },
                Strategy::UniformCost,
                Strategy::AStar,
            ] {
                let Some(sol) = Search::new().run(strategy, root.clone()).into_solution() else {
                    continue;
                };
                let (end, total) = maze.replay(start, &sol.path).unwrap();
                assert_eq!(end, sol.goal.pos());
                assert_eq!(total, sol.cost);
                assert_eq!(sol.edge_costs.iter().sum::<i32>(), sol.cost);
                assert!(sol.goal.is_goal());
            }
        }
    }

    #[test]
    fn same_strategy_twice_is_identical() {
        let mut rng = rand::rng();
        let mut search = Search::new();
        for _ in 0..50 {
            let Some((maze, start)) = random_maze(&mut rng) else {
                continue;
            };
            let root = maze.start(start.row, start.col).unwrap();
            for strategy in [
                Strategy::BreadthFirst,
                Strategy::DepthFirst { max_depth: 8 },
                Strategy::UniformCost,
                Strategy::AStar,
            ] {
                let first = search.run(strategy, root.clone());
                let second = search.run(strategy, root.clone());
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn astar_expands_fewer_than_uniform_cost() {
        // Open 6x6 room, goal at the end of the first row, unit costs: only
        // first-row cells have f equal to the optimum, so A* walks straight
        // along the row while uniform-cost floods every cell nearer than 5.
        let grid = CostGrid::from_rows(vec![vec![1; 6]; 6]).unwrap();
        let maze = Rc::new(
            Maze::new(
                grid,
                GoalPolicy::positions([Pos::new(0, 5)]),
                CostModel::fixed(1),
            )
            .unwrap(),
        );
        let root = maze.start(0, 0).unwrap();
        let mut a = Search::new();
        let mut u = Search::new();
        assert_eq!(a.astar(root.clone()).cost(), Some(5));
        assert_eq!(u.uniform_cost(root).cost(), Some(5));
        assert_eq!(a.stats().expanded, 5);
        assert!(u.stats().expanded >= 15);
    }
}
