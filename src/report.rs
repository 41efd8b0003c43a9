use serde::{Deserialize, Serialize};
use crate::core::{DynamicKind, Grid, History, Move, StaticKind, Vec2};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelReport {
    pub width: i32,
    pub height: i32,
    pub player: Vec2,
    pub goals: usize,
    pub boxes: usize,
    pub boxes_on_goals: usize,
    pub solved: bool,
    pub moves: Vec<Move>,
    pub pushes: usize,
    pub redoable: usize,
    pub ignored: usize,
}

impl LevelReport {
    pub fn new(grid: &Grid, history: &History, ignored: usize) -> LevelReport {
        let goals = grid.count_cells(Some(StaticKind::Goal), None);
        let boxes = grid.count_cells(None, Some(DynamicKind::Box));
        let boxes_on_goals = grid.count_cells(Some(StaticKind::Goal), Some(DynamicKind::Box));
        LevelReport {
            width: grid.width(),
            height: grid.height(),
            player: grid.player(),
            goals,
            boxes,
            boxes_on_goals,
            solved: boxes > 0 && boxes_on_goals == boxes,
            moves: history.applied().to_vec(),
            pushes: history.push_count(),
            redoable: history.moves().len() - history.cursor(),
            ignored,
        }
    }
}

pub fn get_json_data(report: &LevelReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
