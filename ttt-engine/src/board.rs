//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::cell::Cell;
use crate::constants::BOARD_SIZE;

/// 棋盘
///
/// 3x3 的值类型，按 `[row][col]` 存储。所有状态转移都返回新的棋盘。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建初始（全空）棋盘
    pub fn initial() -> Self {
        Self::default()
    }

    /// 从格子数组创建棋盘（不检查是否可达）
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// 获取全部格子
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// 获取指定坐标的格子（越界返回 None）
    pub fn get(&self, action: Action) -> Option<Cell> {
        if action.is_valid() {
            Some(self.cells[action.row as usize][action.col as usize])
        } else {
            None
        }
    }

    /// 返回指定坐标被替换后的新棋盘（不检查规则）
    pub(crate) fn with_cell(&self, action: Action, cell: Cell) -> Board {
        let mut next = *self;
        if action.is_valid() {
            next.cells[action.row as usize][action.col as usize] = cell;
        }
        next
    }

    /// 统计某种格子的数量
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// 棋盘是否已下满
    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// 行优先遍历 (坐标, 格子)
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::all().map(move |action| (action, self.cells[action.row as usize][action.col as usize]))
    }
}
