//! 走法（落子坐标）

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 落子坐标
///
/// 行、列均为 0-2。排序为行优先，与 `Rules::legal_actions` 的遍历顺序一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Action {
    /// 创建新坐标（越界时返回 None）
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let action = Self { row, col };
        action.is_valid().then_some(action)
    }

    /// 创建新坐标（不检查边界）
    ///
    /// 越界的坐标交给 `Rules::apply_action` 拒绝。
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为行优先索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从行优先索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 棋盘上所有坐标（行优先）
    pub fn all() -> impl Iterator<Item = Action> {
        (0..CELL_COUNT).filter_map(Action::from_index)
    }
}

impl From<Action> for (u8, u8) {
    fn from(action: Action) -> Self {
        (action.row, action.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
