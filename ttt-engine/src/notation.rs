//! 棋盘记法解析和生成
//!
//! 格式：三行由 `/` 分隔，每行三个字符，`X`/`O` 为棋子，`.` 为空格。
//!
//! 示例：
//! `XX./OO./...`

use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::constants::BOARD_SIZE;
use crate::error::GameError;

/// 初始局面记法
pub const INITIAL_NOTATION: &str = ".../.../...";

/// 棋盘记法处理
pub struct Notation;

impl Notation {
    /// 解析记法字符串为棋盘
    ///
    /// 只检查格式，不检查局面是否可达。
    pub fn parse(s: &str) -> Result<Board, GameError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} cells, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                cells[row_idx][col_idx] =
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: '{}'", c),
                    })?;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// 将棋盘转换为记法字符串
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .iter()
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::parse(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Notation::to_string(self))
    }
}
