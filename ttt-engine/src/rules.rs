//! 规则：走子方、合法走法、状态转移、胜负判定

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::Action;
use crate::board::Board;
use crate::cell::{Cell, Player};
use crate::constants::{DRAW_UTILITY, O_WIN_UTILITY, X_WIN_UTILITY};
use crate::error::{GameError, Result};

/// 所有获胜连线，按 行、列、对角线 的固定顺序扫描
const LINES: [[Action; 3]; 8] = [
    // 行
    [Action::new_unchecked(0, 0), Action::new_unchecked(0, 1), Action::new_unchecked(0, 2)],
    [Action::new_unchecked(1, 0), Action::new_unchecked(1, 1), Action::new_unchecked(1, 2)],
    [Action::new_unchecked(2, 0), Action::new_unchecked(2, 1), Action::new_unchecked(2, 2)],
    // 列
    [Action::new_unchecked(0, 0), Action::new_unchecked(1, 0), Action::new_unchecked(2, 0)],
    [Action::new_unchecked(0, 1), Action::new_unchecked(1, 1), Action::new_unchecked(2, 1)],
    [Action::new_unchecked(0, 2), Action::new_unchecked(1, 2), Action::new_unchecked(2, 2)],
    // 对角线
    [Action::new_unchecked(0, 0), Action::new_unchecked(1, 1), Action::new_unchecked(2, 2)],
    [Action::new_unchecked(0, 2), Action::new_unchecked(1, 1), Action::new_unchecked(2, 0)],
];

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 一方连成三子
    Win(Player),
    /// 下满且无人获胜
    Draw,
    /// 未结束
    Ongoing,
}

/// 规则
///
/// 所有函数都是棋盘的纯函数，没有内部状态。
pub struct Rules;

impl Rules {
    /// 当前走子方
    ///
    /// X 与 O 数量相等时轮到 X（X 先手），否则轮到 O。
    /// 对不可达的棋盘同样按此规则计算，但结果没有意义。
    pub fn current_player(board: &Board) -> Player {
        if board.count(Cell::X) == board.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// 所有空格
    pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
        board
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(action, _)| action)
            .collect()
    }

    /// 执行走法，返回新棋盘
    ///
    /// 坐标越界或格子已被占用时返回 `GameError::InvalidAction`，原棋盘不变。
    pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
        match board.get(action) {
            Some(Cell::Empty) => {
                Ok(board.with_cell(action, Self::current_player(board).to_cell()))
            }
            _ => {
                debug!("Rejected action {} on board {}", action, board);
                Err(GameError::InvalidAction {
                    row: action.row,
                    col: action.col,
                })
            }
        }
    }

    /// 所有合法走法及其结果棋盘
    pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> {
        let board = *board;
        let cell = Self::current_player(&board).to_cell();
        Self::legal_actions(&board)
            .into_iter()
            .map(move |action| (action, board.with_cell(action, cell)))
    }

    /// 获胜方（行、列、对角线中第一条三子连线的一方）
    pub fn winner(board: &Board) -> Option<Player> {
        LINES.iter().find_map(|[a, b, c]| {
            let first = board.get(*a)?;
            if first == board.get(*b)? && first == board.get(*c)? {
                first.player()
            } else {
                None
            }
        })
    }

    /// 对局是否结束（有胜者或无空格）
    pub fn is_terminal(board: &Board) -> bool {
        Self::winner(board).is_some() || board.is_full()
    }

    /// 以 X 视角的效用值：X 胜 +1，O 胜 -1，其余 0
    ///
    /// 只对终局有意义，调用前应先检查 `is_terminal`。
    pub fn utility(board: &Board) -> i32 {
        match Self::winner(board) {
            Some(Player::X) => X_WIN_UTILITY,
            Some(Player::O) => O_WIN_UTILITY,
            None => DRAW_UTILITY,
        }
    }

    /// 对局结果
    pub fn outcome(board: &Board) -> Outcome {
        match Self::winner(board) {
            Some(player) => Outcome::Win(player),
            None if board.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }
}
