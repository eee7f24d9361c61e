//! 规则常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// X 获胜的效用值
pub const X_WIN_UTILITY: i32 = 1;

/// O 获胜的效用值
pub const O_WIN_UTILITY: i32 = -1;

/// 和棋（以及未结束局面）的效用值
pub const DRAW_UTILITY: i32 = 0;
