//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 越界或已被占用的格子
    #[error("Invalid action: ({row}, {col})")]
    InvalidAction { row: u8, col: u8 },

    /// 无效的棋盘记法
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
