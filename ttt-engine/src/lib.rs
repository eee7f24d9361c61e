//! 井字棋规则引擎
//!
//! 包含:
//! - 格子、玩家、棋盘、走法等核心数据结构
//! - 走子方推导、合法走法生成和状态转移
//! - 胜负与终局判定、效用值
//! - 棋盘记法 (Notation)

mod action;
mod board;
mod cell;
mod constants;
mod error;
mod notation;
mod rules;

pub use action::Action;
pub use board::Board;
pub use cell::{Cell, Player};
pub use constants::*;
pub use error::{GameError, Result};
pub use notation::{Notation, INITIAL_NOTATION};
pub use rules::{Outcome, Rules};
