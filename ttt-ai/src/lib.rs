//! 井字棋 AI 引擎
//!
//! 包含:
//! - 完整 Minimax 搜索（不剪枝，不缓存）
//! - 同分走法的取舍策略
//! - 搜索节点统计

mod search;

pub use search::{best_move, minimax_score, AiConfig, AiEngine, TieBreak};
