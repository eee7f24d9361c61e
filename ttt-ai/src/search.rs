//! 搜索引擎
//!
//! 实现完整的 Minimax 搜索（不剪枝，不缓存）

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ttt_engine::{Action, Board, Player, Rules, DRAW_UTILITY};

/// 多个走法同分时的取舍策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// 取行优先顺序中的第一个
    #[default]
    First,
    /// 用给定种子在最优走法中随机选择
    Random { seed: u64 },
}

/// AI 配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub tie_break: TieBreak,
}

impl AiConfig {
    /// 随机取舍的配置
    pub fn with_seed(seed: u64) -> Self {
        Self {
            tie_break: TieBreak::Random { seed },
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: Option<ChaCha8Rng>,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.tie_break {
            TieBreak::First => None,
            TieBreak::Random { seed } => Some(ChaCha8Rng::seed_from_u64(seed)),
        };
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索最佳走法
    ///
    /// 终局返回 None。X 取最大分，O 取最小分；同分时按 `TieBreak` 选择。
    /// 随机取舍时随机数状态在多次搜索间延续，同一种子下调用序列可复现。
    pub fn search(&mut self, board: &Board) -> Option<Action> {
        self.nodes_searched = 0;

        if Rules::is_terminal(board) {
            return None;
        }

        let mover = Rules::current_player(board);
        let scored = self.score_actions(board);
        let best_score = best_of(mover, scored.iter().map(|&(_, score)| score))?;

        let candidates: Vec<Action> = scored
            .iter()
            .filter(|&&(_, score)| score == best_score)
            .map(|&(action, _)| action)
            .collect();

        let chosen = match self.rng.as_mut() {
            Some(rng) => candidates.choose(rng).copied(),
            None => candidates.first().copied(),
        };

        if let Some(action) = chosen {
            debug!(
                "{} plays {} on {}: score={}, candidates={}, nodes={}",
                mover,
                action,
                board,
                best_score,
                candidates.len(),
                self.nodes_searched
            );
        }

        chosen
    }

    /// 局面的 Minimax 分值（X 视角）
    pub fn score(&mut self, board: &Board) -> i32 {
        self.nodes_searched = 0;
        self.minimax(board)
    }

    /// 每个合法走法的分值（行优先），终局为空
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        self.nodes_searched = 0;

        if Rules::is_terminal(board) {
            return Vec::new();
        }
        self.score_actions(board)
    }

    /// 所有达到最优分值的走法，终局为空
    pub fn optimal_actions(&mut self, board: &Board) -> Vec<Action> {
        let scored = self.evaluate_actions(board);
        let mover = Rules::current_player(board);

        match best_of(mover, scored.iter().map(|&(_, score)| score)) {
            Some(best) => scored
                .into_iter()
                .filter(|&(_, score)| score == best)
                .map(|(action, _)| action)
                .collect(),
            None => Vec::new(),
        }
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn score_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        Rules::successors(board)
            .map(|(action, next)| {
                let score = self.minimax(&next);
                trace!("{} -> {}", action, score);
                (action, score)
            })
            .collect()
    }

    fn minimax(&mut self, board: &Board) -> i32 {
        self.nodes_searched += 1;

        if Rules::is_terminal(board) {
            return Rules::utility(board);
        }

        let mover = Rules::current_player(board);
        let scores: Vec<i32> = Rules::successors(board)
            .map(|(_, next)| self.minimax(&next))
            .collect();

        // 非终局至少有一个空格
        best_of(mover, scores.into_iter()).unwrap_or(DRAW_UTILITY)
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

/// X 取最大，O 取最小
fn best_of(mover: Player, scores: impl Iterator<Item = i32>) -> Option<i32> {
    match mover {
        Player::X => scores.max(),
        Player::O => scores.min(),
    }
}

/// 用默认配置搜索最佳走法
pub fn best_move(board: &Board) -> Option<Action> {
    AiEngine::default().search(board)
}

/// 用默认配置计算局面分值
pub fn minimax_score(board: &Board) -> i32 {
    AiEngine::default().score(board)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use ttt_engine::{Cell, Notation};

    fn board(s: &str) -> Board {
        Notation::parse(s).unwrap()
    }

    fn score_after(board: &Board, action: Action) -> i32 {
        minimax_score(&Rules::apply_action(board, action).unwrap())
    }

    #[test]
    fn test_search_initial_position() {
        let state = Board::initial();
        let mut engine = AiEngine::default();

        let action = engine.search(&state).unwrap();

        // 双方完美对弈必然和棋
        assert_eq!(score_after(&state, action), 0);
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_score_initial_position() {
        let mut engine = AiEngine::default();
        assert_eq!(engine.score(&Board::initial()), 0);
        // 完整博弈树的节点数（含根节点）
        assert_eq!(engine.nodes_searched(), 549_946);
    }

    #[test]
    fn test_search_completes_row() {
        let state = board("XX./OO./...");

        assert_eq!(best_move(&state), Some(Action::new_unchecked(0, 2)));
        assert_eq!(score_after(&state, Action::new_unchecked(0, 2)), 1);
        assert_eq!(minimax_score(&state), 1);
    }

    #[test]
    fn test_search_o_wins() {
        let state = board("XX./OO./X..");

        assert_eq!(Rules::current_player(&state), Player::O);
        assert_eq!(best_move(&state), Some(Action::new_unchecked(1, 2)));
        assert_eq!(minimax_score(&state), -1);
    }

    #[test]
    fn test_search_terminal_board() {
        let state = board("XOX/XOO/OXX");
        let mut engine = AiEngine::default();

        assert!(Rules::is_terminal(&state));
        assert_eq!(Rules::winner(&state), None);
        assert_eq!(Rules::utility(&state), 0);
        assert_eq!(engine.search(&state), None);
        assert_eq!(engine.nodes_searched(), 0);
        assert!(engine.evaluate_actions(&state).is_empty());
        assert!(engine.optimal_actions(&state).is_empty());
    }

    #[test]
    fn test_search_won_board() {
        let state = board("XXX/OO./...");
        assert_eq!(best_move(&state), None);
        assert_eq!(minimax_score(&state), 1);
    }

    #[test]
    fn test_optimal_replies_to_center() {
        let state = board(".../.X./...");
        let mut engine = AiEngine::default();

        let optimal: HashSet<Action> = engine.optimal_actions(&state).into_iter().collect();
        let corners: HashSet<Action> = [(0, 0), (0, 2), (2, 0), (2, 2)]
            .into_iter()
            .map(|(r, c)| Action::new_unchecked(r, c))
            .collect();
        assert_eq!(optimal, corners);

        // 走边必败
        for (action, score) in engine.evaluate_actions(&state) {
            let expected = if corners.contains(&action) { 0 } else { 1 };
            assert_eq!(score, expected, "action {}", action);
        }
    }

    #[test]
    fn test_random_tie_break() {
        let state = board(".../.X./...");
        let mut first = AiEngine::new(AiConfig::with_seed(7));
        let mut second = AiEngine::new(AiConfig::with_seed(7));

        for _ in 0..5 {
            let a = first.search(&state).unwrap();
            let b = second.search(&state).unwrap();
            assert_eq!(a, b);
            assert_eq!(score_after(&state, a), 0);
        }
    }

    #[test]
    fn test_best_move_is_optimal_everywhere() {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::initial()];
        while let Some(b) = stack.pop() {
            if !seen.insert(b) || Rules::is_terminal(&b) {
                continue;
            }
            stack.extend(Rules::successors(&b).map(|(_, next)| next));

            // 前几步的子树太大，只检查至少有四子的局面
            if b.count(Cell::Empty) > 5 {
                continue;
            }
            let action = best_move(&b).unwrap();
            assert_eq!(score_after(&b, action), minimax_score(&b), "board {}", b);
        }
    }

    #[test]
    fn test_config_serde() {
        let config = AiConfig::with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(AiEngine::new(back).config().tie_break, TieBreak::Random { seed: 42 });
        assert_eq!(AiConfig::default().tie_break, TieBreak::First);
    }
}
