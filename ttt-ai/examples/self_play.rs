//! 完美对弈演示
//!
//! 运行方式:
//! ```bash
//! cargo run -p ttt-ai --example self_play
//! ```

use ttt_ai::{AiConfig, AiEngine};
use ttt_engine::{Board, Outcome, Rules};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 完美对弈 ===\n");

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?;
    let config = seed.map(AiConfig::with_seed).unwrap_or_default();
    let mut engine = AiEngine::new(config);

    let mut board = Board::initial();
    println!("   {}", board);

    while let Some(action) = engine.search(&board) {
        let player = Rules::current_player(&board);
        board = Rules::apply_action(&board, action)?;
        println!(
            "{} {} -> {}  (nodes: {})",
            player,
            action,
            board,
            engine.nodes_searched()
        );
    }

    match Rules::outcome(&board) {
        Outcome::Win(player) => println!("\n结果: {} 胜", player),
        Outcome::Draw => println!("\n结果: 和棋"),
        Outcome::Ongoing => anyhow::bail!("search stopped on a non-terminal board {}", board),
    }

    Ok(())
}
