use anyhow::Context;
use clap::Parser;
use jeopardy_quiz::core::ConfigProvider;
use jeopardy_quiz::utils::error::ErrorSeverity;
use jeopardy_quiz::utils::logger;
use jeopardy_quiz::{
    default_question_bank, CliConfig, Console, GameSession, LeaderboardStore, LocalStorage,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting jeopardy");

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    };

    let mut store = default_question_bank().context("built-in question bank is invalid")?;
    if settings.shuffle_on_start() {
        store.shuffle();
    }

    // 路徑可以是相對或絕對，LocalStorage 以目前目錄為基準
    let storage = LocalStorage::new(".".to_string());
    let leaderboard = LeaderboardStore::with_capacity(
        storage,
        settings.highscores_path(),
        settings.leaderboard_capacity(),
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let player = console.ask_player(settings.player_name())?;
    let mut session = GameSession::new(store, player, leaderboard, settings.match_policy());

    match console.run(&mut session) {
        Ok(Some(report)) => {
            tracing::info!("✅ {} finished with ₱{}", report.player, report.score);
            Ok(())
        }
        Ok(None) => std::process::exit(exit_code(ErrorSeverity::Medium)),
        Err(e) => {
            tracing::error!(
                "❌ Game aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("Final score: ₱{}", session.player().score());
            std::process::exit(exit_code(e.severity()));
        }
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
