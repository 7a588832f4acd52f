//! Headless mode for the guessing game.
//!
//! A line-oriented interface for playing without a TUI, meant for scripts
//! and automated testing. Plain lines are guesses; lines starting with `#`
//! are commands. Everything the game reports is printed as a tagged line
//! (`[ROUND]`, `[INFO]`, `[ERROR]`, ...).

use std::io::{self, BufRead, Write};

use whosthat_core::{GuessResult, Message, RoundController, RoundPhase, RoundView, View};

const HELP: &[&str] = &[
    "  <name>          - Guess the Pokémon",
    "  #next           - Start a new round (random mode only)",
    "  #reveal         - Give up and show the answer",
    "  #suggest <text> - List names matching <text>",
    "  #gen <n>        - Play with the first <n> Pokémon (1-251)",
    "  #daily on|off   - Toggle the daily puzzle",
    "  #status         - Show score and round state",
    "  #help           - Show this help",
    "  #quit           - Exit the game",
];

/// Prints what the controller renders as tagged lines.
pub struct ConsoleView<W: Write> {
    out: W,
    last_phase: RoundPhase,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_phase: RoundPhase::Idle,
        }
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        writeln!(self.out, "{}", text.as_ref()).ok();
        self.out.flush().ok();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn render_round(&mut self, round: &RoundView) {
        let entered = round.phase != self.last_phase;
        self.last_phase = round.phase;
        if !entered {
            return;
        }

        match round.phase {
            RoundPhase::AwaitingGuess => {
                let artwork = round
                    .artwork
                    .as_deref()
                    .unwrap_or("Artwork not available");
                self.line(format!(
                    "[ROUND] Who's that Pokémon? silhouette: {artwork} | tries: {}",
                    round.tries_remaining
                ));
            }
            RoundPhase::Revealed => {
                let name = round.name.as_deref().unwrap_or("?");
                let id = round.id.map(|id| format!(" (#{id})")).unwrap_or_default();
                self.line(format!("[REVEAL] {name}{id} | score: {}", round.score));
            }
            RoundPhase::Idle | RoundPhase::Loading => {}
        }
    }

    fn render_suggestions(&mut self, suggestions: &[String]) {
        if !suggestions.is_empty() {
            self.line(format!("[SUGGEST] {}", suggestions.join(", ")));
        }
    }

    fn render_message(&mut self, message: &Message) {
        let tag = if message.is_error() { "ERROR" } else { "INFO" };
        self.line(format!("[{tag}] {message}"));
    }
}

/// What a command asked the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the game in headless mode on stdin/stdout.
pub async fn run_headless(game: RoundController<ConsoleView<io::Stdout>>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    run_with_input(game, stdin.lock()).await?;
    Ok(())
}

/// Drive a game from `input`, one line at a time.
pub async fn run_with_input<W: Write, R: BufRead>(
    mut game: RoundController<ConsoleView<W>>,
    input: R,
) -> io::Result<RoundController<ConsoleView<W>>> {
    let view = game.view_mut();
    view.line("=== Who's That Pokémon? (headless) ===");
    view.line("Commands:");
    for line in HELP {
        view.line(line);
    }
    view.line("");

    game.load_catalog().await;
    game.start().await;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            if handle_command(&mut game, command).await == Flow::Quit {
                game.view_mut().line("Goodbye!");
                break;
            }
            continue;
        }

        if game.submit_guess(line) == GuessResult::Ignored {
            let hint = if game.can_skip() {
                "[ERROR] No round in progress. Type #next for a new one."
            } else {
                "[ERROR] Today's puzzle is over. Come back tomorrow!"
            };
            game.view_mut().line(hint);
        }
    }

    Ok(game)
}

async fn handle_command<W: Write>(
    game: &mut RoundController<ConsoleView<W>>,
    command: &str,
) -> Flow {
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => return Flow::Quit,
        "next" => {
            game.next_round().await;
        }
        "reveal" => {
            if !game.force_reveal() {
                game.view_mut().line("[ERROR] Nothing to reveal.");
            }
        }
        "suggest" => {
            let suggestions = game.suggestions(arg);
            let text = if suggestions.is_empty() {
                "[SUGGEST] (no matches)".to_string()
            } else {
                format!("[SUGGEST] {}", suggestions.join(", "))
            };
            game.view_mut().line(text);
        }
        "gen" => match arg.parse::<u32>() {
            Ok(limit) => {
                let ticket = game.set_generation_limit(limit);
                game.finish_round(ticket).await;
            }
            Err(_) => game.view_mut().line("[ERROR] Usage: #gen <n>"),
        },
        "daily" => {
            let daily = match arg {
                "on" => true,
                "off" => false,
                _ => {
                    game.view_mut().line("[ERROR] Usage: #daily on|off");
                    return Flow::Continue;
                }
            };
            let ticket = game.set_daily(daily);
            game.finish_round(ticket).await;
        }
        "status" => {
            let status = [
                "[STATUS]".to_string(),
                format!("  Score: {}", game.score()),
                format!("  Tries left: {}", game.tries_remaining()),
                format!("  Outcome: {:?}", game.outcome()),
                format!("  Generation: first {}", game.config().generation_limit),
                format!(
                    "  Mode: {}",
                    if game.config().daily { "daily" } else { "random" }
                ),
                format!("  Names loaded: {}", game.catalog().len()),
            ];
            let view = game.view_mut();
            for line in status {
                view.line(line);
            }
        }
        "help" => {
            let view = game.view_mut();
            view.line("[HELP]");
            for line in HELP {
                view.line(line);
            }
        }
        _ => game
            .view_mut()
            .line("[ERROR] Unknown command. Type #help for help."),
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use whosthat_core::testing::MockCatalog;
    use whosthat_core::Outcome;

    async fn play(source: MockCatalog, script: &str) -> (RoundController<ConsoleView<Vec<u8>>>, String) {
        let source = Arc::new(source);
        let game = RoundController::new(source, ConsoleView::new(Vec::new())).with_seed(11);
        let mut game = run_with_input(game, script.as_bytes()).await.unwrap();
        let out = std::mem::replace(game.view_mut(), ConsoleView::new(Vec::new()));
        let text = String::from_utf8(out.into_inner()).unwrap();
        (game, text)
    }

    #[tokio::test]
    async fn test_round_is_announced() {
        let (game, out) = play(MockCatalog::gen_one(), "").await;
        assert!(out.contains("[ROUND] Who's that Pokémon?"));
        assert!(out.contains("[INFO] Guess the Pokémon!"));
        assert_eq!(game.tries_remaining(), 6);
    }

    #[tokio::test]
    async fn test_wrong_guesses_then_reveal() {
        let (game, out) = play(MockCatalog::gen_one(), "zzz\nzzz\n#reveal\nzzz\n").await;
        assert!(out.contains("[INFO] Nope — 5 tries left."));
        assert!(out.contains("[INFO] Nope — 4 tries left."));
        assert!(out.contains("[REVEAL]"));
        assert!(out.contains("[ERROR] No round in progress."));
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.score(), 0);
    }

    #[tokio::test]
    async fn test_suggest_command() {
        let (_, out) = play(MockCatalog::gen_one(), "#gen 10\n#suggest saur\n#suggest\n").await;
        assert!(out.contains("[INFO] Generation set: first 10 Pokémon"));
        assert!(out.contains("[SUGGEST] bulbasaur, ivysaur, venusaur"));
        assert!(out.contains("[SUGGEST] (no matches)"));
    }

    #[tokio::test]
    async fn test_daily_blocks_next() {
        let (game, out) = play(MockCatalog::gen_one(), "#daily on\n#next\n#status\n").await;
        assert!(out.contains("[INFO] Daily puzzle — good luck!"));
        assert!(out.contains("[INFO] Skipping is disabled during the daily puzzle."));
        assert!(out.contains("  Mode: daily"));
        assert!(game.config().daily);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (game, out) = play(MockCatalog::gen_one(), "#quit\n#reveal\n").await;
        assert!(out.contains("Goodbye!"));
        assert_eq!(game.outcome(), Outcome::Unresolved);
    }

    #[tokio::test]
    async fn test_bad_arguments() {
        let (_, out) = play(MockCatalog::gen_one(), "#gen lots\n#daily maybe\n#frobnicate\n").await;
        assert!(out.contains("[ERROR] Usage: #gen <n>"));
        assert!(out.contains("[ERROR] Usage: #daily on|off"));
        assert!(out.contains("[ERROR] Unknown command."));
    }

    #[tokio::test]
    async fn test_catalog_failure_is_reported() {
        let (game, out) = play(MockCatalog::gen_one().with_catalog_failure(), "#suggest bul\n").await;
        assert!(out.contains(
            "[ERROR] Could not load Pokémon names. Check your internet connection."
        ));
        assert!(out.contains("[SUGGEST] (no matches)"));
        assert_eq!(game.phase(), RoundPhase::AwaitingGuess);
    }
}
