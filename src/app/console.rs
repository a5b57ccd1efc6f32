use crate::core::leaderboard::format_standings;
use crate::core::scoring::Player;
use crate::core::session::{FinalReport, GameSession};
use crate::core::Storage;
use crate::utils::error::{QuizError, Result};
use std::io::{BufRead, ErrorKind, Write};

const WELCOME: &str = "🎮 Welcome to Filipino Pop Culture Jeopardy!";

enum Line {
    Text(String),
    Unreadable,
    End,
}

enum Flow {
    Continue,
    Stop,
}

/// 以行為單位的互動介面，stdin/stdout 或測試用的 Cursor 都可以
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 讀到結尾或讀取失敗時回傳 `Line::End`，呼叫端當作離開
    fn read_line(&mut self) -> Line {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Line::End,
            Ok(_) => Line::Text(line.trim_end_matches(['\r', '\n']).to_string()),
            // 非 UTF-8 的位元組已被讀掉，可以直接重問
            Err(e) if e.kind() == ErrorKind::InvalidData => Line::Unreadable,
            Err(e) => {
                tracing::warn!("⚠️ Could not read input: {}", e);
                Line::End
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
            match self.read_line() {
                Line::Text(line) => return Ok(Some(line)),
                Line::End => return Ok(None),
                Line::Unreadable => self.report(&QuizError::InvalidSelection {
                    input: "<non-UTF-8 input>".to_string(),
                    reason: "input is not valid UTF-8".to_string(),
                })?,
            }
        }
    }

    fn report(&mut self, error: &QuizError) -> Result<()> {
        tracing::debug!("Recoverable input error: {}", error);
        writeln!(self.output, "{}", error.user_friendly_message())?;
        Ok(())
    }

    /// `preset` 來自設定檔或命令列時不再詢問
    pub fn ask_player(&mut self, preset: Option<&str>) -> Result<Player> {
        writeln!(self.output, "{}\n", WELCOME)?;
        let name = match preset {
            Some(name) => name.to_string(),
            None => self.prompt("Enter your player name: ")?.unwrap_or_default(),
        };
        Ok(Player::new(&name))
    }

    pub fn run<S: Storage>(&mut self, session: &mut GameSession<S>) -> Result<Option<FinalReport>> {
        while !session.is_over() {
            match self.step(session) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => session.quit(),
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => {
                    tracing::error!("❌ Unexpected error, ending the game: {}", e);
                    writeln!(self.output, "❌ {}", e.user_friendly_message())?;
                    session.quit();
                }
            }
        }

        self.finish(session)
    }

    fn step<S: Storage>(&mut self, session: &mut GameSession<S>) -> Result<Flow> {
        writeln!(
            self.output,
            "\n1. Play a question\n2. Shuffle the board\n3. Reset the game\n4. Show high scores\n0. Quit"
        )?;
        let Some(choice) = self.prompt("Choose an option: ")? else {
            return Ok(Flow::Stop);
        };

        match choice.trim().to_lowercase().as_str() {
            "1" | "play" => self.play_turn(session),
            "2" | "shuffle" => {
                session.shuffle()?;
                writeln!(self.output, "🔀 Board shuffled.")?;
                Ok(Flow::Continue)
            }
            "3" | "reset" => {
                let Some(answer) = self.prompt("Reset your score and all questions? (y/n): ")? else {
                    return Ok(Flow::Stop);
                };
                let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
                if session.reset(confirmed)? {
                    writeln!(self.output, "🔄 Game reset. Score: ₱0")?;
                } else {
                    writeln!(self.output, "Reset cancelled.")?;
                }
                Ok(Flow::Continue)
            }
            "4" | "scores" => {
                let standings = session.leaderboard().display();
                writeln!(self.output, "\n{}", standings)?;
                Ok(Flow::Continue)
            }
            "0" | "q" | "quit" => Ok(Flow::Stop),
            _ => {
                writeln!(self.output, "Invalid choice. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn play_turn<S: Storage>(&mut self, session: &mut GameSession<S>) -> Result<Flow> {
        let categories: Vec<String> = session
            .available_categories()
            .into_iter()
            .map(str::to_string)
            .collect();

        writeln!(self.output, "\nChoose a category:")?;
        for (idx, name) in categories.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, name)?;
        }

        let Some(input) = self.prompt("\nEnter category number or name: ")? else {
            return Ok(Flow::Stop);
        };
        let category = session.select_category(&input)?;

        writeln!(self.output, "\nAvailable questions in {}:", category)?;
        let listing: Vec<String> = session
            .store()
            .unused_in_category(&category)
            .into_iter()
            .map(|q| format!("- ₱{} (Difficulty {})", q.points(), q.difficulty()))
            .collect();
        for line in listing {
            writeln!(self.output, "{}", line)?;
        }

        let Some(input) = self.prompt("Enter money value: ")? else {
            return Ok(Flow::Stop);
        };
        let question = session.select_points(&input)?;
        let header = format!("\nFor ₱{}: {}", question.points(), question.prompt());
        let options: Vec<String> = question
            .options()
            .iter()
            .zip('A'..='Z')
            .map(|(option, letter)| format!("  {}. {}", letter, option))
            .collect();

        writeln!(self.output, "{}", header)?;
        for line in options {
            writeln!(self.output, "{}", line)?;
        }

        let Some(answer) = self.prompt("Your answer: ")? else {
            return Ok(Flow::Stop);
        };
        let outcome = session.submit_answer(&answer)?;

        if outcome.correct {
            writeln!(self.output, "✅ Correct!")?;
        } else {
            writeln!(self.output, "❌ Wrong! Correct answer: {}", outcome.correct_answer)?;
        }
        writeln!(self.output, "💰 Current Score: ₱{}", outcome.total)?;

        if outcome.game_over {
            writeln!(self.output, "\nYou've answered every question on the board!")?;
        }
        Ok(Flow::Continue)
    }

    /// 存檔失敗時仍然顯示最終分數
    fn finish<S: Storage>(&mut self, session: &mut GameSession<S>) -> Result<Option<FinalReport>> {
        writeln!(
            self.output,
            "\n🎉 Game Over! Final score: ₱{}",
            session.player().score()
        )?;

        match session.finish() {
            Ok(report) => {
                writeln!(self.output, "\n{}", format_standings(&report.standings))?;
                Ok(Some(report))
            }
            Err(e) => {
                tracing::error!("❌ Could not save the score: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                writeln!(self.output, "⚠️ {}", e.user_friendly_message())?;
                let standings = session.leaderboard().display();
                writeln!(self.output, "\n{}", standings)?;
                Ok(None)
            }
        }
    }
}
