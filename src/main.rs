//! Quiz Invaders headless runner
//!
//! Plays one session over a question CSV with the demo autopilot and prints
//! the result. The browser build is driven through `quiz_invaders::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use quiz_invaders::consts::FRAME_DT;
    use quiz_invaders::questions::load_csv_file;
    use quiz_invaders::sim::{self, Autopilot, GameEvent, Session};
    use quiz_invaders::{OrderMode, Settings};

    /// Hard stop for runs that never resolve
    const MAX_TICKS: u64 = 1_000_000;

    #[derive(Parser, Debug)]
    #[command(name = "quiz-invaders")]
    #[command(about = "Play a Quiz Invaders session headlessly with the demo autopilot")]
    struct Cli {
        /// Question CSV (header row, then question,correct,wrong...)
        questions: PathBuf,
        /// Session seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Questions to play (0 = all); overrides the settings file
        #[arg(long)]
        limit: Option<usize>,
        /// Ask questions in file order instead of shuffling
        #[arg(long)]
        sequential: bool,
        /// First question (0-based) of a sequential round
        #[arg(long)]
        start: Option<usize>,
        /// Chance the autopilot answers correctly (0-1)
        #[arg(long, default_value_t = 0.8)]
        accuracy: f64,
        /// Settings JSON
        #[arg(long)]
        settings: Option<PathBuf>,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();

        let mut settings = match &cli.settings {
            Some(path) => Settings::load_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(limit) = cli.limit {
            settings.question_limit = limit;
        }
        if cli.sequential {
            settings.order = OrderMode::Sequential;
        }
        if let Some(start) = cli.start {
            settings.start_index = start;
        }

        let questions = load_csv_file(&cli.questions)
            .with_context(|| format!("loading questions from {}", cli.questions.display()))?;
        let questions = sim::share(questions);

        log::info!("Quiz Invaders (headless) starting with seed {}", cli.seed);
        let mut state = Session::new(settings, cli.seed);
        let mut pilot = Autopilot::new(cli.accuracy, cli.seed.wrapping_add(1));
        sim::boot(&mut state, &questions);

        let mut ticks = 0;
        while state.is_running() && ticks < MAX_TICKS {
            let input = pilot.plan(&state);
            sim::tick(&mut state, &input, FRAME_DT);
            ticks += 1;

            for event in state.drain_events() {
                match &event {
                    GameEvent::ObjectMoved { .. } => log::trace!("{event:?}"),
                    GameEvent::QuestionShown { index, question } => {
                        println!("Q{}: {question}", index + 1)
                    }
                    GameEvent::Feedback { correct } => {
                        println!("  {}", if *correct { "CORRECT!" } else { "WRONG!" })
                    }
                    GameEvent::SessionEnded {
                        grade,
                        score,
                        completed,
                    } => println!(
                        "{} - score {score:04}, rank {}",
                        if *completed { "COMPLETE" } else { "GAME OVER" },
                        grade.as_str()
                    ),
                    _ => log::debug!("{event:?}"),
                }
            }
        }

        if state.is_running() {
            log::warn!("Stopped after {MAX_TICKS} ticks without finishing");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
