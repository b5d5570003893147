use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyhopper::config::GameConfig;
use skyhopper::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use skyhopper::core::session::GameSession;
use skyhopper::input::{self, InputResult};
use skyhopper::{build_info, ui};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyhopper {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Sky Hopper - a Flappy Bird clone for the terminal\n");
                println!("Usage: skyhopper\n");
                println!("Controls:");
                println!("  Space / Up / Enter / left click   Flap");
                println!("  Esc / q                           Quit");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyhopper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid game config: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal even if the game loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut session = GameSession::new(config, &mut rng)?;
    let mut best_score = 0u32;
    let mut last_tick = Instant::now();

    loop {
        best_score = best_score.max(session.score);

        terminal.draw(|frame| {
            let area = frame.size();
            ui::render_game(frame, area, &session, best_score);
        })?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => match input::handle_key(key, &mut session) {
                    InputResult::Continue => {}
                    InputResult::Restart => {
                        // A new game is a whole new set of entities, not a
                        // resumed session.
                        session = GameSession::new(config, &mut rng)?;
                        last_tick = Instant::now();
                    }
                    InputResult::Quit => break,
                },
                Event::Mouse(mouse) => {
                    input::handle_mouse(mouse, &mut session);
                }
                _ => {}
            }
        }

        // Fixed-cadence tick; the collision transition stops the source.
        if !session.is_over() && last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            session.tick(&mut rng);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
