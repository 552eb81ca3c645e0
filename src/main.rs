use std::io::Write;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use qadesk::app::App;
use qadesk::cli::Args;
use qadesk::config::{Config, load_config};
use qadesk::navigation::Route;
use qadesk::pages::Submission;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    qadesk::logging::init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    if args.list_suggestions {
        return list_suggestions(&config);
    }

    let start = match args.route {
        Some(route) => route,
        None => config.navigation.start_route.parse::<Route>()?,
    };
    let mut app = App::new(&config, start);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| run(terminal, &mut app));

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    if args.print_transcript {
        print_transcript(&app.submissions())?;
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn list_suggestions(config: &Config) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for (i, suggestion) in config.catalog().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, suggestion.display_text())?;
    }
    Ok(())
}

fn print_transcript(submissions: &[&Submission]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for submission in submissions {
        writeln!(out, "{}", submission.to_json()?)?;
    }
    Ok(())
}
