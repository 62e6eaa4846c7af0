// BrackeTTY: Stack vs Queue Valid Parentheses Visualizer

use std::io;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bracketty::config::Config;
use bracketty::logging::{self, LogTarget};
use bracketty::trace::{compare, parse_brackets, validate, Mode};
use bracketty::ui::App;

/// Non-interactive output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Headless {
    Json,
    Plain,
}

struct Args {
    mode: Option<Mode>,
    /// `None` opens the TUI
    headless: Option<Headless>,
    input: Option<String>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--stack|--queue] [--json|--plain] [INPUT]", program_name);
    eprintln!();
    eprintln!("INPUT may only contain the characters ()[]{{}}.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"([])\"            # Step through the trace interactively", program_name);
    eprintln!("  {} --queue \"([)]\"    # Same, using a queue", program_name);
    eprintln!("  {} --json \"(]\"       # Print the trace as JSON", program_name);
    eprintln!("  {} --plain \"{{[()]}}\"  # Print both traces as text", program_name);
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("bracketty");

    let mut parsed = Args {
        mode: None,
        headless: None,
        input: None,
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--stack" => parsed.mode = Some(Mode::Stack),
            "--queue" => parsed.mode = Some(Mode::Queue),
            "--json" => parsed.headless = Some(Headless::Json),
            "--plain" => parsed.headless = Some(Headless::Plain),
            "-h" | "--help" => {
                print_usage(program_name);
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            input => {
                if parsed.input.is_some() {
                    eprintln!("Error: More than one input given");
                    eprintln!();
                    print_usage(program_name);
                    std::process::exit(1);
                }
                parsed.input = Some(input.to_string());
            }
        }
    }

    parsed
}

fn run_headless(config: &Config, args: &Args, format: Headless) -> anyhow::Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.initial_input.clone());

    match format {
        Headless::Json => {
            let result = validate(&input, args.mode.unwrap_or(config.mode))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Headless::Plain => {
            let brackets = parse_brackets(&input)?;
            let comparison = compare(&brackets);
            println!("{}", comparison.stack);
            println!();
            println!("{}", comparison.queue);
            if comparison.diverges() {
                println!();
                println!("Stack and queue disagree on \"{}\".", input);
            }
        }
    }

    Ok(())
}

fn run_tui(config: Config, input: &str) -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config, input);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let target = match args.headless {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File,
    };
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(&config, target);

    if let Some(format) = args.headless {
        return run_headless(&config, &args, format);
    }

    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.initial_input.clone());
    tracing::info!(input = %input, mode = %config.mode, "starting visualizer");

    run_tui(config, &input)
}
