use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::error;
use pokerbet::config::GameConfig;
use pokerbet::money::{Amount, Risk};
use pokerbet::settle::{Dealer, SettleRequest};
use pokerbet::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about = "Bet on a single five-card poker hand")]
struct Cli {
    /// JSON game config (limits, payout table, starting balance).
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Seed the dealer for a reproducible sequence of hands.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Override the starting balance from the config.
    #[clap(long, short)]
    balance: Option<Amount>,
    /// Settle one round, print it as JSON and exit.
    #[clap(long)]
    json: bool,
    /// Bet for the JSON round. Defaults to the minimum bet.
    #[clap(long)]
    bet: Option<Amount>,
    /// Risk for the JSON round.
    #[clap(long, default_value = "1")]
    risk: Risk,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn settle_once(cli: &Cli, config: &GameConfig) -> Result<(), Box<dyn Error>> {
    let mut dealer = match cli.seed {
        Some(seed) => Dealer::seeded(config, seed),
        None => Dealer::from_entropy(config),
    };
    let req = SettleRequest { amount: cli.bet.unwrap_or(config.limits.min_bet()), risk: cli.risk };
    let resp = dealer.settle(&req)?;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}

fn run_tui(config: GameConfig, seed: Option<u64>) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config, seed);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(balance) = cli.balance {
        config.starting_balance = balance;
        config.validate()?;
    }

    if cli.json || !io::stdout().is_terminal() {
        return settle_once(&cli, &config);
    }
    run_tui(config, cli.seed)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
