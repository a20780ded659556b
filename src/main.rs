use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phonebook::book::DEFAULT_UPCOMING_DAYS;
use phonebook::config::Settings;
use phonebook::models::BirthdayDate;
use phonebook::AddressBook;

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Terminal assistant bot for contacts and birthdays",
    long_about = "An interactive assistant that keeps contacts, phone numbers and \
                  birthdays in memory for the length of a session. Type 'help' at \
                  the prompt for the list of commands."
)]
struct Cli {
    /// Reference date for the birthdays report (DD.MM.YYYY)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// How many days ahead the birthdays report looks
    #[arg(long, default_value_t = DEFAULT_UPCOMING_DAYS, value_parser = clap::value_parser!(i64).range(0..))]
    days: i64,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    BirthdayDate::parse(s)
        .map(|d| d.date())
        .map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stderr only, stdout carries the conversation
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::default().with_upcoming_days(cli.days);
    if let Some(today) = cli.today {
        settings = settings.with_today(today);
    }
    tracing::debug!(?settings, "Starting session");

    let mut book = AddressBook::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    phonebook::cli::run(stdin.lock(), &mut stdout, &mut book, &settings)?;

    Ok(())
}
