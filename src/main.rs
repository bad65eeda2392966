mod period;
mod plan;
mod printer;
mod scheduler;
mod tasks;

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveTime, Weekday};
use clap::{Parser, ValueEnum};
use tokio::net::TcpStream;
use tokio::time::MissedTickBehavior;

use printer::EscposPrinter;
use scheduler::Scheduler;
use tasks::Category;

/// Network address of the receipt printer in the hallway.
const PRINTER_ADDR: &str = "192.168.188.60:9100";

#[derive(Parser)]
#[command(
    name = "putzplan",
    version,
    about = "Prints the household cleaning schedule to a receipt printer"
)]
struct Cli {
    /// Immediately print the requested cleaning plan(s) and exit
    #[arg(long = "print", value_name = "SCOPE", value_enum)]
    print: Option<Scope>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    Week,
    Month,
    Quarter,
    /// Everything due today under the automatic date rules
    All,
}

impl Scope {
    fn selector(self) -> Option<Category> {
        match self {
            Scope::Week => Some(Category::Week),
            Scope::Month => Some(Category::Month),
            Scope::Quarter => Some(Category::Quarter),
            Scope::All => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.print {
        // One immediate pass; print failures are logged, never a non-zero exit.
        Some(scope) => run_pass(scope.selector()).await,
        None => run_scheduled().await,
    }
    Ok(())
}

/// Register the weekly trigger and poll it once a minute, forever.
async fn run_scheduled() {
    let now = Local::now();
    let mut scheduler = Scheduler::new();
    if let Some(trigger) = NaiveTime::from_hms_opt(11, 0, 0) {
        scheduler.every(Weekday::Mon, trigger, now.naive_local());
    }

    tracing::info!("Started at {}", now.format("%Y-%m-%d %H:%M:%S"));
    tracing::info!("Scheduled to print the cleaning plan every Monday at 11:00");
    tracing::info!("Use --print [week|month|quarter|all] to print immediately");

    let mut poll = tokio::time::interval(Duration::from_secs(60));
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        poll.tick().await;
        if scheduler.pending(Local::now().naive_local()) {
            run_pass(None).await;
        }
    }
}

/// One best-effort print pass. Connection and print errors are reported to
/// the console and swallowed; tickets emitted before a failure stay printed.
async fn run_pass(selector: Option<Category>) {
    let mut printer: EscposPrinter<TcpStream> = match EscposPrinter::connect(PRINTER_ADDR).await {
        Ok(printer) => printer,
        Err(e) => {
            tracing::error!("Error printing cleaning plan: {e:#}");
            return;
        }
    };

    let outcome = plan::print_plan(&mut printer, selector, Local::now().date_naive()).await;
    match outcome.error {
        None => tracing::info!("Successfully printed {} cleaning tasks", outcome.printed),
        Some(e) => tracing::error!(
            "Error printing cleaning plan after {} tasks: {e:#}",
            outcome.printed
        ),
    }
}
