use std::io::Write as _;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use resilience_core::model::{EventType, Scenario};
use resilience_workflow::{HttpEngine, Orchestrator, WorkflowError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod panels;
mod templates;

#[derive(Debug, Parser)]
#[command(
    name = "resiliencectl",
    version,
    about = "Operator console for the weather resilience workflow"
)]
struct Cli {
    /// Engine base URL hosting the scenario, mitigation and dispatch
    /// endpoints.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    engine_url: String,

    /// Pause between a successful step and the stage advance, in
    /// milliseconds.
    #[arg(long, default_value_t = 500)]
    settle_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let engine = HttpEngine::new(cli.engine_url.clone());
    let orchestrator = Orchestrator::new(engine, Duration::from_millis(cli.settle_delay_ms));

    info!("console ready; engine={}", cli.engine_url);
    println!("Extreme weather resilience console. Type `help` for commands.");
    println!();
    print!("{}", panels::render(&orchestrator.snapshot()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "help" => print_help(),
            "templates" => print!("{}", panels::templates_panel()),
            "status" => print!("{}", panels::render(&orchestrator.snapshot())),
            "map" => print!("{}", panels::map_panel(&orchestrator.snapshot())),
            "run" => match parse_run(&args) {
                Ok(scenario) => report(orchestrator.run_scenario(scenario).await, &orchestrator),
                Err(msg) => println!("{msg}"),
            },
            "mitigate" => report(orchestrator.request_mitigation().await, &orchestrator),
            "dispatch" => report(orchestrator.execute_dispatch().await, &orchestrator),
            "reset" => {
                orchestrator.reset();
                print!("{}", panels::render(&orchestrator.snapshot()));
            }
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; type `help`"),
        }
    }

    Ok(())
}

fn report(result: Result<(), WorkflowError>, orchestrator: &Orchestrator<HttpEngine>) {
    match result {
        Ok(()) => print!("{}", panels::render(&orchestrator.snapshot())),
        Err(e) => println!("error: {:#}", anyhow::Error::new(e)),
    }
}

fn parse_run(args: &[&str]) -> Result<Scenario, String> {
    const USAGE: &str = "usage: run <template-id> | run <location> <heatwave|flood> <hours> [start-rfc3339]";
    match args {
        [] => Err(USAGE.into()),
        [id] => templates::by_id(id)
            .map(|t| t.scenario_now())
            .ok_or_else(|| format!("unknown template `{id}`; see `templates`")),
        [location, event, hours, rest @ ..] => {
            let event_type = match *event {
                "heatwave" => EventType::Heatwave,
                "flood" => EventType::Flood,
                other => return Err(format!("unknown event type `{other}` (heatwave|flood)")),
            };
            let duration_hours: u32 = hours
                .parse()
                .map_err(|_| format!("invalid duration `{hours}`"))?;
            if duration_hours == 0 {
                return Err("duration must be at least 1 hour".into());
            }
            let start_date = match rest {
                [] => Utc::now(),
                [date, ..] => date
                    .parse::<DateTime<Utc>>()
                    .map_err(|_| format!("invalid start date `{date}` (RFC 3339)"))?,
            };
            Ok(Scenario {
                location: location.to_string(),
                event_type,
                start_date,
                duration_hours,
            })
        }
        _ => Err(USAGE.into()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  templates                         list predefined scenarios");
    println!("  run <template-id>                 run a predefined scenario");
    println!("  run <location> <event> <hours>    run a custom scenario (event: heatwave|flood)");
    println!("  mitigate                          request the AI mitigation plan");
    println!("  dispatch                          submit the plan to the service network");
    println!("  map                               render the asset map");
    println!("  status                            render the current stage panel");
    println!("  reset                             restart the workflow");
    println!("  quit                              exit");
}
