use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use skyroute::loader::load_from_file;
use skyroute::report::{DEFAULT_SEED, sample_city_pairs, write_report};
use skyroute::{CityId, Flight, Objective, Planner, PlannerConfig, Query, Route, Time, TimeWindow};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;
use tabled::settings::Style;
use tracing::{Level, info};

#[derive(Parser)]
struct Args {
    /// Path to the flights file (text format, or a JSON array when it ends in .json)
    #[arg(short, long, value_name = "FILE", default_value = "data/flights.txt")]
    flights: PathBuf,

    /// Minimum time units between landing and boarding the next flight
    #[arg(short, long, default_value_t = PlannerConfig::default().min_layover)]
    min_layover: u64,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_flights(flights: &[&Flight]) {
    let mut table = tabled::Table::new(flights);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if flights.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn print_route(objective: Objective, route: &Route) {
    if route.is_empty() {
        println!("{}", format!("{}: no route found.", objective).yellow());
        return;
    }
    print_flights(&route.flights().iter().collect::<Vec<&Flight>>());
    println!(
        "{} {} flights, total fare {}, arrives {}, {} time units door to door",
        format!("{}:", objective).green().bold(),
        route.len(),
        route.total_fare(),
        route.arrival_time().unwrap_or(Time(0)),
        route.duration().unwrap_or(0)
    );
}

fn parse_arg<T: std::str::FromStr>(value: Option<&&str>, default: T) -> Option<T> {
    match value {
        Some(raw) => raw.parse::<T>().ok(),
        None => Some(default),
    }
}

fn run_report(planner: &Planner, cities: &[CityId], count: usize, path: &str, seed: u64) -> std::io::Result<(usize, Duration)> {
    let pairs = sample_city_pairs(cities, count, seed);
    let mut out = BufWriter::new(File::create(path)?);
    let total = write_report(planner, &pairs, TimeWindow::unbounded(), &mut out)?;
    Ok((pairs.len(), total))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let timetable = load_from_file(&args.flights)?;
    let cities = timetable.cities();
    let planner = Planner::with_config(
        timetable.flights,
        PlannerConfig {
            min_layover: args.min_layover,
        },
    );
    info!(
        flights = planner.flights().len(),
        connections = planner.graph().edge_count(),
        min_layover = planner.config().min_layover,
        "planner ready"
    );
    println!("Planner online. Loaded flights from {}", args.flights.display());

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "route".to_string(),
            "report".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let city = parts.get(1).and_then(|s| s.parse::<u32>().ok()).map(CityId);
                        let filtered_flights: Vec<&Flight> = planner.flights().iter()
                            .filter(|f| city.is_none_or(|c| f.origin_id == c || f.destination_id == c))
                            .collect();
                        if filtered_flights.is_empty() {
                            println!("No matching flights found.")
                        } else {
                            print_flights(&filtered_flights);
                        }
                    },
                    "route" => {
                        let objective = parts.get(1).map(|s| s.parse::<Objective>());
                        let from = parts.get(2).and_then(|s| s.parse::<u32>().ok());
                        let to = parts.get(3).and_then(|s| s.parse::<u32>().ok());
                        let t1 = parse_arg(parts.get(4), 0u64);
                        let t2 = parse_arg(parts.get(5), u64::MAX);
                        match (objective, from, to, t1, t2) {
                            (Some(Ok(objective)), Some(from), Some(to), Some(t1), Some(t2)) => {
                                let query = Query::new(CityId(from), CityId(to), Time(t1), Time(t2));
                                match planner.plan(&query, objective) {
                                    Ok(route) => print_route(objective, &route),
                                    Err(e) => println!("{}", format!("Invalid query: {}", e).red()),
                                }
                            },
                            (Some(Err(e)), ..) => println!("{}", e.red()),
                            _ => println!("Usage: route <lf|c|lfc> <from> <to> [t1] [t2]"),
                        }
                    },
                    "report" => {
                        let count = parts.get(1).and_then(|s| s.parse::<usize>().ok());
                        let seed = parse_arg(parts.get(3), DEFAULT_SEED);
                        if let (Some(count), Some(path), Some(seed)) = (count, parts.get(2), seed) {
                            match run_report(&planner, &cities, count, path, seed) {
                                Ok((pairs, total)) => println!("Wrote {} pairs to {} in {:.2} seconds.", pairs, path, total.as_secs_f64()),
                                Err(e) => println!("{}", format!("Report to {} failed: {}", path, e).red()),
                            }
                        } else {
                            println!("Usage: report <pairs> <file> [seed]");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [city]                          - List all flights in a table, or those touching <city>");
                        println!("  route <kind> <from> <to> [t1] [t2] - Plan a route within [t1, t2]: lf - least flights, earliest arrival, c - cheapest, lfc - least flights, cheapest");
                        println!("  report <n> <file> [seed]           - Plan all three routes for <n> sampled city pairs and write them to <file>");
                        println!("  help / ?                           - Show this help menu");
                        println!("  exit / quit                        - Exit the planner\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
