/* 3rd party libraries */
use clap::{value_parser, Arg, Command};
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::thread::Builder;

/* Custom libraries */
use elevator_dispatch::config::{self, Config};
use elevator_dispatch::print::format_snapshot;
use elevator_dispatch::simulation::{RequestGenerator, Simulation, Snapshot};
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::PickupRequest;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn cli() -> Command<'static> {
    Command::new("elevator_dispatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates a fleet of elevators serving random pickup requests")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file [default: config.toml if present]"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .short('e')
                .takes_value(true)
                .value_parser(value_parser!(usize))
                .help("Number of elevators in the fleet"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .short('f')
                .takes_value(true)
                .value_parser(value_parser!(i32))
                .help("Number of floors requests are drawn from"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .short('t')
                .takes_value(true)
                .value_parser(value_parser!(u64))
                .help("Stop after this many ticks, 0 runs forever"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .value_parser(value_parser!(u64))
                .help("Seed for the request generator"),
        )
        .arg(
            Arg::new("interval-ms")
                .long("interval-ms")
                .takes_value(true)
                .value_parser(value_parser!(u64))
                .help("Milliseconds between ticks"),
        )
        .arg(
            Arg::new("reprioritize")
                .long("reprioritize")
                .help("Serve riders nearest destination first"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Log snapshots as JSON lines"),
        )
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    // Load the configuration
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => unwrap_or_exit!(config::load_config(path)),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            unwrap_or_exit!(config::load_config(DEFAULT_CONFIG_PATH))
        }
        None => {
            info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    // Command line overrides
    if let Some(fleet_size) = matches.get_one::<usize>("elevators") {
        config.simulation.fleet_size = *fleet_size;
    }
    if let Some(n_floors) = matches.get_one::<i32>("floors") {
        config.simulation.n_floors = *n_floors;
    }
    if let Some(max_ticks) = matches.get_one::<u64>("ticks") {
        config.simulation.max_ticks = *max_ticks;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.simulation.seed = Some(*seed);
    }
    if let Some(interval) = matches.get_one::<u64>("interval-ms") {
        config.simulation.tick_interval_ms = *interval;
    }
    if matches.is_present("reprioritize") {
        config.dispatch.reprioritize_by_distance = true;
    }
    let json = matches.is_present("json");
    unwrap_or_exit!(config.validate());

    info!(
        "Starting {} elevators over {} floors",
        config.simulation.fleet_size, config.simulation.n_floors
    );

    // Initialize channels
    let (request_tx, request_rx) = cbc::unbounded::<Vec<PickupRequest>>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<Snapshot>();
    let (generator_terminate_tx, generator_terminate_rx) = cbc::unbounded::<()>();

    // Start the request generator
    let generator = RequestGenerator::new(&config.simulation);
    let generator_thread = unwrap_or_exit!(Builder::new()
        .name("request_generator".into())
        .spawn(move || generator.run(request_tx, generator_terminate_rx)));

    // Start the snapshot printer
    let printer_thread = unwrap_or_exit!(Builder::new().name("printer".into()).spawn(move || {
        for snapshot in snapshot_rx.iter() {
            if json {
                match serde_json::to_string(&snapshot) {
                    Ok(line) => info!("{}", line),
                    Err(e) => warn!("Failed to serialize snapshot {}: {}", snapshot.tick, e),
                }
            } else {
                info!("{}", format_snapshot(&snapshot));
            }
        }
    }));

    // Run the simulation on the main thread
    let simulation = Simulation::new(&config, request_rx, snapshot_tx, cbc::never());
    let final_state = unwrap_or_exit!(simulation.run());

    // Cleanup
    let _ = generator_terminate_tx.send(());
    if generator_thread.join().is_err() {
        error!("Request generator thread panicked");
    }
    if printer_thread.join().is_err() {
        error!("Printer thread panicked");
    }

    info!(
        "Finished with {} requests still waiting or riding",
        final_state.request_count()
    );
}
