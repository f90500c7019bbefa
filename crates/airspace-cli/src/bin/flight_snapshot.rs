use airspace_cli::{format_flight_row, format_summary_tiles};
use airspace_core::generator::{DEFAULT_FLIGHT_COUNT, DEFAULT_ID_PREFIX, DEFAULT_SEED};
use airspace_core::{
    apply_filter, Airline, FlightFilter, FlightGenerator, FlightStatus, GeneratorConfig,
    ReferenceData, TimeWindow,
};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate one synthetic batch and print the filtered view", long_about = None)]
struct Args {
    /// Number of flights to generate
    #[arg(long, default_value_t = DEFAULT_FLIGHT_COUNT)]
    count: usize,

    /// Random seed; the same seed reproduces the same batch
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Flight identifier prefix
    #[arg(long, default_value = DEFAULT_ID_PREFIX)]
    prefix: String,

    /// on-time, delayed or rerouted
    #[arg(long, default_value = "on-time")]
    status: FlightStatus,

    /// AirKenya, "Ethiopian Airlines", RwandAir or "Precision Air"
    #[arg(long, default_value = "AirKenya")]
    airline: Airline,

    /// Lower bound of the time window, in minutes ago
    #[arg(long, default_value_t = 0)]
    from: u32,

    /// Upper bound of the time window, in minutes ago
    #[arg(long, default_value_t = 180)]
    to: u32,

    /// Print the filtered batch and summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reference = ReferenceData::builtin();
    let config = GeneratorConfig {
        id_prefix: args.prefix,
        ..GeneratorConfig::new(args.count, args.seed)
    };
    let window = TimeWindow::new(args.from, args.to)?;
    let filter = FlightFilter::new(args.status, args.airline, window);

    let now = Utc::now();
    let batch = FlightGenerator::new(&reference, config).generate_at(now)?;
    let filtered = apply_filter(&batch, &filter, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!(
        "Generated {} flights (seed {}), showing {} {} in [{}, {}] min ago",
        batch.len(),
        args.seed,
        filter.status,
        filter.airline,
        window.lo(),
        window.hi()
    );
    for flight in &filtered.flights {
        println!("{}", format_flight_row(flight));
    }
    println!();
    println!("{}", format_summary_tiles(&filtered.summary));

    Ok(())
}
