use clap::Parser;
use contest_ratings::config::ProcessorConfig;
use contest_ratings::data_processing::{read_rank_file, read_store, write_store};
use contest_ratings::error::ProcessError;
use contest_ratings::processing::process_contest;
use contest_ratings::summary::print_ratings;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    about = "Applies one contest's results to the player store",
    long_about = "Reads a rank file (one handle per line, winner first), rates everyone \
    whose handle on CONTEST_SITE is registered, and decays players who have been \
    inactive for too many contests."
)]
struct Args {
    /// Rank file, one handle per line in finishing order
    rank_file: PathBuf,

    /// Contest site whose handles appear in the rank file
    contest_site: String,

    /// Player store to update in place (overrides the config file)
    #[arg(short, long, env = "PLAYER_STORE")]
    store: Option<PathBuf>,

    /// JSON5 processor configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the CSV leaderboard after processing
    #[arg(short, long)]
    leaderboard: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), ProcessError> {
    let mut config = match &args.config {
        Some(path) => ProcessorConfig::from_file(path)?,
        None => ProcessorConfig::default(),
    };
    if let Some(store) = args.store {
        config.store_path = store;
    }
    if let Some(leaderboard) = args.leaderboard {
        config.leaderboard_path = Some(leaderboard);
    }
    tracing::debug!("Running with {:?}", config);

    let rank_list = read_rank_file(&args.rank_file)?;
    let mut store = read_store(&config.store_path)?;
    let system = config.rating_system();

    process_contest(
        &mut store,
        &rank_list,
        &args.contest_site,
        &system,
        config.decay,
    )?;
    write_store(&store, &config.store_path)?;

    if let Some(path) = &config.leaderboard_path {
        print_ratings(&store, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    if !args.rank_file.is_file() {
        tracing::error!(
            "Invalid file path for rank file: {:?}\nUsage: process_contest <RANK_FILE> <CONTEST_SITE>",
            args.rank_file
        );
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => {
            tracing::info!("Ratings processed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.source() {
                Some(source) => tracing::error!("{}: {}", err, source),
                None => tracing::error!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}
