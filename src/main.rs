//! Main entry point for the Top Eleven matchday runner
//!
//! Generates a league of clubs, picks their starting elevens and plays one
//! matchday through the concurrent runner, printing the results.

use anyhow::{anyhow, Result};
use bigdecimal::BigDecimal;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use top_eleven_engine::club::{Manager, Stadium};
use top_eleven_engine::competition::DOMESTIC_PARTICIPANTS;
use top_eleven_engine::config::{validate_config, AppConfig};
use top_eleven_engine::simulation::MatchdayReport;
use top_eleven_engine::{
    Club, ClubId, Fixture, Game, MatchSimulator, MatchdayRunner, PlayerGenerator,
    PositionalRatingCalculator, SquadAggregator,
};
use tracing::{error, info};

/// Country the generated league belongs to
const COUNTRY: &str = "England";

/// Top Eleven - Football club rating and match engine
#[derive(Parser)]
#[command(
    name = "top-eleven",
    version,
    about = "Simulate a matchday of generated football clubs",
    long_about = "Top Eleven generates clubs with random squads, selects a 4-4-2 starting \
                 eleven for each, pairs them into fixtures and resolves every match \
                 concurrently from the clubs' skill levels."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Seed override
    #[arg(long, value_name = "SEED", help = "Seed for squad generation and matches")]
    seed: Option<u64>,

    /// Number of clubs
    #[arg(long, value_name = "COUNT", default_value_t = 8, help = "Number of clubs (even, 2 to 20)")]
    clubs: usize,

    /// Play every fixture at a neutral venue
    #[arg(long, help = "Play all fixtures at neutral venues")]
    neutral: bool,

    /// Print results as JSON
    #[arg(long, help = "Print the matchday report as JSON")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without playing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with engine settings
fn display_startup_banner(config: &AppConfig, clubs: usize, seed: u64) {
    info!("⚽ Top Eleven Match Engine");
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Clubs: {}", clubs);
    info!("   Seed: {}", seed);
    info!(
        "   Venue coefficients: home {} / away {}",
        config.simulation.home_coefficient, config.simulation.away_coefficient
    );
    info!("   Scoring rate: {}", config.simulation.scoring_rate);
    info!(
        "   Stat range: {}-{}",
        config.generation.min_stat, config.generation.max_stat
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }

    validate_club_count(args.clubs)?;
    validate_config(&config)?;
    Ok(config)
}

/// Every club plays, and every club must fit in one league
fn validate_club_count(clubs: usize) -> Result<()> {
    if clubs < 2 || clubs % 2 != 0 || clubs > DOMESTIC_PARTICIPANTS {
        return Err(anyhow!(
            "Club count must be even and between 2 and {}, got {}",
            DOMESTIC_PARTICIPANTS,
            clubs
        ));
    }
    Ok(())
}

/// Build a one-level world with generated clubs entered in its league
fn build_game(
    config: &AppConfig,
    calculator: &Arc<PositionalRatingCalculator>,
    clubs: usize,
    seed: u64,
) -> Result<Game> {
    let generator = PlayerGenerator::new(config.generation.clone(), calculator.clone())?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut game = Game::new(vec![COUNTRY.to_string()]);
    let level = game.add_new_level();

    for i in 1..=clubs {
        let mut club = Club::new(
            format!("{} FC {}", COUNTRY, i),
            Stadium::new(format!("Stadium {}", i), BigDecimal::from(5_000)),
        );
        for player in generator.generate_squad(&mut rng, COUNTRY) {
            club.add_player(player)?;
        }
        club.auto_select_starting_eleven(calculator.as_ref())?;

        let club_id = game.add_club(club);
        game.add_manager(Manager::new(format!("Manager {}", i), club_id))?;
        if let Some(league) = game.league_mut(COUNTRY, level) {
            league.add_participant(club_id)?;
        }
    }

    Ok(game)
}

fn club_name<'a>(game: &'a Game, id: &ClubId) -> &'a str {
    game.club(id)
        .map(|c| c.name.as_str())
        .unwrap_or("<unknown>")
}

fn print_report(game: &Game, report: &MatchdayReport) {
    let name = |id: &ClubId| club_name(game, id);

    for result in &report.results {
        println!(
            "{:<14} {:>5}  {:<14} ({}, skill {} vs {})",
            name(&result.fixture.home),
            result.score.to_string(),
            name(&result.fixture.away),
            result.fixture.venue,
            result.home_skill.round(2),
            result.away_skill.round(2)
        );
    }

    for skipped in &report.skipped {
        println!(
            "{} vs {} skipped: {}",
            name(&skipped.fixture.home),
            name(&skipped.fixture.away),
            skipped.reason
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let seed = config.simulation.seed.unwrap_or_else(rand::random);

    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config, args.clubs, seed);
        info!("Dry run completed - exiting without playing");
        return Ok(());
    }

    display_startup_banner(&config, args.clubs, seed);

    let calculator = Arc::new(PositionalRatingCalculator::new(config.rating.clone())?);
    let simulator = Arc::new(MatchSimulator::new(config.simulation.clone())?);
    let runner = MatchdayRunner::new(simulator, SquadAggregator::new(calculator.clone()));

    let game = match build_game(&config, &calculator, args.clubs, seed) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to build clubs: {}", e);
            std::process::exit(1);
        }
    };

    let fixtures: Vec<Fixture> = game
        .clubs()
        .chunks(2)
        .map(|pair| {
            if args.neutral {
                Fixture::neutral(pair[0].id, pair[1].id)
            } else {
                Fixture::new(pair[0].id, pair[1].id)
            }
        })
        .collect();

    info!("Playing {} fixtures...", fixtures.len());
    let report = runner.run(game.clubs(), &fixtures, seed).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&game, &report);
    }

    Ok(())
}
