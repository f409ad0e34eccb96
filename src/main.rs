use careertwin::prelude::*;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find career twins for a profile and print recommendations
#[derive(Parser, Debug)]
#[command(name = "careertwin")]
#[command(about = "Career-twin matching over a JSON profile corpus", long_about = None)]
struct Args {
    /// Path to a JSON array of profile records
    #[arg(short, long)]
    corpus: PathBuf,

    /// Id of the corpus profile to query
    #[arg(short, long)]
    query_id: String,

    /// Number of twins to request
    #[arg(short, long, default_value_t = 5)]
    k: usize,

    /// Maximum skill recommendations to return
    #[arg(long, default_value_t = 10)]
    top_skills: usize,

    /// Emit the raw result as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting careertwin v{}", env!("CARGO_PKG_VERSION"));
    info!("Corpus file: {:?}", args.corpus);

    let reader = BufReader::new(File::open(&args.corpus)?);
    let profiles: Vec<ProfileRecord> = serde_json::from_reader(reader)?;
    info!("Read {} profiles", profiles.len());

    let config = MatchConfig {
        engine: EngineConfig {
            max_skill_recommendations: args.top_skills,
            ..EngineConfig::default()
        },
        ..MatchConfig::default()
    };
    let service = MatchingService::load_corpus(profiles, config)?;

    let query = service
        .get(&args.query_id)
        .ok_or_else(|| anyhow::anyhow!("profile '{}' not found in corpus", args.query_id))?
        .clone();

    let result = service.find_career_twins(&query, args.k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&service, &query, &result)?;
    Ok(())
}

fn print_report(
    service: &MatchingService,
    query: &ProfileRecord,
    result: &TwinSearchResult,
) -> anyhow::Result<()> {
    println!(
        "Career twins for '{}' ({}, {}) - {} of {} requested",
        query.title, query.seniority, query.id, result.k_actual, result.k_requested
    );

    for m in &result.matches {
        let explanation = service.explain_match(query, &m.profile_id)?;
        let Some(twin) = service.get(&m.profile_id) else {
            continue;
        };
        println!(
            "  #{} {} '{}' distance={:.4} strength={} shared=[{}]",
            m.rank,
            twin.id,
            twin.title,
            m.distance,
            explanation.strength,
            explanation.shared_skills.join(", "),
        );
    }

    match result.recommendations.evidence {
        Evidence::NoEvidence => {
            println!("No similar profiles found - no recommendations.");
            return Ok(());
        }
        Evidence::Found { twins } => {
            println!("Recommendations from {twins} twins:");
        }
    }

    if result.recommendations.skill_recommendations.is_empty() {
        println!("  No skill gaps against this neighborhood.");
    } else {
        println!("  Skills to acquire:");
        for rec in &result.recommendations.skill_recommendations {
            println!(
                "    {} ({} of {} twins, {:.0}%)",
                rec.skill,
                rec.support_count,
                result.k_actual,
                rec.support_ratio * 100.0
            );
        }
    }

    if result.recommendations.next_move_predictions.is_empty() {
        println!("  No subsequent transitions observed among twins.");
    } else {
        println!("  Likely next moves:");
        for prediction in &result.recommendations.next_move_predictions {
            println!(
                "    {} ({}) confidence {:.0}%",
                prediction.title,
                prediction.seniority,
                prediction.confidence * 100.0
            );
        }
    }

    Ok(())
}
