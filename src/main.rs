mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use physique_rank::engine::ScoreEngine;
use physique_rank::input::{load_profile, load_records};
use physique_rank::ladder::rank::sort_order;
use physique_rank::ladder::{Dimension, Resolver, rank_records};
use physique_rank::model::athlete::{Athlete, Gender};
use physique_rank::model::discipline::{Discipline, MetricId};
use physique_rank::model::measurement::{LiftEntry, Measurement};
use physique_rank::model::profile::ScoringProfile;
use physique_rank::pipeline::stage1_bracket::resolve_bracket;
use physique_rank::report::json::{
    render_assessment_json, render_ladder_json, render_standards_json,
};
use physique_rank::report::text::{
    render_assessment_text, render_ladder_text, render_standards_text,
};
use physique_rank::report::{LadderReport, StandardsReport};
use physique_rank::standards::lookup_table;

#[derive(Parser, Debug)]
#[command(
    name = "physique-rank",
    version,
    about = "Percentile scoring, honor lock and leaderboard resolution for fitness assessments"
)]
struct Cli {
    /// JSON scoring profile overriding the built-in constants
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one assessment and print what would be persisted
    Score(ScoreArgs),
    /// Resolve and rank fetched leaderboard records for one dimension
    Ladder(LadderArgs),
    /// Print the standard tables that apply to an athlete
    Standards(StandardsArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
struct AthleteArgs {
    #[arg(long)]
    age: Option<u32>,
    #[arg(long, value_parser = parse_gender)]
    gender: Option<Gender>,
    /// Height in cm
    #[arg(long)]
    height: Option<f64>,
    /// Body weight in kg
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    verified: bool,
}

impl AthleteArgs {
    fn to_athlete(&self) -> Athlete {
        Athlete {
            age: self.age,
            gender: self.gender,
            height_cm: self.height,
            weight_kg: self.weight,
            verified: self.verified,
        }
    }
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[command(flatten)]
    athlete: AthleteArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    test: TestCommand,
}

#[derive(Subcommand, Debug)]
enum TestCommand {
    /// Skeletal-muscle mass from a body-composition scan
    Muscle {
        /// Skeletal-muscle mass in kg
        #[arg(long)]
        smm: f64,
    },
    /// Fat-free mass index
    Ffmi {
        #[arg(long = "body-fat")]
        body_fat: f64,
    },
    /// Explosive power; any subset of the three tests
    Power {
        /// Vertical jump in cm
        #[arg(long)]
        vertical: Option<f64>,
        /// Standing long jump in cm
        #[arg(long)]
        broad: Option<f64>,
        /// 100 m sprint in seconds
        #[arg(long)]
        sprint: Option<f64>,
    },
    /// Cooper 12-minute run
    Cardio {
        /// Distance in metres
        #[arg(long)]
        distance: f64,
    },
    /// 5 km run time
    Run5k {
        #[arg(long)]
        minutes: u32,
        #[arg(long, default_value_t = 0)]
        seconds: u32,
    },
    /// Strength lifts as LIFT:WEIGHTxREPS, e.g. squat:120x5
    Strength {
        #[arg(long = "lift", value_parser = parse_lift, required = true)]
        lifts: Vec<LiftEntry>,
    },
}

impl TestCommand {
    fn to_measurement(&self) -> Measurement {
        match self {
            Self::Muscle { smm } => Measurement::Muscle { smm_kg: *smm },
            Self::Ffmi { body_fat } => Measurement::Ffmi {
                body_fat_pct: *body_fat,
            },
            Self::Power {
                vertical,
                broad,
                sprint,
            } => Measurement::Power {
                vertical_jump_cm: *vertical,
                standing_long_jump_cm: *broad,
                sprint_s: *sprint,
            },
            Self::Cardio { distance } => Measurement::Cardio {
                distance_m: *distance,
            },
            Self::Run5k { minutes, seconds } => Measurement::run_5k(*minutes, *seconds),
            Self::Strength { lifts } => Measurement::Strength {
                lifts: lifts.clone(),
            },
        }
    }
}

#[derive(Args, Debug)]
struct LadderArgs {
    /// JSON array of fetched user records (or an object with a `users` array)
    #[arg(long)]
    records: PathBuf,
    #[arg(long, default_value = "ladderScore")]
    dimension: String,
    #[arg(long)]
    sub: Option<String>,
    /// Only print the first N rows
    #[arg(long)]
    limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct StandardsArgs {
    #[arg(long, value_parser = parse_discipline)]
    discipline: Discipline,
    #[arg(long)]
    age: u32,
    #[arg(long, value_parser = parse_gender)]
    gender: Gender,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let profile = match &cli.profile {
        Some(path) => load_profile(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => ScoringProfile::default_v1(),
    };
    let engine = ScoreEngine::new(profile);

    let output = match cli.command {
        Command::Score(args) => run_score(&engine, &args)?,
        Command::Ladder(args) => run_ladder(engine, &args)?,
        Command::Standards(args) => run_standards(&args)?,
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_score(engine: &ScoreEngine, args: &ScoreArgs) -> Result<String, String> {
    let athlete = args.athlete.to_athlete();
    let measurement = args.test.to_measurement();
    let assessment = engine
        .score(&athlete, &measurement)
        .map_err(|e| e.to_string())?;
    info!(
        discipline = %assessment.discipline,
        persisted = assessment.composite.persisted(),
        "assessment scored"
    );
    match args.format {
        OutputFormat::Text => Ok(render_assessment_text(&assessment)),
        OutputFormat::Json => {
            let bundle = assessment.persist_bundle(&athlete, &measurement);
            render_assessment_json(&assessment, &bundle).map_err(|e| e.to_string())
        }
    }
}

fn run_ladder(engine: ScoreEngine, args: &LadderArgs) -> Result<String, String> {
    let dimension = Dimension::parse(&args.dimension)
        .ok_or_else(|| format!("unknown dimension: {}", args.dimension))?;
    let sub_filter = dimension.sub_filter(args.sub.as_deref());
    let records = load_records(&args.records)
        .map_err(|e| format!("{}: {e}", args.records.display()))?;
    info!(records = records.len(), dimension = dimension.as_str(), "ranking leaderboard");

    let resolver = Resolver::new(engine);
    let mut rows = rank_records(&resolver, &records, dimension, sub_filter);
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    let report = LadderReport {
        dimension,
        sub_filter,
        order: sort_order(dimension, sub_filter),
        rows: &rows,
    };
    match args.format {
        OutputFormat::Text => Ok(render_ladder_text(&report)),
        OutputFormat::Json => render_ladder_json(&report).map_err(|e| e.to_string()),
    }
}

fn run_standards(args: &StandardsArgs) -> Result<String, String> {
    let bracket = resolve_bracket(args.discipline, args.age).map_err(|e| e.to_string())?;
    let tables = args
        .discipline
        .metrics()
        .iter()
        .map(|metric| {
            lookup_table(*metric, bracket, args.gender)
                .map(|table| (*metric, table))
                .ok_or_else(|| format!("no {metric} standard for bracket {}", bracket.key))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let report = StandardsReport {
        discipline: args.discipline,
        bracket: bracket.key,
        gender: args.gender,
        tables,
    };
    match args.format {
        OutputFormat::Text => Ok(render_standards_text(&report)),
        OutputFormat::Json => render_standards_json(&report).map_err(|e| e.to_string()),
    }
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    Gender::parse(value).ok_or_else(|| format!("unknown gender: {value}"))
}

fn parse_discipline(value: &str) -> Result<Discipline, String> {
    Discipline::parse(value).ok_or_else(|| format!("unknown discipline: {value}"))
}

fn parse_lift(value: &str) -> Result<LiftEntry, String> {
    let (name, rest) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LIFT:WEIGHTxREPS, got {value}"))?;
    let lift = MetricId::parse(name)
        .filter(|m| m.is_lift())
        .ok_or_else(|| format!("unknown lift: {name}"))?;
    let (weight, reps) = match rest.split_once(|c| c == 'x' || c == 'X') {
        Some((weight, reps)) => (weight, reps),
        None => (rest, "1"),
    };
    let weight_kg = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid lift weight: {weight}"))?;
    let reps = reps
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid rep count: {reps}"))?;
    Ok(LiftEntry {
        lift,
        weight_kg,
        reps,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
