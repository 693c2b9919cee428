use std::io;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use study_coach::database::SqliteStore;
use study_coach::export::json::{export_log_to_path, load_catalog, load_tips};
use study_coach::export::progress_report;
use study_coach::models::pick_tip;
use study_coach::{Config, GradedAnswer, Profile, StudyCoach, config};

/// Daily three-question study coach with spaced review
#[derive(Parser)]
#[command(name = "study-coach")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// SQLite database holding profile, reviews and logs
    #[arg(long, global = true, env = "STUDY_COACH_DB", default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Question bank JSON file
    #[arg(long, global = true, env = "STUDY_COACH_CATALOG", default_value = config::DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Tips JSON file
    #[arg(long, global = true, env = "STUDY_COACH_TIPS", default_value = config::DEFAULT_TIPS_PATH)]
    tips: PathBuf,

    /// Use this day instead of the local date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_day)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the learner profile and start from a clean history
    Init {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long)]
        exam: String,
        #[arg(long, value_parser = parse_day)]
        exam_date: NaiveDate,
        /// Minutes per day
        #[arg(long, default_value_t = 30)]
        daily: u32,
        #[arg(long, default_value = "21:00")]
        notify_at: String,
    },

    /// Show today's plan and days left until the exam
    Plan,

    /// Pick today's three questions
    Start,

    /// Grade answers given as ID=CHOICE (CHOICE is 1-based, '-' for unanswered)
    Answer {
        #[arg(required = true, value_parser = parse_answer)]
        answers: Vec<GradedAnswer>,
    },

    /// Print the progress report or write the full log as JSON
    Export {
        /// Number of recent attempts to include
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Delete all stored state
    Reset,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn parse_answer(s: &str) -> Result<GradedAnswer, String> {
    let (id, choice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=CHOICE, got '{}'", s))?;
    let choice = match choice.trim() {
        "" | "-" => None,
        n => {
            let n: usize = n.parse().map_err(|_| format!("invalid choice '{}'", n))?;
            // Choices are shown 1-based; 0 cannot match any index
            n.checked_sub(1)
        }
    };
    Ok(GradedAnswer::new(id.trim(), choice))
}

fn main() -> study_coach::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::default()
        .with_db_path(&cli.db)
        .with_catalog_path(&cli.catalog)
        .with_tips_path(&cli.tips);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    run(cli.command, &config, today)
}

fn run(command: Commands, config: &Config, today: NaiveDate) -> study_coach::Result<()> {
    let store = SqliteStore::open(&config.db_path)?;

    // Only sessions need the question bank
    let bank = match command {
        Commands::Start | Commands::Answer { .. } => load_catalog(&config.catalog_path)?,
        _ => Default::default(),
    };
    let coach = StudyCoach::new(&store, &bank);

    match command {
        Commands::Init {
            name,
            exam,
            exam_date,
            daily,
            notify_at,
        } => {
            let profile = Profile::new(&name, exam, exam_date, daily, notify_at);
            coach.onboard(&profile)?;
            println!("{}", profile.greeting());
        }
        Commands::Plan => match coach.profile()? {
            Some(profile) => {
                let plan = profile.plan();
                println!("{}", profile.greeting());
                println!("Today's plan ({} min)", plan.total_minutes);
                println!("  Review: redo yesterday's misses ({} min)", plan.review_minutes);
                println!("  New: one weak unit ({} min)", plan.new_minutes);
                println!("{} days until the exam", profile.days_until_exam(today));
            }
            None => println!("No profile yet. Run `study-coach init` first."),
        },
        Commands::Start => {
            let selection = coach.start_session(today, &mut rand::thread_rng())?;
            for (i, item) in selection.items.iter().enumerate() {
                println!("{}. [{}] {} ({})", i + 1, item.subject, item.stem, item.id);
                for (j, choice) in item.choices.iter().enumerate() {
                    println!("   {}) {}", j + 1, choice);
                }
            }
            match load_tips(&config.tips_path) {
                Ok(tips) => {
                    if let Some(tip) = pick_tip(&tips, &selection) {
                        println!("\nTip: {}\n{}", tip.body, tip.url);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Tips unavailable"),
            }
        }
        Commands::Answer { answers } => {
            let summary = coach.submit(&answers, today)?;
            println!("{}", summary);
            for result in &summary.results {
                let mark = if result.correct { "○" } else { "×" };
                println!("{} {}: {}", mark, result.item_id, result.explanation);
            }
            for id in &summary.skipped {
                println!("? {}: not in the question bank", id);
            }
        }
        Commands::Export { limit, json } => {
            let log = coach.log()?;
            match json {
                Some(path) => export_log_to_path(&log, path)?,
                None => {
                    let profile = coach.profile()?;
                    let limit = limit.unwrap_or(config.report_limit);
                    println!("{}", progress_report(profile.as_ref(), &log, limit));
                }
            }
        }
        Commands::Reset => coach.reset()?,
    }

    Ok(())
}
