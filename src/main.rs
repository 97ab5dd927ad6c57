use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, warn};
use std::path::PathBuf;

use lead_scout::analyze::{analyze_lead, is_qualified, rank_leads, score_lead, set_score};
use lead_scout::config::{get_config_path, load_config, validate_config, Config};
use lead_scout::leads::{
    load_lead_book, save_lead_book, Activity, ActivityType, CompanyData, Funding, Lead, LeadBook,
    LeadStatus, LeadStore, Owner, StatusFilter,
};
use lead_scout::output;
use lead_scout::scoring::compute_heuristic_score;
use lead_scout::LeadError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;
const EXIT_STORE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List open leads ranked by score (default if no subcommand)
    List {
        /// Only show leads with this status (repeatable)
        #[arg(short, long = "status")]
        statuses: Vec<LeadStatus>,

        /// Include converted and lost leads
        #[arg(short, long)]
        all: bool,
    },
    /// Show the score label for a lead
    Score {
        id: String,

        /// Show which factors contributed
        #[arg(short, long)]
        explain: bool,
    },
    /// Analyze a lead and store its qualification score
    Analyze {
        id: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new lead
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        title: Option<String>,
        /// Size category (Enterprise, Large, Medium, Small) or bracket like 51-200
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        website: Option<String>,
        /// Most recent funding amount, in the smallest currency unit
        #[arg(long)]
        funding: Option<u64>,
    },
    /// Record an activity against a lead
    Log {
        id: String,
        /// EMAIL, CALL, MEETING or NOTE
        kind: String,
        #[arg(default_value = "")]
        content: String,
        /// How long ago it happened, e.g. "2h" or "3days" (default: now)
        #[arg(long)]
        ago: Option<humantime::Duration>,
    },
    /// Manually set a lead's score (clamped to 0-100)
    SetScore {
        id: String,
        #[arg(allow_hyphen_values = true)]
        score: i64,
    },
    /// Check whether a lead's stored score meets the qualification threshold
    Qualify {
        id: String,
        /// Override the configured threshold
        #[arg(short, long)]
        threshold: Option<u32>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "lead-scout")]
#[command(about = "Lead scoring and qualification CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-scout/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let command = cli.command.unwrap_or(Commands::List {
        statuses: vec![],
        all: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from).unwrap_or_else(get_config_path);
    let mut config = match load_config(Some(config_path.clone())) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    config.resolve_store_relative_to(&config_path);

    if let Err(errors) = validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let owner = match Owner::new(&config.owner) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_AUTH);
        }
    };

    let store_path = config.store_path();
    let mut book = match load_lead_book(&store_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Lead book error: {:#}", e);
            std::process::exit(EXIT_STORE);
        }
    };
    debug!("Using lead book {} as {}", store_path.display(), owner);

    let use_colors = output::should_use_colors();
    match run(command, &config, &owner, &mut book, use_colors, cli.verbose) {
        Ok(dirty) => {
            if dirty {
                if let Err(e) = save_lead_book(&store_path, &book) {
                    eprintln!("Lead book error: {:#}", e);
                    std::process::exit(EXIT_STORE);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_code_for(&e));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Map an error to a process exit code. Domain errors get their own codes.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<LeadError>() {
        Some(LeadError::NotFound(_)) => EXIT_NOT_FOUND,
        Some(LeadError::Unauthorized) => EXIT_AUTH,
        None => EXIT_STORE,
    }
}

/// Execute one command. Returns whether the lead book changed and needs saving.
fn run(
    command: Commands,
    config: &Config,
    owner: &Owner,
    book: &mut LeadBook,
    use_colors: bool,
    verbose: bool,
) -> Result<bool> {
    let now = Utc::now();

    match command {
        Commands::List { statuses, all } => {
            let filter = StatusFilter {
                statuses,
                include_closed: all,
            };
            let ranked = rank_leads(&*book, owner, &filter, now);

            if verbose && !ranked.is_empty() {
                for (lead, result) in &ranked {
                    let last_contact = lead.last_contact().map(|a| now - a.created_at);
                    println!(
                        "{}",
                        output::format_lead_detail(lead, result, last_contact, use_colors)
                    );
                    println!();
                }
            } else {
                let rows: Vec<output::ScoredLead> = ranked
                    .iter()
                    .map(|(lead, result)| output::ScoredLead { lead, result })
                    .collect();
                println!("{}", output::format_lead_table(&rows, use_colors));
            }
            Ok(false)
        }
        Commands::Score { id, explain } => {
            if explain {
                let lead = book.find_lead(owner, &id)?;
                let result = compute_heuristic_score(&lead, now);
                let last_contact = lead.last_contact().map(|a| now - a.created_at);
                println!(
                    "{}",
                    output::format_lead_detail(&lead, &result, last_contact, use_colors)
                );
            } else {
                let result = score_lead(&*book, owner, &id, now)?;
                println!("{}", result.label);
            }
            Ok(false)
        }
        Commands::Analyze { id, json } => {
            let analysis = analyze_lead(book, owner, &id)?;
            if json {
                let body = serde_json::to_string_pretty(&analysis)
                    .context("Failed to serialize analysis")?;
                println!("{}", body);
            } else {
                let lead = book.find_lead(owner, &id)?;
                println!("{}", output::format_analysis(&lead, &analysis, use_colors));
            }
            Ok(true)
        }
        Commands::Add {
            name,
            company,
            title,
            size,
            industry,
            website,
            funding,
        } => {
            let company_data = if size.is_some()
                || industry.is_some()
                || website.is_some()
                || funding.is_some()
            {
                Some(CompanyData {
                    size,
                    funding: funding.map(|amount| Funding {
                        amount,
                        round: None,
                        date: None,
                    }),
                    industry,
                    website,
                })
            } else {
                None
            };

            let lead = Lead {
                id: uuid::Uuid::new_v4().to_string(),
                owner: owner.as_str().to_string(),
                name,
                company,
                title,
                status: LeadStatus::New,
                score: 0,
                activities: vec![],
                company_data,
                created_at: now,
            };
            println!("{}", lead.id);
            book.insert_lead(lead);
            Ok(true)
        }
        Commands::Log {
            id,
            kind,
            content,
            ago,
        } => {
            let kind = ActivityType::parse(&kind);
            if let ActivityType::Other(ref raw) = kind {
                warn!("Unknown activity type '{}', recording it with default weight", raw);
            }

            let created_at = match ago {
                Some(ago) => chrono::Duration::from_std(ago.into())
                    .ok()
                    .and_then(|ago| now.checked_sub_signed(ago))
                    .context("--ago is too large")?,
                None => now,
            };

            book.append_activity(
                owner,
                &id,
                Activity {
                    kind,
                    created_at,
                    content,
                },
            )?;
            Ok(true)
        }
        Commands::SetScore { id, score } => {
            let stored = set_score(book, owner, &id, score)?;
            println!("{}", stored);
            Ok(true)
        }
        Commands::Qualify { id, threshold } => {
            let threshold = threshold.unwrap_or_else(|| config.qualify_threshold());
            let lead = book.find_lead(owner, &id)?;
            if is_qualified(&lead, threshold) {
                println!("qualified ({} >= {})", lead.score, threshold);
            } else {
                println!("not qualified ({} < {})", lead.score, threshold);
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Owner {
        Owner::new("alice").unwrap()
    }

    fn test_config() -> Config {
        Config {
            owner: "alice".to_string(),
            store: None,
            qualify_threshold: None,
        }
    }

    fn book_with_lead(id: &str) -> LeadBook {
        let mut book = LeadBook::new();
        book.insert_lead(Lead {
            id: id.to_string(),
            owner: "alice".to_string(),
            name: "Dana Scully".to_string(),
            company: "Acme".to_string(),
            title: None,
            status: LeadStatus::New,
            score: 0,
            activities: vec![],
            company_data: None,
            created_at: Utc::now(),
        });
        book
    }

    fn run_on(book: &mut LeadBook, command: Commands) -> Result<bool> {
        run(command, &test_config(), &alice(), book, false, false)
    }

    #[test]
    fn test_exit_code_for_domain_errors() {
        let not_found = anyhow::Error::from(LeadError::NotFound("x".to_string()));
        let unauthorized = anyhow::Error::from(LeadError::Unauthorized);
        let other = anyhow::anyhow!("disk on fire");

        assert_eq!(exit_code_for(&not_found), EXIT_NOT_FOUND);
        assert_eq!(exit_code_for(&unauthorized), EXIT_AUTH);
        assert_eq!(exit_code_for(&other), EXIT_STORE);
        assert_eq!((EXIT_AUTH, EXIT_NOT_FOUND, EXIT_STORE), (1, 2, 3));
    }

    #[test]
    fn test_exit_code_for_error_with_context() {
        let err = anyhow::Error::from(LeadError::NotFound("x".to_string()))
            .context("Failed to analyze lead");
        assert_eq!(exit_code_for(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_run_missing_lead_maps_to_not_found() {
        let mut book = book_with_lead("lead-1");
        let err = run_on(
            &mut book,
            Commands::Score {
                id: "nope".to_string(),
                explain: false,
            },
        )
        .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_run_only_mutating_commands_are_dirty() {
        let mut book = book_with_lead("lead-1");

        let score = Commands::Score {
            id: "lead-1".to_string(),
            explain: true,
        };
        assert!(!run_on(&mut book, score).unwrap());

        let qualify = Commands::Qualify {
            id: "lead-1".to_string(),
            threshold: None,
        };
        assert!(!run_on(&mut book, qualify).unwrap());

        let analyze = Commands::Analyze {
            id: "lead-1".to_string(),
            json: true,
        };
        assert!(run_on(&mut book, analyze).unwrap());
        assert_eq!(book.find_lead(&alice(), "lead-1").unwrap().score, 50);
    }

    #[test]
    fn test_run_log_with_ago() {
        let mut book = book_with_lead("lead-1");
        let log = Commands::Log {
            id: "lead-1".to_string(),
            kind: "call".to_string(),
            content: "intro".to_string(),
            ago: Some("3days".parse().unwrap()),
        };
        assert!(run_on(&mut book, log).unwrap());

        let lead = book.find_lead(&alice(), "lead-1").unwrap();
        assert_eq!(lead.activities.len(), 1);
        assert_eq!(lead.activities[0].kind, ActivityType::Call);
        assert_eq!(lead.days_since_last_contact(Utc::now()), Some(3));
    }

    #[test]
    fn test_run_log_rejects_huge_ago() {
        let mut book = book_with_lead("lead-1");
        let log = Commands::Log {
            id: "lead-1".to_string(),
            kind: "EMAIL".to_string(),
            content: String::new(),
            ago: Some("1000000years".parse().unwrap()),
        };

        let err = run_on(&mut book, log).unwrap_err();
        assert!(err.to_string().contains("--ago is too large"));
        assert_eq!(exit_code_for(&err), EXIT_STORE);
        assert!(book.find_lead(&alice(), "lead-1").unwrap().activities.is_empty());
    }
}
