use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use lifeline_agents::{EmergencyAssistant, EmergencyRequest, GuidanceReply};
use lifeline_core::{
    at_least, KnowledgeBase, PersonalizationContext, SupplyRecommendation, Urgency,
};
use lifeline_observability::{init_tracing, GuidanceMetrics};
use lifeline_storage::Store;

#[derive(Debug, Parser)]
#[command(name = "lifeline")]
#[command(about = "Offline first-aid guidance")]
struct Cli {
    /// SQLite URL for profiles and history; an in-memory store is used when unset.
    #[arg(long, env = "LIFELINE_DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print guidance for an emergency description.
    Guide {
        #[arg(required = true)]
        text: Vec<String>,
        /// JSON medical profile used for personalization.
        #[arg(long, env = "LIFELINE_PROFILE")]
        profile: Option<PathBuf>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Questions {
        #[arg(required = true)]
        text: Vec<String>,
    },
    Supplies {
        #[arg(required = true)]
        hint: Vec<String>,
        #[arg(long)]
        guidance: Option<String>,
        #[arg(long)]
        top: Option<usize>,
        /// normal, recommended or critical
        #[arg(long)]
        min_urgency: Option<String>,
    },
    /// Describe the emergency, answer follow-up questions, get guidance.
    Triage {
        #[arg(long)]
        user: Option<String>,
    },
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    History {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Drop history entries older than the given number of days.
    Purge {
        #[arg(long, default_value_t = 30)]
        older_than_days: i64,
    },
    /// Validate the built-in knowledge tables.
    Check,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    Set {
        #[arg(long)]
        user: String,
        #[arg(long)]
        file: PathBuf,
    },
    Show {
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("lifeline_cli");
    let cli = Cli::parse();

    let assistant = build_assistant(cli.database_url.as_deref()).await?;

    match cli.command {
        Command::Guide {
            text,
            profile,
            user,
            json,
        } => {
            let profile = profile.as_deref().map(read_profile).transpose()?;
            let reply = assistant
                .handle_emergency(EmergencyRequest {
                    user_id: user,
                    text: text.join(" "),
                    category_hint: None,
                    profile,
                })
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                print_reply(&reply);
            }
        }
        Command::Questions { text } => {
            for question in assistant.questions(&text.join(" ")) {
                println!("- {question}");
            }
        }
        Command::Supplies {
            hint,
            guidance,
            top,
            min_urgency,
        } => {
            let mut items = assistant.supplies(&hint.join(" "), guidance.as_deref());
            if let Some(level) = min_urgency.as_deref() {
                let minimum = Urgency::parse(level)
                    .with_context(|| format!("unknown urgency level {level}"))?;
                items = at_least(&items, minimum);
            }
            if let Some(top) = top {
                items.truncate(top);
            }
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::Triage { user } => run_triage(&assistant, user).await?,
        Command::Profile { command } => match command {
            ProfileCommand::Set { user, file } => {
                if cli.database_url.is_none() {
                    bail!("profile set needs LIFELINE_DATABASE_URL; the in-memory store is discarded on exit");
                }
                let profile = read_profile(&file)?;
                assistant.save_profile(&user, &profile).await?;
                println!("profile saved for {user}");
            }
            ProfileCommand::Show { user } => match assistant.profile(&user).await? {
                Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
                None => bail!("no profile stored for {user}"),
            },
        },
        Command::History { user, limit } => {
            let entries = assistant.history(&user, limit).await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Purge { older_than_days } => {
            let cutoff = purge_cutoff(Utc::now(), older_than_days)?;
            let removed = assistant.purge_history_before(cutoff).await?;
            println!("removed {removed} history entries");
        }
        Command::Check => {
            let stats = KnowledgeBase::standard()
                .validate()
                .context("knowledge tables failed validation")?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

async fn run_triage(assistant: &EmergencyAssistant<Store>, user: Option<String>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Lifeline triage. If anyone is in danger, call emergency services now.");
    let Some(description) = prompt(&mut input, "What is happening?")? else {
        return Ok(());
    };
    if description.is_empty() {
        bail!("an emergency description is required");
    }

    let mut answers = Vec::new();
    for question in assistant.questions(&description) {
        match prompt(&mut input, &question)? {
            Some(answer) if !answer.is_empty() => answers.push(answer),
            Some(_) => {}
            None => break,
        }
    }

    let mut request = EmergencyRequest::new(triage_text(&description, &answers));
    request.user_id = user;
    let reply = assistant.handle_emergency(request).await?;

    println!();
    print_reply(&reply);
    Ok(())
}

/// Reads one trimmed line; `None` on end of input.
fn prompt(input: &mut impl BufRead, question: &str) -> Result<Option<String>> {
    print!("{question}\n> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn triage_text(description: &str, answers: &[String]) -> String {
    std::iter::once(description)
        .chain(answers.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_reply(reply: &GuidanceReply) {
    println!("{}\n", reply.guidance);

    if !reply.supplies.is_empty() {
        println!("Suggested supplies:");
        for item in &reply.supplies {
            println!("{}", supply_line(item));
        }
        println!();
    }
}

fn supply_line(item: &SupplyRecommendation) -> String {
    format!(
        "- [{}] {} ({:.2}): {}",
        item.urgency.as_code(),
        item.name,
        item.price,
        item.description
    )
}

fn purge_cutoff(now: DateTime<Utc>, older_than_days: i64) -> Result<DateTime<Utc>> {
    if older_than_days < 0 {
        bail!("--older-than-days must not be negative");
    }
    Duration::try_days(older_than_days)
        .and_then(|age| now.checked_sub_signed(age))
        .with_context(|| format!("--older-than-days {older_than_days} is out of range"))
}

fn read_profile(path: &Path) -> Result<PersonalizationContext> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid profile json in {}", path.display()))
}

async fn build_assistant(database_url: Option<&str>) -> Result<EmergencyAssistant<Store>> {
    let store = match database_url {
        Some(database_url) => Store::sqlite(database_url).await?,
        None => Store::memory(),
    };

    Ok(EmergencyAssistant::new(Arc::new(store), GuidanceMetrics::shared()))
}
