use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio::cli::{
    run_contact, run_filter, run_list, run_open, run_render, run_theme, run_update,
    FilterOptions, ThemeAction,
};
use folio::contact::{ContactForm, NotificationKind};
use folio::logging::init_logging;
use folio::theme::{Theme, ThemeStore};
use folio::tui::run_browser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio gallery browser and site maintenance tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the site (launches the browser if no subcommand)
    site: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every project and its tags
    List {
        /// Path to site root
        path: PathBuf,
    },
    /// Show the projects left visible by a set of tag filters
    Filter {
        /// Path to site root
        path: PathBuf,
        /// Tag to apply (repeatable, applied in order)
        #[arg(short, long)]
        tag: Vec<String>,
        /// Free-text query over tags
        #[arg(short, long)]
        query: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add or replace projects and rewrite the gallery
    Update {
        /// Path to site root
        path: PathBuf,
        /// Project JSON (a single object or an array)
        payload: Option<String>,
        /// Read the payload from a file instead
        #[arg(long, short, conflicts_with = "payload")]
        file: Option<PathBuf>,
    },
    /// Rewrite the gallery from the project catalog
    Render {
        /// Path to site root
        path: PathBuf,
    },
    /// Resolve a deep link such as "#project-view/my-repo"
    Open {
        /// Path to site root
        path: PathBuf,
        /// URL hash
        hash: String,
    },
    /// Show or change the theme preference
    Theme {
        /// Switch between light and dark
        #[arg(long, conflicts_with = "set")]
        toggle: bool,
        /// Set the theme (light or dark)
        #[arg(long)]
        set: Option<Theme>,
    },
    /// Send a message through the site's contact form
    Contact {
        /// Path to site root
        path: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        organization: String,
        #[arg(long)]
        message: String,
        /// Captcha response token
        #[arg(long)]
        captcha: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging - guard must be held for logs to flush
    let _guard = init_logging().ok();
    let verbose = std::env::var("FOLIO_LOG").is_ok();
    let start = Instant::now();

    let cli = Cli::parse();

    let result = run_command(cli);

    if verbose {
        let elapsed = start.elapsed();
        eprintln!("Completed in {:.2?}", elapsed);
    }

    result
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::List { path }) => {
            let listing = run_list(&path)?;
            for project in &listing.projects {
                let tags_str = if project.tags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", project.tags.join(", "))
                };
                println!("{}  {}{}", project.id, project.title, tags_str);
            }
            println!(
                "{} projects, {} tags",
                listing.projects.len(),
                listing.tags.len()
            );
        }
        Some(Commands::Filter {
            path,
            tag,
            query,
            json,
        }) => {
            let options = FilterOptions { tags: tag, query };
            let result = run_filter(&path, options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for project in &result.visible {
                    println!("{}  {}", project.id, project.title);
                }
                if !result.applied.is_empty() {
                    println!("Applied: {}", result.applied.join(", "));
                }
                println!("{} of {} projects", result.visible.len(), result.total);
            }
        }
        Some(Commands::Update {
            path,
            payload,
            file,
        }) => {
            let payload = match (payload, file) {
                (Some(payload), _) => payload,
                (None, Some(file)) => std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?,
                (None, None) => bail!("Provide a project payload or --file"),
            };
            let stats = run_update(&path, &payload)?;
            println!("Added: {}, updated: {}", stats.added, stats.updated);
        }
        Some(Commands::Render { path }) => {
            let count = run_render(&path)?;
            println!("Rendered {} projects", count);
        }
        Some(Commands::Open { path, hash }) => {
            let link = run_open(&path, &hash)?;
            println!("View: {}", link.view);
            if let Some(project) = &link.project {
                println!("Project: {} ({})", project.title, project.url);
            }
            println!("Link: {}", link.hash);
        }
        Some(Commands::Theme { toggle, set }) => {
            let action = match (toggle, set) {
                (true, _) => ThemeAction::Toggle,
                (false, Some(theme)) => ThemeAction::Set(theme),
                (false, None) => ThemeAction::Show,
            };
            let store = ThemeStore::default_location()?;
            let report = run_theme(&store, action)?;
            println!("Theme: {} (toggle icon: {})", report.theme, report.theme.icon());
            if let Some(message) = &report.message {
                println!("{}", serde_json::to_string(message)?);
            }
        }
        Some(Commands::Contact {
            path,
            name,
            email,
            organization,
            message,
            captcha,
        }) => {
            let form = ContactForm {
                name,
                email,
                organization,
                message,
            };
            let notification = run_contact(&path, form, captcha)?;
            match notification.kind {
                NotificationKind::Success => println!("{}", notification.message),
                NotificationKind::Error => bail!("{}", notification.message),
            }
        }
        None => {
            // Launch browser
            let site = cli.site.unwrap_or_else(|| PathBuf::from("."));
            run_browser(&site)?;
        }
    }

    Ok(())
}
