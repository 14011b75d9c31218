//! Galactic Archives CLI
//!
//! Terminal front end over the archives library: browse, search, favorites,
//! surprise pick and the character quiz.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use archives::{
    ArchivesContext,
    error::{AppError, Result},
    models::{CatalogItem, Category, Config, Quiz},
    services::{CatalogRepository, FetchDispatcher, surprise_me},
};
use clap::{Parser, Subcommand};

/// Galactic Archives - browse the Star Wars catalog
#[derive(Parser, Debug)]
#[command(name = "archives", version, about = "Browse the Star Wars catalog")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "archives.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the browsable categories
    Categories,

    /// Page through one category
    Browse {
        /// Category path segment or label (people, planets, Characters, ...)
        category: Category,

        /// Number of pages to load; stops early once the category runs out
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Only show items whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Search people by name
    Search { query: String },

    /// Show or edit recent searches
    Recent {
        /// Forget the recent search at this position
        #[arg(long)]
        remove: Option<usize>,
    },

    /// Show or edit favorites
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// Show a random character
    Surprise,

    /// Find out which character you are
    Quiz {
        /// Comma-separated answer positions, e.g. 0,2,1; asks interactively if omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    /// List favorites in order
    List,
    /// Add or remove the item at <index> on <page> of <category>
    Toggle {
        category: Category,
        page: u32,
        index: usize,
    },
    /// Remove the favorite at a position
    Remove { position: usize },
    /// Move a favorite to another position
    Move { from: usize, to: usize },
}

/// Initialize logging from the verbosity flag or the configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_config(path: &Path, verbose: bool) -> Config {
    let loaded = Config::load(path);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| Config::default().logging.level);
    init_logging(verbose, &level);

    loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            path.display(),
            e
        );
        Config::default()
    })
}

fn print_items<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) {
    for (position, item) in items.into_iter().enumerate() {
        println!(
            "{position:>3}  {:<28} {}",
            item.display_name(),
            item.category().label()
        );
    }
}

fn print_detail(item: &CatalogItem) {
    println!("{}", item.display_name());
    for (label, value) in item.details() {
        println!("  {label}: {value}");
    }
    println!();
    println!("{}", item.display_description());
    println!();
    println!("{}", item.share_text());
}

async fn browse(
    ctx: &ArchivesContext,
    category: Category,
    pages: u32,
    filter: Option<&str>,
) -> Result<()> {
    let mut list = ctx.list(category);
    let mut dispatcher = FetchDispatcher::new(Arc::clone(&ctx.repository));

    for _ in 0..pages {
        let Some(pending) = list.load_next() else {
            break;
        };
        dispatcher.dispatch(pending);
        if let Some(outcome) = dispatcher.next_outcome().await {
            list.apply(outcome);
        }
        if let Some(message) = list.error_message() {
            log::error!("Could not load {}: {message}", category.label());
            break;
        }
    }

    print_items(list.filter(filter.unwrap_or_default()));
    if list.is_exhausted() {
        println!("(end of {})", category.label());
    }
    Ok(())
}

async fn favorites(ctx: &ArchivesContext, action: FavoritesAction) -> Result<()> {
    match action {
        FavoritesAction::List => {
            let items = ctx.favorites.list().await?;
            if items.is_empty() {
                println!("No favorites yet.");
            }
            print_items(&items);
        }
        FavoritesAction::Toggle {
            category,
            page,
            index,
        } => {
            let items = ctx.repository.fetch_page(category, page).await?;
            let item = items.get(index).ok_or_else(|| {
                AppError::validation(format!(
                    "{} page {page} has no item at position {index}",
                    category.label()
                ))
            })?;
            let now_favorite = ctx.favorites.toggle(item).await?;
            println!(
                "{} {}",
                item.display_name(),
                if now_favorite {
                    "added to favorites"
                } else {
                    "removed from favorites"
                }
            );
        }
        FavoritesAction::Remove { position } => {
            let removed = ctx.favorites.remove(position).await?;
            println!("Removed {}", removed.display_name());
        }
        FavoritesAction::Move { from, to } => {
            ctx.favorites.reorder(from, to).await?;
            print_items(&ctx.favorites.list().await?);
        }
    }
    Ok(())
}

fn read_choice(prompt_len: usize) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(AppError::validation("Quiz aborted"));
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if choice < prompt_len => return Ok(choice),
            _ => println!("Pick a number from 0 to {}", prompt_len - 1),
        }
    }
}

fn quiz(answers: Option<Vec<usize>>) -> Result<()> {
    let mut quiz = Quiz::new();
    let mut scripted = answers.map(|a| a.into_iter());

    while let Some(question) = quiz.current() {
        let choice = match scripted.as_mut() {
            Some(answers) => answers
                .next()
                .ok_or_else(|| AppError::validation("Not enough answers for the quiz"))?,
            None => {
                println!("{}", question.text);
                for (position, answer) in question.answers.iter().enumerate() {
                    println!("  {position}. {}", answer.text);
                }
                read_choice(question.answers.len())?
            }
        };
        quiz.answer(choice)?;
    }

    let result = quiz.result();
    println!("{}", result.character_name());
    println!("{}", result.message());
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config, cli.verbose);
    let ctx = ArchivesContext::from_config(config)?;

    match cli.command {
        Command::Categories => {
            for category in Category::ALL {
                println!(
                    "{:<10} {:<11} {}",
                    category.path_segment(),
                    category.label(),
                    category.icon()
                );
            }
        }

        Command::Browse {
            category,
            pages,
            filter,
        } => browse(&ctx, category, pages, filter.as_deref()).await?,

        Command::Search { query } => {
            let mut search = ctx.search();
            let results = search.submit(ctx.repository.as_ref(), &query).await;
            if results.is_empty() {
                match search.error_message() {
                    Some(message) => println!("Search failed: {message}"),
                    None => println!("No results for '{}'", query.trim()),
                }
            }
            print_items(search.results());
        }

        Command::Recent { remove } => {
            if let Some(position) = remove {
                let removed = ctx.recent.remove(position).await?;
                log::info!("Forgot recent search '{removed}'");
            }
            for (position, query) in ctx.recent.list().await?.iter().enumerate() {
                println!("{position:>3}  {query}");
            }
        }

        Command::Favorites { action } => {
            favorites(&ctx, action.unwrap_or(FavoritesAction::List)).await?
        }

        Command::Surprise => {
            let mut rng = rand::rng();
            match surprise_me(
                ctx.repository.as_ref(),
                &mut rng,
                ctx.config.browse.surprise_max_page,
            )
            .await?
            {
                Some(item) => print_detail(&item),
                None => println!("The archives came up empty. Try again."),
            }
        }

        Command::Quiz { answers } => quiz(answers)?,
    }

    Ok(())
}
