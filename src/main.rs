use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use spdlog::error;

use frontmark::collection::Collection;
use frontmark::config::{read_config, Config};
use frontmark::content::Document;
use frontmark::logger::configure_logger;
use frontmark::text_utils::format_datetime;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Validate every document in the content directory
    Check(CheckArgs),
    /// List published posts
    List(ListArgs),
    /// Show the tag index
    Tags(TagsArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Include drafts in the listing
    #[arg(short, long)]
    drafts: bool,

    /// Only posts carrying this tag
    #[arg(short, long)]
    tag: Option<String>,
}

#[derive(Parser, Debug)]
struct TagsArgs {
    /// Site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,
}

fn open_site(cfg_path: &PathBuf) -> Result<Config> {
    let config = read_config(cfg_path)?;
    configure_logger(&config)?;
    Ok(config)
}

fn check_cmd(args: CheckArgs) -> Result<ExitCode> {
    let config = open_site(&args.config)?;
    let collection = Collection::load(&config)?;

    for doc_error in collection.errors() {
        error!("{}: {}", doc_error.path.display(), doc_error.error);
    }

    println!(
        "{} published, {} drafts, {} errors",
        collection.published().len(),
        collection.drafts().len(),
        collection.errors().len()
    );

    if collection.errors().is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_line(doc: &Document, suffix: &str) {
    let (date, _time) = format_datetime(&doc.record.pub_datetime);
    println!("{}  {:<40}  {}{}", date, doc.record.slug, doc.record.title, suffix);
}

fn list_cmd(args: ListArgs) -> Result<ExitCode> {
    let config = open_site(&args.config)?;
    let collection = Collection::load(&config)?;

    for doc_error in collection.errors() {
        error!("{}: {}", doc_error.path.display(), doc_error.error);
    }

    let docs: Vec<&Document> = match args.tag {
        Some(ref tag) => collection.with_tag(tag),
        None => collection.published().iter().collect(),
    };

    for doc in docs {
        print_line(doc, "");
    }

    if args.drafts {
        for doc in collection.drafts() {
            print_line(doc, " (draft)");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn tags_cmd(args: TagsArgs) -> Result<ExitCode> {
    let config = open_site(&args.config)?;
    let collection = Collection::load(&config)?;

    for (tag, count) in collection.tag_index() {
        println!("{:>4}  {}", count, tag);
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args {
        Args::Check(args) => check_cmd(args),
        Args::List(args) => list_cmd(args),
        Args::Tags(args) => tags_cmd(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
