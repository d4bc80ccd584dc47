mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use feedbrief_core::{
    EntriesResponse, JsonConfig, Resolver, ResolverConfig, TextConfig, convert_to_json, convert_to_text, fetch_file,
    fetch_stdin,
};
use tracing_subscriber::EnvFilter;

use echo::{
    format_size, print_banner, print_detail, print_info, print_resolution_details, print_step, print_success,
    print_timing_summary, print_warning,
};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for resolved articles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

/// Resolve feed entries into length-bounded article text for summarization
#[derive(Parser, Debug)]
#[command(name = "feedbrief")]
#[command(version)]
#[command(about = "Resolve feed entries into article text for summarization", long_about = None)]
struct Args {
    /// JSON file with feed entries, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Maximum characters of content per article
    #[arg(long, default_value = "500", value_name = "NUM")]
    max_length: usize,

    /// Never fetch full articles, even for teaser content
    #[arg(long)]
    no_fetch: bool,

    /// HTTP timeout in seconds for article fetches
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Maximum number of entries resolved at once
    #[arg(long, default_value = "1", value_name = "NUM")]
    concurrency: usize,

    /// Minimum characters a fetched article must exceed
    #[arg(long, default_value = "200", value_name = "NUM")]
    min_article_chars: usize,

    /// Include article URLs (text format only)
    #[arg(long)]
    urls: bool,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let started = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let step = Instant::now();
    let json = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading entries from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading entries from {}", args.input));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    let response = EntriesResponse::from_json(&json).context("Failed to decode entries")?;
    timings.push(("Load".to_string(), step.elapsed()));

    if args.verbose {
        print_detail("Size", &format_size(json.len()));
        print_detail("Entries", &response.entries.len().to_string());
        eprintln!();
    }

    if response.entries.is_empty() {
        print_warning("No entries found, nothing to process");
        return Ok(());
    }

    if args.verbose {
        let mode = if args.no_fetch { "disabled" } else { "enabled" };
        print_step(2, 3, &format!("Resolving entries (fetch {mode}, concurrency {})", args.concurrency));
    }

    let mut builder = ResolverConfig::builder()
        .max_content_length(args.max_length)
        .allow_fetch(!args.no_fetch)
        .timeout(args.timeout)
        .concurrency(args.concurrency)
        .min_article_chars(args.min_article_chars);
    if let Some(user_agent) = args.user_agent {
        builder = builder.user_agent(user_agent);
    }

    let step = Instant::now();
    let attempted = response.entries.len();
    let resolver = Resolver::http(builder.build()).context("Failed to create HTTP client")?;
    let articles = resolver.resolve_batch(response.entries).await;
    timings.push(("Resolve".to_string(), step.elapsed()));

    if args.verbose {
        print_resolution_details(&articles, attempted);
    }

    if articles.is_empty() {
        print_warning("No entries could be resolved, nothing to process");
        return Ok(());
    }

    if args.verbose {
        print_step(3, 3, &format!("Writing {:?} output", args.format));
    }

    let output = match args.format {
        OutputFormat::Json => convert_to_json(&articles, &JsonConfig { pretty: !args.compact })
            .context("Failed to serialize articles")?,
        OutputFormat::Text => convert_to_text(&articles, &TextConfig { include_urls: args.urls, ..Default::default() }),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("{} articles written to {}", articles.len(), path.display()));
        }
        None => {
            println!("{}", output);
        }
    }

    if args.verbose {
        eprintln!();
        print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
