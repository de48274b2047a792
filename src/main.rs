use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flashtext::loader;
use flashtext::scan::{self, ScanMode};
use flashtext::stats::ScanStats;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "flashtext")]
#[command(about = "Extract or replace dictionary keywords in text")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run extraction and replacement over a single sentence
    Demo(DemoArgs),
    /// Write the keywords found on each input line as JSON lines
    Extract(ScanArgs),
    /// Write the input with keywords replaced by their clean names
    Replace(ScanArgs),
}

#[derive(Args)]
struct DictionaryArgs {
    /// Keyword file, one `keyword` or `keyword=>clean name` per line
    #[arg(short, long)]
    keywords: PathBuf,

    /// Match keywords case-sensitively
    #[arg(long)]
    case_sensitive: bool,
}

#[derive(Args)]
struct DemoArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Sentence to scan
    #[arg(short, long, default_value = flashtext::config::DEMO_SENTENCE)]
    sentence: String,
}

#[derive(Args)]
struct ScanArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Text file to scan line by line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run_demo(args: DemoArgs) -> Result<()> {
    let processor = loader::from_file(&args.dictionary.keywords, args.dictionary.case_sensitive)?;

    println!("Processing the sentence '{}'", args.sentence);
    let mut keywords: Vec<_> = processor
        .extract_keywords(&args.sentence)
        .into_iter()
        .collect();
    keywords.sort();
    for keyword in keywords {
        println!("   {}", keyword);
    }
    println!("{}", processor.replace(&args.sentence));

    Ok(())
}

fn run_scan(args: ScanArgs, mode: ScanMode) -> Result<()> {
    let start_loading = Instant::now();
    let processor = loader::from_file(&args.dictionary.keywords, args.dictionary.case_sensitive)?;
    let loading_duration = start_loading.elapsed();
    info!(
        duration_secs = loading_duration.as_secs_f64(),
        "Dictionary loaded"
    );

    let stats = ScanStats::new();
    let start_scanning = Instant::now();
    scan::run_scan(
        &processor,
        &args.input,
        args.output.as_deref(),
        mode,
        &stats,
    )?;
    let scanning_duration = start_scanning.elapsed();

    eprintln!();
    eprintln!("=== Summary ===");
    eprintln!("Loading time:       {:.2}s", loading_duration.as_secs_f64());
    eprintln!("Scanning time:      {:.2}s", scanning_duration.as_secs_f64());
    eprintln!();
    eprintln!("Keywords loaded:    {}", processor.len());
    eprintln!("Lines scanned:      {}", stats.lines());
    eprintln!("Characters scanned: {}", stats.chars());
    eprintln!("Lines matched:      {}", stats.lines_matched());
    match mode {
        ScanMode::Extract => eprintln!("Keywords found:     {}", stats.keywords()),
        ScanMode::Replace => eprintln!("Replacements:       {}", stats.replacements()),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Extract(args) => run_scan(args, ScanMode::Extract),
        Commands::Replace(args) => run_scan(args, ScanMode::Replace),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
