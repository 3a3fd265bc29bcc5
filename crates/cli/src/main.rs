use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordgauge_core::{AnalysisOptions, AnalysisResult, Analyzer, SelectorConfig, Source};

mod args;
mod echo;
mod report;

use args::{Args, OutputFormat};
use echo::{
    format_size, print_banner, print_detail, print_error, print_info, print_step, print_success, print_timing,
    print_warning,
};
use report::Report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "wordgauge_core=debug,wordgauge=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn analyze(args: &Args, input: &str, is_html: bool) -> anyhow::Result<AnalysisResult> {
    let options = AnalysisOptions::builder()
        .top_n(args.top)
        .tokenization_mode(args.mode)
        .build();
    let analyzer = Analyzer::with_options(options);

    if is_html {
        let selector = SelectorConfig { min_text_length: args.min_text, ..Default::default() };
        analyzer
            .analyze_html(input, &selector)
            .context("Failed to select main content")
    } else {
        Ok(analyzer.analyze(input))
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let source = Source::from_arg(&args.input);
    let is_html = args.html || source.looks_like_html();
    debug!(input = %args.input, html = is_html, "resolved input");

    if args.verbose {
        match &source {
            Source::Stdin => print_step(1, 3, "Reading from stdin"),
            Source::File(path) => print_step(1, 3, &format!("Reading from file {}", path.display().bright_white())),
        }
    }

    let input = source
        .read()
        .with_context(|| format!("Failed to read input: {}", args.input))?;

    if args.verbose {
        print_detail("Size", &format_size(input.len()));
        print_detail("Kind", if is_html { "HTML" } else { "plain text" });
        eprintln!();
        print_step(2, 3, if is_html { "Selecting main content and analyzing" } else { "Analyzing text" });
    }

    let started = Instant::now();
    let result = analyze(&args, &input, is_html)?;

    if args.verbose {
        print_detail("Mode", &args.mode.to_string());
        print_detail("Words", &result.word_count.to_string());
        print_timing("Analysis", started.elapsed());
        eprintln!();
    }

    if result.is_empty() {
        print_warning("No words found in input");
    }

    let output = match args.format {
        OutputFormat::Text => Report::new(&result).to_string(),
        OutputFormat::Json => {
            let mut json = result.to_json(true).context("Failed to render JSON")?;
            json.push('\n');
            json
        }
    };

    if args.verbose {
        print_step(3, 3, "Writing output");
        print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
