// ABOUTME: CLI binary for the lectura article metadata scraper.
// ABOUTME: Scrapes URLs or local HTML files, or replays JSON API requests, printing JSON to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use lectura::{handle_scrape_request, Client, ExtractionResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lectura")]
#[command(about = "Extract article metadata (title, authors, publisher, section, words, type)")]
struct Args {
    /// HTML file to extract from instead of fetching (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL the --html file was saved from
    #[arg(long = "url")]
    url: Option<String>,

    /// JSON request body file ({"url": ...}) to run through the API handler; "-" reads stdin
    #[arg(long = "request")]
    request: Option<String>,

    /// Override the User-Agent header
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long = "timeout")]
    timeout: Option<u64>,

    /// Extra request header, as "Name: value" (repeatable)
    #[arg(long = "header", value_name = "NAME: VALUE")]
    headers: Vec<String>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output compact JSON instead of pretty
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// URLs to scrape
    #[arg()]
    urls: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header must look like \"Name: value\": {}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("header name is empty: {}", raw);
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn build_client(args: &Args) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        builder = builder.header(name, value);
    }
    Ok(builder.build())
}

fn read_request(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    fs::read(target).with_context(|| format!("reading request file {}", target))
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

fn emit(output: Option<&PathBuf>, json: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

async fn run(args: Args) -> Result<bool> {
    let modes = [args.html.is_some(), args.request.is_some(), !args.urls.is_empty()];
    match modes.iter().filter(|m| **m).count() {
        0 => bail!("at least one URL is required, or use --html with --url, or --request"),
        1 => {}
        _ => bail!("--html, --request and positional URLs are mutually exclusive"),
    }

    let client = build_client(&args)?;

    if let Some(target) = &args.request {
        let body = read_request(target)?;
        let response = handle_scrape_request(&client, &body).await;
        emit(args.output.as_ref(), &to_json(&response, args.compact)?)?;
        return Ok(response.status == 200 && response.body["success"] == true);
    }

    if let Some(html_path) = &args.html {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| anyhow!("--url is required when using --html"))?;
        let html = fs::read_to_string(html_path)
            .with_context(|| format!("reading {}", html_path.display()))?;
        let result = ExtractionResult::ok(client.extract_html(&html, url));
        emit(args.output.as_ref(), &to_json(&result, args.compact)?)?;
        return Ok(true);
    }

    let mut results = Vec::with_capacity(args.urls.len());
    for url in &args.urls {
        results.push(client.scrape(url).await);
    }
    let all_ok = results.iter().all(|r| r.success);

    let output = if results.len() == 1 {
        to_json(&results[0], args.compact)?
    } else {
        to_json(&results, args.compact)?
    };
    emit(args.output.as_ref(), &output)?;

    Ok(all_ok)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
