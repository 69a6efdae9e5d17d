use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rs_htmlextract::fetch::{FetchOptions, LINK_LIST_TIMEOUT};
use rs_htmlextract::{
    html_extract, list_links, page_info, source_for, ArticleParams, Error, LinkListParams,
    PageParams, PageSource, StaticSource, ToolOutput,
};

/// Extract fields and link lists from web pages by CSS class.
///
/// Results are printed to stdout as JSON; failures print `{"error": "..."}`
/// and exit non-zero. Logs go to stderr (`RUST_LOG`, default `info`).
#[derive(Debug, Parser)]
#[command(name = "htmlextract", version, about, long_about = None)]
struct Cli {
    /// Read tool parameters from a JSON file instead of flags.
    #[arg(long, global = true, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Parse a local HTML file instead of fetching the URL.
    #[arg(long, global = true, value_name = "FILE")]
    html: Option<PathBuf>,

    /// HTTP timeout in seconds (default 10, or 30 for `links`).
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Pause after browser page load, in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    settle: Option<u64>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract title, content, tags and source from a detail page.
    Article(ArticleArgs),
    /// Collect absolute links from list containers.
    Links(LinksArgs),
    /// Return the page HTML with its title, keywords and description.
    Page(PageArgs),
}

#[derive(Debug, Args)]
struct ArticleArgs {
    /// Page URL.
    #[arg(long, default_value = "")]
    url: String,
    /// Title class names.
    #[arg(long, default_value = "")]
    title_selector: String,
    /// Content class names.
    #[arg(long, default_value = "")]
    content_selector: String,
    /// Tag list class names.
    #[arg(long, default_value = "")]
    tag_selector: String,
    /// Source class names.
    #[arg(long, default_value = "")]
    source_selector: String,
    /// Strings to replace, comma separated.
    #[arg(long, default_value = "")]
    replace_target: String,
    /// Replacements, comma separated.
    #[arg(long, default_value = "")]
    replace_with: String,
    /// Strings to delete, comma separated.
    #[arg(long, default_value = "")]
    delete_target: String,
    /// Render with headless Chrome.
    #[arg(long)]
    render_with_browser: bool,
}

impl From<ArticleArgs> for ArticleParams {
    fn from(args: ArticleArgs) -> Self {
        Self {
            url: args.url,
            title_selector: args.title_selector,
            content_selector: args.content_selector,
            tag_selector: args.tag_selector,
            source_selector: args.source_selector,
            replace_target: args.replace_target,
            replace_with: args.replace_with,
            delete_target: args.delete_target,
            render_with_browser: args.render_with_browser,
        }
    }
}

#[derive(Debug, Args)]
struct LinksArgs {
    /// List page URL.
    #[arg(long, default_value = "")]
    url: String,
    /// Container class names.
    #[arg(long, default_value = "")]
    container_selector: String,
    /// Sub-container class names or a tag such as `<li>`.
    #[arg(long, default_value = "")]
    sub_container_selector: String,
    /// Anchor class names.
    #[arg(long, default_value = "")]
    anchor_class_selector: String,
    /// Base URL for relative links.
    #[arg(long, default_value = "")]
    base_url: String,
    /// Keywords that block a link.
    #[arg(long, default_value = "")]
    block_keywords: String,
    /// Render with headless Chrome.
    #[arg(long)]
    render_with_browser: bool,
}

impl From<LinksArgs> for LinkListParams {
    fn from(args: LinksArgs) -> Self {
        Self {
            url: args.url,
            container_selector: args.container_selector,
            sub_container_selector: args.sub_container_selector,
            anchor_class_selector: args.anchor_class_selector,
            base_url: args.base_url,
            block_keywords: args.block_keywords,
            render_with_browser: args.render_with_browser,
        }
    }
}

#[derive(Debug, Args)]
struct PageArgs {
    /// Page URL.
    #[arg(long, default_value = "")]
    url: String,
    /// Fetch with a plain GET instead of headless Chrome.
    #[arg(long)]
    no_browser: bool,
}

impl From<PageArgs> for PageParams {
    fn from(args: PageArgs) -> Self {
        Self {
            url: args.url,
            render_with_browser: !args.no_browser,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_params<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        error!(path = %path.display(), "parameter file is not valid JSON");
        Error::Json(err)
    })
}

/// Params from `--params` when given, otherwise from the subcommand flags.
fn resolve_params<T: DeserializeOwned>(file: Option<&Path>, flags: T) -> Result<T, Error> {
    match file {
        Some(path) => load_params(path),
        None => Ok(flags),
    }
}

fn fetch_options(timeout: Option<u64>, settle: Option<u64>, default_timeout: Duration) -> FetchOptions {
    let mut options =
        FetchOptions::default().with_timeout(timeout.map_or(default_timeout, Duration::from_secs));
    if let Some(secs) = settle {
        options.settle_delay = Duration::from_secs(secs);
    }
    options
}

fn page_source(
    html: Option<&Path>,
    render: bool,
    options: &FetchOptions,
) -> Result<Box<dyn PageSource>, Error> {
    match html {
        Some(path) => Ok(Box::new(StaticSource::from_file(path)?)),
        None => source_for(render, options),
    }
}

fn emit<T: Serialize>(output: &ToolOutput<T>, pretty: bool) -> ExitCode {
    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };

    match json {
        Ok(text) => println!("{text}"),
        Err(err) => {
            error!(%err, "failed to serialize output");
            return ExitCode::FAILURE;
        }
    }

    if output.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let Cli {
        params,
        html,
        timeout,
        settle,
        pretty,
        command,
    } = Cli::parse();
    init_tracing();

    let params = params.as_deref();
    let html = html.as_deref();

    match command {
        Command::Article(args) => {
            let options = fetch_options(timeout, settle, FetchOptions::default().timeout);
            let result = resolve_params(params, ArticleParams::from(args)).and_then(|params| {
                let source = page_source(html, params.render_with_browser, &options)?;
                html_extract(&params, source.as_ref())
            });
            emit(&ToolOutput::from(result), pretty)
        }
        Command::Links(args) => {
            let options = fetch_options(timeout, settle, LINK_LIST_TIMEOUT);
            let result = resolve_params(params, LinkListParams::from(args)).and_then(|params| {
                let source = page_source(html, params.render_with_browser, &options)?;
                list_links(&params, source.as_ref())
            });
            emit(&ToolOutput::from(result), pretty)
        }
        Command::Page(args) => {
            let options = fetch_options(timeout, settle, FetchOptions::default().timeout);
            let result = resolve_params(params, PageParams::from(args)).and_then(|params| {
                let source = page_source(html, params.render_with_browser, &options)?;
                page_info(&params, source.as_ref())
            });
            emit(&ToolOutput::from(result), pretty)
        }
    }
}
