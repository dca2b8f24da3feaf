use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::bail;

use crate::app::{AppContext, Result};
use crate::cli::progress::BarProgress;
use crate::cli::Cli;
use crate::config::Config;
use crate::crawler::{CrawlOptions, UrlFilter};
use crate::domain::{ContentFormat, OutputType};
use crate::extractor::ContentSelector;
use crate::fetcher::HttpConfig;
use crate::output::{format_pages, write_output};

/// Fully resolved settings of one export: flags over config over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub selector: String,
    pub filter: String,
    pub filename: String,
    pub output_type: OutputType,
    pub format: ContentFormat,
    pub http: HttpConfig,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config, input: String) -> Result<Self> {
        let output_type: OutputType = cli
            .output_type
            .as_deref()
            .unwrap_or(&config.output.filetype)
            .parse()?;

        let format = match &cli.format {
            Some(format) => format.parse()?,
            None => output_type.default_content_format(),
        };

        let mut http = config.http.clone();
        if let Some(timeout) = cli.timeout {
            http.timeout_secs = timeout;
        }
        if let Some(user_agent) = &cli.user_agent {
            http.user_agent = user_agent.clone();
        }

        Ok(Self {
            input,
            selector: cli.css.clone().unwrap_or_else(|| config.crawl.selector.clone()),
            filter: cli.filter.clone().unwrap_or_else(|| config.crawl.filter.clone()),
            filename: cli
                .filename
                .clone()
                .unwrap_or_else(|| config.output.filename.clone()),
            output_type,
            format,
            http,
        })
    }

    pub fn crawl_options(&self) -> Result<CrawlOptions> {
        Ok(CrawlOptions::new(
            ContentSelector::parse(&self.selector)?,
            self.format,
            UrlFilter::new(&self.filter),
        ))
    }

    fn describe(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Export data with the following settings:")?;
        writeln!(out, "Input: {}", self.input)?;
        writeln!(out, "CSS Selector: {}", self.selector)?;
        writeln!(out, "URL Filter: {}", self.filter)?;
        writeln!(out, "Output Filename: {}", self.filename)?;
        writeln!(out, "Output Filetype: {}", self.output_type)?;
        writeln!(out, "Format: {}", self.format)?;
        writeln!(out, "Timeout: {}s", self.http.timeout_secs)?;
        writeln!(out, "User-Agent: {}", self.http.user_agent)
    }
}

/// Asks `message` and returns the trimmed answer, or `default` when empty.
pub fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
    default: &str,
) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Yes/no question answered with `y` by default.
pub fn confirm(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> io::Result<bool> {
    let answer = prompt(input, out, message, "y")?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Resolves settings, prompting for the feed and confirmation as needed.
///
/// Without `--yes`, every setting is asked for with the flag or config
/// value as its default. Returns `None` when the user declines to proceed.
pub fn gather_settings(
    cli: &Cli,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<Settings>> {
    let source = match &cli.input {
        Some(source) => source.trim().to_string(),
        None => prompt(
            input,
            out,
            "Enter the sitemap or RSS feed URL or file path (required): ",
            "",
        )?,
    };
    if source.is_empty() {
        bail!("A sitemap or RSS feed URL or file path is required");
    }

    let answers = if cli.yes {
        cli.clone()
    } else {
        ask_settings(cli, config, &source, input, out)?
    };

    let settings = Settings::resolve(&answers, config, source)?;
    // Reject a bad selector before anything is fetched.
    settings.crawl_options()?;

    if !cli.yes {
        settings.describe(out)?;
        if !confirm(input, out, "Do you want to proceed with these settings? (y/n): ")? {
            return Ok(None);
        }
        writeln!(out)?;
    }

    Ok(Some(settings))
}

/// Prompts for each setting and returns the flags with the answers filled in.
fn ask_settings(
    cli: &Cli,
    config: &Config,
    source: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Cli> {
    let defaults = Settings::resolve(cli, config, source.to_string())?;
    let mut answers = cli.clone();

    answers.css = Some(prompt(
        input,
        out,
        &format!("Enter the CSS selector to extract content (default: '{}'): ", defaults.selector),
        &defaults.selector,
    )?);
    answers.filename = Some(prompt(
        input,
        out,
        &format!("Enter the output filename (default: '{}'): ", defaults.filename),
        &defaults.filename,
    )?);
    answers.filter = Some(prompt(
        input,
        out,
        &format!("Enter the URL filter pattern (default: '{}'): ", defaults.filter),
        &defaults.filter,
    )?);

    let output_type = prompt(
        input,
        out,
        &format!(
            "Enter the output file type (txt, json, jsonl, md, pdf) (default: '{}'): ",
            defaults.output_type
        ),
        defaults.output_type.extension(),
    )?;
    if cli.format.is_none() && matches!(output_type.parse(), Ok(OutputType::Pdf)) {
        answers.format = Some(prompt(
            input,
            out,
            "Enter the content format (html, md, txt) (default: 'txt'): ",
            ContentFormat::Text.as_str(),
        )?);
    }
    answers.output_type = Some(output_type);

    Ok(answers)
}

/// Runs a full export: crawl the feed, format the pages and write the file.
///
/// `progress` is the bar the log writer was built from.
pub async fn export(cli: &Cli, progress: BarProgress) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let settings = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        match gather_settings(cli, &config, &mut input, &mut out)? {
            Some(settings) => settings,
            None => {
                println!("Operation cancelled.");
                return Ok(());
            }
        }
    };

    let options = settings.crawl_options()?;
    let context = AppContext::new(&settings.http)?.with_progress(Arc::new(progress));

    let pages = context.crawler.crawl(&settings.input, &options).await?;
    if pages.is_empty() {
        tracing::warn!("No pages were extracted from {}", settings.input);
    }

    let contents = format_pages(&pages, settings.output_type)?;
    let path = write_output(&settings.filename, &contents, settings.output_type).await?;

    println!("Successfully saved {} pages to {}", pages.len(), path.display());
    Ok(())
}
