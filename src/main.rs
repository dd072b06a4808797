use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use arama::util::time::{format_date, now_secs};
use arama::{load_corpus, load_corpus_file, run_build, Document, SearchConfig, SearchIndex};

mod cli;
use cli::display::{self, themed, BLUE, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            now,
            json,
            config,
        } => search_command(&corpus, &query, limit, now, json, config.as_deref()),
        Commands::Inspect { corpus, top } => inspect_command(&corpus, top),
        Commands::Index {
            input,
            output,
            template,
            page,
        } => index_command(&input, &output, template.as_deref().zip(page.as_deref())),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// A corpus path is either the JSON index or a page with the inline payload.
///
/// For a page, the index file is looked up where the site keeps it relative
/// to the blog directory, which is where the widget fetches it from too.
fn open_corpus(path: &Path) -> Result<Vec<Document>> {
    let is_page = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));

    let docs = if is_page {
        let fallback: PathBuf = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("..")
            .join("search")
            .join("index.json");
        load_corpus(Some(path), &fallback)
    } else {
        load_corpus_file(path)
    };
    docs.context(arama::hints::LOAD_FAILED)
}

fn search_command(
    corpus: &Path,
    query: &str,
    limit: usize,
    now: Option<f64>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    let docs = open_corpus(corpus)?;
    let mut index = SearchIndex::with_config(docs, config.clone());

    let outcome = index.search_at(query, now.unwrap_or_else(now_secs));

    if json {
        let limited = match outcome {
            arama::SearchOutcome::Results(mut hits) => {
                hits.truncate(limit);
                arama::SearchOutcome::Results(hits)
            }
            too_short => too_short,
        };
        let out = serde_json::to_string_pretty(&limited).context("failed to encode results")?;
        println!("{}", out);
        return Ok(());
    }

    if let Some(hint) = outcome.hint() {
        println!("{}", display::hint(hint));
        return Ok(());
    }

    let hits = outcome.hits();
    let shown = hits.len().min(limit);
    for (rank, hit) in hits.iter().take(limit).enumerate() {
        let doc = hit.document;
        println!(
            "{} {}  {}",
            themed(GRAY, &[], &format!("{:>2}.", rank + 1)),
            themed(CYAN, &[BOLD], &doc.title),
            display::score_value(hit.score)
        );
        let mut meta = themed(BLUE, &[], &format!("{}.html", doc.slug));
        if !doc.date.is_empty() {
            meta.push_str(&themed(GRAY, &[], &format!("  {}", doc.date)));
        }
        println!("    {}", meta);
        println!("    {}", display::render_snippet(&hit.snippet, &config));
        println!();
    }

    eprintln!(
        "{}",
        themed(GRAY, &[], &format!("{} of {} results", shown, hits.len()))
    );
    Ok(())
}

fn inspect_command(corpus: &Path, top: usize) -> Result<()> {
    let docs = open_corpus(corpus)?;
    let mut index = SearchIndex::new(docs);

    #[cfg(feature = "parallel")]
    {
        use indicatif::{ProgressBar, ProgressStyle};

        let progress = ProgressBar::new(index.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len}",
        ) {
            progress.set_style(style.progress_chars("━━╸"));
        }
        progress.set_prefix("Indexing");
        index.warm_with(|_| progress.inc(1));
        progress.finish_and_clear();
    }

    #[cfg(not(feature = "parallel"))]
    index.warm();

    let docs = index.docs();
    let dated: Vec<i64> = docs.iter().filter_map(|d| d.ts).filter(|&ts| ts != 0).collect();
    let empty = docs
        .iter()
        .filter(|d| d.title.trim().is_empty() || d.content.trim().is_empty())
        .count();

    let mut totals: HashMap<&str, u64> = HashMap::new();
    let mut body_chars = 0usize;
    for doc in docs {
        body_chars += doc.content.chars().count();
        if let Some(freqs) = doc.frequencies() {
            for (stem, count) in freqs.title.iter().chain(freqs.body.iter()) {
                *totals.entry(stem.as_str()).or_insert(0) += u64::from(*count);
            }
        }
    }
    let mut ranked: Vec<(&str, u64)> = totals.iter().map(|(s, c)| (*s, *c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    display::header("CORPUS");
    display::row(&format!(" Documents      {}", docs.len()));
    display::row(&format!(" Unfindable     {} (empty title or body)", empty));
    display::row(&format!(
        " Body chars     {} (avg {})",
        body_chars,
        body_chars.checked_div(docs.len()).unwrap_or(0)
    ));
    match (dated.iter().min(), dated.iter().max()) {
        (Some(&oldest), Some(&newest)) => display::row(&format!(
            " Dated          {} ({} → {})",
            dated.len(),
            format_date(oldest),
            format_date(newest)
        )),
        _ => display::row(" Dated          0"),
    }
    display::row(&format!(" Vocabulary     {} stems", totals.len()));

    display::divider("TOP STEMS");
    for (stem, count) in ranked.iter().take(top) {
        display::row(&format!(
            " {} {}",
            display::pad_right(&themed(CYAN, &[], stem), 24),
            count
        ));
    }
    display::footer();
    Ok(())
}

fn index_command(input: &Path, output: &Path, page: Option<(&Path, &Path)>) -> Result<()> {
    let report = run_build(input, output, page)
        .with_context(|| format!("failed to build search index from {}", input.display()))?;

    if report.documents == 0 {
        eprintln!("⚠️  No posts found in {}", input.display());
    }
    eprintln!("✅ Build complete");
    eprintln!("  ✓ {} ({} documents)", report.index_path.display(), report.documents);
    if let Some(page) = &report.page_path {
        eprintln!("  ✓ {}", page.display());
    }
    Ok(())
}
