use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use docsift::{
    excerpt, highlight_text, load_index_file, perform_search_with, BasePath, Document,
    ScoredDocument, SearchIndex, SearchOptions, SearchResultOutput, WidgetConfig,
};

mod cli;
use cli::display::{self, row, section_bot, section_mid, section_top};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            page,
            json,
        } => run_search(&file, &query, limit, &page, json),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load(path: &str) -> Result<SearchIndex> {
    let docs = load_index_file(Path::new(path))
        .with_context(|| format!("failed to load index {}", path))?;
    Ok(SearchIndex::from_documents(docs))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

/// Rank `raw` the way the dropdown would for the same input.
fn search<'a>(index: &'a SearchIndex, raw: &str, options: &SearchOptions) -> Vec<ScoredDocument<'a>> {
    perform_search_with(raw.trim(), index, options)
}

fn run_search(path: &str, query: &str, limit: usize, page: &str, json: bool) -> Result<()> {
    let query = query.trim();
    let index = load(path)?;
    let config = WidgetConfig {
        limit,
        ..WidgetConfig::default()
    };
    let base = BasePath::resolve(page, &config.nested_dirs);
    let options = config.search_options();

    let start = Instant::now();
    let results = search(&index, query, &options);
    let elapsed = start.elapsed();
    log::debug!("{} results in {:?}", results.len(), elapsed);

    if json {
        let output: Vec<SearchResultOutput> = results
            .iter()
            .map(|scored| SearchResultOutput::new(scored, base.join(&scored.doc.url)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to serialize results")?
        );
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", display::truncate(query, 40)));
    row(&display::dim(&format!(
        "{} documents · {} results · {:.1} µs",
        index.len(),
        results.len(),
        elapsed.as_secs_f64() * 1_000_000.0
    )));

    if results.is_empty() {
        row("");
        row(&format!("No results found for \"{}\"", query));
        section_bot();
        return Ok(());
    }

    for (rank, scored) in results.iter().enumerate() {
        let doc = scored.doc;
        section_mid(&format!("#{}", rank + 1));
        row(&format!(
            "{}  {}",
            display::score_value(scored.score),
            display::highlighted_truncated(&highlight_text(&doc.title, query), 60)
        ));
        row(&format!(
            "      {}  {}",
            display::section_label(doc.section_label()),
            display::link(&base.join(&doc.url))
        ));
        let snippet = highlight_text(&excerpt(&doc.content, config.excerpt_chars), query);
        row(&format!(
            "      {}",
            display::highlighted_truncated(&snippet, display::BOX_WIDTH - 8)
        ));
    }
    section_mid("MORE");
    row(&display::link(
        &base.full_results_url(&config.results_page, query),
    ));
    section_bot();

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// Counts a site author cares about before shipping an index.
#[derive(Debug, Default)]
struct IndexSummary {
    documents: usize,
    sections: BTreeMap<String, usize>,
    missing_title: usize,
    missing_search_text: usize,
    missing_content: usize,
    missing_url: usize,
    search_text_chars: usize,
}

impl IndexSummary {
    fn from_documents(docs: &[Document]) -> Self {
        let mut summary = Self {
            documents: docs.len(),
            ..Self::default()
        };
        for doc in docs {
            *summary
                .sections
                .entry(doc.section_label().to_string())
                .or_default() += 1;
            summary.missing_title += usize::from(doc.title.is_empty());
            summary.missing_search_text += usize::from(doc.search_text.is_empty());
            summary.missing_content += usize::from(doc.content.is_empty());
            summary.missing_url += usize::from(doc.url.is_empty());
            summary.search_text_chars += doc.search_text.chars().count();
        }
        summary
    }
}

fn run_inspect(path: &str) -> Result<()> {
    let index = load(path)?;
    let summary = IndexSummary::from_documents(index.documents());

    section_top("INDEX");
    row(&format!("{:<22}{}", "File", path));
    row(&format!("{:<22}{}", "Documents", summary.documents));
    row(&format!("{:<22}{}", "Sections", summary.sections.len()));
    row(&format!(
        "{:<22}{}",
        "searchText chars",
        summary.search_text_chars
    ));

    section_mid("SECTIONS");
    for (section, count) in &summary.sections {
        row(&format!(
            "{:>5}  {}",
            count,
            display::section_label(&display::truncate(section, 60))
        ));
    }

    section_mid("MISSING FIELDS");
    for (field, count) in [
        ("title", summary.missing_title),
        ("searchText", summary.missing_search_text),
        ("content", summary.missing_content),
        ("url", summary.missing_url),
    ] {
        let line = format!("{:<22}{}", field, count);
        row(&if count == 0 { display::dim(&line) } else { line });
    }
    section_bot();

    Ok(())
}
