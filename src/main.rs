use anyhow::Context;
use clap::Parser;
use gaq_core::{config::Config, query, table};
use gaq_solr::SolrClient;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gaq", about = "Golr Association Query — extract gene/term association tables")]
struct Cli {
    /// Golr endpoint base URL. Defaults to the configured Monarch index.
    #[arg(long = "golr_url")]
    golr_url: Option<String>,

    /// Output file path. Writes to stdout when omitted.
    #[arg(short = 'o')]
    output: Option<PathBuf>,

    /// Maximum rows to fetch.
    #[arg(short = 'm', long = "max_rows", default_value_t = 10)]
    max_rows: usize,

    /// Accept a result set that exactly fills --max_rows.
    #[arg(short = 'k', long)]
    truncate: bool,

    /// Suppress the header row.
    #[arg(short = 'n', long)]
    noheader: bool,

    /// Output fields. Pass a single `*` (or an empty string) to project
    /// every field the index returns.
    #[arg(
        short = 'f',
        long,
        num_args = 1..,
        default_values_t = [
            "subject_taxon".to_string(),
            "subject_gene".to_string(),
            "subject_gene_label".to_string(),
            "object".to_string(),
            "object_label".to_string(),
        ]
    )]
    fields: Vec<String>,

    /// Filter clauses, key=value. Seeded category filters can be overridden
    /// by reusing their key.
    #[arg(short = 'q', long = "query", num_args = 1..)]
    query: Vec<String>,

    /// Additional output fields, appended after --fields.
    #[arg(short = 'x', long, num_args = 1..)]
    extrafields: Vec<String>,

    /// Hyphen-delimited subject-object category pair, e.g. gene-disease.
    #[arg(short = 't', long = "type", default_value = "gene-disease")]
    assoc_type: String,

    /// Verbose tracing on stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let url = cli.golr_url.unwrap_or(config.solr.url);

    // Validation runs to completion before the network is touched.
    let fields = query::field_list(&cli.fields, &cli.extrafields);
    let assoc = query::build(&cli.assoc_type, &cli.query, fields, cli.max_rows)?;
    tracing::debug!(q = %assoc.q, rows = assoc.rows, "built query");

    let client = SolrClient::new(&url, Duration::from_secs(config.solr.timeout_secs))?;
    let docs = client
        .search(&assoc)
        .await
        .with_context(|| format!("search against {url} failed"))?;

    let table = table::project(&docs, &assoc.fields, assoc.rows, cli.truncate, !cli.noheader)?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            table.write_tsv(&mut out)?;
            out.flush()?;
            println!("  WROTE: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            table.write_tsv(&mut stdout.lock())?;
        }
    }

    Ok(())
}
