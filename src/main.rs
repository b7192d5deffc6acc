use anyhow::Result;
use olympic_history::{
    chart::{render_chart, StatsDb},
    cli::{Cli, Commands},
    download::ensure_dataset_downloaded,
    ingest_file,
    schema::table_names,
    ConsoleUi, LoadSummary, Ui, UiApp,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Where the rows come from
enum Source {
    File(PathBuf),
    Url {
        url: String,
        cache_dir: Option<PathBuf>,
        force: bool,
    },
}

fn execute(source: &Source, output_db: &Path, ui: &mut impl Ui) -> Result<LoadSummary> {
    let input = match source {
        Source::File(path) => path.clone(),
        Source::Url {
            url,
            cache_dir,
            force,
        } => ensure_dataset_downloaded(url, cache_dir.clone(), *force, ui)?,
    };
    ingest_file(&input, output_db, ui)
}

fn summary_line(summary: &LoadSummary, output_db: &Path, start: Instant) -> String {
    format!(
        "Created {:?} ({} records, {} results dropped) in {:.1}s",
        output_db,
        summary.total_rows(),
        summary.dropped_results,
        start.elapsed().as_secs_f64()
    )
}

fn run_load(source: Source, output_db: PathBuf, tui: bool) -> Result<()> {
    let start = Instant::now();

    if tui {
        let mut ui = UiApp::new()?;
        match execute(&source, &output_db, &mut ui) {
            Ok(summary) => ui.finish(&summary_line(&summary, &output_db, start)),
            Err(e) => {
                ui.restore()?;
                Err(e)
            }
        }
    } else {
        let mut ui = ConsoleUi::new();
        let summary = execute(&source, &output_db, &mut ui)?;
        println!("\n{}", summary_line(&summary, &output_db, start));
        Ok(())
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Load {
            input,
            output_db,
            tui,
        } => run_load(Source::File(input), output_db, tui),

        Commands::Sync {
            url,
            output_db,
            force,
            cache_dir,
            tui,
        } => run_load(
            Source::Url {
                url,
                cache_dir,
                force,
            },
            output_db,
            tui,
        ),

        Commands::Download { url, output, force } => {
            let mut ui = ConsoleUi::new();
            let path = ensure_dataset_downloaded(&url, output, force, &mut ui)?;
            println!("Dataset ready at {:?}", path);
            Ok(())
        }

        Commands::Chart {
            kind,
            tokens,
            db,
            top,
        } => {
            let bars = StatsDb::open(&db)?.chart(kind, &tokens, top)?;
            render_chart(&mut io::stdout().lock(), &bars)?;
            Ok(())
        }

        Commands::ListTables => {
            println!("Tables in load order:\n");
            for name in table_names() {
                println!("  {}", name);
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    match run(cli) {
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
