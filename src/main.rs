use clap::{Parser, Subcommand, ValueEnum};
use pollreader::{Result, model, poll, render, stats};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "pollreader")]
#[command(about = "Summarise a polling CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the highest result, likely-voter averages and history change.
    Report {
        /// CSV with columns: month, date, sample, result A, result B.
        #[arg(long)]
        csv: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Polls on each side of the history comparison.
        #[arg(long, default_value_t = stats::HISTORY_WINDOW)]
        window: usize,

        /// Sample type used for the likely-voter average.
        #[arg(long, default_value = stats::LIKELY_VOTER)]
        marker: String,

        #[arg(long, default_value = "Harris")]
        candidate_a: String,

        #[arg(long, default_value = "Trump")]
        candidate_b: String,

        /// Write to a file instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            csv,
            format,
            window,
            marker,
            candidate_a,
            candidate_b,
            out,
        } => {
            // 1) Parse the CSV.
            let table = poll::parse_file(&csv)?;

            // 2) Aggregate.
            let opts = model::ReportOptions {
                candidate_a,
                candidate_b,
                marker,
                window,
            };
            let data = model::build_report_data(&table, &opts);

            // 3) Render.
            let rendered = match format {
                Format::Text => render::render_text_report(&data),
                Format::Json => render::render_json_report(&data)?,
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!(path = %path, "wrote report");
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
