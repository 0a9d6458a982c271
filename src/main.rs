use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use resuscan::{Config, Document, PipelineConfig, ScanPipeline, ScanReport};

#[derive(Parser, Debug)]
#[command(name = "resuscan")]
#[command(version = "0.1.0")]
#[command(about = "Score resumes against a job description")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan one or more resume files (.pdf, .docx, .txt)
    Scan(ScanArgs),
    /// Serve the upload form and scan endpoint over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Resume files to scan
    #[arg(short, long, required = true, num_args = 1..)]
    resume: Vec<PathBuf>,

    /// Job description text
    #[arg(short, long, conflicts_with = "job_file")]
    job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind, overrides RESUSCAN_BIND_ADDR
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("resuscan=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    let pipeline = ScanPipeline::new(&PipelineConfig::from(&config))?;

    match cli.command {
        Command::Scan(args) => run_scan(&pipeline, &args),
        Command::Serve(args) => {
            if let Some(bind) = args.bind {
                config.bind_addr = bind;
            }
            resuscan::server::serve(&config, pipeline).await?;
            Ok(())
        }
    }
}

fn run_scan(pipeline: &ScanPipeline, args: &ScanArgs) -> anyhow::Result<()> {
    let job_description = match (&args.job_description, &args.job_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    if job_description.is_empty() {
        tracing::warn!("No job description given, every resume gets the neutral score");
    }

    let mut results: Vec<(String, ScanReport)> = Vec::new();

    if let [path] = args.resume.as_slice() {
        let document = Document::from_path(path)?;
        let report = pipeline.run(&document, &job_description)?;
        results.push((path.display().to_string(), report));
    } else {
        let pb = ProgressBar::new(args.resume.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")?
                .progress_chars("#>-"),
        );

        for path in &args.resume {
            let scanned = Document::from_path(path).and_then(|doc| pipeline.run(&doc, &job_description));
            match scanned {
                Ok(report) => results.push((path.display().to_string(), report)),
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
            pb.inc(1);
        }

        pb.finish_with_message("Scan complete");

        // Highest score first; stable for equal scores
        results.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
    }

    output_results(&results, args)
}

fn output_results(results: &[(String, ScanReport)], args: &ScanArgs) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => format_json(results)?,
        "markdown" => format_markdown(results),
        _ => format_text(results),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_json(results: &[(String, ScanReport)]) -> serde_json::Result<String> {
    if let [(_, report)] = results {
        return serde_json::to_string_pretty(report);
    }

    let entries: Vec<_> = results
        .iter()
        .map(|(path, report)| serde_json::json!({ "file": path, "report": report }))
        .collect();
    serde_json::to_string_pretty(&entries)
}

fn format_text(results: &[(String, ScanReport)]) -> String {
    let mut output = String::new();

    for (rank, (path, report)) in results.iter().enumerate() {
        if results.len() > 1 {
            output.push_str(&format!("\n=== #{} {} ===\n\n", rank + 1, path));
        } else {
            output.push_str(&format!("\n=== Resume Scan: {} ===\n\n", path));
        }

        output.push_str(&format!("Score: {:.1} / 100\n", report.score));
        output.push_str(&format!("Experience: {} years\n", report.experience_years));

        if report.skills.is_empty() {
            output.push_str("Skills: none detected\n");
        } else {
            output.push_str(&format!("Skills: {}\n", report.skills.join(", ")));
        }

        if !report.matches.is_empty() {
            output.push_str("\nJob Description Matches:\n");
            for m in &report.matches {
                output.push_str(&format!(
                    "  - {} -> '{}' ({:.0}%)\n",
                    m.skill, m.matched_token, m.similarity
                ));
            }
        }
    }

    output.push_str(&format!(
        "\nScanned on: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(results: &[(String, ScanReport)]) -> String {
    let mut output = String::new();

    output.push_str("# Resume Scan\n\n");
    output.push_str("| Rank | Resume | Score | Experience | Skills |\n");
    output.push_str("|------|--------|-------|------------|--------|\n");

    for (rank, (path, report)) in results.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {:.1} | {} years | {} |\n",
            rank + 1,
            path,
            report.score,
            report.experience_years,
            report.skills.join(", ")
        ));
    }

    for (path, report) in results.iter().filter(|(_, r)| !r.matches.is_empty()) {
        output.push_str(&format!("\n## Matches: {}\n\n", path));
        output.push_str("| Skill | Job Token | Similarity |\n");
        output.push_str("|-------|-----------|------------|\n");
        for m in &report.matches {
            output.push_str(&format!(
                "| {} | {} | {:.0}% |\n",
                m.skill, m.matched_token, m.similarity
            ));
        }
    }

    output.push_str(&format!(
        "\n---\n*Scanned on {}*\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
