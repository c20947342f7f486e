//! karamProof CLI
//!
//! Drives the same session and upload flows as the browser front end,
//! against local files.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use kp_core::analytics::{severity_counts, TrendSummary};
use kp_core::report::{self, ReportFormat};
use kp_core::upload::Enforcement;
use kp_core::{
    AnalyticsSource, AppConfig, MockAnalytics, MockVerifier, Page, Role, ScoringKind, Session,
    Timer, UploadFlow, UploadState, UploadedFile, View,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "kp")]
#[command(about = "karamProof certificate verification prototype")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config file; KP_* environment variables and flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a certificate file with the mock verifier
    Verify {
        /// Path to the certificate
        #[arg(short, long)]
        file: PathBuf,

        /// Role to sign in as
        #[arg(short, long, default_value = "user")]
        role: Role,

        /// Scoring policy (canned, randomized)
        #[arg(short, long)]
        policy: Option<ScoringKind>,

        /// Seed for randomized scoring
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated analysis delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Reject unsupported or oversized files instead of warning
        #[arg(long)]
        strict: bool,

        /// Report format (json, markdown)
        #[arg(long, default_value = "markdown")]
        format: ReportFormat,

        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Print dashboard and analytics figures
    Analytics {
        /// Role to sign in as
        #[arg(short, long, default_value = "institution")]
        role: Role,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay navigation requests and print the view after each one
    Walk {
        /// Pages to request, in order
        #[arg(required = true)]
        pages: Vec<Page>,

        /// Sign in before walking
        #[arg(long)]
        login: Option<Role>,
    },
}

struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "kp_cli=debug,kp_core=debug"
    } else {
        "kp_cli=info,kp_core=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Verify {
            file,
            role,
            policy,
            seed,
            delay_ms,
            strict,
            format,
            output_file,
        } => {
            let mut config = config;
            if let Some(policy) = policy {
                config.scoring = policy;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(delay_ms) = delay_ms {
                config.analysis_delay_ms = delay_ms;
            }
            if strict {
                config.upload.enforcement = Enforcement::Strict;
            }
            cmd_verify(&config, &file, role, format, output_file.as_deref()).await
        }
        Commands::Analytics { role, json } => cmd_analytics(role, json),
        Commands::Walk { pages, login } => {
            for line in walk(login, &pages) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let base = match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    base.with_overrides(|key| std::env::var(key).ok())
        .context("invalid KP_* environment override")
}

/// Name and size only; the file is never read
fn describe_file(file: &Path) -> Result<UploadedFile> {
    let metadata = std::fs::metadata(file)
        .with_context(|| format!("failed to stat {}", file.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a regular file", file.display());
    }
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    Ok(UploadedFile::new(name, metadata.len()))
}

async fn cmd_verify(
    config: &AppConfig,
    file: &Path,
    role: Role,
    format: ReportFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let mut session = Session::new();
    session.login(role);
    session.navigate(Page::Upload)?;

    let upload = describe_file(file)?;
    info!("Verifying {} ({}) as {}", upload.name(), upload.display_size(), role);

    let mut flow = UploadFlow::with_policy(config.upload.clone());
    for notice in flow.select_file(upload)? {
        warn!("{}", notice);
    }

    let verifier = MockVerifier::from_config(TokioTimer, config);
    let result = match flow.run(&verifier).await? {
        UploadState::Resulted { result, .. } => result.clone(),
        UploadState::Failed { error, .. } => bail!("verification failed: {}", error),
        other => bail!("verification ended while {}", other.phase()),
    };

    let report_content = report::generate_report(&result, format)?;
    match output_file {
        Some(out_path) => {
            std::fs::write(out_path, &report_content)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            info!("Report written to: {}", out_path.display());
        }
        None => println!("{}", report_content),
    }

    if !result.is_valid {
        let failed: Vec<&str> = result.failed_checks().map(|c| c.label.as_str()).collect();
        if failed.is_empty() {
            warn!("Certificate did not verify");
        } else {
            warn!("Certificate did not verify; failed checks: {}", failed.join(", "));
        }
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_analytics(role: Role, json: bool) -> Result<()> {
    let analytics = MockAnalytics;
    let mut session = Session::new();
    session.login(role);

    let profile = analytics.profile(role);
    let stats = analytics.dashboard_stats(role);

    // Analytics proper is institution-only
    let insights = match session.navigate(Page::Analytics) {
        Ok(()) => Some((
            analytics.kpis(),
            analytics.monthly_trends(),
            analytics.fraud_attempts(),
            analytics.fraud_breakdown(),
        )),
        Err(err) => {
            info!("{}", err);
            None
        }
    };

    if json {
        let mut doc = serde_json::json!({
            "role": role,
            "profile": profile,
            "dashboard": stats,
        });
        if let Some((kpis, months, attempts, breakdown)) = &insights {
            doc["analytics"] = serde_json::json!({
                "kpis": kpis,
                "monthly_trends": months,
                "summary": TrendSummary::from_months(months),
                "fraud_attempts": attempts,
                "fraud_breakdown": breakdown,
            });
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("\n{}\n{}", profile.display_name, "=".repeat(50));
    println!("{}", profile.tagline);
    for stat in &stats {
        print_stat(stat);
    }

    let Some((kpis, months, attempts, breakdown)) = insights else {
        return Ok(());
    };

    println!("\nAnalytics\n{}", "=".repeat(50));
    for stat in &kpis {
        print_stat(stat);
    }

    let summary = TrendSummary::from_months(&months);
    println!("\nMonthly trends:");
    for month in &months {
        println!(
            "  {:<4} {:>6} verifications  {:>3} fraud  {:.1}% success",
            month.month, month.verifications, month.fraud_attempts, month.success_rate
        );
    }
    println!(
        "  total {} verifications, {:.1} fraud per 1,000, peak {}",
        summary.total_verifications,
        summary.fraud_per_thousand(),
        summary.peak_month.as_deref().unwrap_or("n/a")
    );

    println!("\nRecent fraud attempts:");
    for attempt in &attempts {
        println!(
            "  [{}] {} - {} ({})",
            attempt.severity, attempt.kind, attempt.certificate, attempt.time
        );
    }
    let counts = severity_counts(&attempts);
    let tally: Vec<String> = counts.iter().map(|(s, n)| format!("{} {}", n, s)).collect();
    println!("  by severity: {}", tally.join(", "));

    println!("\nFraud types:");
    for category in &breakdown {
        println!("  {:>3}% {}: {}", category.share_percent, category.name, category.description);
    }
    Ok(())
}

fn print_stat(stat: &kp_core::analytics::StatCard) {
    match &stat.change {
        Some(change) => println!("  {}: {} ({})", stat.label, stat.value, change),
        None => println!("  {}: {}", stat.label, stat.value),
    }
}

fn describe(view: View) -> String {
    match view.role() {
        Some(role) => format!("{} ({})", view.page(), role),
        None => view.page().to_string(),
    }
}

/// One output line per step: the request and the view it produced
fn walk(login: Option<Role>, pages: &[Page]) -> Vec<String> {
    let mut session = Session::new();
    if let Some(role) = login {
        session.login(role);
    }

    let mut lines = vec![format!("start -> {}", describe(session.view()))];
    for &page in pages {
        let outcome = match session.navigate(page) {
            Ok(()) => String::new(),
            Err(err) => format!(" [{}]", err),
        };
        lines.push(format!("{} -> {}{}", page, describe(session.view()), outcome));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "kp", "verify", "--file", "degree.pdf", "--role", "institution", "--policy",
            "canned", "--format", "json", "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Verify {
                file,
                role,
                policy,
                format,
                strict,
                ..
            } => {
                assert_eq!(file, PathBuf::from("degree.pdf"));
                assert_eq!(role, Role::Institution);
                assert_eq!(policy, Some(ScoringKind::Canned));
                assert_eq!(format, ReportFormat::Json);
                assert!(strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!(Cli::try_parse_from(["kp", "analytics", "--role", "admin"]).is_err());
    }

    #[test]
    fn test_walk_requires_pages() {
        assert!(Cli::try_parse_from(["kp", "walk"]).is_err());
        let cli = Cli::try_parse_from(["kp", "-v", "walk", "dashboard", "upload"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_walk_anonymous_is_redirected() {
        let lines = walk(None, &[Page::Dashboard]);
        assert_eq!(lines[0], "start -> landing");
        assert!(lines[1].starts_with("dashboard -> login ["));
    }

    #[test]
    fn test_walk_user_cannot_open_analytics() {
        let lines = walk(Some(Role::User), &[Page::Upload, Page::Analytics]);
        assert_eq!(lines[0], "start -> dashboard (user)");
        assert_eq!(lines[1], "upload -> upload (user)");
        assert!(lines[2].starts_with("analytics -> upload (user) ["));
    }

    #[test]
    fn test_walk_institution_reaches_analytics() {
        let lines = walk(Some(Role::Institution), &[Page::Analytics]);
        assert_eq!(lines[1], "analytics -> analytics");
    }

    #[test]
    fn test_describe_file_uses_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("degree.pdf");
        std::fs::write(&path, vec![0u8; 4096]).unwrap();

        let upload = describe_file(&path).unwrap();
        assert_eq!(upload.name(), "degree.pdf");
        assert_eq!(upload.size(), 4096);

        assert!(describe_file(dir.path()).is_err());
        assert!(describe_file(&dir.path().join("missing.pdf")).is_err());
    }

    #[test]
    fn test_strict_rejects_oversized_file_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.pdf");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(64 * 1024 * 1024).unwrap();

        let upload = describe_file(&path).unwrap();
        assert_eq!(upload.size(), 64 * 1024 * 1024);

        let mut flow = UploadFlow::with_policy(kp_core::UploadPolicy::strict());
        assert!(matches!(
            flow.select_file(upload),
            Err(kp_core::CoreError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.upload.max_bytes, AppConfig::default().upload.max_bytes);
    }
}
