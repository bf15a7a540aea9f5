//! Latest command implementation.
//!
//! `rtx-helper latest` asks rtx which tools are currently active, fetches
//! each tool's remote listing, and prints the latest eligible version next
//! to the installed one. `--include-prereleases` widens eligibility,
//! `--hide-latest` suppresses tools that are already current.

use crate::cli::args::LatestArgs;
use crate::error::{HelperError, Result};
use crate::remote::{RemoteVersionLister, RtxRunner};
use crate::report::{build_row, ReportOptions, ToolReport};
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The latest command implementation.
pub struct LatestCommand {
    args: LatestArgs,
    quiet: bool,
}

impl LatestCommand {
    /// Create a new latest command.
    pub fn new(args: LatestArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }
}

impl Command for LatestCommand {
    fn execute(&self) -> Result<CommandResult> {
        let lister = RemoteVersionLister::new();
        let options = ReportOptions {
            hide_latest: self.args.hide_latest,
            include_prereleases: self.args.include_prereleases,
        };

        let targets = report_targets(&lister, &self.args.tools)?;
        let (rows, failures) = collect_rows(&lister, &targets, options);

        let theme = Theme::new();
        for (tool, err) in &failures {
            eprintln!("{} {}: {}", theme.error.apply_to("error:"), tool, err);
        }

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else if !self.quiet {
            render(&rows, &theme);
        }

        if failures.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

/// The `(tool, installed-version)` pairs the report covers.
///
/// With explicit tool arguments, the installed version is looked up from
/// `rtx current` when present; unrequested tools are ignored. Without
/// arguments, every currently-active tool is reported.
fn report_targets<R: RtxRunner>(
    lister: &RemoteVersionLister<R>,
    requested: &[String],
) -> Result<Vec<(String, Option<String>)>> {
    let current = lister.current_tools()?;

    if requested.is_empty() {
        return Ok(current
            .into_iter()
            .map(|(tool, version)| (tool, Some(version)))
            .collect());
    }

    Ok(requested
        .iter()
        .map(|tool| {
            let installed = current
                .iter()
                .find(|(name, _)| name == tool)
                .map(|(_, version)| version.clone());
            (tool.clone(), installed)
        })
        .collect())
}

/// Fetch each target's listing and build its row.
///
/// A failed listing is recorded against its own tool and the loop moves on;
/// one tool's failure never contaminates another's result.
fn collect_rows<R: RtxRunner>(
    lister: &RemoteVersionLister<R>,
    targets: &[(String, Option<String>)],
    options: ReportOptions,
) -> (Vec<ToolReport>, Vec<(String, HelperError)>) {
    let mut rows = Vec::new();
    let mut failures = Vec::new();

    for (tool, installed) in targets {
        match lister.list_available(tool) {
            Ok(versions) => {
                if let Some(row) = build_row(tool, installed.as_deref(), &versions, options) {
                    rows.push(row);
                }
            }
            Err(e) => failures.push((tool.clone(), e)),
        }
    }

    (rows, failures)
}

fn render(rows: &[ToolReport], theme: &Theme) {
    for row in rows {
        let installed = row.installed.as_deref().unwrap_or("-");
        let latest = match &row.latest {
            Some(v) if row.up_to_date => theme.current.apply_to(v.as_str().to_string()),
            Some(v) => theme.outdated.apply_to(v.as_str().to_string()),
            None => theme.dim.apply_to("-".to_string()),
        };
        println!(
            "{} {} {}",
            theme.highlight.apply_to(&row.tool),
            theme.dim.apply_to(installed),
            latest
        );
    }
}
