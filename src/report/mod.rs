//! The latest-versions report.
//!
//! Pure logic over listings the [`crate::remote`] layer already fetched:
//! given a tool's installed version and its remote listing, decide which
//! version counts as latest and whether the row should be shown at all.
//! Rendering (and the decision to query rtx in the first place) lives in the
//! CLI layer.

use serde::Serialize;

use crate::version::ToolVersion;

/// Filtering switches for the report, straight from the CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Omit tools whose installed version already is the latest eligible one.
    pub hide_latest: bool,

    /// Count prerelease versions as eligible.
    pub include_prereleases: bool,
}

/// One row of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ToolReport {
    /// Tool name as the caller supplied it.
    pub tool: String,

    /// Currently-installed version, when known.
    pub installed: Option<String>,

    /// Latest eligible version under the active prerelease filter.
    pub latest: Option<ToolVersion>,

    /// Whether the installed version equals the latest eligible one.
    pub up_to_date: bool,
}

/// The latest eligible version of a remote listing.
///
/// Remote ordering is authoritative: the listing is never re-sorted, so
/// "latest" is simply the last token that survives the prerelease filter.
pub fn latest_eligible(
    versions: &[ToolVersion],
    include_prereleases: bool,
) -> Option<&ToolVersion> {
    versions
        .iter()
        .rev()
        .find(|v| include_prereleases || !v.is_prerelease())
}

/// Build one report row, or `None` when the row is hidden.
///
/// A tool with no eligible versions is never considered up to date, so it
/// survives `hide_latest` and shows up with an empty latest column.
pub fn build_row(
    tool: &str,
    installed: Option<&str>,
    versions: &[ToolVersion],
    options: ReportOptions,
) -> Option<ToolReport> {
    let latest = latest_eligible(versions, options.include_prereleases);
    let up_to_date = matches!(
        (installed, latest),
        (Some(installed), Some(latest)) if installed == latest.as_str()
    );

    if options.hide_latest && up_to_date {
        return None;
    }

    Some(ToolReport {
        tool: tool.to_string(),
        installed: installed.map(String::from),
        latest: latest.cloned(),
        up_to_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(tokens: &[&str]) -> Vec<ToolVersion> {
        tokens.iter().copied().map(ToolVersion::new).collect()
    }

    #[test]
    fn latest_is_the_last_stable_token() {
        let versions = listing(&["3.10.1", "3.11.0", "3.12.0-rc1"]);

        let latest = latest_eligible(&versions, false).unwrap();
        assert_eq!(latest.as_str(), "3.11.0");
    }

    #[test]
    fn prereleases_are_eligible_when_included() {
        let versions = listing(&["3.10.1", "3.11.0", "3.12.0-rc1"]);

        let latest = latest_eligible(&versions, true).unwrap();
        assert_eq!(latest.as_str(), "3.12.0-rc1");
    }

    #[test]
    fn all_prerelease_listing_has_no_eligible_latest() {
        let versions = listing(&["1.0.0-alpha", "1.0.0-beta"]);

        assert!(latest_eligible(&versions, false).is_none());
        assert_eq!(latest_eligible(&versions, true).unwrap().as_str(), "1.0.0-beta");
    }

    #[test]
    fn row_marks_up_to_date_tool() {
        let versions = listing(&["1.0.0", "1.1.0"]);

        let row = build_row("node", Some("1.1.0"), &versions, ReportOptions::default()).unwrap();
        assert!(row.up_to_date);
        assert_eq!(row.latest.unwrap().as_str(), "1.1.0");
    }

    #[test]
    fn row_marks_outdated_tool() {
        let versions = listing(&["1.0.0", "1.1.0"]);

        let row = build_row("node", Some("1.0.0"), &versions, ReportOptions::default()).unwrap();
        assert!(!row.up_to_date);
    }

    #[test]
    fn hide_latest_drops_up_to_date_rows_only() {
        let versions = listing(&["1.0.0", "1.1.0"]);
        let options = ReportOptions {
            hide_latest: true,
            ..Default::default()
        };

        assert!(build_row("node", Some("1.1.0"), &versions, options).is_none());
        assert!(build_row("node", Some("1.0.0"), &versions, options).is_some());
    }

    #[test]
    fn prerelease_filter_changes_up_to_date_verdict() {
        let versions = listing(&["1.1.0", "1.2.0-rc1"]);

        // Under the default filter 1.1.0 is latest, so the tool is current.
        let row = build_row("go", Some("1.1.0"), &versions, ReportOptions::default()).unwrap();
        assert!(row.up_to_date);

        // With prereleases included the rc is newer.
        let options = ReportOptions {
            include_prereleases: true,
            ..Default::default()
        };
        let row = build_row("go", Some("1.1.0"), &versions, options).unwrap();
        assert!(!row.up_to_date);
        assert_eq!(row.latest.unwrap().as_str(), "1.2.0-rc1");
    }

    #[test]
    fn empty_listing_survives_hide_latest() {
        let options = ReportOptions {
            hide_latest: true,
            ..Default::default()
        };

        let row = build_row("zig", Some("0.11.0"), &[], options).unwrap();
        assert!(row.latest.is_none());
        assert!(!row.up_to_date);
    }

    #[test]
    fn unknown_installed_version_is_never_up_to_date() {
        let versions = listing(&["1.0.0"]);

        let row = build_row("node", None, &versions, ReportOptions::default()).unwrap();
        assert!(!row.up_to_date);
        assert!(row.installed.is_none());
    }

    #[test]
    fn rows_serialize_for_json_output() {
        let versions = listing(&["1.0.0", "1.1.0"]);
        let row = build_row("node", Some("1.0.0"), &versions, ReportOptions::default()).unwrap();

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["tool"], "node");
        assert_eq!(json["installed"], "1.0.0");
        assert_eq!(json["latest"], "1.1.0");
        assert_eq!(json["up_to_date"], false);
    }
}
