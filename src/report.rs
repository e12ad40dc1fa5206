//! Run summary and the machine-readable report.

use crate::check::{CaseResult, CaseStatus, Outcome};
use crate::profile::ApiVersion;
use anyhow::Context;
use log::{error, info, warn};
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cases: Counts,
    pub checks: Counts,
}

impl Summary {
    pub fn of(cases: &[CaseResult]) -> Self {
        let mut summary = Summary::default();
        for case in cases {
            match case.status {
                CaseStatus::Passed => summary.cases.passed += 1,
                CaseStatus::Failed => summary.cases.failed += 1,
                CaseStatus::Skipped => summary.cases.skipped += 1,
            }
            for check in &case.checks {
                match check.outcome {
                    Outcome::Passed { .. } => summary.checks.passed += 1,
                    Outcome::Failed { .. } => summary.checks.failed += 1,
                    Outcome::Skipped { .. } => summary.checks.skipped += 1,
                }
            }
        }
        summary
    }

    pub fn succeeded(&self) -> bool {
        self.cases.failed == 0
    }

    pub fn log(&self, cases: &[CaseResult]) {
        info!(
            "{} cases ran: {} passed, {} failed, {} skipped ({} checks, {} failed)",
            cases.len(),
            self.cases.passed,
            self.cases.failed,
            self.cases.skipped,
            self.checks.passed + self.checks.failed + self.checks.skipped,
            self.checks.failed
        );
        if self.cases.skipped > 0 {
            warn!("[  SKIPPED ] {} cases", self.cases.skipped);
        }
        for case in cases.iter().filter(|c| c.status == CaseStatus::Failed) {
            error!("[  FAILED  ] {}", case.source);
        }
    }
}

#[derive(Serialize)]
pub struct Report<'a> {
    pub profile: &'a str,
    pub api_version: String,
    pub device_api_version: String,
    pub summary: Summary,
    pub cases: &'a [CaseResult],
}

impl<'a> Report<'a> {
    pub fn new(
        profile: &'a str,
        api_version: ApiVersion,
        device_api_version: ApiVersion,
        cases: &'a [CaseResult],
    ) -> Self {
        Self {
            profile,
            api_version: api_version.to_string(),
            device_api_version: device_api_version.to_string(),
            summary: Summary::of(cases),
            cases,
        }
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{FieldPath, FieldValue};
    use crate::check::CheckResult;
    use crate::expect::{Check, Comparison, Expected, Source};
    use pretty_assertions::assert_eq;

    fn case(status: CaseStatus, outcomes: Vec<Outcome>) -> CaseResult {
        CaseResult {
            source: Source::Properties {
                name: "VkPhysicalDeviceProperties".to_string(),
            },
            status,
            checks: outcomes
                .into_iter()
                .map(|outcome| CheckResult {
                    path: FieldPath::root().field("limits").field("maxImageDimension1D"),
                    check: Check::Compare {
                        comparison: Comparison::AtLeast,
                        expected: Expected::Unsigned(102),
                    },
                    outcome,
                })
                .collect(),
        }
    }

    fn cases() -> Vec<CaseResult> {
        vec![
            case(
                CaseStatus::Passed,
                vec![Outcome::Passed {
                    actual: FieldValue::Unsigned(4096),
                }],
            ),
            case(
                CaseStatus::Failed,
                vec![
                    Outcome::Failed {
                        actual: Some(FieldValue::Unsigned(64)),
                    },
                    Outcome::Passed {
                        actual: FieldValue::Unsigned(4096),
                    },
                ],
            ),
            case(
                CaseStatus::Skipped,
                vec![Outcome::Skipped {
                    reason: "requires Vulkan 1.3".to_string(),
                }],
            ),
        ]
    }

    #[test]
    fn summary_counts_cases_and_checks() {
        let summary = Summary::of(&cases());
        assert_eq!(
            summary,
            Summary {
                cases: Counts {
                    passed: 1,
                    failed: 1,
                    skipped: 1
                },
                checks: Counts {
                    passed: 2,
                    failed: 1,
                    skipped: 1
                },
            }
        );
        assert!(!summary.succeeded());
        assert!(Summary::of(&cases()[..1]).succeeded());
    }

    #[test]
    fn report_serializes_paths_and_outcomes() {
        let cases = cases();
        let report = Report::new(
            "VP_LUNARG_test_api",
            ApiVersion::new(1, 3, 204),
            ApiVersion::new(1, 3, 0),
            &cases,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["api_version"], "1.3.204");
        assert_eq!(json["summary"]["cases"]["failed"], 1);

        let failed = &json["cases"][1];
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["source"]["kind"], "properties");
        assert_eq!(failed["checks"][0]["path"], "limits.maxImageDimension1D");
        assert_eq!(failed["checks"][0]["outcome"]["status"], "failed");
        assert_eq!(failed["checks"][0]["outcome"]["actual"], 64);
    }
}
