//! Evaluation of the expectation table against reported values.
//!
//! Expectations sharing a [`Source`] form one case. Within a case every check
//! is evaluated even after a mismatch, so a single run reports all of them.

use crate::capability::{FieldPath, FieldValue};
use crate::expect::{Check, Comparison, Expectation, Expected, Source};
use indexmap::IndexMap;
use log::{error, info, warn};
use serde::Serialize;
use std::cmp::Ordering;

/// What a device reports for one source.
#[derive(Clone, Debug, PartialEq)]
pub enum Reported {
    Value(FieldValue),
    /// The device lacks something the profile requires. Every check fails.
    Missing(String),
    /// The source cannot be queried here, e.g. the struct needs an API
    /// version the device does not expose. Every check is skipped.
    Unavailable(String),
}

/// Capability values of the device under test.
pub trait DeviceCapabilities {
    fn read(&mut self, source: &Source) -> Reported;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed { actual: FieldValue },
    Failed { actual: Option<FieldValue> },
    Skipped { reason: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckResult {
    pub path: FieldPath,
    #[serde(flatten)]
    pub check: Check,
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Clone, Debug, Serialize)]
pub struct CaseResult {
    pub source: Source,
    pub status: CaseStatus,
    pub checks: Vec<CheckResult>,
}

impl CaseResult {
    fn new(source: Source, checks: Vec<CheckResult>) -> Self {
        let status = if checks.iter().any(|c| c.outcome.is_failure()) {
            CaseStatus::Failed
        } else if checks
            .iter()
            .any(|c| matches!(c.outcome, Outcome::Passed { .. }))
        {
            CaseStatus::Passed
        } else {
            CaseStatus::Skipped
        };

        Self {
            source,
            status,
            checks,
        }
    }
}

enum Number {
    Int(i128),
    Float(f64),
}

fn reported_number(value: &FieldValue) -> Option<Number> {
    match value {
        FieldValue::Unsigned(value) => Some(Number::Int(*value as i128)),
        FieldValue::Signed(value) => Some(Number::Int(*value as i128)),
        FieldValue::Float(value) => Some(Number::Float(*value)),
        _ => None,
    }
}

fn expected_number(value: &Expected) -> Option<Number> {
    match value {
        Expected::Unsigned(value) => Some(Number::Int(*value as i128)),
        Expected::Signed(value) => Some(Number::Int(*value as i128)),
        Expected::Float(value) => Some(Number::Float(*value)),
        Expected::Bool(value) => Some(Number::Int(*value as i128)),
        Expected::Text(_) => None,
    }
}

impl Number {
    fn as_f64(&self) -> f64 {
        match self {
            Number::Int(value) => *value as f64,
            Number::Float(value) => *value,
        }
    }
}

/// Reported floats are `f32` members, so declared values are rounded the same
/// way before comparing.
fn compare_numbers(reported: &Number, expected: &Number) -> Option<Ordering> {
    match (reported, expected) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
        (Number::Float(a), b) => (*a as f32).partial_cmp(&(b.as_f64() as f32)),
        (Number::Int(a), Number::Float(b)) => (*a as f64).partial_cmp(b),
    }
}

fn holds(comparison: Comparison, reported: &FieldValue, expected: &Expected) -> Option<bool> {
    match (comparison, expected) {
        (_, Expected::Text(text)) => match reported {
            FieldValue::Text(reported) => Some(reported == text),
            _ => None,
        },
        (Comparison::Equal, Expected::Bool(flag)) => reported.as_bits().map(|bits| (bits != 0) == *flag),
        (Comparison::ContainsBits, expected) => {
            let mask = match expected {
                Expected::Unsigned(mask) => *mask,
                _ => return None,
            };
            reported.as_bits().map(|bits| bits & mask == mask)
        }
        (comparison, expected) => {
            let ordering = compare_numbers(&reported_number(reported)?, &expected_number(expected)?)?;
            Some(match comparison {
                Comparison::Equal => ordering == Ordering::Equal,
                Comparison::AtLeast => ordering != Ordering::Less,
                Comparison::AtMost => ordering != Ordering::Greater,
                Comparison::ContainsBits => unreachable!("handled above"),
            })
        }
    }
}

/// Evaluates one check against the reported member, `None` when the member is
/// not part of the reflected struct.
pub fn evaluate(check: &Check, reported: Option<&FieldValue>) -> Outcome {
    let (comparison, expected) = match check {
        Check::Compare {
            comparison,
            expected,
        } => (*comparison, expected),
        Check::Unresolvable { reason } => {
            return Outcome::Skipped {
                reason: reason.clone(),
            }
        }
    };

    let Some(reported) = reported else {
        return Outcome::Skipped {
            reason: "member is not reflected".to_string(),
        };
    };

    match holds(comparison, reported, expected) {
        Some(true) => Outcome::Passed {
            actual: reported.clone(),
        },
        Some(false) | None => Outcome::Failed {
            actual: Some(reported.clone()),
        },
    }
}

fn evaluate_all(expectations: &[&Expectation], value: &FieldValue) -> Vec<CheckResult> {
    expectations
        .iter()
        .map(|expectation| CheckResult {
            path: expectation.path.clone(),
            check: expectation.check.clone(),
            outcome: evaluate(&expectation.check, value.lookup(&expectation.path)),
        })
        .collect()
}

/// A declared queue family is satisfied by any reported family. The best
/// candidate is reported when none matches.
fn evaluate_queue_family(expectations: &[&Expectation], families: &FieldValue) -> Vec<CheckResult> {
    let candidates = match families {
        FieldValue::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };

    candidates
        .iter()
        .map(|family| evaluate_all(expectations, family))
        .min_by_key(|results| results.iter().filter(|r| r.outcome.is_failure()).count())
        .unwrap_or_else(|| {
            expectations
                .iter()
                .map(|expectation| CheckResult {
                    path: expectation.path.clone(),
                    check: expectation.check.clone(),
                    outcome: Outcome::Failed { actual: None },
                })
                .collect()
        })
}

fn settle(expectations: &[&Expectation], outcome: impl Fn() -> Outcome) -> Vec<CheckResult> {
    expectations
        .iter()
        .map(|expectation| CheckResult {
            path: expectation.path.clone(),
            check: expectation.check.clone(),
            outcome: outcome(),
        })
        .collect()
}

pub fn run_case(
    source: &Source,
    expectations: &[&Expectation],
    device: &mut impl DeviceCapabilities,
) -> CaseResult {
    let checks = match device.read(source) {
        Reported::Value(value) => match source {
            Source::QueueFamily { .. } => evaluate_queue_family(expectations, &value),
            _ => evaluate_all(expectations, &value),
        },
        Reported::Missing(reason) => {
            error!("{}: {}", source, reason);
            settle(expectations, || Outcome::Failed { actual: None })
        }
        Reported::Unavailable(reason) => settle(expectations, || Outcome::Skipped {
            reason: reason.clone(),
        }),
    };

    CaseResult::new(source.clone(), checks)
}

fn log_case(case: &CaseResult) {
    for result in &case.checks {
        match (&result.outcome, &result.check) {
            (
                Outcome::Failed { actual },
                Check::Compare {
                    comparison,
                    expected,
                },
            ) => {
                let actual = actual
                    .as_ref()
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "<not reported>".to_string());
                error!(
                    "{}: expected {} {} {}, actual {}",
                    case.source, result.path, comparison, expected, actual
                );
            }
            (Outcome::Skipped { reason }, _) => {
                warn!("{}: skipped {} ({})", case.source, result.path, reason);
            }
            _ => {}
        }
    }

    let banner = match case.status {
        CaseStatus::Passed => "[       OK ]",
        CaseStatus::Failed => "[  FAILED  ]",
        CaseStatus::Skipped => "[  SKIPPED ]",
    };
    info!("{} {} ({} checks)", banner, case.source, case.checks.len());
}

/// Runs every case of the table in declaration order.
pub fn run(table: &[Expectation], device: &mut impl DeviceCapabilities) -> Vec<CaseResult> {
    let mut cases: IndexMap<&Source, Vec<&Expectation>> = IndexMap::new();
    for expectation in table {
        cases.entry(&expectation.source).or_default().push(expectation);
    }

    cases
        .into_iter()
        .map(|(source, expectations)| {
            info!("[ RUN      ] {}", source);
            let case = run_case(source, &expectations, device);
            log_case(&case);
            case
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect::derive;
    use crate::profile::ProfilesFile;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDevice {
        reported: HashMap<Source, Reported>,
        reads: Vec<Source>,
    }

    impl DeviceCapabilities for FakeDevice {
        fn read(&mut self, source: &Source) -> Reported {
            self.reads.push(source.clone());
            self.reported
                .get(source)
                .cloned()
                .unwrap_or_else(|| Reported::Unavailable("not simulated".to_string()))
        }
    }

    fn value(json: serde_json::Value) -> FieldValue {
        fn convert(json: &serde_json::Value) -> FieldValue {
            match json {
                serde_json::Value::Bool(flag) => FieldValue::Unsigned(*flag as u64),
                serde_json::Value::Number(number) => {
                    if let Some(value) = number.as_u64() {
                        FieldValue::Unsigned(value)
                    } else if let Some(value) = number.as_i64() {
                        FieldValue::Signed(value)
                    } else {
                        FieldValue::Float(number.as_f64().unwrap())
                    }
                }
                serde_json::Value::String(text) => FieldValue::Text(text.clone()),
                serde_json::Value::Array(items) => {
                    FieldValue::Array(items.iter().map(convert).collect())
                }
                serde_json::Value::Object(members) => FieldValue::Struct(
                    members
                        .iter()
                        .map(|(name, value)| (name.clone(), convert(value)))
                        .collect(),
                ),
                serde_json::Value::Null => unreachable!(),
            }
        }
        convert(&json)
    }

    fn compare(comparison: Comparison, expected: Expected) -> Check {
        Check::Compare {
            comparison,
            expected,
        }
    }

    #[test]
    fn comparisons_follow_expect_semantics() {
        let five = FieldValue::Unsigned(5);
        let ge = |n| evaluate(&compare(Comparison::AtLeast, Expected::Unsigned(n)), Some(&five));
        let le = |n| evaluate(&compare(Comparison::AtMost, Expected::Unsigned(n)), Some(&five));
        assert!(matches!(ge(5), Outcome::Passed { .. }));
        assert!(matches!(ge(6), Outcome::Failed { .. }));
        assert!(matches!(le(5), Outcome::Passed { .. }));
        assert!(matches!(le(4), Outcome::Failed { .. }));

        let bits = compare(Comparison::ContainsBits, Expected::Unsigned(0b101));
        assert!(matches!(
            evaluate(&bits, Some(&FieldValue::Unsigned(0b111))),
            Outcome::Passed { .. }
        ));
        assert!(matches!(
            evaluate(&bits, Some(&FieldValue::Unsigned(0b011))),
            Outcome::Failed { .. }
        ));

        let enabled = compare(Comparison::Equal, Expected::Bool(true));
        assert!(matches!(
            evaluate(&enabled, Some(&FieldValue::Unsigned(1))),
            Outcome::Passed { .. }
        ));
        assert!(matches!(
            evaluate(&enabled, Some(&FieldValue::Unsigned(0))),
            Outcome::Failed { .. }
        ));
    }

    #[test]
    fn floats_compare_at_single_precision() {
        let reported = FieldValue::Float(0.1f32 as f64);
        let check = compare(Comparison::Equal, Expected::Float(0.1));
        assert!(matches!(evaluate(&check, Some(&reported)), Outcome::Passed { .. }));

        let negative = FieldValue::Signed(-8);
        let check = compare(Comparison::AtMost, Expected::Signed(-8));
        assert!(matches!(evaluate(&check, Some(&negative)), Outcome::Passed { .. }));
        let check = compare(Comparison::AtMost, Expected::Signed(-9));
        assert!(matches!(evaluate(&check, Some(&negative)), Outcome::Failed { .. }));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let reported = FieldValue::Unsigned(u64::MAX - 1);
        let check = compare(Comparison::AtLeast, Expected::Unsigned(u64::MAX));
        assert!(matches!(evaluate(&check, Some(&reported)), Outcome::Failed { .. }));
    }

    #[test]
    fn type_mismatches_and_missing_members() {
        let check = compare(Comparison::Equal, Expected::Text("llvmpipe".to_string()));
        assert!(matches!(
            evaluate(&check, Some(&FieldValue::Unsigned(1))),
            Outcome::Failed { .. }
        ));
        assert!(matches!(evaluate(&check, None), Outcome::Skipped { .. }));

        let unresolvable = Check::Unresolvable {
            reason: "unknown flag".to_string(),
        };
        assert!(matches!(
            evaluate(&unresolvable, Some(&FieldValue::Unsigned(1))),
            Outcome::Skipped { .. }
        ));
    }

    fn table() -> Vec<Expectation> {
        let file: ProfilesFile = serde_json::from_value(json!({
            "capabilities": {
                "block": {
                    "extensions": { "VK_KHR_maintenance3": 1 },
                    "features": {
                        "VkPhysicalDeviceFeatures": { "wideLines": true, "largePoints": true },
                        "VkPhysicalDeviceRobustness2FeaturesEXT": { "nullDescriptor": true }
                    },
                    "properties": {
                        "VkPhysicalDeviceProperties": {
                            "limits": { "maxImageDimension1D": 102, "maxImageDimension2D": 103 }
                        }
                    },
                    "queueFamiliesProperties": [
                        { "VkQueueFamilyProperties": { "queueFlags": ["VK_QUEUE_COMPUTE_BIT"], "queueCount": 2 } }
                    ]
                }
            },
            "profiles": { "VP_TEST": { "api-version": "1.1.0", "capabilities": ["block"] } }
        }))
        .unwrap();
        derive(&file.resolve("VP_TEST").unwrap())
    }

    #[test]
    fn run_groups_checks_into_cases() {
        let mut device = FakeDevice::default();
        device.reported.insert(
            Source::ApiVersion,
            Reported::Value(value(json!({ "apiVersion": ash::vk::make_api_version(0, 1, 3, 0) }))),
        );
        device.reported.insert(
            Source::Extension {
                name: "VK_KHR_maintenance3".to_string(),
            },
            Reported::Missing("extension is not supported".to_string()),
        );
        device.reported.insert(
            Source::Features {
                name: "VkPhysicalDeviceFeatures".to_string(),
            },
            Reported::Value(value(json!({ "wideLines": true, "largePoints": false }))),
        );
        device.reported.insert(
            Source::Properties {
                name: "VkPhysicalDeviceProperties".to_string(),
            },
            Reported::Value(value(json!({
                "limits": { "maxImageDimension1D": 4096, "maxImageDimension2D": 4096 }
            }))),
        );
        device.reported.insert(
            Source::QueueFamily {
                index: 0,
                name: "VkQueueFamilyProperties".to_string(),
            },
            Reported::Value(value(json!([
                { "queueFlags": 1, "queueCount": 1 },
                { "queueFlags": 3, "queueCount": 4 }
            ]))),
        );

        let cases = run(&table(), &mut device);
        let statuses: Vec<_> = cases
            .iter()
            .map(|case| (case.source.to_string(), case.status))
            .collect();
        assert_eq!(
            statuses,
            [
                ("apiVersion".to_string(), CaseStatus::Passed),
                ("extension VK_KHR_maintenance3".to_string(), CaseStatus::Failed),
                ("VkPhysicalDeviceFeatures".to_string(), CaseStatus::Failed),
                ("VkPhysicalDeviceRobustness2FeaturesEXT".to_string(), CaseStatus::Skipped),
                ("VkPhysicalDeviceProperties".to_string(), CaseStatus::Passed),
                ("VkQueueFamilyProperties[0]".to_string(), CaseStatus::Passed),
            ]
        );

        // A mismatch does not stop the remaining checks of the case.
        let features = &cases[2];
        assert_eq!(features.checks.len(), 2);
        assert_eq!(features.checks.iter().filter(|c| c.outcome.is_failure()).count(), 1);

        // Each source is read exactly once.
        assert_eq!(device.reads.len(), cases.len());
    }
}
