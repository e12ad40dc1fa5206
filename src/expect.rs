//! The expectation table.
//!
//! A resolved profile is flattened into one [`Expectation`] per declared
//! member: where the value is reported ([`Source`]), which member
//! ([`FieldPath`]) and how the reported value must relate to the declared one
//! ([`Check`]).

use crate::capability::limits::{classify_nested, LimitKind};
use crate::capability::names::{enumerant, flag_mask};
use crate::capability::FieldPath;
use crate::profile::ResolvedProfile;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Where a reported value comes from. Expectations sharing a source form one
/// check case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    ApiVersion,
    Extension { name: String },
    Features { name: String },
    Properties { name: String },
    Format { format: String, name: String },
    QueueFamily { index: usize, name: String },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::ApiVersion => write!(f, "apiVersion"),
            Source::Extension { name } => write!(f, "extension {}", name),
            Source::Features { name } | Source::Properties { name } => write!(f, "{}", name),
            Source::Format { format, name } => write!(f, "{}/{}", format, name),
            Source::QueueFamily { index, name } => write!(f, "{}[{}]", name, index),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Equal,
    AtLeast,
    AtMost,
    /// `reported & mask == mask`
    ContainsBits,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparison::Equal => "==",
            Comparison::AtLeast => ">=",
            Comparison::AtMost => "<=",
            Comparison::ContainsBits => "contains",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expected {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Bool(value) => write!(f, "{}", value),
            Expected::Unsigned(value) => write!(f, "{}", value),
            Expected::Signed(value) => write!(f, "{}", value),
            Expected::Float(value) => write!(f, "{}", value),
            Expected::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<&Number> for Expected {
    fn from(number: &Number) -> Self {
        if let Some(value) = number.as_u64() {
            Expected::Unsigned(value)
        } else if let Some(value) = number.as_i64() {
            Expected::Signed(value)
        } else {
            Expected::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    Compare {
        comparison: Comparison,
        expected: Expected,
    },
    /// The profile declares something this tool cannot translate, such as an
    /// unknown flag name. Reported as skipped.
    Unresolvable { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Expectation {
    pub source: Source,
    pub path: FieldPath,
    pub check: Check,
}

impl Expectation {
    fn compare(source: &Source, path: FieldPath, comparison: Comparison, expected: Expected) -> Self {
        Self {
            source: source.clone(),
            path,
            check: Check::Compare {
                comparison,
                expected,
            },
        }
    }

    fn unresolvable(source: &Source, path: FieldPath, reason: String) -> Self {
        Self {
            source: source.clone(),
            path,
            check: Check::Unresolvable { reason },
        }
    }
}

/// Flattens a resolved profile into its expectation table.
pub fn derive(profile: &ResolvedProfile) -> Vec<Expectation> {
    let mut table = Vec::new();
    let capabilities = &profile.capabilities;

    table.push(Expectation::compare(
        &Source::ApiVersion,
        FieldPath::root().field("apiVersion"),
        Comparison::AtLeast,
        Expected::Unsigned(profile.api_version.to_vk() as u64),
    ));

    for (name, version) in &capabilities.extensions {
        table.push(Expectation::compare(
            &Source::Extension { name: name.clone() },
            FieldPath::root().field("specVersion"),
            Comparison::AtLeast,
            Expected::Unsigned(*version as u64),
        ));
    }

    for (name, members) in &capabilities.features {
        let source = Source::Features { name: name.clone() };
        walk(&source, FieldPath::root(), members, &mut table);
    }

    for (name, members) in &capabilities.properties {
        let source = Source::Properties { name: name.clone() };
        walk(&source, FieldPath::root(), members, &mut table);
    }

    for (format, structs) in &capabilities.formats {
        for (name, members) in structs.as_object().into_iter().flatten() {
            let source = Source::Format {
                format: format.clone(),
                name: name.clone(),
            };
            walk(&source, FieldPath::root(), members, &mut table);
        }
    }

    for (index, family) in capabilities.queue_families_properties.iter().enumerate() {
        for (name, members) in family {
            let source = Source::QueueFamily {
                index,
                name: name.clone(),
            };
            walk(&source, FieldPath::root(), members, &mut table);
        }
    }

    table
}

fn limit_kind(path: &FieldPath) -> LimitKind {
    classify_nested(path.field_names())
}

fn number_comparison(kind: LimitKind) -> Comparison {
    match kind {
        LimitKind::Max => Comparison::AtLeast,
        LimitKind::Min => Comparison::AtMost,
        LimitKind::Range | LimitKind::Exact => Comparison::Equal,
    }
}

fn walk(source: &Source, path: FieldPath, value: &Value, table: &mut Vec<Expectation>) {
    match value {
        Value::Null => {}
        Value::Object(members) => walk_members(source, &path, members, table),
        Value::Bool(flag) => {
            table.push(Expectation::compare(
                source,
                path,
                Comparison::Equal,
                Expected::Bool(*flag),
            ));
        }
        Value::Number(number) => {
            let comparison = number_comparison(limit_kind(&path));
            table.push(Expectation::compare(source, path, comparison, number.into()));
        }
        Value::String(text) => table.push(string_expectation(source, path, text)),
        Value::Array(items) => walk_array(source, path, items, table),
    }
}

fn walk_members(
    source: &Source,
    path: &FieldPath,
    members: &Map<String, Value>,
    table: &mut Vec<Expectation>,
) {
    for (name, value) in members {
        walk(source, path.field(name), value, table);
    }
}

fn walk_array(source: &Source, path: FieldPath, items: &[Value], table: &mut Vec<Expectation>) {
    if items.is_empty() {
        return;
    }

    if items.iter().all(Value::is_string) {
        let names = items.iter().filter_map(Value::as_str);
        let expectation = match flag_mask(names) {
            Ok(mask) => Expectation::compare(
                source,
                path,
                Comparison::ContainsBits,
                Expected::Unsigned(mask),
            ),
            Err(unknown) => {
                Expectation::unresolvable(source, path, format!("unknown flag {}", unknown))
            }
        };
        table.push(expectation);
        return;
    }

    let kind = limit_kind(&path);
    for (index, item) in items.iter().enumerate() {
        let element = path.index(index);
        match item {
            Value::Number(number) => {
                let comparison = match (kind, index) {
                    (LimitKind::Range, 0) => Comparison::AtMost,
                    (LimitKind::Range, _) => Comparison::AtLeast,
                    (kind, _) => number_comparison(kind),
                };
                table.push(Expectation::compare(source, element, comparison, number.into()));
            }
            other => walk(source, element, other, table),
        }
    }
}

fn string_expectation(source: &Source, path: FieldPath, text: &str) -> Expectation {
    if let Some(value) = enumerant(text) {
        return Expectation::compare(source, path, Comparison::Equal, Expected::Signed(value));
    }

    if text.starts_with("VK_") {
        Expectation::unresolvable(source, path, format!("unknown enumerant {}", text))
    } else {
        Expectation::compare(source, path, Comparison::Equal, Expected::Text(text.to_string()))
    }
}
