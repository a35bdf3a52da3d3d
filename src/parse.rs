//! Tool output parsing.
//!
//! `snmpget`, `snmpset` and `snmpwalk` run with `-OUnet` print one binding per
//! line:
//!
//! ```text
//! .1.3.6.1.2.1.1.1.0 = STRING: "Linux router 5.10"
//! .1.3.6.1.2.1.1.3.0 = Timeticks: 1234567
//! .1.3.6.1.2.1.1.9.0 = No Such Object available on this agent at this OID
//! ```
//!
//! `snmptable` run with `-Clibf '<delim>'` prints a banner, a header and one
//! line per row, all split on the delimiter.
//!
//! Both parsers return `Ok(vec![])` for empty output and `Err(Error::Parse)`
//! when there was output but none of it was data, so a failed pipeline is
//! never mistaken for an empty result.

use crate::error::{Error, ParseErrorKind, Result};
use crate::oid::Oid;

/// Type tag printed before a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    String,
    HexString,
    Oid,
    TimeTicks,
    Counter32,
    Counter64,
    Gauge32,
    UInteger32,
    IpAddress,
    Bits,
    Opaque,
    NetworkAddress,
    Null,
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
    /// No type prefix (e.g. an empty string printed as `""`).
    Untyped,
    /// A tag this crate does not know.
    Other(String),
}

impl ValueType {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "INTEGER" => Self::Integer,
            "STRING" => Self::String,
            "Hex-STRING" => Self::HexString,
            "OID" => Self::Oid,
            "Timeticks" => Self::TimeTicks,
            "Counter32" => Self::Counter32,
            "Counter64" => Self::Counter64,
            "Gauge32" => Self::Gauge32,
            "UInteger32" => Self::UInteger32,
            "IpAddress" => Self::IpAddress,
            "BITS" => Self::Bits,
            "Opaque" => Self::Opaque,
            "Network Address" => Self::NetworkAddress,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the agent reported the object as absent.
    pub fn is_exception(&self) -> bool {
        matches!(
            self,
            Self::NoSuchObject | Self::NoSuchInstance | Self::EndOfMibView
        )
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::HexString => "Hex-STRING",
            Self::Oid => "OID",
            Self::TimeTicks => "Timeticks",
            Self::Counter32 => "Counter32",
            Self::Counter64 => "Counter64",
            Self::Gauge32 => "Gauge32",
            Self::UInteger32 => "UInteger32",
            Self::IpAddress => "IpAddress",
            Self::Bits => "BITS",
            Self::Opaque => "Opaque",
            Self::NetworkAddress => "Network Address",
            Self::Null => "NULL",
            Self::NoSuchObject => "NoSuchObject",
            Self::NoSuchInstance => "NoSuchInstance",
            Self::EndOfMibView => "EndOfMibView",
            Self::Untyped => "",
            Self::Other(tag) => tag,
        };
        f.write_str(name)
    }
}

/// Net-SNMP texts printed in place of a value for SNMPv2 exceptions.
const EXCEPTIONS: &[(&str, ValueType)] = &[
    ("No Such Object available", ValueType::NoSuchObject),
    ("No Such Instance currently exists", ValueType::NoSuchInstance),
    ("No more variables left in this MIB View", ValueType::EndOfMibView),
];

/// One `(oid, value)` result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    pub oid: Oid,
    pub value_type: ValueType,
    /// Value text with the type prefix (and string quotes) removed.
    pub value: String,
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value_type {
            ValueType::Untyped => write!(f, "{} = {}", self.oid, self.value),
            _ => write!(f, "{} = {}: {}", self.oid, self.value_type, self.value),
        }
    }
}

/// Parse `snmpget`/`snmpset`/`snmpwalk` output.
///
/// Lines that do not start with a numeric OID (warnings, error banners) are
/// skipped. Input containing no binding at all is a parse error unless it
/// is blank.
pub fn parse_scalar_output(text: &str) -> Result<Vec<VarBind>> {
    let mut varbinds = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_binding(line) {
            Some(vb) => varbinds.push(vb),
            None => {
                skipped += 1;
                tracing::debug!(line = index + 1, text = line, "skipping non-binding line");
            }
        }
    }

    if varbinds.is_empty() && skipped > 0 {
        return Err(Error::parse(ParseErrorKind::NoData));
    }
    Ok(varbinds)
}

fn parse_binding(line: &str) -> Option<VarBind> {
    let (lhs, rest) = line.split_once(" =")?;
    let oid = Oid::parse(lhs.trim()).ok()?;
    let rhs = rest.strip_prefix(' ').unwrap_or(rest);
    let (value_type, value) = split_value(rhs);
    Some(VarBind {
        oid,
        value_type,
        value,
    })
}

fn split_value(rhs: &str) -> (ValueType, String) {
    for (prefix, value_type) in EXCEPTIONS {
        if rhs.starts_with(prefix) {
            return (value_type.clone(), rhs.to_string());
        }
    }
    if rhs == "NULL" {
        return (ValueType::Null, String::new());
    }

    match rhs.split_once(": ") {
        Some((tag, value)) if is_type_tag(tag) => {
            let value_type = ValueType::from_tag(tag);
            let value = match value_type {
                ValueType::String => unquote(value),
                _ => value.to_string(),
            };
            (value_type, value)
        }
        // "STRING:" with an empty value has no trailing space
        _ => match rhs.strip_suffix(':').filter(|tag| is_type_tag(tag)) {
            Some(tag) => (ValueType::from_tag(tag), String::new()),
            None => (ValueType::Untyped, unquote(rhs)),
        },
    }
}

/// Type tags are short words like `INTEGER`, `Hex-STRING`, `Network Address`.
fn is_type_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag.len() <= 32
        && tag.starts_with(|c: char| c.is_ascii_alphabetic())
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
}

/// Strip the double quotes Net-SNMP puts around strings, undoing `\"`.
fn unquote(value: &str) -> String {
    match value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => value.to_string(),
    }
}

/// One table row: column name to value, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Value of a column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn into_cells(self) -> Vec<(String, String)> {
        self.cells
    }
}

/// Parse `snmptable` output split on `delimiter`.
///
/// Fields are split on the exact delimiter only; values may contain spaces.
pub fn parse_table_output(text: &str, delimiter: &str) -> Result<Vec<Row>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let header = loop {
        match lines.next() {
            None => return Ok(Vec::new()),
            Some((_, line)) if line.starts_with("SNMP table:") => continue,
            Some((_, line)) if line.trim_end().ends_with("No entries") => {
                tracing::debug!(text = line, "table has no entries");
                return Ok(Vec::new());
            }
            Some((number, line)) => break (number, line),
        }
    };

    let (header_line, header) = header;
    if delimiter.is_empty() || !header.contains(delimiter) {
        tracing::debug!(line = header_line, text = header, "no table header found");
        return Err(Error::parse_at(ParseErrorKind::MissingHeader, header_line));
    }
    let columns: Vec<&str> = header.split(delimiter).collect();

    let mut rows = Vec::new();
    for (number, line) in lines {
        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != columns.len() {
            return Err(Error::parse_at(
                ParseErrorKind::ColumnCountMismatch {
                    expected: columns.len(),
                    actual: fields.len(),
                },
                number,
            ));
        }
        rows.push(Row {
            cells: columns
                .iter()
                .zip(fields)
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        });
    }

    Ok(rows)
}
