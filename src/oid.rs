//! Object identifiers.
//!
//! [`Oid`] is a numeric OID stored as `SmallVec<[u32; 16]>` to avoid heap
//! allocation for common OIDs. [`ObjectId`] is what callers pass to requests:
//! either a numeric OID or a MIB object name.

use crate::command::shell_escape;
use crate::error::{Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Numeric object identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an OID from arc values.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_shell::oid::Oid;
    ///
    /// let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.1.0");
    /// ```
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse dotted numeric notation, with or without a leading dot.
    ///
    /// ```
    /// use snmp_shell::oid::Oid;
    ///
    /// let a = Oid::parse(".1.3.6.1.2.1.1.5.0").unwrap();
    /// let b = Oid::parse("1.3.6.1.2.1.1.5.0").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Oid::parse("1..3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let body = s.strip_prefix('.').unwrap_or(s);
        if body.is_empty() {
            return Err(Error::invalid_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs = SmallVec::new();
        for part in body.split('.') {
            // Reject empty arcs and signs, which u32::from_str would accept ("+1")
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s));
            }
            let arc: u32 = part
                .parse()
                .map_err(|_| Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Fully-qualified form with a leading dot, as printed by `-On`.
    pub fn to_numeric_string(&self) -> String {
        format!(".{}", self)
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::from_slice(&arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// ```
/// use snmp_shell::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

/// Well-known OID entries: arcs, defining module, name.
///
/// A small hardcoded table so common names can be sent numerically. This is
/// not MIB support; other names are left for the tool to resolve.
static WELL_KNOWN_OIDS: &[(&[u32], &str, &str)] = &[
    // SNMPv2-MIB::system
    (&[1, 3, 6, 1, 2, 1, 1, 1, 0], "SNMPv2-MIB", "sysDescr.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 2, 0], "SNMPv2-MIB", "sysObjectID.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 3, 0], "SNMPv2-MIB", "sysUpTime.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 4, 0], "SNMPv2-MIB", "sysContact.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 5, 0], "SNMPv2-MIB", "sysName.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 6, 0], "SNMPv2-MIB", "sysLocation.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 7, 0], "SNMPv2-MIB", "sysServices.0"),
    // IF-MIB::interfaces
    (&[1, 3, 6, 1, 2, 1, 2, 1, 0], "IF-MIB", "ifNumber.0"),
    // Common table roots (without instance)
    (&[1, 3, 6, 1, 2, 1, 1], "SNMPv2-MIB", "system"),
    (&[1, 3, 6, 1, 2, 1, 2], "IF-MIB", "interfaces"),
    (&[1, 3, 6, 1, 2, 1, 2, 2], "IF-MIB", "ifTable"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1], "IF-MIB", "ifEntry"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1], "IF-MIB", "ifXTable"),
];

/// Look up a friendly name for an OID.
pub fn lookup_name(oid: &Oid) -> Option<&'static str> {
    let arcs = oid.arcs();
    WELL_KNOWN_OIDS
        .iter()
        .find(|(pattern, _, _)| *pattern == arcs)
        .map(|(_, _, name)| *name)
}

/// Resolve a well-known name, optionally qualified by its defining module
/// (`IF-MIB::ifTable`). Matching is case-sensitive, and a name qualified
/// with any other module is not resolved.
pub fn resolve_name(name: &str) -> Option<Oid> {
    let (module, bare) = match name.split_once("::") {
        Some((module, bare)) => (Some(module), bare),
        None => (None, name),
    };
    WELL_KNOWN_OIDS
        .iter()
        .find(|(_, known_module, known)| {
            *known == bare && module.is_none_or(|m| m == *known_module)
        })
        .map(|(arcs, _, _)| Oid::from_slice(arcs))
}

/// Characters allowed in an object name passed to the tools.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '_' | '-')
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_oid(OidErrorKind::Empty));
    }
    if !name.chars().all(is_name_char) {
        return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidName, name));
    }
    Ok(())
}

/// An object to request: a numeric OID or a MIB object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Numeric(Oid),
    /// MIB name such as `IF-MIB::ifDescr.1` or `sysName.0`.
    Named(String),
}

impl ObjectId {
    /// Parse numeric notation if the input starts with a digit or dot,
    /// otherwise treat it as a name.
    ///
    /// Names may only contain `[A-Za-z0-9:._-]`; they reach the shell
    /// unquoted.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.chars().next() {
            None => Err(Error::invalid_oid(OidErrorKind::Empty)),
            Some(c) if c.is_ascii_digit() || c == '.' => Ok(Self::Numeric(Oid::parse(s)?)),
            Some(_) => {
                check_name(s)?;
                Ok(Self::Named(s.to_string()))
            }
        }
    }

    /// Check an object that may have been built without [`parse`](Self::parse).
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Numeric(oid) if oid.is_empty() => Err(Error::invalid_oid(OidErrorKind::Empty)),
            Self::Numeric(_) => Ok(()),
            Self::Named(name) => check_name(name),
        }
    }

    /// Numeric OID if known without consulting the MIBs.
    pub fn resolve(&self) -> Option<Oid> {
        match self {
            Self::Numeric(oid) => Some(oid.clone()),
            Self::Named(name) => resolve_name(name),
        }
    }

    /// Command-line operand: dotted-numeric when resolvable, else the name.
    pub fn to_operand(&self) -> String {
        match self {
            Self::Numeric(oid) => oid.to_numeric_string(),
            Self::Named(name) => resolve_name(name)
                .map(|oid| oid.to_numeric_string())
                .unwrap_or_else(|| name.clone()),
        }
    }
}

impl From<Oid> for ObjectId {
    fn from(oid: Oid) -> Self {
        Self::Numeric(oid)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(oid) => write!(f, "{}", oid),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// `snmpset` type specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetType {
    /// `=`: type taken from the MIB definition
    FromMib,
    /// `i`: INTEGER
    Integer,
    /// `u`: Unsigned32
    Unsigned,
    /// `t`: TimeTicks
    TimeTicks,
    /// `a`: IpAddress
    IpAddress,
    /// `o`: OBJECT IDENTIFIER
    ObjectId,
    /// `s`: STRING
    String,
    /// `x`: Hex-STRING
    HexString,
    /// `d`: decimal string
    DecimalString,
    /// `b`: BITS
    Bits,
    /// `n`: NULL
    Null,
}

impl SetType {
    /// Type letter as passed to `snmpset`.
    pub const fn as_char(self) -> char {
        match self {
            Self::FromMib => '=',
            Self::Integer => 'i',
            Self::Unsigned => 'u',
            Self::TimeTicks => 't',
            Self::IpAddress => 'a',
            Self::ObjectId => 'o',
            Self::String => 's',
            Self::HexString => 'x',
            Self::DecimalString => 'd',
            Self::Bits => 'b',
            Self::Null => 'n',
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for SetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "=" => Ok(Self::FromMib),
            "i" => Ok(Self::Integer),
            "u" => Ok(Self::Unsigned),
            "t" => Ok(Self::TimeTicks),
            "a" => Ok(Self::IpAddress),
            "o" => Ok(Self::ObjectId),
            "s" => Ok(Self::String),
            "x" => Ok(Self::HexString),
            "d" => Ok(Self::DecimalString),
            "b" => Ok(Self::Bits),
            "n" => Ok(Self::Null),
            _ => Err(Error::invalid_oid_with_input(OidErrorKind::InvalidSetType, s)),
        }
    }
}

/// An object with the value to assign in a SET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetObject {
    pub id: ObjectId,
    pub value_type: SetType,
    pub value: String,
}

impl SetObject {
    pub fn new(id: impl Into<ObjectId>, value_type: SetType, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value_type,
            value: value.into(),
        }
    }

    /// The `<oid> <type> '<value>'` operand triplet.
    ///
    /// Unlike credentials, the value is shell-escaped: embedded single quotes
    /// become `'\''`, so any text is passed to `snmpset` unchanged.
    pub fn to_operand(&self) -> String {
        format!(
            "{} {} {}",
            self.id.to_operand(),
            self.value_type,
            shell_escape(&self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
        assert_eq!(Oid::parse(".1.3.6").unwrap().arcs(), &[1, 3, 6]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Oid::parse("").is_err());
        assert!(Oid::parse(".").is_err());
        assert!(Oid::parse("1.3.").is_err());
        assert!(Oid::parse("1.+3").is_err());
        assert!(Oid::parse("1.3.abc").is_err());
        assert!(Oid::parse("1.99999999999").is_err());
    }

    #[test]
    fn test_display_and_numeric_string() {
        let oid = oid!(1, 3, 6, 1, 4, 1, 8072, 3, 2, 10);
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.8072.3.2.10");
        assert_eq!(oid.to_numeric_string(), ".1.3.6.1.4.1.8072.3.2.10");
    }

    #[test]
    fn test_ordering_and_prefix() {
        let system = oid!(1, 3, 6, 1, 2, 1, 1);
        let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
        assert!(system < sys_descr);
        assert!(sys_descr.starts_with(&system));
        assert!(!system.starts_with(&sys_descr));
    }

    #[test]
    fn test_well_known_names() {
        assert_eq!(lookup_name(&oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)), Some("sysName.0"));
        assert_eq!(lookup_name(&oid!(1, 3, 6, 1, 99)), None);
        assert_eq!(resolve_name("sysDescr.0"), Some(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)));
        assert_eq!(
            resolve_name("SNMPv2-MIB::sysDescr.0"),
            Some(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0))
        );
        assert_eq!(resolve_name("IF-MIB::ifTable"), Some(oid!(1, 3, 6, 1, 2, 1, 2, 2)));
        assert_eq!(resolve_name("hrStorageTable"), None);
    }

    #[test]
    fn test_well_known_names_need_exact_case_and_module() {
        assert_eq!(resolve_name("SYSNAME.0"), None);
        assert_eq!(resolve_name("FOO-MIB::system"), None);
        assert_eq!(resolve_name("SNMPv2-MIB::ifTable"), None);

        // Left for the tool to resolve
        let id = ObjectId::parse("FOO-MIB::system").unwrap();
        assert_eq!(id.to_operand(), "FOO-MIB::system");
    }

    #[test]
    fn test_object_name_rejects_shell_text() {
        for input in [
            "sysName.0;echo .1.3.6.1.2.1.1.5.0 = STRING: forged",
            "sysName.0 sysDescr.0",
            "ifTable$(id)",
            "a|b",
            "x'y",
        ] {
            let err = ObjectId::parse(input).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidOid {
                        kind: OidErrorKind::InvalidName,
                        ..
                    }
                ),
                "{input}: {err:?}"
            );
        }

        assert!(ObjectId::Named("bad name".into()).validate().is_err());
        assert!(ObjectId::Named(String::new()).validate().is_err());
        assert!(ObjectId::Numeric(Oid::new([])).validate().is_err());
        assert!(ObjectId::Named("IF-MIB::ifDescr.1".into()).validate().is_ok());
    }

    #[test]
    fn test_object_id_parse_and_operand() {
        let id = ObjectId::parse("1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(id.to_operand(), ".1.3.6.1.2.1.1.1.0");

        let id = ObjectId::parse("sysName.0").unwrap();
        assert_eq!(id, ObjectId::Named("sysName.0".into()));
        assert_eq!(id.to_operand(), ".1.3.6.1.2.1.1.5.0");

        let id = ObjectId::parse("HOST-RESOURCES-MIB::hrStorageTable").unwrap();
        assert_eq!(id.resolve(), None);
        assert_eq!(id.to_operand(), "HOST-RESOURCES-MIB::hrStorageTable");

        assert!(ObjectId::parse("  ").is_err());
        assert!(ObjectId::parse(".1.x").is_err());
    }

    #[test]
    fn test_set_type() {
        for c in ["=", "i", "u", "t", "a", "o", "s", "x", "d", "b", "n"] {
            let t: SetType = c.parse().unwrap();
            assert_eq!(t.to_string(), c);
        }
        assert!("q".parse::<SetType>().is_err());
        assert!("ii".parse::<SetType>().is_err());
    }

    #[test]
    fn test_set_operand() {
        let obj = SetObject::new(oid!(1, 3, 6, 1, 2, 1, 1, 6, 0), SetType::String, "rack1");
        assert_eq!(obj.to_operand(), ".1.3.6.1.2.1.1.6.0 s 'rack1'");

        let obj = SetObject::new(oid!(1, 3, 6, 1, 2, 1, 1, 6, 0), SetType::String, "it's; reboot");
        assert_eq!(obj.to_operand(), ".1.3.6.1.2.1.1.6.0 s 'it'\\''s; reboot'");
    }
}
