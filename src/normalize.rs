//! Credential normalization.
//!
//! Flattens a [`Credential`] into the ordered set of command-line values the
//! command builder consumes. Only fields relevant to the variant are present,
//! and they always appear in [`Field`] order.

use zeroize::Zeroize;

use crate::credential::Credential;

/// Normalized credential field, declared in command-line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Version,
    Community,
    SecLevel,
    SecName,
    AuthProto,
    AuthPass,
    PrivProto,
    PrivPass,
}

impl Field {
    /// All fields in their fixed order.
    pub const ALL: [Field; 8] = [
        Field::Version,
        Field::Community,
        Field::SecLevel,
        Field::SecName,
        Field::AuthProto,
        Field::AuthPass,
        Field::PrivProto,
        Field::PrivPass,
    ];

    /// Field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Version => "version",
            Field::Community => "community",
            Field::SecLevel => "secLevel",
            Field::SecName => "secName",
            Field::AuthProto => "authProto",
            Field::AuthPass => "authPass",
            Field::PrivProto => "privProto",
            Field::PrivPass => "privPass",
        }
    }

    /// Whether the value must not appear in logs.
    pub const fn is_secret(self) -> bool {
        matches!(self, Field::Community | Field::AuthPass | Field::PrivPass)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field/value mapping produced by [`normalize`].
///
/// Entries are kept sorted by [`Field`]; each field appears at most once.
/// Secret values are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CredentialMap {
    entries: Vec<(Field, String)>,
}

impl CredentialMap {
    fn push(&mut self, field: Field, value: impl Into<String>) {
        debug_assert!(self.entries.last().is_none_or(|(last, _)| *last < field));
        self.entries.push((field, value.into()));
    }

    /// Value for a field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Present fields in order.
    pub fn fields(&self) -> Vec<Field> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Zeroize for CredentialMap {
    /// Clear secret values in place; other fields are kept.
    fn zeroize(&mut self) {
        for (field, value) in &mut self.entries {
            if field.is_secret() {
                value.zeroize();
            }
        }
    }
}

impl Drop for CredentialMap {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl std::fmt::Debug for CredentialMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(field, value)| {
                let shown = if field.is_secret() { "****" } else { value.as_str() };
                (field.as_str(), shown)
            }))
            .finish()
    }
}

/// Normalize a credential into its command-line field mapping.
pub fn normalize(credential: &Credential) -> CredentialMap {
    let mut map = CredentialMap::default();
    map.push(Field::Version, credential.version().as_flag());

    match credential {
        Credential::V1 { community } | Credential::V2c { community } => {
            map.push(Field::Community, community.expose());
        }
        Credential::V3NoAuthNoPriv { sec_name } => {
            push_usm(&mut map, credential, sec_name);
        }
        Credential::V3AuthNoPriv {
            sec_name,
            auth_proto,
            auth_pass,
        } => {
            push_usm(&mut map, credential, sec_name);
            map.push(Field::AuthProto, auth_proto.as_str());
            map.push(Field::AuthPass, auth_pass.expose());
        }
        Credential::V3AuthPriv {
            sec_name,
            auth_proto,
            auth_pass,
            priv_proto,
            priv_pass,
        } => {
            push_usm(&mut map, credential, sec_name);
            map.push(Field::AuthProto, auth_proto.as_str());
            map.push(Field::AuthPass, auth_pass.expose());
            map.push(Field::PrivProto, priv_proto.as_str());
            map.push(Field::PrivPass, priv_pass.expose());
        }
    }

    map
}

fn push_usm(map: &mut CredentialMap, credential: &Credential, sec_name: &str) {
    if let Some(level) = credential.security_level() {
        map.push(Field::SecLevel, level.as_str());
    }
    map.push(Field::SecName, sec_name);
}
