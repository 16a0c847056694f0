//! Qualifier tags
//!
//! A qualifier narrows which requests a component satisfies. Each tag
//! carries named member values; members can be marked non-binding, which
//! excludes them from match equality. Two tags of the same name match when
//! every binding member holds the same value on both sides.
//!
//! Two tags are built in: the default tag (implicitly attached to requests
//! that carry no qualifier) and the any tag (matches every component; the
//! implicit qualifier of many-valued wrapper requests).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the implicit default tag.
pub const DEFAULT_TAG: &str = "default";

/// Name of the implicit matches-everything tag.
pub const ANY_TAG: &str = "any";

/// A qualifier member value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemberValue {
    /// Boolean member
    Bool(bool),
    /// Integer member
    Int(i64),
    /// String member
    Str(String),
}

impl From<bool> for MemberValue {
    fn from(v: bool) -> Self {
        MemberValue::Bool(v)
    }
}

impl From<i64> for MemberValue {
    fn from(v: i64) -> Self {
        MemberValue::Int(v)
    }
}

impl From<&str> for MemberValue {
    fn from(v: &str) -> Self {
        MemberValue::Str(v.to_string())
    }
}

impl From<String> for MemberValue {
    fn from(v: String) -> Self {
        MemberValue::Str(v)
    }
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Bool(v) => write!(f, "{v}"),
            MemberValue::Int(v) => write!(f, "{v}"),
            MemberValue::Str(v) => write!(f, "\"{v}\""),
        }
    }
}

/// A qualifier tag with member values and binding rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Qualifier {
    name: String,
    members: BTreeMap<String, MemberValue>,
    nonbinding: BTreeSet<String>,
}

impl Qualifier {
    /// Create a member-less qualifier tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
            nonbinding: BTreeSet::new(),
        }
    }

    /// The implicit default tag.
    pub fn default_tag() -> Self {
        Self::new(DEFAULT_TAG)
    }

    /// The implicit matches-everything tag.
    pub fn any_tag() -> Self {
        Self::new(ANY_TAG)
    }

    /// Add a member value.
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Mark a member as non-binding (excluded from match equality).
    pub fn with_nonbinding(mut self, name: impl Into<String>) -> Self {
        self.nonbinding.insert(name.into());
        self
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the matches-everything tag.
    pub fn is_any(&self) -> bool {
        self.name == ANY_TAG
    }

    /// Whether this is the default tag.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_TAG
    }

    /// Whether `declared` satisfies this requested qualifier.
    ///
    /// The any tag matches unconditionally. Otherwise the names must be
    /// equal and every binding member (a member not marked non-binding on
    /// either side) must hold the same value on both sides; a member
    /// present on only one side fails the match.
    pub fn matches(&self, declared: &Qualifier) -> bool {
        if self.is_any() {
            return true;
        }
        if self.name != declared.name {
            return false;
        }
        let keys: BTreeSet<&String> = self.members.keys().chain(declared.members.keys()).collect();
        for key in keys {
            if self.nonbinding.contains(key.as_str()) || declared.nonbinding.contains(key.as_str())
            {
                continue;
            }
            if self.members.get(key.as_str()) != declared.members.get(key.as_str()) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.members.is_empty() {
            write!(f, "(")?;
            for (i, (key, value)) in self.members.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A canonicalized qualifier set: sorted and deduplicated, so qualifier
/// order on the request is irrelevant to cache-key equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifierSet(Vec<Qualifier>);

impl QualifierSet {
    /// Canonicalize a list of qualifiers.
    pub fn canonical(qualifiers: impl IntoIterator<Item = Qualifier>) -> Self {
        let mut list: Vec<Qualifier> = qualifiers.into_iter().collect();
        list.sort();
        list.dedup();
        QualifierSet(list)
    }

    /// The canonical qualifier list.
    pub fn as_slice(&self) -> &[Qualifier] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Qualifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, q) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, "]")
    }
}
