//! Structural type descriptors
//!
//! Contracts are described as explicit data rather than runtime reflection:
//! a component declares the set of descriptors it satisfies, and an
//! injection request names the descriptor it wants. Assignability between
//! two descriptors is decided by the [`AssignabilityOracle`] port; this
//! module only defines the shape and equality of descriptors.
//!
//! [`AssignabilityOracle`]: crate::ports::AssignabilityOracle

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of a many-valued wrapper contract.
///
/// Requests for wrapper contracts resolve against every matching candidate
/// rather than a single one, so the resolver substitutes the implicit
/// any-tag for whatever qualifiers the request carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WrapperKind {
    /// Lazy instance supplier (`provider<T>`)
    Provider,
    /// Event stream (`stream<T>`)
    Stream,
}

/// A structural, reflection-free type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// The universal root contract every component satisfies.
    Universal,
    /// A named contract, raw when `args` is empty.
    Named {
        /// Contract name
        name: String,
        /// Generic arguments, in declaration order
        args: Vec<TypeDescriptor>,
    },
    /// A many-valued wrapper contract around an inner contract.
    Wrapper {
        /// Wrapper shape
        kind: WrapperKind,
        /// Wrapped contract
        arg: Box<TypeDescriptor>,
    },
    /// An array contract with covariant element type.
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Raw named contract without generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Named contract with generic arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Named {
            name: name.into(),
            args,
        }
    }

    /// Provider wrapper around `arg`.
    pub fn provider_of(arg: TypeDescriptor) -> Self {
        TypeDescriptor::Wrapper {
            kind: WrapperKind::Provider,
            arg: Box::new(arg),
        }
    }

    /// Event-stream wrapper around `arg`.
    pub fn stream_of(arg: TypeDescriptor) -> Self {
        TypeDescriptor::Wrapper {
            kind: WrapperKind::Stream,
            arg: Box::new(arg),
        }
    }

    /// Array of `elem`.
    pub fn array_of(elem: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(elem))
    }

    /// Whether this is a many-valued wrapper contract.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TypeDescriptor::Wrapper { .. })
    }

    /// Whether this is the universal root contract.
    pub fn is_universal(&self) -> bool {
        matches!(self, TypeDescriptor::Universal)
    }

    /// Raw contract name, if this is a named contract.
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Named { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Universal => write!(f, "*"),
            TypeDescriptor::Named { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeDescriptor::Wrapper { kind, arg } => match kind {
                WrapperKind::Provider => write!(f, "provider<{arg}>"),
                WrapperKind::Stream => write!(f, "stream<{arg}>"),
            },
            TypeDescriptor::Array(elem) => write!(f, "{elem}[]"),
        }
    }
}
