//! Query-string sizing declarations.
//!
//! Parses strings like `policy=ratio-padding&long_ratio=0.6&short_padding=16`
//! into a [`Declaration`], which converts to a [`Sizing`].
//!
//! # Example
//!
//! ```
//! use dialoglayout::{SizingPolicy, query};
//!
//! let result = query::parse("policy=ratio-padding&long_ratio=0.6&short_padding=16&react=no");
//! assert!(result.warnings.is_empty());
//!
//! let sizing = result.declaration.to_sizing().expect("complete declaration");
//! assert_eq!(
//!     sizing.policy,
//!     SizingPolicy::RatioPadding { long_side_ratio: 0.6, short_side_padding: 16.0 }
//! );
//! assert!(!sizing.react_to_orientation_change);
//! ```
//!
//! Without a `policy` key the policy is inferred when the numeric keys
//! present match exactly one composition:
//!
//! ```
//! use dialoglayout::{SizingPolicy, query};
//!
//! let sizing = query::parse("long_constant=300&short_ratio=0.5")
//!     .declaration
//!     .to_sizing()
//!     .unwrap();
//! assert_eq!(
//!     sizing.policy,
//!     SizingPolicy::RatioConstant { long_side_constant: 300.0, short_side_ratio: 0.5 }
//! );
//! ```

mod parse;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::dialog::Sizing;
use crate::strategy::SizingPolicy;

/// Result of parsing a sizing query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub declaration: Declaration,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a sizing query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (declaration, warnings) = parse::parse_query(query);
    ParseResult {
        declaration,
        warnings,
    }
}

/// Name of a [`SizingPolicy`] variant without its parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Ratio,
    Padding,
    Constant,
    RatioPadding,
    RatioConstant,
    PaddingConstant,
}

impl PolicyKind {
    pub const ALL: [Self; 6] = [
        Self::Ratio,
        Self::Padding,
        Self::Constant,
        Self::RatioPadding,
        Self::RatioConstant,
        Self::PaddingConstant,
    ];

    /// Value of the `policy` key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::Padding => "padding",
            Self::Constant => "constant",
            Self::RatioPadding => "ratio-padding",
            Self::RatioConstant => "ratio-constant",
            Self::PaddingConstant => "padding-constant",
        }
    }

    /// Fields the policy reads, in declaration order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Ratio => &[Field::LongRatio, Field::ShortRatio],
            Self::Padding => &[Field::LongPadding, Field::ShortPadding],
            Self::Constant => &[Field::LongConstant],
            Self::RatioPadding => &[Field::LongRatio, Field::ShortPadding],
            Self::RatioConstant => &[Field::LongConstant, Field::ShortRatio],
            Self::PaddingConstant => &[Field::LongConstant, Field::ShortPadding],
        }
    }
}

impl From<&SizingPolicy> for PolicyKind {
    fn from(policy: &SizingPolicy) -> Self {
        match policy {
            SizingPolicy::Ratio { .. } => Self::Ratio,
            SizingPolicy::Padding { .. } => Self::Padding,
            SizingPolicy::Constant { .. } => Self::Constant,
            SizingPolicy::RatioPadding { .. } => Self::RatioPadding,
            SizingPolicy::RatioConstant { .. } => Self::RatioConstant,
            SizingPolicy::PaddingConstant { .. } => Self::PaddingConstant,
        }
    }
}

/// Numeric parameter of a sizing declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LongRatio,
    ShortRatio,
    LongPadding,
    ShortPadding,
    LongConstant,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::LongRatio,
        Self::ShortRatio,
        Self::LongPadding,
        Self::ShortPadding,
        Self::LongConstant,
    ];

    /// Query key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::LongRatio => "long_ratio",
            Self::ShortRatio => "short_ratio",
            Self::LongPadding => "long_padding",
            Self::ShortPadding => "short_padding",
            Self::LongConstant => "long_constant",
        }
    }
}

/// Sizing declaration as written, before it is checked against a policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
    pub policy: Option<PolicyKind>,
    pub long_ratio: Option<f32>,
    pub short_ratio: Option<f32>,
    pub long_padding: Option<f32>,
    pub short_padding: Option<f32>,
    pub long_constant: Option<f32>,
    pub react: Option<bool>,
}

impl Declaration {
    pub fn get(&self, field: Field) -> Option<f32> {
        match field {
            Field::LongRatio => self.long_ratio,
            Field::ShortRatio => self.short_ratio,
            Field::LongPadding => self.long_padding,
            Field::ShortPadding => self.short_padding,
            Field::LongConstant => self.long_constant,
        }
    }

    /// The explicit policy, or the single policy whose fields are exactly
    /// the ones present.
    pub fn resolved_policy(&self) -> Option<PolicyKind> {
        if self.policy.is_some() {
            return self.policy;
        }
        let present = |f: Field| self.get(f).is_some();
        let mut matches = PolicyKind::ALL.into_iter().filter(|kind| {
            let fields = kind.fields();
            fields.iter().all(|&f| present(f))
                && Field::ALL
                    .into_iter()
                    .filter(|&f| present(f))
                    .all(|f| fields.contains(&f))
        });
        match (matches.next(), matches.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }

    /// Build the sizing declaration.
    ///
    /// Fields present but unused by the policy are logged and ignored.
    pub fn to_sizing(&self) -> Result<Sizing, ConfigError> {
        let kind = self.resolved_policy().ok_or(ConfigError::AmbiguousPolicy)?;
        let need = |field: Field| {
            self.get(field)
                .ok_or(ConfigError::MissingValue { key: field.key() })
        };
        for field in Field::ALL {
            if self.get(field).is_some() && !kind.fields().contains(&field) {
                log::warn!("{} is not used by {kind:?}, ignoring", field.key());
            }
        }

        let policy = match kind {
            PolicyKind::Ratio => SizingPolicy::Ratio {
                long_side_ratio: need(Field::LongRatio)?,
                short_side_ratio: need(Field::ShortRatio)?,
            },
            PolicyKind::Padding => SizingPolicy::Padding {
                long_side_padding: need(Field::LongPadding)?,
                short_side_padding: need(Field::ShortPadding)?,
            },
            PolicyKind::Constant => SizingPolicy::Constant {
                long_side_constant: need(Field::LongConstant)?,
            },
            PolicyKind::RatioPadding => SizingPolicy::RatioPadding {
                long_side_ratio: need(Field::LongRatio)?,
                short_side_padding: need(Field::ShortPadding)?,
            },
            PolicyKind::RatioConstant => SizingPolicy::RatioConstant {
                long_side_constant: need(Field::LongConstant)?,
                short_side_ratio: need(Field::ShortRatio)?,
            },
            PolicyKind::PaddingConstant => SizingPolicy::PaddingConstant {
                long_side_constant: need(Field::LongConstant)?,
                short_side_padding: need(Field::ShortPadding)?,
            },
        };
        Ok(Sizing::new(policy).react_to_orientation_change(self.react.unwrap_or(true)))
    }
}

impl From<&Sizing> for Declaration {
    fn from(sizing: &Sizing) -> Self {
        let mut d = Declaration {
            policy: Some(PolicyKind::from(&sizing.policy)),
            react: Some(sizing.react_to_orientation_change),
            ..Declaration::default()
        };
        match sizing.policy {
            SizingPolicy::Ratio {
                long_side_ratio,
                short_side_ratio,
            } => {
                d.long_ratio = Some(long_side_ratio);
                d.short_ratio = Some(short_side_ratio);
            }
            SizingPolicy::Padding {
                long_side_padding,
                short_side_padding,
            } => {
                d.long_padding = Some(long_side_padding);
                d.short_padding = Some(short_side_padding);
            }
            SizingPolicy::Constant { long_side_constant } => {
                d.long_constant = Some(long_side_constant);
            }
            SizingPolicy::RatioPadding {
                long_side_ratio,
                short_side_padding,
            } => {
                d.long_ratio = Some(long_side_ratio);
                d.short_padding = Some(short_side_padding);
            }
            SizingPolicy::RatioConstant {
                long_side_constant,
                short_side_ratio,
            } => {
                d.long_constant = Some(long_side_constant);
                d.short_ratio = Some(short_side_ratio);
            }
            SizingPolicy::PaddingConstant {
                long_side_constant,
                short_side_padding,
            } => {
                d.long_constant = Some(long_side_constant);
                d.short_padding = Some(short_side_padding);
            }
        }
        d
    }
}

/// Writes the declaration back as a query string, `policy` first.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(kind) = self.policy {
            write!(f, "policy={}", kind.name())?;
            sep = "&";
        }
        for field in Field::ALL {
            if let Some(v) = self.get(field) {
                write!(f, "{sep}{}={v}", field.key())?;
                sep = "&";
            }
        }
        if let Some(react) = self.react {
            write!(f, "{sep}react={react}")?;
        }
        Ok(())
    }
}

/// Error converting a [`Declaration`] into a [`Sizing`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The policy needs a field that was not given.
    MissingValue { key: &'static str },
    /// No `policy` key, and the fields present do not select exactly one.
    AmbiguousPolicy,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { key } => write!(f, "missing value for {key}"),
            Self::AmbiguousPolicy => write!(f, "policy is neither given nor implied by the fields present"),
        }
    }
}

impl core::error::Error for ConfigError {}
