//! Dependency requirement specifiers.
//!
//! Parses the PEP 508 subset that appears in requirements files:
//! a distribution name, optional extras, optional version constraints and
//! an optional raw environment marker (`requests[security]>=2.0,<3 ;
//! python_version >= "3.8"`).

use crate::error::{SproutError, SproutResult};
use std::fmt;
use std::str::FromStr;

/// Parsed dependency specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub extras: Vec<String>,
    pub constraints: Vec<Constraint>,
    pub marker: Option<String>,
}

/// Single version constraint (`>=2.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub op: CompareOp,
    pub version: String,
}

/// Comparison operator for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Compatible, // ~=1.4
    Exact,      // ==1.0
    NotEqual,   // !=1.0
    LessEq,     // <=1.0
    GreaterEq,  // >=1.0
    Less,       // <1.0
    Greater,    // >1.0
    Arbitrary,  // ===1.0+local
}

impl CompareOp {
    /// The operator as it appears in a specifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Compatible => "~=",
            CompareOp::Exact => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::LessEq => "<=",
            CompareOp::GreaterEq => ">=",
            CompareOp::Less => "<",
            CompareOp::Greater => ">",
            CompareOp::Arbitrary => "===",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

impl Requirement {
    /// Parse a requirement specifier
    pub fn parse(input: &str) -> SproutResult<Self> {
        // The marker is everything after the first ';', kept raw
        let (spec_part, marker) = match input.split_once(';') {
            Some((spec, marker)) => {
                let marker = marker.trim();
                if marker.is_empty() {
                    return Err(SproutError::invalid_requirement(
                        input,
                        "empty environment marker after ';'",
                    ));
                }
                (spec, Some(marker.to_string()))
            },
            None => (input, None),
        };

        let spec = spec_part.trim();
        if spec.is_empty() {
            return Err(SproutError::invalid_requirement(input, "empty requirement"));
        }

        let name_end = spec
            .char_indices()
            .find(|(_, c)| !is_name_char(*c))
            .map(|(index, _)| index)
            .unwrap_or(spec.len());
        let name = &spec[..name_end];

        if !Self::is_valid_name(name) {
            return Err(SproutError::invalid_requirement(
                input,
                format!("invalid distribution name '{}'", name),
            ));
        }

        let mut rest = spec[name_end..].trim_start();

        let mut extras = Vec::new();
        if let Some(after_bracket) = rest.strip_prefix('[') {
            let Some(close) = after_bracket.find(']') else {
                return Err(SproutError::invalid_requirement(
                    input,
                    "unterminated extras list",
                ));
            };
            for extra in after_bracket[..close].split(',') {
                let extra = extra.trim();
                if !Self::is_valid_name(extra) {
                    return Err(SproutError::invalid_requirement(
                        input,
                        format!("invalid extra name '{}'", extra),
                    ));
                }
                extras.push(extra.to_string());
            }
            rest = after_bracket[close + 1..].trim_start();
        }

        let mut constraints = Vec::new();
        if !rest.is_empty() {
            for piece in rest.split(',') {
                constraints.push(parse_constraint(input, piece.trim())?);
            }
        }

        Ok(Requirement {
            name: name.to_string(),
            extras,
            constraints,
            marker,
        })
    }

    /// Check if a string is a valid distribution name (PEP 508)
    pub fn is_valid_name(name: &str) -> bool {
        let starts_ok = name
            .chars()
            .next()
            .map(|c| c.is_ascii_alphanumeric())
            .unwrap_or(false);
        let ends_ok = name
            .chars()
            .last()
            .map(|c| c.is_ascii_alphanumeric())
            .unwrap_or(false);

        starts_ok && ends_ok && name.chars().all(is_name_char)
    }

    /// Name normalized per PEP 503 (lowercase, runs of `-_.` collapse to `-`)
    pub fn normalized_name(&self) -> String {
        let mut normalized = String::with_capacity(self.name.len());
        let mut previous_was_separator = false;

        for c in self.name.chars() {
            if matches!(c, '-' | '_' | '.') {
                previous_was_separator = true;
            } else {
                if previous_was_separator {
                    normalized.push('-');
                    previous_was_separator = false;
                }
                normalized.push(c.to_ascii_lowercase());
            }
        }

        normalized
    }
}

impl FromStr for Requirement {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }

        for (index, constraint) in self.constraints.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", constraint)?;
        }

        if let Some(ref marker) = self.marker {
            write!(f, " ; {}", marker)?;
        }

        Ok(())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '*' | '+' | '!' | '-' | '_')
}

fn parse_constraint(input: &str, piece: &str) -> SproutResult<Constraint> {
    // Longest operators first so `===` is not read as `==`
    const OPS: [(&str, CompareOp); 8] = [
        ("===", CompareOp::Arbitrary),
        ("~=", CompareOp::Compatible),
        ("==", CompareOp::Exact),
        ("!=", CompareOp::NotEqual),
        ("<=", CompareOp::LessEq),
        (">=", CompareOp::GreaterEq),
        ("<", CompareOp::Less),
        (">", CompareOp::Greater),
    ];

    for (token, op) in OPS {
        if let Some(version) = piece.strip_prefix(token) {
            let version = version.trim();
            if version.is_empty() {
                return Err(SproutError::invalid_requirement(
                    input,
                    format!("missing version after '{}'", token),
                ));
            }
            if !version.chars().all(is_version_char) {
                return Err(SproutError::invalid_requirement(
                    input,
                    format!("invalid version '{}'", version),
                ));
            }
            return Ok(Constraint {
                op,
                version: version.to_string(),
            });
        }
    }

    Err(SproutError::invalid_requirement(
        input,
        format!("expected a comparison operator in '{}'", piece),
    ))
}
