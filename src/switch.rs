//! Multi-branch dispatch: on a value, with emulated fallthrough, on bare
//! conditions, and on the runtime type of an `Any`.

use crate::greeting::Salutation;
use std::any::Any;
use std::fmt;

pub fn switch_basic(name: &str) -> &'static str {
    match name {
        "Annica" => "Ms",
        "Mitchel" => "Mr",
        _ => "Dude",
    }
}

/// `match` never falls through, so the arm that would have been fallen
/// into absorbs the earlier name.
pub fn switch_fallthrough(name: &str) -> &'static str {
    match name {
        "Annica" | "Mitchel" | "Tom" => "Mr",
        _ => "Dude",
    }
}

/// First true guard wins.
pub fn switch_nothing() -> &'static str {
    let a = false;
    let b = true;
    let c = false;
    match () {
        _ if a => "a",
        _ if b || 2 == 3 => "b",
        _ if c => "c",
        _ => "nothing",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Str,
    Salutation,
    Unknown,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Str => "string",
            Kind::Salutation => "salutation",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn switch_type(value: &dyn Any) -> Kind {
    if value.is::<i32>() || value.is::<i64>() || value.is::<isize>() {
        Kind::Int
    } else if value.is::<String>() || value.is::<&str>() {
        Kind::Str
    } else if value.is::<Salutation>() {
        Kind::Salutation
    } else {
        Kind::Unknown
    }
}
