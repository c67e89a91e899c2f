//! Greeting records and the function lessons built around them.
//!
//! Covers multiple return values, function values passed as arguments,
//! closures that capture their environment, slice parameters standing in
//! for variadic arguments, and borrowing vs copying.

use itertools::Itertools;
use std::fmt;
use std::ops::{Deref, DerefMut};

// =============================================================================
// The greeting record
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salutation {
    pub name: String,
    pub casual: String,
    pub formal: Option<String>,
}

impl Salutation {
    pub fn new(name: impl Into<String>, casual: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            casual: casual.into(),
            formal: None,
        }
    }

    pub fn with_formal(
        name: impl Into<String>,
        casual: impl Into<String>,
        formal: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            casual: casual.into(),
            formal: Some(formal.into()),
        }
    }

    /// Formal phrase if asked for and present, casual phrase otherwise.
    pub fn phrase(&self, is_formal: bool) -> &str {
        match (&self.formal, is_formal) {
            (Some(formal), true) => formal,
            _ => &self.casual,
        }
    }

    pub fn line(&self, is_formal: bool) -> String {
        format!("{}, {}", self.phrase(is_formal), self.name)
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.formal {
            Some(formal) => write!(f, "{{{} {} {}}}", self.name, self.casual, formal),
            None => write!(f, "{{{} {}}}", self.name, self.casual),
        }
    }
}

/// An ordered sequence of greeting records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Salutations(pub Vec<Salutation>);

impl Salutations {
    pub fn greet(&self, is_formal: bool) -> Vec<String> {
        self.iter().map(|s| s.line(is_formal)).collect()
    }

    pub fn into_inner(self) -> Vec<Salutation> {
        self.0
    }
}

impl Deref for Salutations {
    type Target = [Salutation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Salutations {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Salutation>> for Salutations {
    fn from(items: Vec<Salutation>) -> Self {
        Salutations(items)
    }
}

impl IntoIterator for Salutations {
    type Item = Salutation;
    type IntoIter = std::vec::IntoIter<Salutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Salutations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(" "))
    }
}

/// Starter sequence shared by the interface and concurrency lessons.
pub fn vend_salutations() -> Salutations {
    Salutations(vec![
        Salutation::with_formal("Annica", "Howdy", "Hello"),
        Salutation::with_formal("Mitchel", "Hey", "Hello"),
        Salutation::with_formal("Marisol", "Salud", "Hello"),
    ])
}

// =============================================================================
// Functions as values
// =============================================================================

/// A print function handed to a greeter.
pub type Printer<'a> = &'a dyn Fn(&str);

/// Returns the full message and a casual alternate.
pub fn create_message(name: &str, greeting: &str) -> (String, String) {
    let message = format!("{}, {}", greeting, name);
    let alternate = format!("Hey, {}", name);
    (message, alternate)
}

pub fn greet(salutation: &Salutation, print: Printer<'_>) {
    let (_, alternate) = create_message(&salutation.name, &salutation.casual);
    print(&alternate);
}

pub fn if_greet(salutation: &Salutation, print: Printer<'_>, is_formal: bool) {
    let (message, alternate) = create_message(&salutation.name, &salutation.casual);
    let extra_sugar = " (sweetheart)";
    if is_formal {
        print(&format!("{}{}", message, extra_sugar));
    } else {
        print(&alternate);
    }
}

/// Builds a printer that appends `custom` to everything it prints.
pub fn create_print_function(custom: impl Into<String>) -> impl Fn(&str) {
    let custom = custom.into();
    move |s: &str| println!("{}{}", s, custom)
}

/// Like [`create_print_function`], but collects into `out` instead of stdout.
pub fn create_collecting_function<'a>(
    custom: &'a str,
    out: &'a std::cell::RefCell<Vec<String>>,
) -> impl Fn(&str) + 'a {
    move |s: &str| out.borrow_mut().push(format!("{}{}", s, custom))
}

pub fn use_closure() -> Vec<String> {
    let sal = Salutation::new("Annica", "Dearest");
    let out = std::cell::RefCell::new(Vec::new());
    greet(&sal, &create_collecting_function("000", &out));
    out.into_inner()
}

// =============================================================================
// Variadic arguments, constants, borrowing
// =============================================================================

/// The third greeting, if one was passed.
pub fn variadic_message<'a>(_name: &str, greetings: &[&'a str]) -> Option<&'a str> {
    greetings.get(2).copied()
}

pub fn print_variadic_greet() -> Option<String> {
    let sal = Salutation::new("Annica", "Hi");
    variadic_message(&sal.name, &[sal.casual.as_str(), "greeting1", "greeting2"])
        .map(|result| format!("result: {}", result))
}

/// Implicit discriminants keep counting across a group, so `A` starts
/// at 2 after `Pi` and `Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Pi,
    Language,
    A,
    B,
    C,
}

/// A new group counts from zero again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    A,
    B,
    C,
}

pub fn constant_example() -> String {
    format!("{} {} {}", Letter::A as i32, Letter::B as i32, Letter::C as i32)
}

pub fn offset_constant_example() -> String {
    format!("{} {} {}", Setting::A as i32, Setting::B as i32, Setting::C as i32)
}

/// Mutates through a reference, then reads back through the owner.
/// Returns (owner, reference).
pub fn pointer_example() -> (String, String) {
    let mut message = String::from("Hello, little chickies");
    let greeting = &mut message;
    greeting.push('!');
    let seen = greeting.clone();
    (message, seen)
}
