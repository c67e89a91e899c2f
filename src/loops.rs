//! Loop lessons: counted, conditional, unconditional with `break`,
//! `continue`-driven skipping, and iterating a collection.
//!
//! Each lesson returns the lines it would print.

use crate::greeting::Salutation;

pub fn vend_salutation() -> Salutation {
    Salutation::new("Annica", "Hello")
}

pub fn basic_for_loop(times: usize) -> Vec<String> {
    let sal = vend_salutation();
    let mut lines = Vec::with_capacity(times);
    for _ in 0..times {
        lines.push(sal.line(false));
    }
    lines
}

pub fn while_loop(times: usize) -> Vec<String> {
    let sal = vend_salutation();
    let mut lines = Vec::new();
    let mut i = 0;
    while i < times {
        lines.push(sal.line(false));
        i += 1;
    }
    lines
}

/// Runs the body before checking, so `times == 0` still prints once.
pub fn infinite_loop(sal: &Salutation, times: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut i = 0;
    loop {
        i += 1;
        lines.push(sal.line(false));
        if i >= times {
            break;
        }
    }
    lines
}

/// Only odd iterations print: `times = 6` gives three lines.
pub fn loop_with_continue(sal: &Salutation, times: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut i = 0;
    loop {
        if i >= times {
            break;
        }
        if i % 2 == 0 {
            i += 1;
            continue;
        }
        lines.push(sal.line(false));
        i += 1;
    }
    lines
}

pub fn collection_loop() -> Vec<String> {
    let items = [
        Salutation::new("Annica", "Hello"),
        Salutation::new("Mitchel", "Hi"),
    ];
    items.iter().map(|s| s.line(false)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_and_conditional_agree() {
        assert_eq!(basic_for_loop(3), while_loop(3));
        assert_eq!(basic_for_loop(3), vec!["Hello, Annica"; 3]);
        assert!(while_loop(0).is_empty());
    }

    #[test]
    fn test_infinite_loop_breaks() {
        let sal = vend_salutation();
        assert_eq!(infinite_loop(&sal, 4).len(), 4);
        assert_eq!(infinite_loop(&sal, 0).len(), 1);
    }

    #[test]
    fn test_loop_with_continue_skips_even() {
        let sal = vend_salutation();
        assert_eq!(loop_with_continue(&sal, 6).len(), 3);
        assert_eq!(loop_with_continue(&sal, 1).len(), 0);
        assert_eq!(loop_with_continue(&sal, 2).len(), 1);
    }

    #[test]
    fn test_collection_loop() {
        assert_eq!(collection_loop(), vec!["Hello, Annica", "Hi, Mitchel"]);
    }
}
