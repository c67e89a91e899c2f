//! Arrays vs slices: fixed-size value types, borrowed views into a `Vec`,
//! growing with `push`/`extend`, and removing from the middle.

use crate::error::{LessonError, Result};
use crate::greeting::Salutation;

/// Fixed length is part of the type; `[i32; 3]` and `[i32; 4]` don't mix.
pub fn basic_array() -> [i32; 3] {
    [0; 3]
}

pub fn basic_slice() -> Vec<Salutation> {
    vec![
        Salutation::new("Annica", "Hello"),
        Salutation::new("Mitchel", "Howdy"),
        Salutation::new("Joline", "Welcome"),
    ]
}

/// `[1..]` borrows everything from index 1; no copy is made.
pub fn slicing_a_slice(starting: &[Salutation]) -> &[Salutation] {
    &starting[1..]
}

pub fn slice_from(starting: &[Salutation], start: usize) -> Result<&[Salutation]> {
    starting.get(start..).ok_or(LessonError::OutOfRange {
        index: start,
        len: starting.len(),
    })
}

/// Panics unless `starting` holds at least two records.
pub fn appending_a_slice(mut starting: Vec<Salutation>) -> Vec<Salutation> {
    starting.push(Salutation::new("Tammy", "Salud"));
    let mut tail = starting.split_off(3);
    tail.extend_from_within(..);
    tail
}

/// Keeps `[..1]` and `[2..]`. Panics on fewer than two records.
pub fn deleting_a_slice(mut starting: Vec<Salutation>) -> Vec<Salutation> {
    starting.drain(1..2);
    starting
}

pub fn delete_at(mut starting: Vec<Salutation>, index: usize) -> Result<Vec<Salutation>> {
    if index >= starting.len() {
        return Err(LessonError::OutOfRange {
            index,
            len: starting.len(),
        });
    }
    starting.remove(index);
    Ok(starting)
}

fn names(items: &[Salutation]) -> String {
    items
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_filtered_slice() -> Vec<String> {
    let all = basic_slice();
    let filtered = slicing_a_slice(&all);
    vec![names(filtered), filtered.len().to_string()]
}

pub fn print_bigger_slice() -> Vec<String> {
    vec![names(&appending_a_slice(basic_slice()))]
}

pub fn print_smaller_slice() -> Vec<String> {
    vec![names(&deleting_a_slice(basic_slice()))]
}
