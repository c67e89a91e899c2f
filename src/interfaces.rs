//! Single-method polymorphism with `Renamable`, and implementing a standard
//! library trait (`io::Write`) for a domain type.

use crate::greeting::{vend_salutations, Salutation};
use std::io::{self, Write};

pub trait Renamable {
    fn rename(&mut self, new_name: &str);
}

impl Renamable for Salutation {
    fn rename(&mut self, new_name: &str) {
        self.name = new_name.to_string();
    }
}

pub fn rename_to_frog(target: &mut dyn Renamable) {
    target.rename("Frog");
}

pub fn print_greetings() -> Vec<String> {
    let mut salutations = vend_salutations();
    salutations[0].rename("Jessica");
    salutations.greet(false)
}

pub fn print_renamable() -> Vec<String> {
    let mut salutations = vend_salutations();
    rename_to_frog(&mut salutations[0]);
    salutations.greet(false)
}

/// Every write replaces the name with the bytes written.
impl Write for Salutation {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.rename(text);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn print_writer_type() -> io::Result<Vec<String>> {
    let mut salutations = vend_salutations();
    // Format first: `write!` may split its output across several `write`
    // calls, and each call renames.
    let text = format!("{} New Name", 1);
    salutations[0].write_all(text.as_bytes())?;
    Ok(vec![salutations[0].to_string(), salutations[1].to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_through_trait_object() {
        let mut sal = Salutation::new("Annica", "Hi");
        rename_to_frog(&mut sal);
        assert_eq!(sal.name, "Frog");
    }

    #[test]
    fn test_print_greetings() {
        let lines = print_greetings();
        assert_eq!(lines[0], "Howdy, Jessica");
        assert_eq!(lines[1], "Hey, Mitchel");
    }

    #[test]
    fn test_print_renamable() {
        assert_eq!(print_renamable()[0], "Howdy, Frog");
    }

    #[test]
    fn test_writer_renames() {
        let lines = print_writer_type().unwrap();
        assert_eq!(lines[0], "{1 New Name Howdy Hello}");
        assert_eq!(lines[1], "{Mitchel Hey Hello}");
    }

    #[test]
    fn test_writer_rejects_invalid_utf8() {
        let mut sal = Salutation::new("Annica", "Hi");
        let err = sal.write(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(sal.name, "Annica");
    }
}
