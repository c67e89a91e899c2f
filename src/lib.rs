//! Greeting Lessons - small, self-contained language lessons
//!
//! Each module covers one topic and shares only the greeting record from
//! [`greeting`]:
//!
//! 1. **Functions** - multiple returns, function values, closures
//! 2. **Loops** - counted, conditional, `break` and `continue`
//! 3. **Maps** - insert, update, delete, existence checks
//! 4. **Switch** - value, guard and type dispatch
//! 5. **Collections** - arrays vs slices, append, delete
//! 6. **Interfaces** - a one-method trait, implementing `io::Write`
//! 7. **Concurrency** - threads, channels, select
//!
//! Run one lesson with:
//! ```bash
//! cargo run -- <lesson-name>
//! cargo run -- --list
//! ```

pub mod collections;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod greeting;
pub mod interfaces;
pub mod lesson;
pub mod logging;
pub mod loops;
pub mod maps;
pub mod switch;

pub use config::Config;
pub use error::{LessonError, Result};
pub use greeting::{Salutation, Salutations};
pub use lesson::{run, Lesson};
