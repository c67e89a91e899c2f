//! The lesson registry: every runnable lesson by name, and the dispatcher
//! that turns one into output lines.

use crate::collections;
use crate::concurrency;
use crate::config::Config;
use crate::error::{LessonError, Result};
use crate::greeting::{self, Salutation};
use crate::interfaces;
use crate::loops;
use crate::maps;
use crate::switch;
use serde::Deserialize;
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    // Functions
    Greet,
    IfGreet,
    Closure,
    Variadic,
    Constants,
    Pointer,
    // Loops
    BasicFor,
    WhileLoop,
    InfiniteLoop,
    LoopContinue,
    CollectionLoop,
    // Maps
    MapBasic,
    MapUpdate,
    MapDelete,
    // Switch
    SwitchBasic,
    SwitchFallthrough,
    SwitchNothing,
    SwitchType,
    // Collections
    BasicArray,
    FilteredSlice,
    BiggerSlice,
    SmallerSlice,
    // Interfaces
    Greetings,
    Renamable,
    Writer,
    // Concurrency
    BasicConcurrency,
    ChannelConcurrency,
    UnbufferedChannel,
    BufferedChannel,
    FixedChannel,
    ChannelRange,
    Handoff,
    Select,
}

impl Lesson {
    pub const ALL: [Lesson; 33] = [
        Lesson::Greet,
        Lesson::IfGreet,
        Lesson::Closure,
        Lesson::Variadic,
        Lesson::Constants,
        Lesson::Pointer,
        Lesson::BasicFor,
        Lesson::WhileLoop,
        Lesson::InfiniteLoop,
        Lesson::LoopContinue,
        Lesson::CollectionLoop,
        Lesson::MapBasic,
        Lesson::MapUpdate,
        Lesson::MapDelete,
        Lesson::SwitchBasic,
        Lesson::SwitchFallthrough,
        Lesson::SwitchNothing,
        Lesson::SwitchType,
        Lesson::BasicArray,
        Lesson::FilteredSlice,
        Lesson::BiggerSlice,
        Lesson::SmallerSlice,
        Lesson::Greetings,
        Lesson::Renamable,
        Lesson::Writer,
        Lesson::BasicConcurrency,
        Lesson::ChannelConcurrency,
        Lesson::UnbufferedChannel,
        Lesson::BufferedChannel,
        Lesson::FixedChannel,
        Lesson::ChannelRange,
        Lesson::Handoff,
        Lesson::Select,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Greet => "greet",
            Lesson::IfGreet => "if-greet",
            Lesson::Closure => "closure",
            Lesson::Variadic => "variadic",
            Lesson::Constants => "constants",
            Lesson::Pointer => "pointer",
            Lesson::BasicFor => "basic-for",
            Lesson::WhileLoop => "while-loop",
            Lesson::InfiniteLoop => "infinite-loop",
            Lesson::LoopContinue => "loop-continue",
            Lesson::CollectionLoop => "collection-loop",
            Lesson::MapBasic => "map-basic",
            Lesson::MapUpdate => "map-update",
            Lesson::MapDelete => "map-delete",
            Lesson::SwitchBasic => "switch-basic",
            Lesson::SwitchFallthrough => "switch-fallthrough",
            Lesson::SwitchNothing => "switch-nothing",
            Lesson::SwitchType => "switch-type",
            Lesson::BasicArray => "basic-array",
            Lesson::FilteredSlice => "filtered-slice",
            Lesson::BiggerSlice => "bigger-slice",
            Lesson::SmallerSlice => "smaller-slice",
            Lesson::Greetings => "greetings",
            Lesson::Renamable => "renamable",
            Lesson::Writer => "writer",
            Lesson::BasicConcurrency => "basic-concurrency",
            Lesson::ChannelConcurrency => "channel-concurrency",
            Lesson::UnbufferedChannel => "unbuffered-channel",
            Lesson::BufferedChannel => "buffered-channel",
            Lesson::FixedChannel => "fixed-channel",
            Lesson::ChannelRange => "channel-range",
            Lesson::Handoff => "handoff",
            Lesson::Select => "select",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        Lesson::ALL
            .iter()
            .copied()
            .find(|lesson| lesson.name() == s)
            .ok_or_else(|| LessonError::UnknownLesson(s.to_string()))
    }
}

fn collect_printed(call: impl FnOnce(&dyn Fn(&str))) -> Vec<String> {
    let out = RefCell::new(Vec::new());
    call(&|line: &str| out.borrow_mut().push(line.to_string()));
    out.into_inner()
}

/// Runs one lesson and returns what it printed.
pub fn run(lesson: Lesson, config: &Config) -> Result<Vec<String>> {
    let dearest = Salutation::new("Annica", "Dearest");
    let lines = match lesson {
        Lesson::Greet => collect_printed(|print| greeting::greet(&dearest, print)),
        Lesson::IfGreet => collect_printed(|print| {
            greeting::if_greet(&dearest, print, true);
            greeting::if_greet(&dearest, print, false);
        }),
        Lesson::Closure => greeting::use_closure(),
        Lesson::Variadic => greeting::print_variadic_greet().into_iter().collect(),
        Lesson::Constants => vec![
            greeting::offset_constant_example(),
            greeting::constant_example(),
        ],
        Lesson::Pointer => {
            let (owner, seen) = greeting::pointer_example();
            vec![format!("{} {}", owner, seen)]
        }

        Lesson::BasicFor => loops::basic_for_loop(config.times),
        Lesson::WhileLoop => loops::while_loop(config.times),
        Lesson::InfiniteLoop => loops::infinite_loop(&loops::vend_salutation(), config.times),
        Lesson::LoopContinue => loops::loop_with_continue(&loops::vend_salutation(), config.times),
        Lesson::CollectionLoop => loops::collection_loop(),

        Lesson::MapBasic => vec![maps::map_basic(&config.name)],
        Lesson::MapUpdate => vec![maps::map_update(&config.name)],
        Lesson::MapDelete => {
            let lookup = maps::map_delete(&config.name);
            vec![format!("{}(found: {})", lookup.prefix, lookup.found)]
        }

        Lesson::SwitchBasic => vec![switch::switch_basic(&config.name).to_string()],
        Lesson::SwitchFallthrough => vec![switch::switch_fallthrough(&config.name).to_string()],
        Lesson::SwitchNothing => vec![switch::switch_nothing().to_string()],
        Lesson::SwitchType => vec![switch::switch_type(&dearest).to_string()],

        Lesson::BasicArray => vec![format!("{:?}", collections::basic_array())],
        Lesson::FilteredSlice => collections::print_filtered_slice(),
        Lesson::BiggerSlice => collections::print_bigger_slice(),
        Lesson::SmallerSlice => collections::print_smaller_slice(),

        Lesson::Greetings => interfaces::print_greetings(),
        Lesson::Renamable => interfaces::print_renamable(),
        Lesson::Writer => interfaces::print_writer_type()?,

        Lesson::BasicConcurrency => concurrency::basic_concurrency(config.settle()),
        Lesson::ChannelConcurrency => concurrency::channel_concurrency()?,
        Lesson::UnbufferedChannel => concurrency::unbuffered_channel()?,
        Lesson::BufferedChannel => concurrency::buffered_channel()?,
        Lesson::FixedChannel => concurrency::fixed_channel(config.settle())?,
        Lesson::ChannelRange => concurrency::channel_with_range()?,
        Lesson::Handoff => concurrency::handoff(config.capacity)?
            .iter()
            .map(ToString::to_string)
            .collect(),
        Lesson::Select => concurrency::concurrency_select()?
            .iter()
            .map(concurrency::SelectEvent::line)
            .collect(),
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for lesson in Lesson::ALL {
            assert_eq!(lesson.name().parse::<Lesson>().unwrap(), lesson);
        }
    }

    #[test]
    fn test_serde_names_match() {
        for lesson in Lesson::ALL {
            let config = Config::from_toml_str(&format!("lesson = \"{}\"", lesson)).unwrap();
            assert_eq!(config.lesson, lesson);
        }
    }

    #[test]
    fn test_unknown_lesson() {
        assert!(matches!(
            "juggling".parse::<Lesson>(),
            Err(LessonError::UnknownLesson(name)) if name == "juggling"
        ));
    }

    #[test]
    fn test_default_lesson_is_switch_type() {
        let lines = run(Config::default().lesson, &Config::default()).unwrap();
        assert_eq!(lines, vec!["salutation"]);
    }

    #[test]
    fn test_map_delete_output() {
        let lines = run(Lesson::MapDelete, &Config::default()).unwrap();
        assert_eq!(lines, vec!["Dude (found: false)"]);
    }

    #[test]
    fn test_pointer_and_constants_output() {
        let config = Config::default();
        assert_eq!(
            run(Lesson::Pointer, &config).unwrap(),
            vec!["Hello, little chickies! Hello, little chickies!"]
        );
        assert_eq!(run(Lesson::Constants, &config).unwrap(), vec!["2 3 4", "0 1 2"]);
    }

    #[test]
    fn test_greet_through_printer() {
        let config = Config::default();
        assert_eq!(run(Lesson::Greet, &config).unwrap(), vec!["Hey, Annica"]);
        assert_eq!(run(Lesson::IfGreet, &config).unwrap().len(), 2);
    }

    #[test]
    fn test_every_lesson_runs() {
        let config = Config {
            settle_ms: 10,
            ..Config::default()
        };
        for lesson in Lesson::ALL {
            assert!(run(lesson, &config).is_ok(), "{} failed", lesson);
        }
    }
}
