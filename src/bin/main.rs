use colored::Colorize;
use greeting_lessons::{logging, run, Config, Lesson, LessonError};
use itertools::Itertools;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};

enum Command {
    List,
    Run {
        lesson: Option<Lesson>,
        config: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Result<Command, LessonError> {
    let mut lesson = None;
    let mut config = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => return Ok(Command::List),
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| LessonError::Config("--config needs a path".to_string()))?;
                config = Some(PathBuf::from(path));
            }
            name => lesson = Some(name.parse()?),
        }
    }

    Ok(Command::Run { lesson, config })
}

fn execute(args: &[String]) -> Result<(), LessonError> {
    let (lesson, config_path) = match parse_args(args)? {
        Command::List => {
            println!("{}", Lesson::ALL.iter().join("\n"));
            return Ok(());
        }
        Command::Run { lesson, config } => (lesson, config),
    };

    let mut config = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(lesson) = lesson {
        config.lesson = lesson;
    }

    info!(lesson = %config.lesson, "running lesson");
    println!("{}", format!("=== {} ===", config.lesson).bold().cyan());
    for line in run(config.lesson, &config)? {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("logging unavailable: {}", err);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = execute(&args) {
        warn!(error = %err, "lesson failed");
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
