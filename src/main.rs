use clap::{Parser, Subcommand, ValueEnum};
use ordver::{SemanticVersion, VersionError};
use std::cmp::Ordering;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("`{version}` has no {level} field to bump")]
    LevelNotInVersion { version: String, level: &'static str },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Micro,
}

impl LevelArg {
    fn name(self) -> &'static str {
        match self {
            LevelArg::Major => "major",
            LevelArg::Minor => "minor",
            LevelArg::Micro => "micro",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Validates that a version string matches the grammar
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Compares the precedence of two versions, printing `<`, `=`, or `>`
    Cmp {
        /// The left-hand version string
        left: String,

        /// The right-hand version string
        right: String,
    },

    /// Prints the canonical rendering of a version
    Render {
        /// The version string to render
        version: String,
    },

    /// Increments one core field of a version, resetting the fields below it
    /// and clearing the pre-release and build segments
    Bump {
        /// The version string to bump
        version: String,

        /// The core field to increment
        #[arg(short, long, value_enum)]
        level: LevelArg,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Valid { version } => Ok(match SemanticVersion::parse(&version) {
            Ok(_) => ("true".to_string(), 0),
            Err(_) => ("false".to_string(), 1),
        }),
        Commands::Cmp { left, right } => {
            let left = SemanticVersion::parse(&left)?;
            let right = SemanticVersion::parse(&right)?;
            let rendered = match left.precedence(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            Ok((rendered.to_string(), 0))
        }
        Commands::Render { version } => {
            let version = SemanticVersion::parse(&version)?;
            Ok((version.to_string(), 0))
        }
        Commands::Bump { version, level } => {
            let parsed = SemanticVersion::parse(&version)?;
            let bumped = match level {
                LevelArg::Major => Some(parsed.bump_major()),
                LevelArg::Minor => parsed.bump_minor(),
                LevelArg::Micro => parsed.bump_micro(),
            };
            match bumped {
                Some(bumped) => Ok((bumped.to_string(), 0)),
                None => Err(CliError::LevelNotInVersion {
                    version,
                    level: level.name(),
                }),
            }
        }
    }
}
