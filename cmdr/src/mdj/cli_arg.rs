// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_jump::{Direction, MotionKind, Position, col, pos, row};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "mdj")]
#[command(about = "🦘 Jump around Markdown files like a Vim motion would")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  mdj [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = "debug",
        help = "Level for `--enable-logging`: off, error, warn, info, debug, or trace"
    )]
    pub log_level: LevelFilter,
}

/// A caret in the file. Rows and columns start at 0, and columns count characters.
#[derive(Debug, Clone, Copy, Args)]
pub struct CaretArg {
    #[arg(long, help = "Row of the caret (0 based)")]
    pub row: usize,

    #[arg(long, help = "Column of the caret (0 based, in characters)")]
    pub col: usize,
}

impl From<CaretArg> for Position {
    fn from(it: CaretArg) -> Self { pos(row(it.row), col(it.col)) }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🏃 Run a motion and print the new caret as `row:col`\n💡 Eg: `mdj jump next-heading --file README.md --row 0 --col 0`"
    )]
    Jump {
        #[arg(value_enum)]
        motion: MotionArg,

        #[arg(long, short = 'f', help = "Markdown file to read")]
        file: String,

        #[command(flatten)]
        caret: CaretArg,

        #[arg(long, short = 'c', default_value_t = 1, help = "Repeat count, 0 behaves as 1")]
        count: usize,
    },

    #[clap(
        about = "🔎 Jump to a match of any regex and print the new caret as `row:col`\n💡 Eg: `mdj search --pattern 'TODO' --file notes.md --row 3 --col 0`"
    )]
    Search {
        #[arg(long, short = 'p', help = "Regex to search for (must not match empty text)")]
        pattern: String,

        #[arg(long, short = 'f', help = "Markdown file to read")]
        file: String,

        #[command(flatten)]
        caret: CaretArg,

        #[arg(long, short = 'c', default_value_t = 1, help = "Repeat count, 0 behaves as 1")]
        count: usize,

        #[arg(long, short = 'd', value_enum, default_value_t = DirectionArg::Next)]
        direction: DirectionArg,
    },

    #[clap(about = "🔗 List every link as `row:col<TAB>kind<TAB>target<TAB>text`")]
    Links {
        #[arg(long, short = 'f', help = "Markdown file to read")]
        file: String,
    },

    #[clap(about = "📑 List every heading outside of code fences as `row:col<TAB>level<TAB>title`")]
    Headings {
        #[arg(long, short = 'f', help = "Markdown file to read")]
        file: String,
    },

    #[clap(
        about = "👉 Print the target of the link under the caret, exits w/ 1 if there is none"
    )]
    Follow {
        #[arg(long, short = 'f', help = "Markdown file to read")]
        file: String,

        #[command(flatten)]
        caret: CaretArg,
    },
}

impl CLICommand {
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            CLICommand::Jump { file, .. }
            | CLICommand::Search { file, .. }
            | CLICommand::Links { file }
            | CLICommand::Headings { file }
            | CLICommand::Follow { file, .. } => file,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MotionArg {
    #[clap(help = "Next heading (skips `#` lines in code fences)")]
    NextHeading,
    #[clap(help = "Previous heading (skips `#` lines in code fences)")]
    PreviousHeading,
    #[clap(help = "Next wiki-link, markdown link, or URL")]
    NextLink,
    #[clap(help = "Previous wiki-link, markdown link, or URL")]
    PreviousLink,
}

impl From<MotionArg> for MotionKind {
    fn from(it: MotionArg) -> Self {
        match it {
            MotionArg::NextHeading => MotionKind::NextHeading,
            MotionArg::PreviousHeading => MotionKind::PreviousHeading,
            MotionArg::NextLink => MotionKind::NextLink,
            MotionArg::PreviousLink => MotionKind::PreviousLink,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Next,
    Previous,
}

impl From<DirectionArg> for Direction {
    fn from(it: DirectionArg) -> Self {
        match it {
            DirectionArg::Next => Direction::Next,
            DirectionArg::Previous => Direction::Previous,
        }
    }
}
