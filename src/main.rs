mod agenda;
mod app;
mod calendar;
mod events;
mod help;
mod jumpto;
mod sample;
mod theme;
use crate::app::App;
use crate::calendar::MonthPager;
use crate::events::EventBook;
use crate::sample::sample_events;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        events: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut events = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('e') | Arg::Long("events") => {
                    events = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, events })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, events } => {
                let book = match events {
                    Some(path) => {
                        let text = std::fs::read_to_string(&path)
                            .with_context(|| format!("failed to read {}", path.display()))?;
                        EventBook::from_json(&text)
                            .with_context(|| format!("failed to parse {}", path.display()))?
                    }
                    None => EventBook::new(sample_events()),
                };
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut pager = MonthPager::new(today, book);
                    if let Some(date) = date {
                        pager = pager.start_date(date);
                    }
                    App::new(pager).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: projcal [-e FILE] [YYYY-MM-DD]");
                println!();
                println!("Terminal calendar for browsing a project team's events & deadlines");
                println!();
                println!("Arguments:");
                println!("  [YYYY-MM-DD]        Date to show at startup [default: today]");
                println!();
                println!("Options:");
                println!("  -e FILE, --events FILE");
                println!("                      Read events from a JSON file instead of the");
                println!("                      built-in demo agenda");
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
