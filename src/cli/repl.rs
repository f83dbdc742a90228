//! Line-oriented planning session

use crate::application::Session;
use crate::cli::commands::{split_line, SessionCommand, SessionLine};
use crate::cli::output::{
    format_banner, format_bucket_list, format_export, format_itinerary, format_scheduled,
};
use crate::domain::time_of_day::parse_time;
use crate::domain::{Category, Day};
use crate::error::{PlannerError, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// How the session presents itself
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    pub banner: bool,
    pub prompt: bool,
}

enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until EOF or `quit`, writing the transcript
/// to `output`. Rejected commands are reported and the session goes on.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    options: ReplOptions,
) -> Result<()> {
    if options.banner {
        writeln!(output, "{}", format_banner())?;
    }

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let tokens = match split_line(&line?) {
            Ok(tokens) if tokens.is_empty() => continue,
            Ok(tokens) => tokens,
            Err(e) => {
                report(output, &e)?;
                continue;
            }
        };

        let command = match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(output, "{}", e)?;
                continue;
            }
        };

        match execute(session, command, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_recoverable() => report(output, &e)?,
            Err(e) => return Err(e),
        }
    }

    output.flush()?;
    Ok(())
}

fn report<W: Write>(output: &mut W, error: &PlannerError) -> Result<()> {
    warn!(%error, "command rejected");
    writeln!(output, "Error: {}", error.display_with_suggestions())?;
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: SessionCommand,
    output: &mut W,
) -> Result<Flow> {
    match command {
        SessionCommand::Add {
            place,
            category,
            notes,
        } => {
            let category = category
                .map(|c| Category::from_str(&c).map_err(PlannerError::InvalidCategory))
                .transpose()?;
            // Blank places are dropped without a message
            if let Some(idea) = session.add_idea(&place.join(" "), category, &notes) {
                writeln!(output, "Added {}!", idea.place)?;
            }
        }
        SessionCommand::Ideas => {
            writeln!(output, "{}", format_bucket_list(&session.view().ideas))?;
        }
        SessionCommand::Schedule {
            position,
            day,
            time,
        } => {
            let day = day
                .map(|d| Day::from_str(&d).map_err(PlannerError::InvalidDay))
                .transpose()?;
            let time = time
                .map(|t| parse_time(&t).map_err(PlannerError::InvalidTime))
                .transpose()?;

            let entry = session.schedule(position, day, time)?;
            writeln!(output, "{}", format_scheduled(entry))?;
            writeln!(output, "{}", format_itinerary(&session.view().days))?;
        }
        SessionCommand::Itinerary => {
            writeln!(output, "{}", format_itinerary(&session.view().days))?;
        }
        SessionCommand::Export { path } => {
            let artifact = session.export(path.as_deref())?;
            writeln!(output, "{}", format_export(&artifact))?;
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
