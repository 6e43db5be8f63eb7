//! Text rendering of view models and notices. The core never renders;
//! everything user-visible is produced here.

use std::io::{self, Write};

use vtu_core::{AppViewModel, FetchPhase, Notice};

pub fn print_banner(out: &mut impl Write, base_url: &str) -> io::Result<()> {
    writeln!(out, "VTU batch result fetcher (service: {base_url})")?;
    writeln!(out, "type `help` for commands")
}

pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  gen <prefix> <start> <end>   append a generated USN batch")?;
    writeln!(out, "  usns <text>                  set the USN list (free-form)")?;
    writeln!(out, "  subject <code>               set the subject code filter")?;
    writeln!(out, "  index <url>                  set the index page URL")?;
    writeln!(out, "  result <url>                 set the result page URL")?;
    writeln!(out, "  fetch                        submit the batch")?;
    writeln!(out, "  abort                        abort the outstanding request")?;
    writeln!(out, "  show                         show current state")?;
    writeln!(out, "  quit                         exit")
}

pub fn render(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    writeln!(
        out,
        "[{}] roster: {} USN(s), subject: {}",
        phase_label(view.phase),
        view.roster_count,
        if view.subject_code.is_empty() {
            "(none)"
        } else {
            view.subject_code.as_str()
        },
    )?;
    if let Some(notice) = &view.notice {
        writeln!(out, "{}", notice_line(notice))?;
    }
    Ok(())
}

fn phase_label(phase: FetchPhase) -> &'static str {
    match phase {
        FetchPhase::Idle => "idle",
        FetchPhase::Loading => "loading",
        FetchPhase::Succeeded => "succeeded",
        FetchPhase::Failed => "failed",
    }
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::Generated { count } => format!("generated {count} USN(s)"),
        Notice::ValidationFailed { reason } => format!("validation failed: {reason}"),
        Notice::Loading { requested } => {
            format!("scraping {requested} USN(s), please wait")
        }
        Notice::ResultReady { summary } => {
            let mut line = format!(
                "done: successful {}, failed {} of {} requested",
                summary.total_successful, summary.failed_count, summary.requested
            );
            if let Some(url) = &summary.download_url {
                line.push_str(&format!(" | download: {url}"));
            }
            line
        }
        Notice::FetchFailed { reason } => format!("error: {reason}"),
    }
}
