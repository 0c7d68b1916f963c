//! Console driver
//!
//! Stands in for a browser: each input line becomes what a user would
//! do on the page. `add` types into the entry field and submits the
//! form, `check`/`delete` click the control in a rendered row, `hide`
//! clicks the hide-completed control. Rows are numbered as currently
//! rendered, starting at 1.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use libshoplist::{selectors, HeadlessPage, IdGenerator, Page};

use crate::app::{AppState, DomEvent, EventTarget};
use crate::error::{AppError, Result};

pub const HELP: &str = "\
Commands:
  add <name>     type <name> into the entry field and submit
  check <row>    click the check control of a row
  delete <row>   click the delete control of a row
  hide           click the hide/show completed control
  show           print the list
  json           print the store as JSON
  help           this text
  quit           end the session";

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Check(usize),
    Delete(usize),
    Hide,
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            // The raw remainder is what the user typed into the field
            "add" => Ok(Command::Add(rest.to_string())),
            "check" | "toggle" => parse_row(rest).map(Command::Check),
            "delete" | "rm" => parse_row(rest).map(Command::Delete),
            "hide" => Ok(Command::Hide),
            "show" | "list" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(AppError::Command(format!("unknown command: {}", other))),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize> {
    match arg.trim().parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(AppError::Command(format!(
            "expected a row number starting at 1, got {:?}",
            arg.trim()
        ))),
    }
}

/// What to print after every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// The list container markup
    #[default]
    Markup,
    /// The store snapshot as JSON
    Json,
    /// One numbered line per rendered row
    Text,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub format: OutputFormat,
    /// Rewrite the full page here after every render
    pub output: Option<PathBuf>,
}

/// Line reader for console commands
pub struct Console<R> {
    reader: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next non-blank line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
            if !trimmed.trim().is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }
}

/// Turn a page-level command into the event a user would trigger
///
/// Commands that only inspect state return `None`.
pub fn command_event<G: IdGenerator>(
    command: &Command,
    app: &mut AppState<HeadlessPage, G>,
) -> Result<Option<DomEvent>> {
    let event = match command {
        Command::Add(name) => {
            app.page_mut()
                .set_field_value(&selectors::NEW_ITEM_ENTRY, name.clone());
            DomEvent::submit(selectors::NEW_ITEM_FORM)
        }
        Command::Check(row) => {
            DomEvent::click(row_target(app, *row, selectors::ITEM_TOGGLE)?)
        }
        Command::Delete(row) => {
            DomEvent::click(row_target(app, *row, selectors::ITEM_DELETE)?)
        }
        Command::Hide => DomEvent::click(EventTarget::element(selectors::HIDE_COMPLETED_TOGGLE)),
        Command::Show | Command::Json | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(event))
}

fn row_target<G>(
    app: &AppState<HeadlessPage, G>,
    row: usize,
    control: libshoplist::Selector,
) -> Result<EventTarget> {
    let ids = app.page().rendered_item_ids();
    let id = row
        .checked_sub(1)
        .and_then(|index| ids.get(index))
        .cloned()
        .ok_or_else(|| AppError::Command(format!("no row {} ({} shown)", row, ids.len())))?;
    Ok(EventTarget::within_item(control, id))
}

/// Drive `app` from `input` until `quit` or end of input
///
/// Command errors are reported on `err` and the session continues. If
/// any command failed, the session ends with [`AppError::Command`].
pub fn run_session<R, W, E, G>(
    app: &mut AppState<HeadlessPage, G>,
    input: R,
    out: &mut W,
    err: &mut E,
    options: &SessionOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
    G: IdGenerator,
{
    let mut console = Console::new(input);
    let mut failed = 0usize;
    write_view(app, out, options.format)?;
    write_page(app, options)?;

    while let Some(line) = console.next_line()? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "{}", e)?;
                failed += 1;
                continue;
            }
        };
        tracing::debug!(?command, "console command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => write_view(app, out, options.format)?,
            Command::Json => write_view(app, out, OutputFormat::Json)?,
            _ => match command_event(&command, app) {
                Ok(Some(event)) => {
                    app.handle(&event);
                    write_view(app, out, options.format)?;
                    write_page(app, options)?;
                }
                Ok(None) => {}
                Err(e @ AppError::Command(_)) => {
                    writeln!(err, "{}", e)?;
                    failed += 1;
                }
                Err(e) => return Err(e),
            },
        }
    }

    out.flush()?;
    if failed > 0 {
        return Err(AppError::Command(format!(
            "{} command{} failed",
            failed,
            if failed == 1 { "" } else { "s" }
        )));
    }
    Ok(())
}

fn write_view<W: Write, G>(
    app: &AppState<HeadlessPage, G>,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Markup => {
            let markup = app.page().content(&selectors::LIST).unwrap_or_default();
            writeln!(out, "{}", markup.trim_start())?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&app.store().snapshot())?)?;
        }
        OutputFormat::Text => {
            let ids = app.page().rendered_item_ids();
            if ids.is_empty() {
                writeln!(out, "(empty)")?;
            }
            for (row, id) in ids.iter().enumerate() {
                if let Some(item) = app.store().find(id) {
                    let mark = if item.is_checked() { 'x' } else { ' ' };
                    writeln!(out, "{}. [{}] {}", row + 1, mark, item.name())?;
                }
            }
        }
    }
    Ok(())
}

fn write_page<G>(app: &AppState<HeadlessPage, G>, options: &SessionOptions) -> Result<()> {
    if let Some(path) = &options.output {
        std::fs::write(path, app.page_html())?;
        tracing::debug!(path = %path.display(), "page written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libshoplist::{IdSource, Store};
    use std::io::Cursor;

    fn app() -> AppState<HeadlessPage> {
        let mut app = AppState::new(
            Store::demo(IdSource::sequential("item")),
            HeadlessPage::new(),
            false,
        );
        app.bootstrap().unwrap();
        app
    }

    fn session(script: &str, format: OutputFormat) -> (AppState<HeadlessPage>, String, String) {
        let (app, out, err, result) = session_result(script, format);
        result.unwrap();
        (app, out, err)
    }

    fn session_result(
        script: &str,
        format: OutputFormat,
    ) -> (AppState<HeadlessPage>, String, String, Result<()>) {
        let mut app = app();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let options = SessionOptions {
            format,
            output: None,
        };
        let result = run_session(&mut app, Cursor::new(script), &mut out, &mut err, &options);
        (
            app,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            result,
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add eggs".parse::<Command>().unwrap(), Command::Add("eggs".to_string()));
        assert_eq!(
            "add  brown rice ".parse::<Command>().unwrap(),
            Command::Add(" brown rice ".to_string())
        );
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add(String::new()));
        assert_eq!("check 2".parse::<Command>().unwrap(), Command::Check(2));
        assert_eq!("DELETE 1".parse::<Command>().unwrap(), Command::Delete(1));
        assert_eq!("hide".parse::<Command>().unwrap(), Command::Hide);
        assert_eq!("list".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_rows_and_words() {
        assert!(matches!("check 0".parse::<Command>(), Err(AppError::Command(_))));
        assert!(matches!("check two".parse::<Command>(), Err(AppError::Command(_))));
        assert!(matches!("frobnicate".parse::<Command>(), Err(AppError::Command(_))));
    }

    #[test]
    fn test_console_skips_blank_lines() {
        let mut console = Console::new(Cursor::new("\n  \nadd tea\r\n\nquit"));
        assert_eq!(console.next_line().unwrap(), Some("add tea".to_string()));
        assert_eq!(console.next_line().unwrap(), Some("quit".to_string()));
        assert_eq!(console.next_line().unwrap(), None);
    }

    #[test]
    fn test_add_types_into_field_and_submits() {
        let mut app = app();
        let event = command_event(&Command::Add("eggs".to_string()), &mut app)
            .unwrap()
            .unwrap();

        assert_eq!(event, DomEvent::submit(selectors::NEW_ITEM_FORM));
        assert_eq!(app.page().field_value(&selectors::NEW_ITEM_ENTRY), "eggs");
    }

    #[test]
    fn test_row_out_of_range() {
        let mut app = app();
        let err = command_event(&Command::Check(9), &mut app).unwrap_err();
        assert_eq!(err.to_string(), "Command error: no row 9 (4 shown)");
    }

    #[test]
    fn test_row_zero_is_a_command_error() {
        let mut app = app();
        let err = command_event(&Command::Check(0), &mut app).unwrap_err();
        assert_eq!(err.to_string(), "Command error: no row 0 (4 shown)");

        let err = command_event(&Command::Delete(0), &mut app).unwrap_err();
        assert!(matches!(err, AppError::Command(_)));
        assert_eq!(app.store().len(), 4);
    }

    #[test]
    fn test_session_text_output() {
        let (app, out, err) = session("add eggs\ncheck 1\nhide\n", OutputFormat::Text);

        assert!(err.is_empty());
        assert_eq!(app.store().len(), 5);
        let last_view: Vec<&str> = out.trim_end().lines().rev().take(3).collect();
        assert_eq!(last_view, vec!["3. [ ] eggs", "2. [ ] bread", "1. [ ] oranges"]);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let (app, _out, err, result) =
            session_result("check 42\nbogus\ndelete 1\n", OutputFormat::Text);

        assert!(err.contains("no row 42"));
        assert!(err.contains("unknown command: bogus"));
        assert_eq!(app.store().len(), 3);

        let failure = result.unwrap_err();
        assert_eq!(failure.to_string(), "Command error: 2 commands failed");
        assert_eq!(failure.exit_code(), 3);
    }

    #[test]
    fn test_session_single_failure_message() {
        let (_app, _out, _err, result) = session_result("check 9\nquit\n", OutputFormat::Text);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Command error: 1 command failed"
        );
    }

    #[test]
    fn test_session_stops_at_quit() {
        let (app, _out, _err) = session("quit\nadd eggs\n", OutputFormat::Markup);
        assert_eq!(app.store().len(), 4);
    }

    #[test]
    fn test_session_json_output() {
        let (_app, out, _err) = session("json\n", OutputFormat::Markup);
        let start = out.find('{').unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(snapshot["items"].as_array().unwrap().len(), 4);
        assert_eq!(snapshot["hide_completed"], false);
    }

    #[test]
    fn test_session_blank_add_is_ignored() {
        let (app, _out, err) = session("add    \n", OutputFormat::Text);
        assert!(err.is_empty());
        assert_eq!(app.store().len(), 4);
        // Ignored submissions still re-render once
        assert_eq!(app.page().replacements(), 2);
    }
}
