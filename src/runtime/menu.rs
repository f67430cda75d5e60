//! Line-oriented menu
//!
//! Each input line is one menu action, e.g. `open`, `save out.json`, `new-tool`.
//! Actions become messages for the update loop; the layout is printed again
//! whenever an update asks for a redraw.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::messages::{AppMsg, LayoutMsg, Msg};
use crate::view;

use super::app::App;

pub const HELP: &str = "\
commands:
  open [PATH]   open a layout (picker when PATH is omitted)
  save [PATH]   save the layout (picker when PATH is omitted)
  close         close the layout
  new-tool      add a tool to the right tool dock
  show          print the layout
  help          print this help
  quit          exit";

/// A parsed menu line
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    Dispatch(Msg),
    Show,
    Help,
}

/// Parse one input line; blank lines yield `Ok(None)`
pub fn parse_line(line: &str) -> Result<Option<MenuAction>, String> {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let action = match (word, arg) {
        ("", _) => return Ok(None),
        ("open", None) => MenuAction::Dispatch(Msg::Layout(LayoutMsg::OpenLayout)),
        ("open", Some(path)) => {
            MenuAction::Dispatch(Msg::Layout(LayoutMsg::OpenLayoutFile(PathBuf::from(path))))
        }
        ("save", None) => MenuAction::Dispatch(Msg::Layout(LayoutMsg::SaveLayout)),
        ("save", Some(path)) => {
            MenuAction::Dispatch(Msg::Layout(LayoutMsg::SaveLayoutFile(PathBuf::from(path))))
        }
        ("close", None) => MenuAction::Dispatch(Msg::Layout(LayoutMsg::CloseLayout)),
        ("new-tool", None) => MenuAction::Dispatch(Msg::Layout(LayoutMsg::NewTool)),
        ("quit" | "exit", None) => MenuAction::Dispatch(Msg::App(AppMsg::Quit)),
        ("show", None) => MenuAction::Show,
        ("help" | "?", None) => MenuAction::Help,
        ("close" | "new-tool" | "quit" | "exit" | "show" | "help" | "?", Some(_)) => {
            return Err(format!("'{}' takes no argument", word))
        }
        (other, _) => return Err(format!("Unknown command: {}", other)),
    };
    Ok(Some(action))
}

/// Read menu lines from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{}", view::render(app.model()))?;

    for line in input.lines() {
        let line = line?;
        let redraw = match parse_line(&line) {
            Ok(None) => false,
            Ok(Some(MenuAction::Show)) => true,
            Ok(Some(MenuAction::Help)) => {
                writeln!(output, "{}", HELP)?;
                false
            }
            Ok(Some(MenuAction::Dispatch(msg))) => {
                let redraw = app.dispatch(msg);
                app.wait_idle() || redraw
            }
            Err(e) => {
                writeln!(output, "{}", e)?;
                false
            }
        };

        if app.should_quit() {
            break;
        }
        if redraw {
            write!(output, "{}", view::render(app.model()))?;
        }
        output.flush()?;
    }
    Ok(())
}
