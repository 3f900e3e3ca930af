//! Interactive form session: a line-oriented stand-in for the attendance
//! form. Each input line is one user action dispatched to the controller.

use crate::cli::commands::{open_controller, parse_status, render_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::{FormController, FormState, Notice};
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use crate::ui::messages::{ask_confirmation_from, error, header, info, success};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list                 show the table
  select <ROW>         copy table row <ROW> (the # column) into the form
  name <TEXT>          set the student name
  class <TEXT>         set the class
  date <YYYY-MM-DD>    set the date
  status <STATUS>      Present, Excused, Sick or Absent
  show                 show the form
  add | update | delete | reset
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    List,
    Select(usize),
    Name(String),
    Class(String),
    Date(String),
    Status(AttendanceStatus),
    Show,
    Add,
    Update,
    Delete,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> AppResult<Option<FormAction>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    let action = match cmd.to_lowercase().as_str() {
        "list" | "ls" => FormAction::List,
        "select" | "sel" => {
            let row: usize = arg
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::InvalidInput(format!("'{}' is not a row number", arg)))?;
            FormAction::Select(row - 1)
        }
        "name" => FormAction::Name(arg.to_string()),
        "class" => FormAction::Class(arg.to_string()),
        "date" => FormAction::Date(arg.to_string()),
        "status" => FormAction::Status(parse_status(arg)?),
        "show" => FormAction::Show,
        "add" => FormAction::Add,
        "update" => FormAction::Update,
        "delete" | "del" => FormAction::Delete,
        "reset" => FormAction::Reset,
        "help" | "?" => FormAction::Help,
        "quit" | "exit" | "q" => FormAction::Quit,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{}', type 'help'",
                other
            )));
        }
    };

    Ok(Some(action))
}

fn print_form(ctl: &FormController) {
    let f = ctl.form();
    let selected = match ctl.state() {
        FormState::Idle => "none".to_string(),
        FormState::RowSelected { index, .. } => format!("row {}", index + 1),
    };
    println!("  ID     : {}", f.id);
    println!("  Name   : {}", f.name);
    println!("  Class  : {}", f.class_name);
    println!("  Date   : {}", f.date);
    println!("  Status : {}", f.status);
    println!("  (selected: {})", selected);
}

fn report(err: &AppError) {
    match err {
        AppError::Validation(v) => {
            error(v);
            info(format!("Fix the '{}' field and try again.", v.field()));
        }
        AppError::NoRowSelected => error("Select a row first (select <ROW>)."),
        other => error(other),
    }
}

/// Read one line; `None` on end of input.
fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Drive the controller from `input` until `quit` or end of input.
/// Recoverable errors are reported and the session continues.
pub fn run_session(
    ctl: &mut FormController,
    cfg: &Config,
    input: &mut dyn BufRead,
) -> AppResult<()> {
    loop {
        print!("form> ");
        let _ = io::stdout().flush();

        let Some(line) = read_line(input)? else {
            break;
        };

        let action = match parse_line(&line) {
            Ok(Some(a)) => a,
            Ok(None) => continue,
            Err(e) => {
                report(&e);
                continue;
            }
        };

        let result: AppResult<Option<Notice>> = match action {
            FormAction::List => {
                print!("{}", render_view(ctl.view(), cfg));
                Ok(None)
            }
            FormAction::Select(index) => ctl.select_row(index).map(|_| {
                print_form(ctl);
                None
            }),
            FormAction::Name(v) => {
                ctl.set_name(&v);
                Ok(None)
            }
            FormAction::Class(v) => {
                ctl.set_class(&v);
                Ok(None)
            }
            FormAction::Date(v) => {
                ctl.set_date(&v);
                Ok(None)
            }
            FormAction::Status(s) => {
                ctl.set_status(s);
                Ok(None)
            }
            FormAction::Show => {
                print_form(ctl);
                Ok(None)
            }
            FormAction::Add => ctl.add().map(Some),
            FormAction::Update => ctl.update().map(Some),
            FormAction::Delete => {
                let ask = cfg.confirm_delete;
                let mut confirm = |prompt: &str| !ask || ask_confirmation_from(input, prompt);
                ctl.delete(&mut confirm).map(Some)
            }
            FormAction::Reset => {
                ctl.reset();
                Ok(None)
            }
            FormAction::Help => {
                println!("{}", HELP);
                Ok(None)
            }
            FormAction::Quit => break,
        };

        match result {
            Ok(Some(Notice::Cancelled)) => info(Notice::Cancelled),
            Ok(Some(notice)) => success(notice),
            Ok(None) => {}
            Err(e) => report(&e),
        }
    }

    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Form = cmd {
        let mut ctl = open_controller(cfg)?;

        header("rAttendance form");
        println!("{}\n", HELP);
        print!("{}", render_view(ctl.view(), cfg));

        let stdin = io::stdin();
        let mut input = stdin.lock();
        run_session(&mut ctl, cfg, &mut input)?;
    }

    Ok(())
}
