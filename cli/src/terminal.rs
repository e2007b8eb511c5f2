//! Terminal dialogs and list rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TerminalEffects` answers the confirm/prompt questions that the browser
//! puts in `window.confirm` / `window.prompt`. Answers given as flags
//! (`--yes`, `--title`) are used without touching the terminal.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local, TimeZone};
use tasks::{Task, TaskList, UiEffects, User};

pub struct TerminalEffects<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    assume_yes: bool,
    preset_answer: Option<String>,
}

impl TerminalEffects<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalEffects<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            assume_yes: false,
            preset_answer: None,
        }
    }

    /// Confirm every question without asking.
    #[must_use]
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Answer the next prompt with `answer` when one is given.
    #[must_use]
    pub fn preset_answer(mut self, answer: Option<String>) -> Self {
        self.preset_answer = answer;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Print `question` and read one line. `None` on end of input.
    fn ask(&self, question: &str) -> Option<String> {
        {
            let mut out = self.output.borrow_mut();
            if write!(out, "{question}").and_then(|()| out.flush()).is_err() {
                return None;
            }
        }
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        }
    }
}

impl<R: BufRead, W: Write> UiEffects for TerminalEffects<R, W> {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.ask(&format!("{message} [y/N] "))
            .is_some_and(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        if let Some(answer) = &self.preset_answer {
            return Some(answer.clone());
        }
        let answer = self.ask(&format!("{message} [{default}]: "))?;
        if answer.is_empty() { Some(default.to_owned()) } else { Some(answer) }
    }
}

/// Server timestamp as `YYYY-MM-DD HH:MM` in `tz`; unparseable input is shown
/// as sent.
fn created_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(timestamp.trim()).map_or_else(
        |_| timestamp.trim().to_owned(),
        |at| at.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
    )
}

pub fn render_task(task: &Task) -> String {
    render_task_in(task, &Local)
}

fn render_task_in<Tz: TimeZone>(task: &Task, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let mark = if task.completed { 'x' } else { ' ' };
    let mut out = format!("[{mark}] {}  {}", task.id, task.title);
    if let Some(description) = task.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str("\n      ");
        out.push_str(description);
    }
    if !task.created_at.is_empty() {
        out.push_str("\n      Created ");
        out.push_str(&created_in(&task.created_at, tz));
    }
    out
}

pub fn render_list(list: &TaskList) -> String {
    let mut out = format!("Your Tasks ({})", list.len());
    if list.is_empty() {
        out.push_str("\nNo tasks yet");
    } else {
        out.push('\n');
        out.push_str(&list.count_label());
    }
    for task in list {
        out.push('\n');
        out.push_str(&render_task(task));
    }
    out
}

pub fn render_user(user: &User) -> String {
    if user.email.is_empty() {
        user.display_name().to_owned()
    } else {
        format!("{} <{}>", user.display_name(), user.email)
    }
}
