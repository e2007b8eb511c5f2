//! `taskpad`: terminal client for the task API.
//!
//! Shares the session, request shaping and list reconciliation with the
//! browser client through the `tasks` crate. The session lives in a JSON file
//! so consecutive invocations stay signed in.

mod storage;
mod terminal;
mod transport;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasks::actions::{self, CREATE_FAILED, DELETE_FAILED, LOAD_FAILED, PROFILE_FAILED, UPDATE_FAILED};
use tasks::{ApiClient, ApiError, AuthRequest, DEFAULT_API_BASE, SessionProvider, SessionStore, Task, TaskDraft, TaskList};
use tracing_subscriber::EnvFilter;

use crate::storage::{FileStorage, default_session_file};
use crate::terminal::{TerminalEffects, render_list, render_user};
use crate::transport::ReqwestTransport;

type CliSession = SessionProvider<FileStorage, ReqwestTransport>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `taskpad login` first")]
    NotSignedIn,
    #[error("no session file location; pass --session-file or set TASKS_SESSION_FILE")]
    NoSessionFile,
    #[error("no task with id `{0}`")]
    UnknownTask(String),
    #[error("{0}")]
    Api(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Surface the server's reason, or `fallback` when it gave none.
    fn api(err: &ApiError, fallback: &str) -> Self {
        Self::Api(err.message_or(fallback))
    }
}

#[derive(Parser, Debug)]
#[command(name = "taskpad", about = "Manage your tasks from the terminal")]
struct Cli {
    #[arg(long, env = "TASKS_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "TASKS_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TASKS_PASSWORD")]
        password: String,
    },
    /// Create an account and sign in.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "TASKS_PASSWORD")]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user, refreshed from the server.
    Whoami,
    /// List tasks, optionally filtered by a search query.
    List {
        #[arg(long, short, default_value = "")]
        query: String,
        /// Print the raw JSON array instead of the formatted list.
        #[arg(long)]
        json: bool,
    },
    /// Create a task.
    Add {
        title: String,
        #[arg(long, short, default_value = "")]
        description: String,
    },
    /// Mark a task as completed.
    Done {
        id: String,
        /// Mark it as not completed instead.
        #[arg(long)]
        undo: bool,
    },
    /// Rename a task. Prompts for the title when `--title` is absent.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a task after confirmation.
    Rm {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let session_file = cli
        .session_file
        .or_else(default_session_file)
        .ok_or(CliError::NoSessionFile)?;
    let mut session = SessionProvider::new(
        SessionStore::restore(FileStorage::open(session_file)?),
        ApiClient::new(cli.api_base, ReqwestTransport::new()?),
    );
    tracing::debug!(
        base = session.api().base_url(),
        file = %session.store().storage().path().display(),
        "session restored"
    );

    run(&mut session, cli.command).await
}

async fn run(session: &mut CliSession, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => run_auth(session, AuthRequest::Login { email, password }).await,
        Command::Signup { name, email, password } => {
            run_auth(session, AuthRequest::Signup { name, email, password }).await
        }
        Command::Logout => {
            session.logout();
            println!("Signed out");
            Ok(())
        }
        Command::Whoami => run_whoami(session).await,
        Command::List { query, json } => run_list(session, &query, json).await,
        Command::Add { title, description } => run_add(session, TaskDraft::new(title, description)).await,
        Command::Done { id, undo } => run_done(session, &id, !undo).await,
        Command::Edit { id, title } => {
            let effects = TerminalEffects::stdio().preset_answer(title);
            run_edit(session, &id, &effects).await
        }
        Command::Rm { id, yes } => {
            let effects = TerminalEffects::stdio().assume_yes(yes);
            run_rm(session, &id, &effects).await
        }
    }
}

fn require_sign_in(session: &CliSession) -> Result<(), CliError> {
    if session.is_authenticated() { Ok(()) } else { Err(CliError::NotSignedIn) }
}

async fn run_auth(session: &mut CliSession, request: AuthRequest) -> Result<(), CliError> {
    let auth = actions::authenticate(session.api(), &request)
        .await
        .map_err(|e| CliError::api(&e, request.failure_fallback()))?;
    match request {
        AuthRequest::Login { .. } => session.login(auth),
        AuthRequest::Signup { .. } => session.signup(auth),
    }
    if let Some(user) = session.user() {
        println!("Signed in as {}", render_user(user));
    }
    Ok(())
}

async fn run_whoami(session: &mut CliSession) -> Result<(), CliError> {
    require_sign_in(session)?;
    let user = actions::refresh_profile(session.api())
        .await
        .map_err(|e| CliError::api(&e, PROFILE_FAILED))?;
    println!("{}", render_user(&user));
    session.update_user(user);
    Ok(())
}

/// Current task list, as the dashboard shows it on load.
async fn fetch_list(session: &CliSession, query: &str) -> Result<TaskList, CliError> {
    require_sign_in(session)?;
    let change = actions::load_tasks(session.api(), query)
        .await
        .map_err(|e| CliError::api(&e, LOAD_FAILED))?;
    let mut list = TaskList::default();
    list.apply(change);
    Ok(list)
}

fn find_task(list: &TaskList, id: &str) -> Result<Task, CliError> {
    list.get(id).cloned().ok_or_else(|| CliError::UnknownTask(id.to_owned()))
}

async fn run_list(session: &CliSession, query: &str, json: bool) -> Result<(), CliError> {
    let list = fetch_list(session, query).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(list.as_slice())?);
    } else {
        println!("{}", render_list(&list));
    }
    Ok(())
}

async fn run_add(session: &CliSession, draft: TaskDraft) -> Result<(), CliError> {
    // Rejected before the list is fetched so a blank title sends nothing.
    let draft = draft.validated().map_err(|e| CliError::Api(e.to_owned()))?;
    let mut list = fetch_list(session, "").await?;
    let change = actions::create_task(session.api(), &draft)
        .await
        .map_err(|e| CliError::api(&e, CREATE_FAILED))?;
    list.apply(change);
    println!("{}", render_list(&list));
    Ok(())
}

async fn run_done(session: &CliSession, id: &str, completed: bool) -> Result<(), CliError> {
    let mut list = fetch_list(session, "").await?;
    let task = find_task(&list, id)?;
    if task.completed != completed {
        let change = actions::toggle_completed(session.api(), &task)
            .await
            .map_err(|e| CliError::api(&e, UPDATE_FAILED))?;
        list.apply(change);
    }
    println!("{}", render_list(&list));
    Ok(())
}

async fn run_edit<U: tasks::UiEffects>(session: &CliSession, id: &str, effects: &U) -> Result<(), CliError> {
    let mut list = fetch_list(session, "").await?;
    let task = find_task(&list, id)?;
    match actions::edit_title(session.api(), effects, &task)
        .await
        .map_err(|e| CliError::api(&e, UPDATE_FAILED))?
    {
        Some(change) => list.apply(change),
        None => println!("No changes"),
    }
    println!("{}", render_list(&list));
    Ok(())
}

async fn run_rm<U: tasks::UiEffects>(session: &CliSession, id: &str, effects: &U) -> Result<(), CliError> {
    let mut list = fetch_list(session, "").await?;
    let task = find_task(&list, id)?;
    match actions::delete_task(session.api(), effects, &task)
        .await
        .map_err(|e| CliError::api(&e, DELETE_FAILED))?
    {
        Some(change) => list.apply(change),
        None => println!("Cancelled"),
    }
    println!("{}", render_list(&list));
    Ok(())
}
