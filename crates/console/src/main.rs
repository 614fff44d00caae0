// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod ops;
mod output;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use plantel_client::ApiClient;
use plantel_domain::{ActivityFilter, RosterFilter};
use plantel_session::{JsonFileStore, Session};
use tracing::info;

/// Plantel - console client for the institution admin backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend origin, e.g. `https://backend.example.com`
    #[arg(long, env = "PLANTEL_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Path to the session file
    #[arg(long, env = "PLANTEL_SESSION_FILE", default_value = "plantel-session.json")]
    session_file: PathBuf,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

/// Target state for the active-flag toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ToggleState {
    /// Activate the student.
    On,
    /// Deactivate the student (asks for confirmation).
    Off,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a session token obtained out of band
    Login {
        /// The bearer token
        #[arg(long, env = "PLANTEL_TOKEN")]
        token: String,
        /// Institution display name to remember
        #[arg(long)]
        institution: Option<String>,
        /// Institution id to remember
        #[arg(long)]
        institution_id: Option<i64>,
    },
    /// Clear the stored session
    Logout,
    /// Fetch and print the roster
    List {
        /// Grade filter (server-side)
        #[arg(long)]
        grade: Option<String>,
        /// Course filter (server-side)
        #[arg(long)]
        course: Option<String>,
        /// Jornada filter (server-side): mañana, tarde or completa
        #[arg(long)]
        jornada: Option<String>,
        /// Name prefix query (client-side, accent-insensitive)
        #[arg(long, default_value = "")]
        query: String,
        /// Show only deactivated students
        #[arg(long, conflicts_with = "all")]
        inactive: bool,
        /// Show active and deactivated students alike
        #[arg(long)]
        all: bool,
        /// Zero-based page
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Create a student
    Create {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Edit a student; unspecified fields keep their current value
    Edit {
        /// The student id
        id: i64,
        #[command(flatten)]
        form: FormOverrides,
    },
    /// Activate or deactivate a student
    Toggle {
        /// The student id
        id: i64,
        /// The target state
        state: ToggleState,
    },
    /// Delete a student (asks for confirmation)
    Delete {
        /// The student id
        id: i64,
    },
    /// Bulk-import students from a CSV or Excel export
    Import {
        /// Path to the file
        file: PathBuf,
    },
    /// Print stored notifications, or mark them read
    Notifications {
        /// Mark one notification read
        #[arg(long, conflicts_with = "mark_all_read")]
        mark_read: Option<i64>,
        /// Mark every notification read
        #[arg(long)]
        mark_all_read: bool,
    },
    /// Stream live notifications until interrupted
    Watch,
    /// Print the institution profile
    Profile,
    /// Change the account password
    ChangePassword {
        /// The current password
        #[arg(long)]
        current: String,
        /// The new password
        #[arg(long)]
        new: String,
    },
}

/// Full student form, required the same way the create screen requires it.
#[derive(clap::Args, Debug)]
struct FormArgs {
    /// Document type code: CC, TI, CE, RC or PPT
    #[arg(long)]
    document_type: String,
    /// Document number; separators are stripped before validation
    #[arg(long)]
    document_number: String,
    /// First name(s)
    #[arg(long)]
    first_name: String,
    /// Last name(s)
    #[arg(long)]
    last_name: String,
    /// Grade
    #[arg(long, default_value = "")]
    grade: String,
    /// Course section
    #[arg(long, default_value = "")]
    course: String,
    /// Jornada: mañana, tarde or completa
    #[arg(long, default_value = "")]
    jornada: String,
    /// Contact email
    #[arg(long)]
    email: String,
    /// Contact phone
    #[arg(long, default_value = "")]
    phone: String,
    /// Postal address
    #[arg(long, default_value = "")]
    address: String,
}

/// Partial student form for edits.
#[derive(clap::Args, Debug)]
struct FormOverrides {
    /// Document type code: CC, TI, CE, RC or PPT
    #[arg(long)]
    document_type: Option<String>,
    /// Document number; separators are stripped before validation
    #[arg(long)]
    document_number: Option<String>,
    /// First name(s)
    #[arg(long)]
    first_name: Option<String>,
    /// Last name(s)
    #[arg(long)]
    last_name: Option<String>,
    /// Grade
    #[arg(long)]
    grade: Option<String>,
    /// Course section
    #[arg(long)]
    course: Option<String>,
    /// Jornada: mañana, tarde or completa
    #[arg(long)]
    jornada: Option<String>,
    /// Contact email
    #[arg(long)]
    email: Option<String>,
    /// Contact phone
    #[arg(long)]
    phone: Option<String>,
    /// Postal address
    #[arg(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let store: JsonFileStore = JsonFileStore::new(args.session_file.clone());
    let mut session: Session = Session::hydrate(&store)?;

    // Login and logout only touch the session file.
    match &args.command {
        Command::Login {
            token,
            institution,
            institution_id,
        } => {
            session.set_token(token.clone());
            if let Some(name) = institution {
                session.set_institution_name(name.clone());
            }
            if let Some(id) = institution_id {
                session.set_institution_id(*id);
            }
            session.persist(&store)?;
            info!("session stored");
            println!("Sesión guardada.");
            return Ok(());
        }
        Command::Logout => {
            session.clear(&store)?;
            println!("Sesión cerrada.");
            return Ok(());
        }
        _ => {}
    }

    let Some(token) = session.token() else {
        return Err("no stored session; run `plantel login` first".into());
    };
    let client: ApiClient = ApiClient::new(&args.api_url, token)?;

    let result: Result<(), plantel_client::ClientError> = dispatch(args.command, &client, args.yes).await?;

    // A 401 means the token is no longer honored; drop it so the next
    // invocation starts from a clean login.
    if let Err(plantel_client::ClientError::Unauthorized) = &result {
        session.clear(&store)?;
        return Err("session expired; it has been cleared, log in again".into());
    }
    result?;
    Ok(())
}

/// Runs one authenticated subcommand.
///
/// The outer `Result` carries local failures (bad filter flags, unreadable
/// import file); the inner one carries the operation's outcome so the
/// caller can react to a 401 before reporting it.
async fn dispatch(
    command: Command,
    client: &ApiClient,
    yes: bool,
) -> Result<Result<(), plantel_client::ClientError>, Box<dyn std::error::Error>> {
    let result: Result<(), plantel_client::ClientError> = match command {
        Command::Login { .. } | Command::Logout => unreachable!("handled before dispatch"),
        Command::List {
            grade,
            course,
            jornada,
            query,
            inactive,
            all,
            page,
        } => {
            let filter: RosterFilter =
                build_filter(grade, course, jornada, query, inactive, all, page)?;
            ops::list(client, &filter).await
        }
        Command::Create { form } => {
            let form: plantel_domain::StudentForm = form.into();
            ops::create(client, &form).await
        }
        Command::Edit { id, form } => ops::edit(client, id, &form).await,
        Command::Toggle { id, state } => {
            ops::toggle(client, id, state == ToggleState::On, yes).await
        }
        Command::Delete { id } => ops::delete(client, id, yes).await,
        Command::Import { file } => {
            let bytes: Vec<u8> = std::fs::read(&file)?;
            let file_name: String = file.file_name().map_or_else(
                || "import.csv".to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            ops::import(client, &file_name, &bytes).await
        }
        Command::Notifications {
            mark_read,
            mark_all_read,
        } => ops::notifications(client, mark_read, mark_all_read).await,
        Command::Watch => ops::watch(client).await,
        Command::Profile => ops::profile(client).await,
        Command::ChangePassword { current, new } => {
            ops::change_password(client, &current, &new).await
        }
    };
    Ok(result)
}

/// Builds the roster filter from the `list` flags.
fn build_filter(
    grade: Option<String>,
    course: Option<String>,
    jornada: Option<String>,
    query: String,
    inactive: bool,
    all: bool,
    page: usize,
) -> Result<RosterFilter, plantel_domain::DomainError> {
    let jornada: Option<plantel_domain::Jornada> =
        jornada.as_deref().map(str::parse).transpose()?;
    let activity: ActivityFilter = if all {
        ActivityFilter::All
    } else if inactive {
        ActivityFilter::Inactive
    } else {
        ActivityFilter::Active
    };
    Ok(RosterFilter {
        grade,
        course,
        jornada,
        query,
        activity,
        page,
    })
}

impl From<FormArgs> for plantel_domain::StudentForm {
    fn from(args: FormArgs) -> Self {
        Self {
            document_type: args.document_type,
            document_number: args.document_number,
            first_name: args.first_name,
            last_name: args.last_name,
            grade: args.grade,
            course: args.course,
            jornada: args.jornada,
            email: args.email,
            phone: args.phone,
            address: args.address,
        }
    }
}
