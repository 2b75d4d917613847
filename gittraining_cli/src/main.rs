use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;

mod commands;

use commands::CommandContext;
use gittraining_core::{
    CourseOptions, DiskFileOps, GithubStore, ReqwestTransport, TokioExecutor,
};

#[derive(Parser)]
#[command(name = "gittraining")]
#[command(version, about = "Manages the git repos of students taking a training course", long_about = None)]
struct Cli {
    /// Course file to use instead of course.json
    #[arg(long, global = true, value_name = "FILE")]
    course: Option<String>,

    /// Email list file to use instead of the one named in the course file
    #[arg(long, global = true, value_name = "FILE")]
    email_file: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commands to manipulate course details
    #[command(subcommand)]
    Course(CourseCommands),

    /// Commands to manipulate the email list
    #[command(subcommand)]
    Emails(EmailsCommands),

    /// Commands to create and report on git repos for the students taking the course
    #[command(subcommand)]
    Git(GitCommands),

    /// Commands to check the local git repo, mostly for debugging
    #[command(subcommand)]
    Local(LocalCommands),
}

#[derive(Subcommand)]
enum CourseCommands {
    /// Create a blank course file and emails file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// List the details of the course
    List,
}

#[derive(Subcommand)]
enum EmailsCommands {
    /// List the emails with their derived repo names
    List,
    /// Add an email to the list (a duplicate is a no-op)
    Add { email: String },
    /// Remove an email from the list (an absent email is a no-op)
    Remove { email: String },
}

#[derive(Subcommand)]
enum GitCommands {
    /// List all the forks of the root repo
    Listforks,
    /// Fork the root repo once per student
    Fork,
    /// Report the status of each student's repo
    Status,
}

#[derive(Subcommand)]
enum LocalCommands {
    /// Report the current branch
    Branch,
    /// Report the current repo
    Repo,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging level follows the debug flag; RUST_LOG still wins.
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let context = CommandContext {
        file_ops: Arc::new(DiskFileOps),
        store: Arc::new(GithubStore::new(ReqwestTransport::new(), TokioExecutor)),
        opts: CourseOptions {
            course: cli.course,
            email_file: cli.email_file,
            emails: None,
        },
    };

    if let Err(e) = run(cli.command, &context).await {
        eprintln!("{} {e:#}", "error:".red());
        std::process::exit(1);
    }
}

async fn run(command: Commands, context: &CommandContext) -> anyhow::Result<()> {
    match command {
        Commands::Course(CourseCommands::Init { force }) => {
            commands::course::init(context, force).await
        }
        Commands::Course(CourseCommands::List) => commands::course::list(context).await,
        Commands::Emails(EmailsCommands::List) => commands::emails::list(context).await,
        Commands::Emails(EmailsCommands::Add { email }) => {
            commands::emails::add(context, &email).await
        }
        Commands::Emails(EmailsCommands::Remove { email }) => {
            commands::emails::remove(context, &email).await
        }
        Commands::Git(GitCommands::Listforks) => commands::git::list_forks(context).await,
        Commands::Git(GitCommands::Fork) => commands::git::fork(context).await,
        Commands::Git(GitCommands::Status) => commands::git::status(context).await,
        Commands::Local(LocalCommands::Branch) => commands::local::branch(context).await,
        Commands::Local(LocalCommands::Repo) => commands::local::repo(context).await,
    }
}
