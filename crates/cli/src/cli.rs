use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ideas")]
#[command(about = "Submit and track improvement ideas")]
pub struct Cli {
    /// Base URL of the ideas server, e.g. "http://localhost:5000"
    #[arg(long, global = true, env = "IDEAS_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new account
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign in with phone number and password
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        /// Keep the identity across invocations
        #[arg(long)]
        remember: bool,
    },
    /// Forget the remembered identity
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Submit an idea as the signed-in account
    Submit {
        #[arg(long)]
        text: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        module: String,
        #[arg(long)]
        section: String,
    },
    /// List ideas submitted by the signed-in account
    Mine,
    /// List every idea with its submitter
    Ideas,
    /// Move an idea to a new status
    Status {
        id: i64,
        /// pending, approved, rejected, in-progress or completed
        status: String,
    },
    /// List registered accounts
    Users,
    /// Print the suggested project, module and section tags
    Options,
}
