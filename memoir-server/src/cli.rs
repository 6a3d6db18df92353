use memoir_server::commands::reset_password::ResetPasswordArgs;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memoir")]
#[command(about = "Self-hosted memo service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the request-serving process (default)
    Serve,

    /// Reset password for a supplied user id, username or email address
    ResetPassword(ResetPasswordArgs),

    /// Show version information
    Version,
}
