use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Helpers behind the Courier delivery app, from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the local property database
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Optional path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask the middle of an email address
    Mask {
        /// Email address to mask
        email: String,
        /// Replacement symbol (defaults to the configured mask symbol)
        #[arg(short, long)]
        symbol: Option<String>,
    },
    /// Show one page of items, continuing from an offset
    Paginate {
        /// Items to page through
        items: Vec<String>,
        /// Items per page (defaults to the configured page size)
        #[arg(short, long)]
        page_size: Option<usize>,
        /// Number of items already shown
        #[arg(long, default_value = "0")]
        from: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a random string or numeric code
    RandomString {
        /// Number of characters
        #[arg(short, long, default_value = "8")]
        length: usize,
        /// Digits only
        #[arg(long)]
        numeric: bool,
    },
    /// Print today's date shifted by a number of days
    Date {
        /// Days to add (negative goes back)
        #[arg(long, default_value = "-7", allow_hyphen_values = true)]
        days: i64,
        /// strftime format (defaults to the configured server format)
        #[arg(long)]
        format: Option<String>,
    },
    /// Translate a message key
    Translate {
        /// Message key, e.g. errorOccurred
        key: String,
        /// Locale override (en, ar)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Show or change the app locale
    Locale {
        /// Store this locale instead of showing the current one
        #[arg(long, value_name = "LOCALE")]
        set: Option<String>,
    },
    /// Read and write persisted app properties
    Prop {
        #[command(subcommand)]
        command: PropCommands,
    },
    /// Clear the stored session credentials
    SignOut,
    /// Send a password-reset code by email
    SendReset {
        /// Recipient address
        #[arg(long, value_name = "EMAIL")]
        to: String,
        /// Code to send (random 6-digit code when omitted)
        #[arg(long)]
        code: Option<String>,
        /// Print the message instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PropCommands {
    /// Print a property (empty when unset)
    Get {
        key: String,
    },
    /// Set a property
    Set {
        key: String,
        value: String,
    },
    /// Remove a property
    Remove {
        key: String,
    },
    /// List all properties
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
