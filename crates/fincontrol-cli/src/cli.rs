use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fincontrol_core::{TransactionId, TransactionKind, VERSION};

/// Fincontrol - a personal finance ledger for income and expenses
#[derive(Parser)]
#[command(name = "fincontrol")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the ledger data
    #[arg(short, long, global = true, env = "FINCONTROL_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Config file path
    #[arg(long, global = true, env = "FINCONTROL_CONFIG")]
    pub config: Option<String>,

    /// Display locale for amounts and dates (pt-BR, en-US)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII table borders and badges
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// What the transaction was for
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Amount (non-negative; `.` or `,` as decimal separator)
    #[arg(short, long)]
    pub amount: String,

    /// Category used for grouping and filtering
    #[arg(short, long)]
    pub category: String,

    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Transaction type (income or expense)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "expense")]
    pub kind: TransactionKind,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show transactions in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Only show this transaction type (income or expense)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<TransactionKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `categories` command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID
    #[arg(value_name = "ID")]
    pub id: TransactionId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (json, jsonl)
    #[arg(long, default_value = "json")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// List transactions, most recent first
    List(ListArgs),

    /// Show total income, total expenses, and balance
    Summary(SummaryArgs),

    /// List the categories in use
    Categories(CategoriesArgs),

    /// Delete a transaction
    Delete(DeleteArgs),

    /// Delete all transactions
    Clear(ClearArgs),

    /// Add example transactions to an empty ledger
    Seed,

    /// Export the ledger in its storage layout
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
