//! CLI module for the contact-book binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

use crate::book::ContactBook;
use crate::config::{BookConfig, DEFAULT_CONFIG_FILE};
use crate::models::{ContactFields, ContactId};
use crate::storage::filesystem::FileSystemStorageBackend;
use crate::store::ContactStore;
use crate::validation::{Feedback, FieldKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Command-line contact book
#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about = "Manage contacts stored in a JSON file")]
pub struct Cli {
    /// Configuration file (defaults to ./contact-book.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the contacts file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Contacts file name inside the data directory
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a contact; all fields but the middle name are required
    Create(FieldArgs),
    /// Update a contact; only the fields given are changed
    Update {
        id: ContactId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a contact
    Delete { id: ContactId },
    /// List all contacts
    List,
    /// Show one contact as JSON
    Show { id: ContactId },
    /// Validate a single field value the way the form does while typing
    Check {
        /// first_name, last_name, address, email or phone
        field: FieldKind,
        #[arg(default_value = "")]
        value: String,
        /// Report nothing, as right after a successful submit
        #[arg(long)]
        suppress: bool,
    },
}

/// Contact form fields
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long = "first", default_value = "")]
    pub first_name: String,
    #[arg(long = "middle", default_value = "")]
    pub middle_name: String,
    #[arg(long = "last", default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
}

impl From<FieldArgs> for ContactFields {
    fn from(args: FieldArgs) -> Self {
        ContactFields {
            first_name: args.first_name,
            middle_name: args.middle_name,
            last_name: args.last_name,
            address: args.address,
            email: args.email,
            phone: args.phone,
        }
    }
}

impl Cli {
    /// Resolve configuration: config file first, then command-line overrides
    pub fn resolve_config(&self) -> Result<BookConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => BookConfig::load(path)?,
            None => BookConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
        };
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir);
        }
        if let Some(file) = &self.file {
            config = config.with_file_name(file);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Open the contact book described by `config`
pub fn open_book(config: &BookConfig) -> Result<ContactBook<FileSystemStorageBackend>, CliError> {
    if config.data_dir.exists() && !config.data_dir.is_dir() {
        return Err(CliError::InvalidDataDir(config.data_dir.clone()));
    }
    let backend = FileSystemStorageBackend::new(&config.data_dir);
    Ok(ContactBook::new(ContactStore::with_file(
        backend,
        config.file_name.clone(),
    )))
}

/// Run a parsed command line, returning the text to print on success
pub fn run(cli: Cli) -> Result<String, CliError> {
    if let Command::Check {
        field,
        value,
        suppress,
    } = &cli.command
    {
        let feedback = if *suppress {
            Feedback::Suppress
        } else {
            Feedback::Show
        };
        let (status, accepted) = commands::check::handle_check(*field, value, feedback);
        return if accepted {
            Ok(status)
        } else {
            Err(CliError::Rejected(status))
        };
    }

    let config = cli.resolve_config()?;
    debug!("Using contacts file {}", config.contacts_path().display());
    let book = open_book(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(async {
        book.store().init().await?;
        match cli.command {
            Command::Create(fields) => commands::contact::handle_create(&book, fields.into()).await,
            Command::Update { id, fields } => {
                commands::contact::handle_update(&book, id, fields.into()).await
            }
            Command::Delete { id } => commands::contact::handle_delete(&book, id).await,
            Command::List => commands::contact::handle_list(&book).await,
            Command::Show { id } => commands::contact::handle_show(&book, id).await,
            Command::Check { .. } => Ok(String::new()),
        }
    })
}
