use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::clipboard;
use crate::config::{AppConfig, STORE_ENV};
use crate::password;
use crate::shell::{Shell, ShellConfig};
use crate::store::CredentialStore;

#[derive(Parser, Debug)]
#[command(name = "passbook")]
#[command(version)]
#[command(about = "Generates passwords and keeps website logins in a local file", long_about = None)]
pub struct Cli {
    /// Path of the credential store file
    #[arg(long, global = true, env = STORE_ENV)]
    pub store: Option<PathBuf>,

    /// Record debug detail in the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not copy generated passwords to the clipboard
    #[arg(long, global = true)]
    pub no_copy: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print a freshly generated password.
    #[command(alias = "gen")]
    Generate,
    /// Save the email and password for a website.
    #[command(alias = "add")]
    Save {
        /// Website the credentials belong to
        website: String,
        /// Email or username
        email: String,
        /// Password; generated when omitted
        password: Option<String>,
    },
    /// Show the email and password saved for a website.
    #[command(alias = "search")]
    Find {
        /// Website to look up
        website: String,
    },
    /// List all saved websites.
    #[command(alias = "ls")]
    List,
    /// Start the interactive shell.
    Shell,
}

/// Prints the clipboard outcome for a generated password on stderr, keeping
/// stdout to the password itself.
fn copy_generated(password: &str, copy: bool) {
    if copy {
        eprintln!("{}", clipboard::copy_with_notice(password));
    }
}

/// Runs a single command; with no command the interactive shell starts.
///
/// `copy` controls whether generated passwords go to the clipboard.
pub fn run(
    command: Option<Commands>,
    store: &CredentialStore,
    config: &AppConfig,
    copy: bool,
) -> Result<()> {
    match command.unwrap_or(Commands::Shell) {
        Commands::Generate => {
            let pw = password::generate()?;
            println!("{}", pw);
            copy_generated(&pw, copy);
        }
        Commands::Save {
            website,
            email,
            password: given,
        } => {
            let (pw, generated) = match given {
                Some(pw) => (pw, false),
                None => (password::generate()?, true),
            };
            store.save(&website, &email, &pw)?;
            if generated {
                println!("Saved '{}' with password {}", website, pw);
                copy_generated(&pw, copy);
            } else {
                println!("Saved '{}'", website);
            }
        }
        Commands::Find { website } => {
            let record = store.find(&website)?;
            println!("Email: {}\nPassword: {}", record.email, record.password);
        }
        Commands::List => {
            let websites = store.websites()?;
            if websites.is_empty() {
                println!("No websites saved.");
            }
            for website in websites {
                println!("{}", website);
            }
        }
        Commands::Shell => {
            let shell = Shell::with_config(ShellConfig {
                history: config.history.clone(),
                show_welcome: true,
                copy_generated: copy,
            });
            shell.run(store)?;
        }
    }
    Ok(())
}
