//! Expense Tracker Command Line Interface

pub mod command;
pub mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List expenses and the running total
    List {},

    /// Add a new expense
    Add {
        /// Expense name
        #[arg(short, long)]
        name: Option<String>,

        /// Amount, greater than zero
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// One of groceries, bills, entertainment, transport
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an expense. Omitted fields keep their current value
    Edit {
        /// Id of the expense to edit
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Id of the expense to delete
        id: String,
    },

    /// Add, edit and delete expenses interactively
    Shell {},

    /// Write a default configuration file
    Init {},
}
