//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursenotes")]
#[command(about = "Course, textbook and reading notes organizer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Add or list courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Add or list textbooks of a course
    Textbook {
        #[command(subcommand)]
        action: TextbookAction,
    },

    /// Add or list original text chunks of a textbook
    Text {
        #[command(subcommand)]
        action: TextAction,
    },

    /// Add or list notes on a text chunk
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show every text chunk of a textbook with its notes
    Show {
        #[arg(long)]
        course: u64,

        #[arg(long)]
        textbook: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CourseAction {
    /// Add a course
    Add { name: String },

    /// List all courses
    List,
}

#[derive(Subcommand, Debug)]
pub enum TextbookAction {
    /// Add a textbook to a course
    Add {
        /// Course id
        #[arg(long)]
        course: Option<u64>,

        name: String,
    },

    /// List the textbooks of a course
    List {
        #[arg(long)]
        course: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum TextAction {
    /// Add a chunk of original text
    Add {
        #[arg(long)]
        course: Option<u64>,

        #[arg(long)]
        textbook: Option<u64>,

        content: String,
    },

    /// List text chunks, ordered by id
    List {
        #[arg(long)]
        course: u64,

        #[arg(long)]
        textbook: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a note to a text chunk
    Add {
        #[arg(long)]
        course: Option<u64>,

        #[arg(long)]
        textbook: Option<u64>,

        /// Text chunk id
        #[arg(long)]
        text: Option<u64>,

        note: String,
    },

    /// List notes on a text chunk, oldest first
    List {
        #[arg(long)]
        course: u64,

        #[arg(long)]
        textbook: u64,

        #[arg(long)]
        text: u64,
    },
}
