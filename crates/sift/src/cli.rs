use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Answer questions from a directory of text files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a corpus
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory of documents
    pub dir: PathBuf,

    /// Number of top documents to search
    #[arg(short, long)]
    pub files: Option<usize>,

    /// Config file (defaults to <config dir>/sift/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the best matching sentences for a query
    Ask {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Query text (prompts on stdin if omitted)
        #[arg(short, long)]
        query: Option<String>,

        /// Number of sentences to print
        #[arg(short, long)]
        sentences: Option<usize>,

        /// Print files, sentences and scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank documents against a query
    Files {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Query text
        #[arg(short, long)]
        query: String,
    },

    /// Print version information
    Version,
}
