use crate::cli::CorpusArgs;
use crate::commands::load::{load_pipeline, resolve_config};
use sift_core::{FileScore, tokenize_query};
use std::io::Write;

fn write_ranking<W: Write>(out: &mut W, ranked: &[FileScore]) -> std::io::Result<()> {
    for scored in ranked {
        writeln!(out, "{:>10.4}  {}", scored.score, scored.id)?;
    }
    Ok(())
}

/// Print the top `file_matches` documents by TF-IDF score
pub fn run(args: &CorpusArgs, query: &str) -> anyhow::Result<()> {
    let config = resolve_config(args, None)?;
    let pipeline = load_pipeline(&args.dir, &config)?;

    let mut ranked = pipeline.rank_files(&tokenize_query(query));
    ranked.truncate(config.file_matches);

    write_ranking(&mut std::io::stdout().lock(), &ranked)?;
    Ok(())
}
