use crate::cli::CorpusArgs;
use crate::commands::load::{load_pipeline, resolve_config};
use sift_core::Answer;
use std::io::{BufRead, Write};

/// Show the prompt and read one line of query text
fn prompt_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<String> {
    write!(output, "Query: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn write_answer<W: Write>(out: &mut W, answer: &Answer, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, answer)?;
        writeln!(out)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{}", sentence)?;
        }
    }
    Ok(())
}

pub fn run(
    args: &CorpusArgs,
    query: Option<&str>,
    sentences: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let config = resolve_config(args, sentences)?;
    let pipeline = load_pipeline(&args.dir, &config)?;

    let query = match query {
        Some(q) => q.to_string(),
        None => prompt_query(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let answer = pipeline.answer(&query);
    tracing::info!(
        query = ?answer.query,
        files = ?answer.files.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
        "answered"
    );

    write_answer(&mut std::io::stdout().lock(), &answer, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::{Corpus, Pipeline, RankConfig};

    fn sample_answer() -> Answer {
        let mut corpus = Corpus::new();
        corpus.insert(
            "ai.txt",
            "Artificial intelligence is the study of agents. Agents perceive their environment."
                .to_string(),
        );
        corpus.insert("python.txt", "Python is a programming language.".to_string());
        Pipeline::new(corpus, RankConfig::default()).answer("what do agents perceive")
    }

    #[test]
    fn test_prompt_query() {
        let mut input = std::io::Cursor::new("what is python?\r\n");
        let mut output = Vec::new();
        let query = prompt_query(&mut input, &mut output).unwrap();
        assert_eq!(query, "what is python?");
        assert_eq!(output, b"Query: ");
    }

    #[test]
    fn test_prompt_query_eof() {
        let mut input = std::io::Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_query(&mut input, &mut output).unwrap(), "");
    }

    #[test]
    fn test_write_answer_plain() {
        let mut out = Vec::new();
        write_answer(&mut out, &sample_answer(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Agents perceive their environment.\n"
        );
    }

    #[test]
    fn test_write_answer_json() {
        let mut out = Vec::new();
        write_answer(&mut out, &sample_answer(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files"][0]["id"], "ai.txt");
        assert_eq!(
            value["sentences"][0]["sentence"],
            "Agents perceive their environment."
        );
        assert!(value["sentences"][0]["idf_sum"].as_f64().unwrap() > 0.0);
    }
}
