use std::path::Path;
use tempfile::TempDir;

pub const AI_TXT: &str = "\
Artificial intelligence is the study of intelligent agents.
An intelligent agent perceives its environment and takes actions that maximize its chance of success.
Machine learning is a subset of artificial intelligence.";

pub const PYTHON_TXT: &str = "\
Python is a high-level programming language. It was created by Guido van Rossum and first released in 1991.
Python's design philosophy emphasizes code readability.";

pub const NEURAL_TXT: &str = "\
Neural networks are computing systems inspired by biological neural networks.
A neural network is based on a collection of connected units called artificial neurons.
Backpropagation computes the gradient of the loss function with respect to the weights.";

pub fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

/// Temp directory holding a small three-document corpus plus a non-text file
pub fn sample_corpus_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_corpus(
        temp.path(),
        &[
            ("ai.txt", AI_TXT),
            ("python.txt", PYTHON_TXT),
            ("neural_networks.txt", NEURAL_TXT),
            ("README.md", "Python python python, not part of the corpus."),
        ],
    );
    temp
}
