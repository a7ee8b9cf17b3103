pub fn run() -> anyhow::Result<()> {
    println!("sift {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF question answering over plain-text documents");
    Ok(())
}
