use anyhow::Result;
use wordbook::{DictionaryClient, Language};
use wordbook_http::HttpClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = HttpClient::new();

    let parser = client.fetch_parser("hello", None).await?;
    println!("word: {}", parser.word().word);
    if let Some(transcription) = parser.transcription() {
        println!("transcription: {transcription}");
    }
    for meaning in parser.meanings() {
        for definition in &meaning.definitions {
            println!("{}: {}", meaning.part_of_speech, definition.definition);
        }
    }

    let word = client.fetch_word("Olá", Some(Language::BrazilianPortuguese)).await?;
    println!("{} has {} meaning(s)", word.word, word.meanings.len());

    Ok(())
}
