use anyhow::Result;
use wordbook::BlockingDictionaryClient;
use wordbook_http::BlockingClient;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = BlockingClient::new();

    match client.fetch_word("hello", None) {
        Ok(word) => {
            println!("word: {}", word.word);
            for meaning in &word.meanings {
                for definition in &meaning.definitions {
                    println!("{}: {}", meaning.part_of_speech, definition.definition);
                }
            }
        }
        Err(error) if error.is_not_found() => {
            println!("no entry for that word, check the spelling");
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
