use commands::{parse_command, Command};
use oxford_dictionary::{Client, OxfordError, OxfordResponse, Sense, StatusCode};
use settings::Settings;
use tracing_subscriber::EnvFilter;
use utilities::input;

mod commands;
mod settings;
mod utilities;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::from_env()?;
    let client = Client::with_config(&settings.app_id, &settings.app_key, settings.client)?;
    loop {
        let Some(line) = input(">> ")? else {
            println!();
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        let response = match command {
            Command::Exit => {
                break;
            }
            Command::Define(word) => client.entry(&word),
            Command::Info(word) => client.word_info(&word),
            Command::Thesaurus(word) => client.thesaurus(&word),
            Command::Sentences(word) => client.sentences(&word),
            Command::Translate {
                source_lang,
                target_lang,
                word,
            } => client.translation(&word, &source_lang, &target_lang),
            Command::Usage(usage) => {
                println!("Usage: {usage}");
                continue;
            }
            Command::Unknown(command) => {
                println!("Unknown command {command}.");
                continue;
            }
        };
        match response {
            Ok(response) => print_response(&response),
            Err(error) => report_error(&error),
        }
    }
    Ok(())
}

fn report_error(error: &OxfordError) {
    if error.status() == Some(StatusCode::NOT_FOUND) {
        println!("Couldn't find the word you were looking for.");
    } else {
        println!("Encountered an error while looking up the word: {error}");
    }
}

fn print_response(response: &OxfordResponse) {
    if response.results.is_empty() {
        println!("No results for '{}'.", response.query);
        return;
    }
    for result in &response.results {
        println!("Showing results for '{}':", result.word);
        for lexical_entry in &result.lexical_entries {
            println!("    {}:", lexical_entry.lexical_category.text);
            for entry in &lexical_entry.entries {
                if let Some(pronunciation) = entry.pronunciations.first() {
                    if !pronunciation.phonetic_spelling.is_empty() {
                        println!("      /{}/", pronunciation.phonetic_spelling);
                    }
                }
                for sense in &entry.senses {
                    print_sense(sense, 2);
                }
                for etymology in &entry.etymologies {
                    println!("      origin: {etymology}");
                }
            }
            for sentence in &lexical_entry.sentences {
                println!("      sentence: {}", sentence.text);
            }
        }
    }
    let synonyms = response.synonyms().collect::<Vec<&str>>();
    if !synonyms.is_empty() {
        println!("  synonyms: {}", synonyms.join(", "));
    }
    let antonyms = response.antonyms().collect::<Vec<&str>>();
    if !antonyms.is_empty() {
        println!("  antonyms: {}", antonyms.join(", "));
    }
}

fn print_sense(sense: &Sense, depth: usize) {
    let indent = "    ".repeat(depth);
    for definition in &sense.definitions {
        println!("{indent}{definition}");
    }
    for example in &sense.examples {
        println!("{indent}  example: {}", example.text);
    }
    if !sense.translations.is_empty() {
        let translations = sense
            .translations
            .iter()
            .map(|translation| &translation.text[..])
            .collect::<Vec<&str>>();
        println!("{indent}  translations: {}", translations.join(", "));
    }
    for subsense in &sense.subsenses {
        print_sense(subsense, depth + 1);
    }
}
