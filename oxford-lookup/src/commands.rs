use crate::utilities::rest_of_line;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Define(String),
    Info(String),
    Thesaurus(String),
    Sentences(String),
    Translate {
        source_lang: String,
        target_lang: String,
        word: String,
    },
    Usage(&'static str),
    Unknown(String),
}

/// Parses one prompt line. Returns `None` for a blank line.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut command_parts = line.trim().split_ascii_whitespace();
    let command = command_parts.next()?;
    let command = match command {
        "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Exit,
        "define" | "entry" => Command::Define(rest_of_line(command_parts)),
        "info" | "word" => Command::Info(rest_of_line(command_parts)),
        "thesaurus" | "synonyms" => Command::Thesaurus(rest_of_line(command_parts)),
        "sentences" | "examples" => Command::Sentences(rest_of_line(command_parts)),
        "translate" => match (command_parts.next(), command_parts.next()) {
            (Some(source_lang), Some(target_lang)) => {
                let word = rest_of_line(command_parts);
                if word.is_empty() {
                    Command::Usage("translate <source> <target> <word>")
                } else {
                    Command::Translate {
                        source_lang: source_lang.to_owned(),
                        target_lang: target_lang.to_owned(),
                        word,
                    }
                }
            }
            _ => Command::Usage("translate <source> <target> <word>"),
        },
        other => Command::Unknown(other.to_owned()),
    };
    Some(command)
}
