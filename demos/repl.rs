use std::{
    env,
    io::{self, Write},
    path::Path,
};
use symspell_core::{Dictionary, RankingPolicy};

const MAX_EDIT_DISTANCE: u8 = 2;
const MAX_SUGGESTIONS: usize = 5;

fn main() -> io::Result<()> {
    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "words_100k.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let mut dict = Dictionary::create(MAX_EDIT_DISTANCE, 7).expect("invalid dictionary config");
    symspell_core::io::load_dictionary_file(&mut dict, &dict_path, 0, 1)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", dict_path, e));

    println!(
        "SymSpell REPL - dictionary: {}\n:type text, :q to quit",
        dict_path
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for token in input.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            let suggestions = dict.lookup(&word, MAX_EDIT_DISTANCE, MAX_SUGGESTIONS, RankingPolicy::SortedTopK);
            if !suggestions.is_empty() {
                let words: Vec<_> = suggestions.into_iter().map(|s| s.term).collect();
                println!("  {}  ->  {}", word, words.join(", "));
            }
        }
    }
    Ok(())
}
