use criterion::{Criterion, criterion_group, criterion_main};
use symspell_core::{Dictionary, RankingPolicy};

fn bench_spell_check_string(c: &mut Criterion) {
    let dict_file = "words_100k.txt";
    let max_edit_distance = 2;
    let max_suggestions = 5;

    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.".to_string();

    let mut dict = Dictionary::create(max_edit_distance, 7).unwrap();
    symspell_core::io::load_dictionary_file(&mut dict, dict_file, 0, 1)
        .expect("failed to load dictionary file");

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    c.bench_function("spell_check_words", |b| {
        b.iter(|| {
            for word in &words {
                let _ = dict.lookup(word, max_edit_distance, max_suggestions, RankingPolicy::SortedTopK);
            }
        })
    });
}

criterion_group!(benches, bench_spell_check_string);
criterion_main!(benches);
