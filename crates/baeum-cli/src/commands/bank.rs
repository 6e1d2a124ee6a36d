use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use baeum_core::data;
use baeum_drills::RaceMode;

use super::{Drill, bank_or_builtin};

pub fn run(drill: &str, mode: &str, file: Option<&Path>) -> Result<(), String> {
    match Drill::parse(drill)? {
        Drill::Romanization => romanization(file),
        Drill::Vocab => vocabulary(file),
        Drill::Race => race(mode, file),
        Drill::Tense => tenses(file),
    }
}

fn romanization(file: Option<&Path>) -> Result<(), String> {
    let bank = bank_or_builtin(file, data::romanization)?;

    let mut table = new_table(vec!["Romanized", "Hangul", "Gloss"]);
    for pair in bank.items() {
        table.add_row(vec![&pair.romanized, &pair.hangul, &pair.gloss]);
    }

    println!("{table}");
    println!();
    println!("  {} word pairs", bank.len());
    Ok(())
}

fn vocabulary(file: Option<&Path>) -> Result<(), String> {
    let bank = bank_or_builtin(file, data::vocabulary)?;

    let mut table = new_table(vec!["Prompt", "Choices", "Answer"]);
    for question in bank.items() {
        table.add_row(vec![
            question.prompt.clone(),
            question.choices.join(" / "),
            question.answer.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} questions", bank.len());
    Ok(())
}

fn race(mode: &str, file: Option<&Path>) -> Result<(), String> {
    let mode = RaceMode::parse(mode).map_err(|e| e.to_string())?;
    let builtin = match mode {
        RaceMode::Easy => data::typing_easy,
        RaceMode::Hard => data::typing_hard,
    };
    let bank = bank_or_builtin(file, builtin)?;

    let mut table = new_table(vec!["Sentence", "Translation"]);
    for sentence in bank.items() {
        table.add_row(vec![&sentence.hangul, &sentence.translation]);
    }

    println!("{table}");
    println!();
    println!("  {} sentences ({mode} mode)", bank.len());
    Ok(())
}

fn tenses(file: Option<&Path>) -> Result<(), String> {
    let bank = bank_or_builtin(file, data::tenses)?;

    let mut table = new_table(vec!["Prompt", "Choices", "Answer"]);
    for question in bank.items() {
        table.add_row(vec![
            question.prompt.clone(),
            question.choices.join(" / "),
            question.answer.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} questions", bank.len());
    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}
