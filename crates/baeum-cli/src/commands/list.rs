use comfy_table::{ContentArrangement, Table};

use baeum_core::data;

pub fn run() -> Result<(), String> {
    let rom = data::romanization().map_err(|e| e.to_string())?;
    let vocab = data::vocabulary().map_err(|e| e.to_string())?;
    let easy = data::typing_easy().map_err(|e| e.to_string())?;
    let hard = data::typing_hard().map_err(|e| e.to_string())?;
    let tenses = data::tenses().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Drill", "Items", "Description"]);

    table.add_row(vec![
        "romanization".to_string(),
        rom.len().to_string(),
        "Type the Hangul spelling for a romanized Korean word".to_string(),
    ]);
    table.add_row(vec![
        "vocab".to_string(),
        vocab.len().to_string(),
        "Pick the Korean translation of an English word".to_string(),
    ]);
    table.add_row(vec![
        "race".to_string(),
        format!("{} easy + {} hard", easy.len(), hard.len()),
        "Transcribe full Korean sentences against the clock".to_string(),
    ]);
    table.add_row(vec![
        "tense".to_string(),
        tenses.len().to_string(),
        "Pick the verb form matching an English sentence's tense".to_string(),
    ]);

    println!("{table}");
    println!();
    println!("  Play with: baeum play <drill>");
    println!("  Study guides: baeum guide romanization | baeum guide tenses");

    Ok(())
}
