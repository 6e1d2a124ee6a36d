use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use baeum_core::data;
use baeum_drills::{
    CharDiff, DrillConfig, RaceMode, RomanizationDrill, TenseDrill, TypeRace, VocabQuiz,
};

use super::{Drill, bank_or_builtin};

pub fn run(drill: &str, seed: u64, mode: &str, file: Option<&Path>) -> Result<(), String> {
    let config = DrillConfig::default().with_seed(seed);

    match Drill::parse(drill)? {
        Drill::Romanization => {
            let bank = bank_or_builtin(file, data::romanization)?;
            play_romanization(RomanizationDrill::new(bank, config))
        }
        Drill::Vocab => {
            let bank = bank_or_builtin(file, data::vocabulary)?;
            play_vocab(VocabQuiz::new(bank, config))
        }
        Drill::Race => {
            let mode = RaceMode::parse(mode).map_err(|e| e.to_string())?;
            let (easy, hard) = match (mode, file) {
                (RaceMode::Easy, Some(path)) => (
                    bank_or_builtin(Some(path), data::typing_easy)?,
                    bank_or_builtin(None, data::typing_hard)?,
                ),
                (RaceMode::Hard, Some(path)) => (
                    bank_or_builtin(None, data::typing_easy)?,
                    bank_or_builtin(Some(path), data::typing_hard)?,
                ),
                (_, None) => (
                    bank_or_builtin(None, data::typing_easy)?,
                    bank_or_builtin(None, data::typing_hard)?,
                ),
            };
            let mut race = TypeRace::new(easy, hard, config);
            race.set_mode(mode);
            play_race(race)
        }
        Drill::Tense => {
            let bank = bank_or_builtin(file, data::tenses)?;
            play_tense(TenseDrill::new(bank, config))
        }
    }
}

fn play_romanization(mut drill: RomanizationDrill) -> Result<(), String> {
    println!("  {} Romanization -> Hangul", "Starting".bold());
    println!("  Type the Hangul spelling for the romanized word.");
    println!("  Commands: :next, :score, :history, :quit\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("  Romanized word: {}", drill.current().romanized.bold());
        let Some(line) = prompt(&mut reader)? else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            match trimmed {
                ":quit" | ":q" => break,
                ":next" | ":n" => drill.next(),
                ":score" => println!("  {}\n", drill.score()),
                ":history" => println!("{}", drill.history().export_text()),
                other => println!("  {}\n", format!("unknown command: {other}").yellow()),
            }
            continue;
        }

        let feedback = drill.submit(&line);
        if feedback.correct {
            println!(
                "  {} Meaning: {}\n",
                "Correct!".green().bold(),
                drill.current().gloss
            );
        } else {
            println!(
                "  {} Correct answer: {}\n",
                "Incorrect.".red().bold(),
                feedback.expected
            );
        }
    }

    println!("\n  Final score: {}", drill.score());
    Ok(())
}

fn play_vocab(mut quiz: VocabQuiz) -> Result<(), String> {
    println!("  {} Vocabulary Quiz", "Starting".bold());
    println!("  Pick the Korean translation by number.");
    println!("  Commands: :next, :score, :history, :quit\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("  English word: {}", quiz.current().prompt.bold());
        for (i, choice) in quiz.choices().iter().enumerate() {
            println!("    {}. {choice}", i + 1);
        }
        let Some(line) = prompt(&mut reader)? else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            match trimmed {
                ":quit" | ":q" => break,
                ":next" | ":n" => quiz.next(),
                ":score" => println!("  {}\n", quiz.score()),
                ":history" => println!("{}", quiz.history().export_text()),
                other => println!("  {}\n", format!("unknown command: {other}").yellow()),
            }
            continue;
        }

        // A selection is a precondition: anything that is not a listed number
        // is ignored without grading.
        let selection = match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!(
                    "  {}\n",
                    format!("pick a number between 1 and {}", quiz.choices().len()).yellow()
                );
                continue;
            }
        };

        match quiz.submit(selection) {
            Ok(feedback) => {
                if feedback.correct {
                    println!(
                        "  {} {} means {}\n",
                        "Correct!".green().bold(),
                        quiz.current().prompt,
                        feedback.submitted
                    );
                } else {
                    println!(
                        "  {} Correct answer: {}\n",
                        "Incorrect.".red().bold(),
                        feedback.expected
                    );
                }
            }
            Err(e) => println!("  {}\n", e.to_string().yellow()),
        }
    }

    println!("\n  Final score: {}", quiz.score());
    Ok(())
}

fn play_race(mut race: TypeRace) -> Result<(), String> {
    println!("  {} Korean TypeRacer", "Starting".bold());
    println!("  Type the sentence exactly. The timer starts when it appears.");
    println!("  Commands: :next, :mode easy|hard, :score, :history, :quit\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("  [{}] {}", race.mode(), race.current().hangul.bold());
        let Some(line) = prompt(&mut reader)? else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            match trimmed.split_once(' ').unwrap_or((trimmed, "")) {
                (":quit" | ":q", _) => break,
                (":next" | ":n", _) => race.next(),
                (":score", _) => print_race_score(&race),
                (":history", _) => println!("{}", race.history().export_text()),
                (":mode", arg) => match RaceMode::parse(arg) {
                    Ok(mode) => race.set_mode(mode),
                    Err(e) => println!("  {}\n", e.to_string().yellow()),
                },
                (other, _) => {
                    println!("  {}\n", format!("unknown command: {other}").yellow());
                }
            }
            continue;
        }

        // An empty submission produces no grading event at all.
        let Some(feedback) = race.submit(&line) else {
            continue;
        };

        if feedback.correct {
            println!(
                "  {} You typed it in {:.2} seconds.",
                "Correct!".green().bold(),
                feedback.elapsed_secs
            );
            println!("  Translation: {}", race.current().translation);
            if feedback.new_best {
                println!(
                    "  {} New best {} mode time: {:.2} seconds",
                    "*".yellow().bold(),
                    race.mode(),
                    feedback.elapsed_secs
                );
            }
            println!();
        } else {
            println!(
                "  {} Check your spelling and spacing.",
                "Incorrect.".red().bold()
            );
            if let Some(diff) = &feedback.diff {
                println!("  {}", render_diff(diff));
            }
            println!("  Translation: {}\n", race.current().translation);
        }
    }

    println!();
    print_race_score(&race);
    Ok(())
}

fn play_tense(mut drill: TenseDrill) -> Result<(), String> {
    println!("  {} Tense Selector", "Starting".bold());
    println!("  Pick the verb form matching the English sentence's tense.");
    println!("  Commands: :next, :score, :history, :quit\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("  English sentence: {}", drill.current().prompt.bold());
        for (i, choice) in drill.choices().iter().enumerate() {
            println!("    {}. {choice}", i + 1);
        }
        let Some(line) = prompt(&mut reader)? else {
            break;
        };

        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            match trimmed {
                ":quit" | ":q" => break,
                ":next" | ":n" => drill.next(),
                ":score" => println!("  {}\n", drill.score()),
                ":history" => println!("{}", drill.history().export_text()),
                other => println!("  {}\n", format!("unknown command: {other}").yellow()),
            }
            continue;
        }

        let selection = match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!(
                    "  {}\n",
                    format!("pick a number between 1 and {}", drill.choices().len()).yellow()
                );
                continue;
            }
        };

        match drill.submit(selection) {
            Ok(feedback) => {
                if feedback.correct {
                    println!(
                        "  {} {} is the right form.\n",
                        "Correct!".green().bold(),
                        feedback.submitted
                    );
                } else {
                    println!(
                        "  {} Correct answer was: {}\n",
                        "Incorrect.".red().bold(),
                        feedback.expected
                    );
                }
            }
            Err(e) => println!("  {}\n", e.to_string().yellow()),
        }
    }

    println!("\n  Final score: {}", drill.score());
    Ok(())
}

fn print_race_score(race: &TypeRace) {
    println!("  Score: {}", race.score());
    for mode in [RaceMode::Easy, RaceMode::Hard] {
        if let Some(best) = race.best_time(mode) {
            println!("  Best {mode} mode time: {best:.2} seconds");
        }
    }
    println!();
}

/// Render a character diff as the expected sentence with mistakes colored.
fn render_diff(diff: &[CharDiff]) -> String {
    let mut out = String::new();
    for entry in diff {
        match entry {
            CharDiff::Match(c) => out.push(*c),
            CharDiff::Mismatch {
                expected: Some(c), ..
            } => out.push_str(&c.to_string().red().bold().to_string()),
            // Extra characters the user typed past the end are not shown;
            // the rendered line is always the expected sentence.
            CharDiff::Mismatch { expected: None, .. } => {}
        }
    }
    out
}

/// Print the input marker and read one line. `None` means end of input.
fn prompt(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Ok(Some(line))
        }
        Err(e) => Err(e.to_string()),
    }
}
