use comfy_table::{ContentArrangement, Table};

pub fn run(topic: &str) -> Result<(), String> {
    match topic.to_lowercase().as_str() {
        "romanization" | "rom" | "hangul" => {
            romanization();
            Ok(())
        }
        "tenses" | "tense" => {
            tenses();
            Ok(())
        }
        other => Err(format!(
            "unknown guide topic '{other}' (use: romanization, tenses)"
        )),
    }
}

fn romanization() {
    println!(
        "\
  Romanization -> Hangul

  Romanization represents Korean words with the Latin alphabet. The goal of
  the drill is to type the Hangul (Korean script) for the romanized hint.

  Quick tips:
  - Each romanized syllable maps to one Hangul block.
  - Watch for double consonants ('kk', 'tt') and vowel sounds ('eo', 'ae').

  Common equivalents:"
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Romanization", "Hangul", "Example"]);
    for (rom, hangul, example) in [
        ("a", "아", "가 (ga)"),
        ("eo", "어", "서 (seo)"),
        ("o", "오", "도 (do)"),
        ("u", "우", "수 (su)"),
        ("eu", "으", "그 (geu)"),
        ("i", "이", "미 (mi)"),
        ("ae", "애", "새 (sae)"),
        ("e", "에", "네 (ne)"),
        ("k/g", "ㄱ", "고 (go)"),
        ("n", "ㄴ", "나 (na)"),
        ("d/t", "ㄷ", "다 (da)"),
        ("r/l", "ㄹ", "라 (ra)"),
        ("m", "ㅁ", "마 (ma)"),
        ("b/p", "ㅂ", "바 (ba)"),
        ("s", "ㅅ", "사 (sa)"),
        ("j", "ㅈ", "자 (ja)"),
        ("ch", "ㅊ", "차 (cha)"),
        ("k", "ㅋ", "카 (ka)"),
        ("t", "ㅌ", "타 (ta)"),
        ("p", "ㅍ", "파 (pa)"),
        ("h", "ㅎ", "하 (ha)"),
    ] {
        table.add_row(vec![rom, hangul, example]);
    }
    println!("{table}");
}

fn tenses() {
    println!(
        "\
  Korean Verb Tenses

  Korean verbs change with when the action happens.

  Present (현재형):  verb stem + 아요 / 어요
    Example: 먹어요 (I eat), 가요 (I go)

  Past (과거형):     verb stem + 았어요 / 었어요
    Example: 먹었어요 (I ate), 갔어요 (I went)

  Future (미래형):   verb stem + ㄹ 거예요 / 을 거예요
    Example: 먹을 거예요 (I will eat), 갈 거예요 (I will go)

  Look carefully at the verb endings to choose the correct form."
    );
}
