//! Built-in Korean datasets for the four drills.
//!
//! Word lists are authored data: they are kept exactly as curated, including
//! beginner-level duplicates, and validated once when the bank is built.

use crate::bank::Bank;
use crate::error::CoreResult;
use crate::item::{TenseQuestion, TypingSentence, VocabQuestion, WordPair};

/// Romanized word, Hangul spelling, English gloss.
const ROMANIZATION: &[(&str, &str, &str)] = &[
    ("annyeong", "안녕", "Hi / Hello"),
    ("gamsahamnida", "감사합니다", "Thank you"),
    ("saranghae", "사랑해", "I love you"),
    ("jal jinae", "잘 지내", "Doing well"),
    ("chingu", "친구", "Friend"),
    ("eomma", "엄마", "Mother"),
    ("appa", "아빠", "Father"),
    ("hangugeo", "한국어", "Korean language"),
    ("mashisseoyo", "맛있어요", "It's delicious"),
    ("bogosipeo", "보고싶어", "I miss you"),
    ("gaja", "가자", "Let's go"),
    ("meogeoyo", "먹어요", "Eat / Eating"),
    ("isseoyo", "있어요", "There is / I have"),
    ("eodieyo", "어디에요", "Where is it?"),
    ("jal isseo", "잘 있어", "Stay well"),
    ("saengil chukhahae", "생일 축하해", "Happy birthday"),
    ("jal ja", "잘 자", "Sleep well"),
    ("annyeonghaseyo", "안녕하세요", "Hello (formal)"),
    ("byeonhada", "변하다", "To change"),
    ("sseuda", "쓰다", "To write / To use"),
    ("juseyo", "주세요", "Please give me"),
    ("gamsahaeyo", "감사해요", "Thanks (polite)"),
    ("je ireumeun", "제 이름은", "My name is..."),
    ("jal meokkesseumnida", "잘 먹겠습니다", "I will eat well"),
    ("jal meogeosseumnida", "잘 먹었습니다", "I ate well"),
    ("chogiyo", "저기요", "Excuse me"),
    ("juseyo", "주세요", "Please"),
    ("aneyo", "아니요", "No"),
    ("ne", "네", "Yes"),
    ("mianhamnida", "미안합니다", "Sorry"),
    ("sillyehapnida", "실례합니다", "Excuse me (formal)"),
    ("oneul", "오늘", "Today"),
    ("naeil", "내일", "Tomorrow"),
    ("eoneu", "어느", "Which"),
    ("eodiseo", "어디서", "Where (from)"),
    ("mwo", "뭐", "What"),
    ("eotteoke", "어떻게", "How"),
    ("wa", "와", "And (casual)"),
    ("geurigo", "그리고", "And (formal)"),
    ("ttatteuthae", "따뜻해", "It's warm"),
    ("chuwo", "추워", "It's cold"),
    ("tteugeoun", "뜨거운", "Hot"),
    ("sigan", "시간", "Time"),
    ("sigan isseo", "시간 있어", "Do you have time?"),
    ("pyeonhage", "편하게", "Comfortably"),
    ("cheoncheonhi", "천천히", "Slowly"),
    ("ppalli", "빨리", "Quickly"),
    ("jeoneun", "저는", "I am..."),
    ("dangsin", "당신", "You"),
    ("geunyeo", "그녀", "She"),
    ("geu", "그", "That"),
];

/// English prompt, four Korean choices in authored order, correct choice.
const VOCABULARY: &[(&str, [&str; 4], &str)] = &[
    ("Thank you", ["감사합니다", "사랑해", "친구", "잘 지내"], "감사합니다"),
    ("Friend", ["엄마", "친구", "아빠", "한국어"], "친구"),
    ("Mother", ["엄마", "아빠", "친구", "안녕"], "엄마"),
    ("Father", ["사랑해", "감사합니다", "아빠", "친구"], "아빠"),
    ("Korean language", ["맛있어요", "보고싶어", "한국어", "잘 지내"], "한국어"),
    ("It's delicious", ["맛있어요", "먹어요", "있어요", "어디에요"], "맛있어요"),
    ("I miss you", ["가자", "맛있어요", "보고싶어", "안녕하세요"], "보고싶어"),
    ("Let's go", ["가자", "먹어요", "사랑해", "안녕"], "가자"),
    ("Where is it?", ["있어요", "어디에요", "가자", "잘 자"], "어디에요"),
    ("Goodbye (stay well)", ["잘 자", "잘 있어", "안녕", "친구"], "잘 있어"),
    ("Happy birthday", ["잘 자", "잘 있어", "생일 축하해", "감사합니다"], "생일 축하해"),
    ("Sleep well", ["잘 자", "잘 지내", "친구", "감사합니다"], "잘 자"),
    ("Hello (formal)", ["감사합니다", "안녕하세요", "사랑해", "가자"], "안녕하세요"),
    ("To change", ["변하다", "쓰다", "맛있어요", "친구"], "변하다"),
    ("To write / To use", ["쓰다", "가자", "친구", "감사합니다"], "쓰다"),
    ("Please give me", ["주세요", "미안합니다", "네", "아니요"], "주세요"),
    ("Thanks (polite)", ["감사해요", "감사합니다", "사랑해", "어디에요"], "감사해요"),
    ("My name is...", ["제 이름은", "어디에요", "잘 있어", "사랑해"], "제 이름은"),
    ("I will eat well", ["잘 먹겠습니다", "잘 먹었습니다", "먹어요", "친구"], "잘 먹겠습니다"),
    ("I ate well", ["잘 먹겠습니다", "잘 먹었습니다", "맛있어요", "감사합니다"], "잘 먹었습니다"),
    ("Excuse me", ["저기요", "어디에요", "감사합니다", "잘 자"], "저기요"),
    ("No", ["네", "아니요", "감사합니다", "친구"], "아니요"),
    ("Yes", ["네", "아니요", "감사합니다", "사랑해"], "네"),
    ("Sorry", ["미안합니다", "감사합니다", "친구", "잘 지내"], "미안합니다"),
    ("Excuse me (formal)", ["실례합니다", "감사합니다", "잘 있어", "잘 자"], "실례합니다"),
    ("Today", ["오늘", "내일", "어디에요", "가자"], "오늘"),
    ("Tomorrow", ["내일", "오늘", "감사합니다", "잘 지내"], "내일"),
    ("Which", ["어느", "뭐", "어디에요", "감사합니다"], "어느"),
    ("What", ["뭐", "어느", "감사합니다", "친구"], "뭐"),
    ("How", ["어떻게", "어디에요", "감사합니다", "친구"], "어떻게"),
    ("And (casual)", ["와", "그리고", "맛있어요", "잘 자"], "와"),
    ("And (formal)", ["그리고", "와", "감사합니다", "친구"], "그리고"),
    ("It's warm", ["따뜻해", "추워", "뜨거운", "감사합니다"], "따뜻해"),
    ("It's cold", ["추워", "따뜻해", "뜨거운", "친구"], "추워"),
    ("Hot", ["뜨거운", "추워", "맛있어요", "친구"], "뜨거운"),
    ("Time", ["시간", "어디에요", "감사합니다", "친구"], "시간"),
    ("Do you have time?", ["시간 있어", "시간", "어디에요", "친구"], "시간 있어"),
    ("Comfortably", ["편하게", "천천히", "빨리", "감사합니다"], "편하게"),
    ("Slowly", ["천천히", "편하게", "빨리", "잘 자"], "천천히"),
    ("Quickly", ["빨리", "편하게", "천천히", "잘 있어"], "빨리"),
    ("I am...", ["저는", "당신", "그녀", "그"], "저는"),
    ("You", ["당신", "저는", "그녀", "그"], "당신"),
    ("She", ["그녀", "당신", "저는", "그"], "그녀"),
    ("He", ["그", "그녀", "당신", "저는"], "그"),
    ("Food", ["음식", "친구", "학교", "감사합니다"], "음식"),
    ("School", ["학교", "음식", "친구", "사랑해"], "학교"),
    ("Water", ["물", "학교", "음식", "친구"], "물"),
    ("Book", ["책", "음악", "학교", "친구"], "책"),
    ("Music", ["음악", "책", "학교", "친구"], "음악"),
];

/// Single-sentence transcriptions for easy mode.
const TYPING_EASY: &[(&str, &str)] = &[
    ("오늘 날씨가 정말 좋아요.", "The weather is really nice today."),
    ("저는 한국어를 공부하고 있어요.", "I am studying Korean."),
    ("내일은 친구를 만날 거예요.", "I will meet a friend tomorrow."),
    ("이 음식은 정말 맛있어요.", "This food is really delicious."),
    ("지금 어디에 가고 있어요?", "Where are you going now?"),
    ("저는 서울에 살고 있어요.", "I live in Seoul."),
    ("학교에 가야 해요.", "I have to go to school."),
    ("커피를 마시고 싶어요.", "I want to drink coffee."),
    ("좋은 하루 보내세요.", "Have a good day."),
    ("오늘도 수고했어요.", "You worked hard today too."),
    ("운동을 하고 싶어요.", "I want to exercise."),
    ("책을 읽고 있어요.", "I am reading a book."),
    ("음악을 듣고 있어요.", "I am listening to music."),
    ("집에 가고 싶어요.", "I want to go home."),
    ("영화를 보고 싶어요.", "I want to watch a movie."),
    ("어제는 정말 추웠어요.", "It was really cold yesterday."),
    ("새로운 친구를 사귀었어요.", "I made a new friend."),
    ("저는 매일 아침에 운동해요.", "I exercise every morning."),
    ("오늘은 숙제가 많아요.", "I have a lot of homework today."),
    ("가족과 시간을 보내고 싶어요.", "I want to spend time with my family."),
    ("저녁에 공원에 갔어요.", "I went to the park in the evening."),
    ("주말에 바다를 보러 갔어요.", "I went to see the sea on the weekend."),
    ("한국 음식을 좋아해요.", "I like Korean food."),
    ("생일 파티에 갔어요.", "I went to a birthday party."),
    ("새로운 직장을 찾고 있어요.", "I am looking for a new job."),
    ("요즘 너무 바빠요.", "I am very busy these days."),
    ("오늘은 일찍 일어났어요.", "I woke up early today."),
    ("비가 와서 집에 있었어요.", "It rained so I stayed at home."),
    ("여름 방학이 기다려져요.", "I am looking forward to summer vacation."),
    ("운전하는 것을 배우고 있어요.", "I am learning how to drive."),
];

/// Three-sentence paragraphs for hard mode.
const TYPING_HARD: &[(&str, &str)] = &[
    (
        "오늘은 정말 바빴어요. 회사에서 회의가 많았어요. 그래서 점심도 늦게 먹었어요.",
        "Today was really busy. There were many meetings at work. So I ate lunch late.",
    ),
    (
        "주말에 여행을 갔어요. 친구들과 바다를 보러 갔어요. 날씨가 정말 좋았어요.",
        "I went on a trip over the weekend. I went to see the ocean with friends. The weather was really nice.",
    ),
    (
        "어제는 비가 많이 왔어요. 우산을 안 가져와서 많이 젖었어요. 그래서 감기에 걸렸어요.",
        "It rained a lot yesterday. I didn't bring an umbrella and got really wet. So I caught a cold.",
    ),
    (
        "오늘 아침에 운동을 했어요. 조깅을 하고 스트레칭을 했어요. 몸이 상쾌했어요.",
        "I exercised this morning. I went jogging and did some stretching. My body felt refreshed.",
    ),
    (
        "저는 새로운 취미를 시작했어요. 그림 그리기를 배우고 있어요. 정말 재미있어요.",
        "I started a new hobby. I am learning to draw. It's really fun.",
    ),
    (
        "이번 주말에는 영화를 볼 거예요. 가족과 함께 영화관에 갈 거예요. 팝콘도 먹을 거예요.",
        "I will watch a movie this weekend. I will go to the movie theater with my family. We will eat popcorn too.",
    ),
    (
        "오늘은 친구 생일이에요. 우리는 맛있는 음식을 먹을 거예요. 그리고 노래방에 갈 거예요.",
        "Today is my friend's birthday. We will eat delicious food. And we will go to karaoke.",
    ),
    (
        "어제 새로운 책을 샀어요. 오늘 아침에 조금 읽었어요. 이야기 내용이 정말 흥미로워요.",
        "I bought a new book yesterday. I read a little this morning. The story is really interesting.",
    ),
    (
        "학교에서 시험을 봤어요. 시험이 생각보다 쉬웠어요. 좋은 점수를 받을 것 같아요.",
        "I took a test at school. The test was easier than I thought. I think I will get a good score.",
    ),
    (
        "이번 여름에 한국에 갈 거예요. 친구들을 만나고 맛있는 음식을 먹을 거예요. 그리고 여러 곳을 여행할 거예요.",
        "I will go to Korea this summer. I will meet friends and eat delicious food. And I will travel to many places.",
    ),
];

/// English sentence, three verb forms in authored order, correct form.
const TENSES: &[(&str, [&str; 3], &str)] = &[
    ("I eat rice.", ["먹어요", "먹었습니다", "먹을 거예요"], "먹어요"),
    ("I ate rice.", ["먹어요", "먹었습니다", "먹을 거예요"], "먹었습니다"),
    ("I will eat rice.", ["먹어요", "먹었습니다", "먹을 거예요"], "먹을 거예요"),
    ("I study Korean.", ["공부해요", "공부했어요", "공부할 거예요"], "공부해요"),
    ("I studied Korean.", ["공부해요", "공부했어요", "공부할 거예요"], "공부했어요"),
    ("I will study Korean.", ["공부해요", "공부했어요", "공부할 거예요"], "공부할 거예요"),
    ("I meet a friend.", ["만나요", "만났어요", "만날 거예요"], "만나요"),
    ("I met a friend.", ["만나요", "만났어요", "만날 거예요"], "만났어요"),
    ("I will meet a friend.", ["만나요", "만났어요", "만날 거예요"], "만날 거예요"),
    ("I go to school.", ["가요", "갔어요", "갈 거예요"], "가요"),
    ("I went to school.", ["가요", "갔어요", "갈 거예요"], "갔어요"),
    ("I will go to school.", ["가요", "갔어요", "갈 거예요"], "갈 거예요"),
    ("I drink coffee.", ["마셔요", "마셨어요", "마실 거예요"], "마셔요"),
    ("I drank coffee.", ["마셔요", "마셨어요", "마실 거예요"], "마셨어요"),
    ("I will drink coffee.", ["마셔요", "마셨어요", "마실 거예요"], "마실 거예요"),
    ("I buy a book.", ["사요", "샀어요", "살 거예요"], "사요"),
    ("I bought a book.", ["사요", "샀어요", "살 거예요"], "샀어요"),
    ("I will buy a book.", ["사요", "샀어요", "살 거예요"], "살 거예요"),
    ("I sleep early.", ["일찍 자요", "일찍 잤어요", "일찍 잘 거예요"], "일찍 자요"),
    ("I slept early.", ["일찍 자요", "일찍 잤어요", "일찍 잘 거예요"], "일찍 잤어요"),
    ("I will sleep early.", ["일찍 자요", "일찍 잤어요", "일찍 잘 거예요"], "일찍 잘 거예요"),
    ("I watch a movie.", ["영화 봐요", "영화 봤어요", "영화 볼 거예요"], "영화 봐요"),
    ("I watched a movie.", ["영화 봐요", "영화 봤어요", "영화 볼 거예요"], "영화 봤어요"),
    ("I will watch a movie.", ["영화 봐요", "영화 봤어요", "영화 볼 거예요"], "영화 볼 거예요"),
    (
        "I walk in the park.",
        ["공원에서 걸어요", "공원에서 걸었어요", "공원에서 걸을 거예요"],
        "공원에서 걸어요",
    ),
    (
        "I walked in the park.",
        ["공원에서 걸어요", "공원에서 걸었어요", "공원에서 걸을 거예요"],
        "공원에서 걸었어요",
    ),
    (
        "I will walk in the park.",
        ["공원에서 걸어요", "공원에서 걸었어요", "공원에서 걸을 거예요"],
        "공원에서 걸을 거예요",
    ),
];

/// The built-in romanization bank.
pub fn romanization() -> CoreResult<Bank<WordPair>> {
    Bank::new(
        ROMANIZATION
            .iter()
            .map(|&(romanized, hangul, gloss)| WordPair {
                romanized: romanized.to_string(),
                hangul: hangul.to_string(),
                gloss: gloss.to_string(),
            })
            .collect(),
    )
}

/// The built-in vocabulary bank.
pub fn vocabulary() -> CoreResult<Bank<VocabQuestion>> {
    Bank::new(
        VOCABULARY
            .iter()
            .map(|&(prompt, choices, answer)| VocabQuestion {
                prompt: prompt.to_string(),
                choices: choices.iter().map(|c| (*c).to_string()).collect(),
                answer: answer.to_string(),
            })
            .collect(),
    )
}

/// The built-in easy-mode typing bank (single sentences).
pub fn typing_easy() -> CoreResult<Bank<TypingSentence>> {
    typing_bank(TYPING_EASY)
}

/// The built-in hard-mode typing bank (three-sentence paragraphs).
pub fn typing_hard() -> CoreResult<Bank<TypingSentence>> {
    typing_bank(TYPING_HARD)
}

/// The built-in verb-tense bank.
pub fn tenses() -> CoreResult<Bank<TenseQuestion>> {
    Bank::new(
        TENSES
            .iter()
            .map(|&(prompt, choices, answer)| TenseQuestion {
                prompt: prompt.to_string(),
                choices: choices.iter().map(|c| (*c).to_string()).collect(),
                answer: answer.to_string(),
            })
            .collect(),
    )
}

fn typing_bank(entries: &[(&str, &str)]) -> CoreResult<Bank<TypingSentence>> {
    Bank::new(
        entries
            .iter()
            .map(|&(hangul, translation)| TypingSentence {
                hangul: hangul.to_string(),
                translation: translation.to_string(),
            })
            .collect(),
    )
}
