use crate::core::question_store::QuestionStore;
use crate::core::Question;
use crate::utils::error::Result;

/// 難度 1..=5 對應的獎金
pub const MONEY_VALUES: [u32; 5] = [100, 200, 300, 400, 500];

type Entry = (&'static str, &'static str);

const TRENDING_POP_QUIZ: [Entry; 5] = [
    (
        "Complete this famous line: \"Babad na babad na 'ko dito oh. Baka pwede mo naman ____________. Anong pwede, tama na nga.\"",
        "Hoy ano daw?",
    ),
    (
        "What is the name of the singer dubbed as Asia's Songbook, who is also known for her '1-3 layer without Mango but we have grahams' business?",
        "Kween Yasmin",
    ),
    (
        "Complete this famous Filipino line: \"Bea Alonzo, ang simple pero _______, Mr puregold.\"",
        "Elepante",
    ),
    (
        "Which StarStruck Season 4 celebrity revealed an emo hairstyle and was seen crying afterward, later posting a reaction years later with the caption, 'yung trauma ko dito'?",
        "Kris Bernal",
    ),
    (
        "Complete this viral line from influencer @ichanRemigio: \"Wag masyadong ________, doon ka na mahuhuli.\"",
        "Greedy",
    ),
];

const PHILIPPINE_CINEMA: [Entry; 5] = [
    (
        "_____ is the title of the highest-grossing Filipino Movie of all time, starring Kathryn Bernardo and Alden Richards.",
        "Hello, Love, Again",
    ),
    (
        "_____ is the title of the first-ever movie of John Lloyd Cruz and Sarah Geronimo.",
        "A Very Special Love",
    ),
    (
        "In the film Four Sisters and A Wedding, name all the sisters in order from oldest to youngest.",
        "Teddy, Bobby, Alex, Gabby",
    ),
    (
        "_____ is the director of The Hows of Us, Seven Sundays, and Four Sisters and A Wedding.",
        "Cathy Garcia-Sampana",
    ),
    (
        "In what movie did John Arcilla win the Volpi Cup for Best Actor at Venice International Film Festival?",
        "On the Job: The Missing 8",
    ),
];

const CELEBRITIES: [Entry; 5] = [
    (
        "Known for her roles in 'Pangako Sa 'Yo' and had a long-term relationship with Daniel Padilla.",
        "Kathryn Bernardo",
    ),
    (
        "This actor and model gained fame for his role in 'On the Wings of Love'.",
        "James Reid",
    ),
    (
        "Which Filipino actor and singer joined 'The Voice' in 2013 and made the viral hit 'Buwan'?",
        "Juan Karlos",
    ),
    (
        "Which actress and model became the first Asian to win Miss World in 2013?",
        "Megan Young",
    ),
    (
        "What is the full name of Regine Velasquez, Asia's Songbird?",
        "Regina Encarnacion Ansong Velasquez-Alcasid",
    ),
];

const OPM_HITS: [Entry; 5] = [
    ("Jose Mari Chan's ultimate holiday classic.", "Christmas In Our Hearts"),
    (
        "This P-pop boy group became the first Filipino act nominated for the Billboard Music Awards.",
        "SB19",
    ),
    ("Broadway and Disney star who became a Tony Award winner.", "Lea Salonga"),
    ("Which girl group gave us 'Salamin, Salamin' and 'Pantropiko'?", "BINI"),
    (
        "Adie's 2022 hugot song with the line 'Dahil diyan sa'yo, ako'y matapang.'",
        "Paraluman",
    ),
];

const TRAVEL_SA_PINAS: [Entry; 5] = [
    ("This cone-shaped volcano in Albay is known as the 'Perfect Cone.'", "Mayon Volcano"),
    (
        "This Mindanao waterfall is dubbed the 'Niagara Falls of the Philippines.'",
        "Maria Cristina Falls",
    ),
    ("This city is home to the famous Magellan's Cross.", "Cebu City"),
    ("This heritage city in Ilocos Sur is famous for its cobblestone streets.", "Vigan"),
    ("This cave system in Cagayan is a major archaeological site.", "Callao Cave"),
];

/// 內建的菲律賓流行文化題庫，5 類 × 5 題
pub fn default_question_bank() -> Result<QuestionStore> {
    let mut store = QuestionStore::new();

    let categories: [(&str, &[Entry; 5]); 5] = [
        ("Trending Pop Quiz", &TRENDING_POP_QUIZ),
        ("Philippine Cinema", &PHILIPPINE_CINEMA),
        ("Celebrities", &CELEBRITIES),
        ("OPM Hits", &OPM_HITS),
        ("Travel sa Pinas", &TRAVEL_SA_PINAS),
    ];

    for (category, entries) in categories {
        for (level, (prompt, answer)) in entries.iter().enumerate() {
            let question = Question::new(*prompt, *answer, MONEY_VALUES[level], level as u8 + 1);
            store.add_question(category, question)?;
        }
    }

    tracing::debug!("Loaded {} built-in questions", store.total_questions());
    Ok(store)
}
