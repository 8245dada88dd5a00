use crate::state::State;

/// Title shown when no topic is selected ("please choose a topic")
pub const NO_TOPIC_TITLE: &str = "請選擇主題";

/// Everything the page renders, derived from [`State`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub topics: Vec<TopicItem>,
    pub title: String,
    pub words: Vec<WordCard>,
    /// Adding words and starting a quiz need a selected topic
    pub can_add_word: bool,
    pub can_start_quiz: bool,
    pub quiz: Option<QuizView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicItem {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCard {
    pub id: String,
    pub en: String,
    pub zh: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub items: Vec<QuizItem>,
    /// Set once the quiz is submitted
    pub score: Option<u32>,
}

/// One question: the translation is the prompt, the learner types `en`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub word_id: String,
    pub prompt: String,
    pub answer: String,
    /// `Some(true)` when graded correct
    pub correct: Option<bool>,
}

impl QuizView {
    /// "分數：{score} / 100", or `None` before submission
    pub fn score_label(&self) -> Option<String> {
        self.score.map(|score| format!("分數：{score} / 100"))
    }
}

/// Project `state` into what should be on screen
pub fn view(state: &State) -> View {
    let current = state.current_topic_id.as_deref();

    let topics = state
        .topics
        .iter()
        .map(|t| TopicItem {
            id: t.id.clone(),
            name: t.name.clone(),
            active: Some(t.id.as_str()) == current,
        })
        .collect();

    let title = state
        .current_topic()
        .map_or_else(|| NO_TOPIC_TITLE.to_string(), |t| t.name.clone());

    let words = state.current_words();
    let cards = words
        .iter()
        .map(|w| WordCard {
            id: w.id.clone(),
            en: w.en.clone(),
            zh: w.zh.clone(),
        })
        .collect();

    let quiz = state.quiz.as_ref().map(|quiz| QuizView {
        items: quiz
            .order
            .iter()
            .filter_map(|id| words.iter().find(|w| &w.id == id))
            .map(|w| QuizItem {
                word_id: w.id.clone(),
                prompt: w.zh.clone(),
                answer: quiz.answers.get(&w.id).cloned().unwrap_or_default(),
                correct: quiz
                    .result
                    .as_ref()
                    .and_then(|r| r.marks.get(&w.id).copied()),
            })
            .collect(),
        score: quiz.result.as_ref().map(|r| r.score),
    });

    View {
        topics,
        title,
        words: cards,
        can_add_word: state.current_topic().is_some(),
        can_start_quiz: !words.is_empty(),
        quiz,
    }
}
