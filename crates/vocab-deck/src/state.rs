//! Client state and the reducer that evolves it.
//!
//! Every change goes through [`reduce`]. Actions describe what the API
//! already confirmed; a request that fails never produces an action, so the
//! state stays as it was.

use std::collections::BTreeMap;

use crate::{
    backup::Backup,
    model::{Topic, Word},
    quiz::Quiz,
};

/// Local mirror of the server plus UI selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// In server order
    pub topics: Vec<Topic>,
    /// Words of each topic loaded so far
    pub words_by_topic_id: BTreeMap<String, Vec<Word>>,
    pub current_topic_id: Option<String>,
    /// Quiz on the current topic, if one is open
    pub quiz: Option<Quiz>,
}

impl State {
    pub fn current_topic(&self) -> Option<&Topic> {
        let id = self.current_topic_id.as_deref()?;
        self.topics.iter().find(|t| t.id == id)
    }

    /// Words of the current topic, empty when none is selected or loaded
    pub fn current_words(&self) -> &[Word] {
        self.current_topic_id
            .as_ref()
            .and_then(|id| self.words_by_topic_id.get(id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn current_words_mut(&mut self) -> Option<&mut Vec<Word>> {
        let id = self.current_topic_id.clone()?;
        Some(self.words_by_topic_id.entry(id).or_default())
    }

    fn select_first_topic(&mut self) {
        self.current_topic_id = self.topics.first().map(|t| t.id.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `GET /api/topics` answered; selects the first topic
    TopicsLoaded(Vec<Topic>),
    /// `GET /api/words/{topic_id}` answered
    WordsLoaded { topic_id: String, words: Vec<Word> },
    TopicSelected(String),
    /// `POST /api/topics` answered; selects the new topic
    TopicAdded(Topic),
    /// `DELETE /api/topics/{id}` answered
    TopicDeleted(String),
    /// `POST /api/words` answered
    WordAdded(Word),
    /// `DELETE /api/words/{id}` answered
    WordDeleted(String),
    /// Open a quiz on the current topic asking words in `order`
    QuizStarted { order: Vec<String> },
    QuizAnswered { word_id: String, answer: String },
    QuizSubmitted,
    QuizExited,
    BackupImported(Backup),
}

/// Apply `action` to `state`
pub fn reduce(mut state: State, action: Action) -> State {
    match action {
        Action::TopicsLoaded(topics) => {
            state.topics = topics;
            state
                .words_by_topic_id
                .retain(|id, _| state.topics.iter().any(|t| &t.id == id));
            state.select_first_topic();
            state.quiz = None;
        }
        Action::WordsLoaded { topic_id, words } => {
            if state.current_topic_id.as_ref() == Some(&topic_id) {
                state.quiz = None;
            }
            state.words_by_topic_id.insert(topic_id, words);
        }
        Action::TopicSelected(id) => {
            if state.topics.iter().any(|t| t.id == id) {
                state.current_topic_id = Some(id);
                state.quiz = None;
            }
        }
        Action::TopicAdded(topic) => {
            state.words_by_topic_id.insert(topic.id.clone(), Vec::new());
            state.current_topic_id = Some(topic.id.clone());
            state.topics.push(topic);
            state.quiz = None;
        }
        Action::TopicDeleted(id) => {
            state.topics.retain(|t| t.id != id);
            state.words_by_topic_id.remove(&id);
            if state.current_topic_id.as_ref() == Some(&id) {
                state.select_first_topic();
                state.quiz = None;
            }
        }
        Action::WordAdded(word) => {
            if state.current_topic_id.as_ref() == Some(&word.topic_id)
                && let Some(words) = state.current_words_mut()
            {
                words.push(word);
                state.quiz = None;
            }
        }
        Action::WordDeleted(id) => {
            if let Some(words) = state.current_words_mut() {
                let before = words.len();
                words.retain(|w| w.id != id);
                if words.len() != before {
                    state.quiz = None;
                }
            }
        }
        Action::QuizStarted { order } => {
            if let Some(quiz) = Quiz::start(state.current_words(), &order) {
                state.quiz = Some(quiz);
            }
        }
        Action::QuizAnswered { word_id, answer } => {
            if let Some(quiz) = state.quiz.as_mut() {
                quiz.answer(&word_id, answer);
            }
        }
        Action::QuizSubmitted => {
            let words = state.current_words().to_vec();
            if let Some(quiz) = state.quiz.as_mut() {
                quiz.result = Some(quiz.grade(&words));
            }
        }
        Action::QuizExited => state.quiz = None,
        Action::BackupImported(backup) => {
            state.current_topic_id = backup
                .current_topic_id
                .filter(|id| !id.is_empty())
                .or_else(|| backup.topics.first().map(|t| t.id.clone()));
            state.topics = backup.topics;
            state.words_by_topic_id = backup.words_by_topic_id;
            state.quiz = None;
        }
    }

    state
}
