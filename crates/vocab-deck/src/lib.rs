//! Client-side state for the vocabulary flashcards app.
//!
//! The client keeps a local mirror of what the API returned and never edits
//! it except through [`reduce`]. Rendering goes through the pure [`view`]
//! projection, so the same [`State`] always produces the same [`View`].
//!
//! ```
//! use vocab_deck::{Action, State, Topic, reduce, view};
//!
//! let topic = Topic::new("t1", "Travel");
//! let state = reduce(State::default(), Action::TopicAdded(topic));
//!
//! assert_eq!(view(&state).title, "Travel");
//! ```

pub mod backup;
pub mod model;
pub mod quiz;
pub mod state;
pub mod view;

pub use backup::{Backup, BackupError};
pub use model::{Topic, Word};
pub use quiz::{Quiz, QuizResult};
pub use state::{Action, State, reduce};
pub use view::{View, view};
