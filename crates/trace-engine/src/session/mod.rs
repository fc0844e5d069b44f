pub mod sequencer;
pub mod word;

pub use sequencer::{Collaborators, SequencerState, WordSequencer};
pub use word::{LetterProgress, LetterStatus, WordSession};
