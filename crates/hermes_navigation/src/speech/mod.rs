mod speech_engine;
mod speech_narrator;

pub use speech_engine::{NoSpeech, SpeechEngine, Utterance, Voice};
pub use speech_narrator::SpeechNarrator;
