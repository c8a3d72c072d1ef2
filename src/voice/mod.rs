//! Speech synthesis

pub mod tts;

pub use tts::TextToSpeech;
