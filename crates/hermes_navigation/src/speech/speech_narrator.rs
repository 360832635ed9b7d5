use tracing::debug;

use super::{SpeechEngine, Utterance, Voice};

const SPEECH_RATE: f32 = 1.0;

/// Speaks one instruction at a time.
pub struct SpeechNarrator<E> {
    engine: E,
}

impl<E> SpeechNarrator<E>
where
    E: SpeechEngine,
{
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Cancels whatever is playing, then speaks `text`. Silent when speech is unavailable.
    pub fn narrate(&self, text: &str, locale_tag: &str) {
        if !self.engine.is_available() {
            debug!("Speech: synthesis unavailable, skipping narration");
            return;
        }

        self.engine.cancel_all();

        let voice = select_voice(&self.engine.voices(), locale_tag);
        debug!(voice = ?voice.as_ref().map(|v| &v.name), "Speech: narrating");

        self.engine.speak(Utterance {
            text: text.to_string(),
            locale_tag: locale_tag.to_string(),
            voice,
            rate: SPEECH_RATE,
        });
    }

    pub fn stop(&self) {
        if self.engine.is_available() {
            self.engine.cancel_all();
        }
    }
}

/// Exact locale, then same language, otherwise `None` for the platform default.
fn select_voice(voices: &[Voice], locale_tag: &str) -> Option<Voice> {
    let wanted = locale_tag.replace('_', "-");
    let language = wanted.split('-').next().unwrap_or_default();

    voices
        .iter()
        .find(|voice| voice.locale_tag.replace('_', "-").eq_ignore_ascii_case(&wanted))
        .or_else(|| {
            voices.iter().find(|voice| {
                !language.is_empty()
                    && voice
                        .locale_tag
                        .split(['-', '_'])
                        .next()
                        .is_some_and(|voice_language| voice_language.eq_ignore_ascii_case(language))
            })
        })
        .cloned()
}
