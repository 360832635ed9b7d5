#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub locale_tag: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale_tag: String,

    /// `None` lets the platform pick its default voice
    pub voice: Option<Voice>,
    pub rate: f32,
}

/// The platform text-to-speech capability.
pub trait SpeechEngine {
    fn is_available(&self) -> bool;

    fn voices(&self) -> Vec<Voice>;

    fn speak(&self, utterance: Utterance);

    fn cancel_all(&self);
}

/// Stand-in for platforms without speech synthesis.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeech;

impl SpeechEngine for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, _utterance: Utterance) {}

    fn cancel_all(&self) {}
}
