use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NarratedInstruction {
    pub sequence_index: usize,
    pub text: String,
    pub distance_label: String,
    pub duration_minutes: u32,
}

impl NarratedInstruction {
    /// 1-based step number shown to the user.
    pub fn display_index(&self) -> usize {
        self.sequence_index + 1
    }
}
