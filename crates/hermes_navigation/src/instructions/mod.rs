mod format;
mod instruction_compiler;
pub mod locale;
mod narrated_instruction;

pub use format::{duration_minutes, format_distance, format_total_distance};
pub use instruction_compiler::InstructionCompiler;
pub use narrated_instruction::NarratedInstruction;
