use std::sync::Arc;

use fxhash::FxHashMap;

use crate::routing::RouteStep;

use super::{
    NarratedInstruction, duration_minutes, format_distance,
    locale::{BRAZILIAN_PORTUGUESE, ENGLISH, LocalizationTable},
};

/// Turns route steps into localized, numbered instructions. Never fails.
///
/// Tables are looked up by exact tag first, then by language (`pt-PT` finds
/// `pt-BR`), and English is used when nothing matches. A maneuver the chosen
/// table cannot phrase is retried in English before falling back to the
/// table's generic "instruction unavailable" text.
pub struct InstructionCompiler {
    tables: FxHashMap<String, Arc<dyn LocalizationTable>>,
    languages: FxHashMap<String, Arc<dyn LocalizationTable>>,
    fallback: Arc<dyn LocalizationTable>,
}

impl Default for InstructionCompiler {
    fn default() -> Self {
        Self::new(Arc::new(ENGLISH)).with_table(Arc::new(BRAZILIAN_PORTUGUESE))
    }
}

impl InstructionCompiler {
    pub fn new(fallback: Arc<dyn LocalizationTable>) -> Self {
        let compiler = Self {
            tables: FxHashMap::default(),
            languages: FxHashMap::default(),
            fallback: Arc::clone(&fallback),
        };

        compiler.with_table(fallback)
    }

    /// Registers a table. The first table of a language also answers for that language.
    pub fn with_table(mut self, table: Arc<dyn LocalizationTable>) -> Self {
        let tag = normalize(table.locale_tag());

        self.languages
            .entry(language(&tag).to_string())
            .or_insert_with(|| Arc::clone(&table));
        self.tables.insert(tag, table);

        self
    }

    pub fn table(&self, locale_tag: &str) -> &dyn LocalizationTable {
        let tag = normalize(locale_tag);

        self.tables
            .get(&tag)
            .or_else(|| self.languages.get(language(&tag)))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn compile(&self, step: &RouteStep, locale_tag: &str) -> NarratedInstruction {
        let table = self.table(locale_tag);
        let text = table
            .instruction_text(&step.instruction)
            .or_else(|| self.fallback.instruction_text(&step.instruction))
            .unwrap_or_else(|| table.instruction_unavailable());

        NarratedInstruction {
            sequence_index: step.sequence_index,
            text,
            distance_label: format_distance(step.distance_meters),
            duration_minutes: duration_minutes(step.duration_seconds),
        }
    }

    /// Compiles every step in `sequence_index` order.
    pub fn compile_all(&self, steps: &[RouteStep], locale_tag: &str) -> Vec<NarratedInstruction> {
        let mut ordered: Vec<&RouteStep> = steps.iter().collect();
        ordered.sort_by_key(|step| step.sequence_index);

        ordered
            .into_iter()
            .map(|step| self.compile(step, locale_tag))
            .collect()
    }
}

fn normalize(locale_tag: &str) -> String {
    locale_tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn language(normalized_tag: &str) -> &str {
    normalized_tag
        .split('-')
        .next()
        .unwrap_or(normalized_tag)
}
