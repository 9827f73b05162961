//! Configuration of a processing round.

use kiln_ast::MarkerKind;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessingConfig {
    /// Emit a note for every synthesized accessor.
    pub member_notes: bool,
    /// Processors to register, in the order they run.
    pub processors: Vec<MarkerKind>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            member_notes: true,
            processors: vec![
                MarkerKind::Getter,
                MarkerKind::Setter,
                MarkerKind::NoArgsConstructor,
            ],
        }
    }
}

impl ProcessingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member_notes(mut self, member_notes: bool) -> Self {
        self.member_notes = member_notes;
        self
    }

    pub fn with_processors(mut self, processors: impl IntoIterator<Item = MarkerKind>) -> Self {
        self.processors = processors.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessingConfig::default();
        assert!(config.member_notes);
        assert_eq!(
            config.processors,
            vec![
                MarkerKind::Getter,
                MarkerKind::Setter,
                MarkerKind::NoArgsConstructor
            ]
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ProcessingConfig::new()
            .with_member_notes(false)
            .with_processors([MarkerKind::NoArgsConstructor]);
        assert!(!config.member_notes);
        assert_eq!(config.processors, vec![MarkerKind::NoArgsConstructor]);
    }
}
