use super::class::ClassDecl;

/// Where a compilation unit came from. Only [`SourceOrigin::Source`] units
/// are eligible for rewriting.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceOrigin {
    #[default]
    Source,
    Generated,
    Library,
}

/// The syntax tree of one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationUnit {
    pub file_name: String,
    pub package: Option<String>,
    pub origin: SourceOrigin,
    pub types: Vec<ClassDecl>,
}

impl CompilationUnit {
    pub fn is_primary_source(&self) -> bool {
        self.origin == SourceOrigin::Source
    }
}
