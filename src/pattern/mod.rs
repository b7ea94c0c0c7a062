mod cache;
mod catalog;
mod compiled;
mod error;
mod lexer;

pub use cache::PatternCompiler;
pub use catalog::{BUILTIN_MATCH_TYPES, TypeCatalog};
pub use compiled::{CompiledPattern, ParamNames, compile, compile_with, to_pattern_source};
pub use error::{PatternError, PatternResult};
pub use lexer::{TemplateToken, scan_template};
