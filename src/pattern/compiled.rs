use regex::{Regex, escape};
use smallvec::SmallVec;

use super::catalog::TypeCatalog;
use super::lexer::{TemplateToken, scan_template};
use super::{PatternError, PatternResult};

pub type ParamNames = SmallVec<[Box<str>; 4]>;

/// Equality is on the pattern text, not the template.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: Box<str>,
    source: Box<str>,
    regex: Regex,
    param_names: ParamNames,
}

impl CompiledPattern {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_names(&self) -> &[Box<str>] {
        &self.param_names
    }

    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Full-path match; named groups only, in declaration order.
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<(&str, &'p str)>> {
        let caps = self.regex.captures(path)?;
        let mut out = Vec::with_capacity(self.param_names.len());
        for name in self.param_names.iter() {
            if let Some(m) = caps.name(name) {
                out.push((name.as_ref(), m.as_str()));
            }
        }
        Some(out)
    }

    /// Every group by its one-based index, unnamed ones included.
    pub fn all_captures<'p>(&self, path: &'p str) -> Option<Vec<Option<&'p str>>> {
        let caps = self.regex.captures(path)?;
        Some(caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect())
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CompiledPattern {}

pub fn to_pattern_source(template: &str, catalog: &TypeCatalog) -> PatternResult<(String, ParamNames)> {
    let tokens = scan_template(template)?;
    let mut source = String::with_capacity(template.len() + 16);
    let mut names = ParamNames::new();

    source.push('^');
    for token in tokens {
        match token {
            TemplateToken::Literal(text) => source.push_str(&escape(text)),
            TemplateToken::Placeholder { code, name } => {
                source.push('(');
                if let Some(name) = name {
                    if names.iter().any(|existing| existing.as_ref() == name) {
                        return Err(PatternError::DuplicateParameterName {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    source.push_str("?P<");
                    source.push_str(name);
                    source.push('>');
                    names.push(Box::from(name));
                }
                source.push_str(catalog.resolve(code));
                source.push(')');
            }
        }
    }
    source.push('$');

    Ok((source, names))
}

#[tracing::instrument(level = "trace", skip(catalog), fields(template=%template))]
pub fn compile_with(template: &str, catalog: &TypeCatalog) -> PatternResult<CompiledPattern> {
    let (source, param_names) = to_pattern_source(template, catalog)?;
    let regex = Regex::new(&source).map_err(|err| PatternError::InvalidPattern {
        template: template.to_string(),
        message: err.to_string(),
    })?;

    Ok(CompiledPattern {
        template: Box::from(template),
        source: source.into_boxed_str(),
        regex,
        param_names,
    })
}

pub fn compile(template: &str) -> PatternResult<CompiledPattern> {
    compile_with(template, &TypeCatalog::default())
}
