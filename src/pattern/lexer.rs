use super::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    Literal(&'a str),
    Placeholder {
        code: &'a str,
        name: Option<&'a str>,
    },
}

/// Splits a template into literal runs and `[code:name]` placeholders.
///
/// A placeholder ends at the first `]` after its `[`, so neither part can
/// contain `]`. A `]` outside a placeholder is an ordinary literal byte.
#[tracing::instrument(level = "trace", fields(template=%template))]
pub fn scan_template(template: &str) -> PatternResult<Vec<TemplateToken<'_>>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    while cursor < bytes.len() {
        let Some(rel_open) = memchr::memchr(b'[', &bytes[cursor..]) else {
            tokens.push(TemplateToken::Literal(&template[cursor..]));
            break;
        };
        let open = cursor + rel_open;
        if open > cursor {
            tokens.push(TemplateToken::Literal(&template[cursor..open]));
        }

        let Some(rel_close) = memchr::memchr(b']', &bytes[open + 1..]) else {
            return Err(PatternError::UnterminatedPlaceholder {
                template: template.to_string(),
                start: open,
            });
        };
        let close = open + 1 + rel_close;
        let inner = &template[open + 1..close];

        tokens.push(parse_placeholder(template, inner)?);
        cursor = close + 1;
    }

    Ok(tokens)
}

fn parse_placeholder<'a>(template: &str, inner: &'a str) -> PatternResult<TemplateToken<'a>> {
    let Some(colon) = memchr::memchr(b':', inner.as_bytes()) else {
        return Ok(TemplateToken::Placeholder {
            code: inner,
            name: None,
        });
    };

    let code = &inner[..colon];
    let name = &inner[colon + 1..];

    if name.is_empty() {
        return Err(PatternError::ParameterNameEmpty {
            template: template.to_string(),
            placeholder: format!("[{inner}]"),
        });
    }
    validate_param_name(template, name)?;

    Ok(TemplateToken::Placeholder {
        code,
        name: Some(name),
    })
}

fn validate_param_name(template: &str, name: &str) -> PatternResult<()> {
    if name.contains(':') {
        return Err(PatternError::ParameterNameContainsColon {
            template: template.to_string(),
            name: name.to_string(),
        });
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(PatternError::ParameterNameEmpty {
            template: template.to_string(),
            placeholder: name.to_string(),
        });
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(PatternError::ParameterInvalidStart {
            template: template.to_string(),
            name: name.to_string(),
            found: first,
        });
    }

    if let Some(invalid) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(PatternError::ParameterInvalidCharacter {
            template: template.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}
