use std::fmt;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Any` is `*` and also accepts the empty method of a command-line request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodToken {
    Any,
    Verb(Box<str>),
}

impl MethodToken {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "*" {
            MethodToken::Any
        } else {
            MethodToken::Verb(token.to_ascii_uppercase().into_boxed_str())
        }
    }

    #[inline]
    pub fn accepts(&self, method: &str) -> bool {
        match self {
            MethodToken::Any => true,
            MethodToken::Verb(verb) => verb.eq_ignore_ascii_case(method),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, MethodToken::Any)
    }
}

impl fmt::Display for MethodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodToken::Any => f.write_str("*"),
            MethodToken::Verb(verb) => f.write_str(verb),
        }
    }
}

impl From<HttpMethod> for MethodToken {
    fn from(method: HttpMethod) -> Self {
        MethodToken::Verb(Box::from(method.as_str()))
    }
}

impl From<&str> for MethodToken {
    fn from(token: &str) -> Self {
        MethodToken::parse(token)
    }
}

impl From<String> for MethodToken {
    fn from(token: String) -> Self {
        MethodToken::parse(&token)
    }
}

pub trait IntoMethodTokens {
    fn into_method_tokens(self) -> Vec<MethodToken>;
}

impl IntoMethodTokens for MethodToken {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        vec![self]
    }
}

impl IntoMethodTokens for HttpMethod {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        vec![self.into()]
    }
}

impl IntoMethodTokens for &str {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        vec![self.into()]
    }
}

impl IntoMethodTokens for String {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        vec![self.into()]
    }
}

impl<T: Into<MethodToken>> IntoMethodTokens for Vec<T> {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<MethodToken>, const N: usize> IntoMethodTokens for [T; N] {
    fn into_method_tokens(self) -> Vec<MethodToken> {
        self.into_iter().map(Into::into).collect()
    }
}
