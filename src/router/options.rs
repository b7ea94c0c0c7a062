use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::pattern::TypeCatalog;

pub const DEFAULT_REQUEST_URI_SOURCE: &str = "REQUEST_URI";
pub const DEFAULT_URL_SUFFIX: &str = "html";
pub const DEFAULT_AJAX_PARAM_NAME: &str = "ajax";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub request_uri_source: String,
    pub url_suffix: String,
    pub ajax_param_name: String,
    /// Extra placeholder types; an entry replaces a builtin with the same code.
    pub match_types: BTreeMap<String, String>,
    /// Fixed host for `with_host`; `None` checks host scopes per request.
    pub host: Option<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_uri_source: DEFAULT_REQUEST_URI_SOURCE.to_string(),
            url_suffix: DEFAULT_URL_SUFFIX.to_string(),
            ajax_param_name: DEFAULT_AJAX_PARAM_NAME.to_string(),
            match_types: BTreeMap::new(),
            host: None,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        let source = self.request_uri_source.as_str();
        if source.is_empty() {
            return Err(RouterOptionsError::EmptyRequestUriSource);
        }
        if source.starts_with('-') || source.contains(['=', ' ']) {
            return Err(RouterOptionsError::RequestUriSourceInvalid {
                value: source.to_string(),
            });
        }
        if self.ajax_param_name.is_empty() {
            return Err(RouterOptionsError::EmptyAjaxParamName);
        }
        if self.url_suffix.starts_with('.') || self.url_suffix.contains('/') {
            return Err(RouterOptionsError::UrlSuffixInvalid {
                value: self.url_suffix.clone(),
            });
        }
        for (code, class) in &self.match_types {
            if code.contains([':', ']', '[']) {
                return Err(RouterOptionsError::MatchTypeCodeInvalid { code: code.clone() });
            }
            if class.is_empty() {
                return Err(RouterOptionsError::MatchTypeClassEmpty { code: code.clone() });
            }
        }
        if self.host.as_ref().is_some_and(|host| host.trim().is_empty()) {
            return Err(RouterOptionsError::EmptyHost);
        }
        Ok(())
    }

    pub fn type_catalog(&self) -> TypeCatalog {
        TypeCatalog::with_extra(
            self.match_types
                .iter()
                .map(|(code, class)| (code.as_str(), class.as_str())),
        )
    }

    /// `/about.html` becomes `/about` with the default suffix.
    pub fn strip_url_suffix<'p>(&self, path: &'p str) -> &'p str {
        let suffix = self.url_suffix.as_str();
        if suffix.is_empty() || path.len() <= suffix.len() + 1 {
            return path;
        }
        match path.strip_suffix(suffix) {
            Some(rest) if rest.ends_with('.') => &rest[..rest.len() - 1],
            _ => path,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn request_uri_source<S: Into<String>>(mut self, value: S) -> Self {
        self.options.request_uri_source = value.into();
        self
    }

    pub fn url_suffix<S: Into<String>>(mut self, value: S) -> Self {
        self.options.url_suffix = value.into();
        self
    }

    pub fn ajax_param_name<S: Into<String>>(mut self, value: S) -> Self {
        self.options.ajax_param_name = value.into();
        self
    }

    pub fn match_type<C: Into<String>, P: Into<String>>(mut self, code: C, class: P) -> Self {
        self.options.match_types.insert(code.into(), class.into());
        self
    }

    pub fn match_types(mut self, match_types: BTreeMap<String, String>) -> Self {
        self.options.match_types = match_types;
        self
    }

    pub fn host<S: AsRef<str>>(mut self, host: S) -> Self {
        self.options.host = Some(host.as_ref().trim().to_ascii_lowercase());
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("request_uri_source must not be empty")]
    EmptyRequestUriSource,
    #[error("request_uri_source '{value}' is not a usable flag name")]
    RequestUriSourceInvalid { value: String },
    #[error("ajax_param_name must not be empty")]
    EmptyAjaxParamName,
    #[error("url_suffix '{value}' must not start with '.' or contain '/'")]
    UrlSuffixInvalid { value: String },
    #[error("match type code '{code}' must not contain ':', '[' or ']'")]
    MatchTypeCodeInvalid { code: String },
    #[error("match type '{code}' has an empty class")]
    MatchTypeClassEmpty { code: String },
    #[error("host must not be empty")]
    EmptyHost,
}
