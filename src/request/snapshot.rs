use bitflags::bitflags;

use super::query::{is_truthy, parse_query, split_uri};
use super::{RequestError, RequestResult};
use crate::enums::HttpMethod;
use crate::router::RouterOptions;
use crate::types::QueryMap;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RequestFlags: u8 {
        const CLI = 0b00000001;
        const AJAX = 0b00000010;
    }
}

const CLI_SHORT_FLAG: &str = "-r";
const XML_HTTP_REQUEST: &str = "xmlhttprequest";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    method: String,
    path: String,
    host: String,
    query: QueryMap,
    flags: RequestFlags,
}

impl RequestSnapshot {
    pub fn builder() -> RequestSnapshotBuilder {
        RequestSnapshotBuilder::default()
    }

    pub fn new(method: &str, uri: &str, options: &RouterOptions) -> Self {
        Self::builder().method(method).uri(uri).build(options)
    }

    /// Command-line invocation: the URI comes from `-r <uri>` or from the
    /// long flag named by `request_uri_source`; a non-empty `-r` wins.
    ///
    /// `args` excludes the program name. Parsing stops at `--`.
    #[tracing::instrument(level = "debug", skip(args, options))]
    pub fn from_cli_args<I, S>(args: I, options: &RouterOptions) -> RequestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let long_flag = format!("--{}", options.request_uri_source);
        let long_prefix = format!("{long_flag}=");
        let mut short_value: Option<String> = None;
        let mut long_value: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "--" {
                break;
            }

            if arg == CLI_SHORT_FLAG {
                let value = args.next().ok_or_else(|| RequestError::MissingArgumentValue {
                    flag: CLI_SHORT_FLAG.to_string(),
                })?;
                short_value = Some(value.as_ref().to_string());
            } else if let Some(value) = arg.strip_prefix(CLI_SHORT_FLAG) {
                short_value = Some(value.to_string());
            } else if arg == long_flag {
                let value = args
                    .next()
                    .ok_or_else(|| RequestError::MissingArgumentValue {
                        flag: long_flag.clone(),
                    })?;
                long_value = Some(value.as_ref().to_string());
            } else if let Some(value) = arg.strip_prefix(&long_prefix) {
                long_value = Some(value.to_string());
            }
        }

        let uri = short_value
            .filter(|v| !v.is_empty())
            .or(long_value.filter(|v| !v.is_empty()))
            .unwrap_or_default();
        let (path, query) = split_uri(&uri);

        tracing::debug!(path = %path, "captured command-line request");

        Ok(Self {
            method: String::new(),
            path: path.to_string(),
            host: String::new(),
            query: query.map(parse_query).unwrap_or_default(),
            flags: RequestFlags::CLI,
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn query_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.query_value(key).unwrap_or(default)
    }

    pub fn flags(&self) -> RequestFlags {
        self.flags
    }

    pub fn is_cli(&self) -> bool {
        self.flags.contains(RequestFlags::CLI)
    }

    pub fn is_ajax(&self) -> bool {
        self.flags.contains(RequestFlags::AJAX)
    }

    pub fn is_method(&self, method: HttpMethod) -> bool {
        self.method == method.as_str()
    }

    pub fn is_get(&self) -> bool {
        self.is_method(HttpMethod::Get)
    }

    pub fn is_post(&self) -> bool {
        self.is_method(HttpMethod::Post)
    }

    pub fn is_put(&self) -> bool {
        self.is_method(HttpMethod::Put)
    }

    pub fn is_delete(&self) -> bool {
        self.is_method(HttpMethod::Delete)
    }
}

#[derive(Debug, Default, Clone)]
pub struct RequestSnapshotBuilder {
    method: String,
    uri: String,
    query_string: Option<String>,
    host: String,
    requested_with: Option<String>,
}

impl RequestSnapshotBuilder {
    pub fn method<S: AsRef<str>>(mut self, method: S) -> Self {
        self.method = method.as_ref().trim().to_ascii_uppercase();
        self
    }

    pub fn uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn query_string<S: Into<String>>(mut self, query_string: S) -> Self {
        self.query_string = Some(query_string.into());
        self
    }

    pub fn host<S: AsRef<str>>(mut self, host: S) -> Self {
        self.host = host.as_ref().trim().to_ascii_lowercase();
        self
    }

    pub fn requested_with<S: Into<String>>(mut self, value: S) -> Self {
        self.requested_with = Some(value.into());
        self
    }

    pub fn build(self, options: &RouterOptions) -> RequestSnapshot {
        let (path, uri_query) = split_uri(&self.uri);
        let query = match self.query_string.as_deref().or(uri_query) {
            Some(raw) => parse_query(raw),
            None => QueryMap::new(),
        };

        let mut flags = RequestFlags::empty();
        let header_ajax = self
            .requested_with
            .as_deref()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(XML_HTTP_REQUEST));
        let param_ajax = query
            .get(options.ajax_param_name.as_str())
            .is_some_and(|value| is_truthy(value));
        if header_ajax || param_ajax {
            flags |= RequestFlags::AJAX;
        }

        RequestSnapshot {
            method: self.method,
            path: path.to_string(),
            host: self.host,
            query,
            flags,
        }
    }
}
