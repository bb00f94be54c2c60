//! Request builder for the legacy API
//!
//! Legacy calls are one flat parameter set: fixed authentication and
//! format parameters merged with caller-supplied ones, plus flattened
//! embedded data. `User`, `Token` and `Request` are never caller
//! overridable; `Version` is, per call; `Format` has its own channel
//! because one operation answers in XML.

use crate::config::Credentials;
use crate::model::operation::{OperationPolicy, Product, ResponseKind, operation_policy};

/// Parameter names owned by the dispatcher. Caller-supplied pairs with
/// these keys are discarded during assembly.
const RESERVED_PARAMS: [&str; 5] = ["User", "Token", "Format", "Version", "Request"];

/// Embedded data attached to a recipient or response
///
/// Flattened into bracketed parameters on the wire, e.g. a `"Zip"` key
/// becomes `ED[Zip]`. Insertion order is preserved; a repeated key
/// keeps its last value.
pub type EmbeddedData = Vec<(String, String)>;

/// Wire format requested from the legacy API via the `Format` parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatParam {
    /// Default JSON envelope
    #[default]
    Json,
    /// The parameter is omitted entirely; the operation answers with a
    /// non-JSON document
    Unspecified,
    /// Explicit format value passed through to the API
    Custom(String),
}

impl FormatParam {
    /// True when the caller deviated from the default JSON format, which
    /// makes a non-JSON body a success instead of a malformed response
    pub fn is_override(&self) -> bool {
        !matches!(self, FormatParam::Json)
    }
}

/// One multipart file attachment for operations that upload content
#[derive(Debug, Clone)]
pub struct FileAttachment {
    /// Form field name, e.g. `FileContents`
    pub field: String,
    /// File name reported to the server
    pub filename: String,
    /// Raw file bytes
    pub contents: Vec<u8>,
}

/// A single legacy API call under construction
///
/// # Example
/// ```
/// use qualtrics_client::model::request::LegacyRequest;
///
/// let request = LegacyRequest::new("createPanel")
///     .param("LibraryID", "GR_123")
///     .param("Name", "My panel");
/// ```
#[derive(Debug, Clone)]
pub struct LegacyRequest {
    operation: String,
    product: Option<Product>,
    version: Option<String>,
    format: Option<FormatParam>,
    params: Vec<(String, String)>,
    embedded_data: Vec<(String, String)>,
    body: Option<String>,
    files: Vec<FileAttachment>,
}

impl LegacyRequest {
    /// Starts a request for the named operation
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            product: None,
            version: None,
            format: None,
            params: Vec::new(),
            embedded_data: Vec::new(),
            body: None,
            files: Vec::new(),
        }
    }

    /// Overrides the product chosen by the operation's policy
    pub fn product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }

    /// Overrides the default API version for this call. The value is
    /// sent verbatim as a string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Overrides the `Format` parameter for this call
    pub fn format(mut self, format: FormatParam) -> Self {
        self.format = Some(format);
        self
    }

    /// Adds a named parameter. A repeated key replaces the earlier value.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        upsert(&mut self.params, key.into(), value.to_string());
        self
    }

    /// Adds a named parameter when the value is present
    pub fn opt_param<T: ToString>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Attaches embedded data, flattened to `ED[key]` parameters
    pub fn embedded_data(mut self, ed: &[(String, String)]) -> Self {
        for (key, value) in ed {
            upsert(&mut self.embedded_data, key.clone(), value.clone());
        }
        self
    }

    /// Sets a raw request body, turning the call into a POST. Takes
    /// precedence over file attachments when both are supplied.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attaches a file, turning the call into a multipart POST
    pub fn file(
        mut self,
        field: impl Into<String>,
        filename: impl Into<String>,
        contents: Vec<u8>,
    ) -> Self {
        self.files.push(FileAttachment {
            field: field.into(),
            filename: filename.into(),
            contents,
        });
        self
    }

    /// The operation name this request targets
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The raw body, if any
    pub fn raw_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The file attachments, if any
    pub fn attachments(&self) -> &[FileAttachment] {
        &self.files
    }

    /// Resolves the endpoint product: explicit override first, then the
    /// operation's policy
    pub fn effective_product(&self, policy: &OperationPolicy) -> Product {
        self.product.unwrap_or(policy.product)
    }

    /// Resolves the `Format` channel: explicit override first, then the
    /// policy's response kind
    pub fn effective_format(&self, policy: &OperationPolicy) -> FormatParam {
        match &self.format {
            Some(explicit) => explicit.clone(),
            None => match policy.response_kind {
                ResponseKind::Xml => FormatParam::Unspecified,
                ResponseKind::Json | ResponseKind::OrderedJson => FormatParam::Json,
            },
        }
    }

    /// Assembles the final parameter set for the wire
    ///
    /// Caller parameters come first with reserved keys dropped, then
    /// flattened embedded data, then the fixed authentication, format,
    /// version and operation parameters.
    pub fn build_query(&self, credentials: &Credentials, default_version: &str) -> Vec<(String, String)> {
        let policy = operation_policy(&self.operation);
        let format = self.effective_format(&policy);

        let mut query: Vec<(String, String)> = Vec::new();
        for (key, value) in &self.params {
            if RESERVED_PARAMS.contains(&key.as_str()) {
                continue;
            }
            upsert(&mut query, key.clone(), value.clone());
        }
        for (key, value) in &self.embedded_data {
            upsert(&mut query, format!("ED[{key}]"), value.clone());
        }

        query.push((String::from("User"), credentials.user.clone()));
        query.push((String::from("Token"), credentials.token.clone()));
        match format {
            FormatParam::Json => query.push((String::from("Format"), String::from("JSON"))),
            FormatParam::Custom(value) => query.push((String::from("Format"), value)),
            FormatParam::Unspecified => {}
        }
        query.push((
            String::from("Version"),
            self.version.clone().unwrap_or_else(|| default_version.to_string()),
        ));
        query.push((String::from("Request"), self.operation.clone()));
        query
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    if let Some(existing) = pairs.iter_mut().find(|(k, _)| *k == key) {
        existing.1 = value;
    } else {
        pairs.push((key, value));
    }
}

/// Renders a boolean the way the legacy API expects flags
pub(crate) fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
