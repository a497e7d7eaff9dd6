use serde::Serialize;

/// How a template turns the query into the path/param segment of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// The whole query, percent-encoded. Used by search pages.
    QueryEncode,
    /// The query with all whitespace removed, percent-encoded. Used for handles.
    HandleEncode,
}

/// A URL template as plain data: `prefix + encode(query) + suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlTemplate {
    pub kind: TemplateKind,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl UrlTemplate {
    pub const fn query(prefix: &'static str, suffix: &'static str) -> UrlTemplate {
        UrlTemplate {
            kind: TemplateKind::QueryEncode,
            prefix,
            suffix,
        }
    }

    pub const fn handle(prefix: &'static str, suffix: &'static str) -> UrlTemplate {
        UrlTemplate {
            kind: TemplateKind::HandleEncode,
            prefix,
            suffix,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    /// Opaque icon asset reference for the UI.
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<&'static str>,
    #[serde(skip)]
    pub templates: &'static [UrlTemplate],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLink {
    pub url: String,
    pub query_text: String,
    pub is_direct_attempt: bool,
}

impl SearchLink {
    pub fn label(&self) -> String {
        if self.is_direct_attempt {
            format!("Direct profile attempt for: {}", self.query_text)
        } else {
            format!("Search for: {}", self.query_text)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultItem {
    pub platform: &'static Platform,
    pub links: Vec<SearchLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    ApiKeyMissing,
    FlowExecutionError,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ApiKeyMissing => "API_KEY_MISSING",
            SkipReason::FlowExecutionError => "FLOW_EXECUTION_ERROR",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one expansion attempt. When `ai_expansion_performed` is false,
/// `expanded_queries` holds only the original query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionResult {
    pub expanded_queries: Vec<String>,
    pub ai_expansion_performed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_expansion_skipped_reason: Option<SkipReason>,
}

impl ExpansionResult {
    pub fn skipped(query: &str, reason: SkipReason) -> ExpansionResult {
        ExpansionResult {
            expanded_queries: vec![query.to_string()],
            ai_expansion_performed: false,
            ai_expansion_skipped_reason: Some(reason),
        }
    }

    /// Original query first, then suggestions, first occurrence wins.
    pub fn performed(query: &str, suggestions: Vec<String>) -> ExpansionResult {
        let mut expanded_queries = vec![query.to_string()];
        for suggestion in suggestions {
            if !expanded_queries.contains(&suggestion) {
                expanded_queries.push(suggestion);
            }
        }
        ExpansionResult {
            expanded_queries,
            ai_expansion_performed: true,
            ai_expansion_skipped_reason: None,
        }
    }

    /// Variants the AI produced beyond the original query.
    pub fn variations(&self) -> &[String] {
        self.expanded_queries.get(1..).unwrap_or(&[])
    }
}
