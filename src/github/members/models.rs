//! Organization member data models

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Member record as returned by the API
///
/// The record is kept exactly as received and serializes back unchanged,
/// null fields and unknown keys included. The accessors read the fields the
/// CLI displays without requiring any of them to be present.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Member(Map<String, Value>);

impl Member {
    pub fn login(&self) -> &str {
        self.str_field("login").unwrap_or("")
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn node_id(&self) -> Option<&str> {
        self.str_field("node_id")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.str_field("avatar_url")
    }

    /// Account type ("User", "Bot", ...)
    pub fn account_type(&self) -> &str {
        self.str_field("type").unwrap_or("unknown")
    }

    /// Profile URL
    pub fn html_url(&self) -> &str {
        self.str_field("html_url").unwrap_or("")
    }

    pub fn is_site_admin(&self) -> bool {
        self.0
            .get("site_admin")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Any field of the raw record
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Member {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}

/// Server-side filter for the members listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemberFilter {
    /// Every member
    All,
    /// Members without two-factor authentication (owners only)
    #[value(name = "2fa-disabled")]
    TwoFactorDisabled,
}

impl MemberFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberFilter::All => "all",
            MemberFilter::TwoFactorDisabled => "2fa_disabled",
        }
    }
}

/// Role filter for the members listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemberRole {
    All,
    Admin,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::All => "all",
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
        }
    }
}

/// Name of the reserved option selecting the public-members endpoints
const PUBLIC_KEY: &str = "public";

/// Per-call options for membership operations
///
/// `public_only` picks the `public_members` endpoint variant; it is never
/// sent to the API. `extra_query` is forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberOptions {
    pub public_only: bool,
    pub extra_query: BTreeMap<String, String>,
}

impl MemberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options targeting the public-members endpoints
    pub fn public() -> Self {
        Self {
            public_only: true,
            ..Self::default()
        }
    }

    pub fn with_public(mut self, public_only: bool) -> Self {
        self.public_only = public_only;
        self
    }

    pub fn filter(self, filter: MemberFilter) -> Self {
        self.param("filter", filter.as_str())
    }

    pub fn role(self, role: MemberRole) -> Self {
        self.param("role", role.as_str())
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page.to_string())
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page.to_string())
    }

    /// Add a pass-through query parameter
    ///
    /// The reserved `public` key sets `public_only` instead of being stored.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = canonical_key(&key.into());
        let value = value.into();
        if key.eq_ignore_ascii_case(PUBLIC_KEY) {
            self.public_only = is_truthy(&value);
        } else {
            self.extra_query.insert(key, value);
        }
        self
    }

    /// Build options from a loose key/value mapping
    ///
    /// Keys may be given as `public`, `:public` or with surrounding
    /// whitespace; all spell the same option.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |options, (k, v)| {
                options.param(k.as_ref(), v.to_string())
            })
    }

    /// Query pairs sent with GET and DELETE requests
    pub fn query(&self) -> Vec<(String, String)> {
        self.extra_query
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// JSON body sent with PUT requests, `None` when there is nothing to send
    pub fn body(&self) -> Option<Value> {
        if self.extra_query.is_empty() {
            return None;
        }
        let map: Map<String, Value> = self
            .extra_query
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Some(Value::Object(map))
    }
}

fn canonical_key(key: &str) -> String {
    let key = key.trim();
    key.strip_prefix(':').unwrap_or(key).to_string()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
