//! Command resolution: argument bag -> request descriptor.

use super::catalog::{command, CommandSpec, Placement};
use super::fixup::fix_repeated_params;
use crate::errors::{CommandError, MarketoResult};
use http::Method;
use serde_json::Value;
use url::Url;

/// A parameter value supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Array of numeric identifiers
    IntList(Vec<i64>),
    /// Array of strings
    StrList(Vec<String>),
    /// Arbitrary JSON payload (lead input arrays and the like)
    Json(Value),
}

impl ParamValue {
    /// Render the value as a path segment, when it is scalar
    fn as_path_segment(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Expand the value into query pairs. List values produce the naive
    /// indexed form (`id[0]=1&id[1]=2`); the fix-up flattens them for
    /// commands flagged with a repeated parameter.
    fn query_pairs(&self, name: &str) -> Vec<(String, String)> {
        match self {
            ParamValue::Str(s) => vec![(name.to_string(), s.clone())],
            ParamValue::Int(i) => vec![(name.to_string(), i.to_string())],
            ParamValue::Bool(b) => vec![(name.to_string(), b.to_string())],
            ParamValue::IntList(values) => values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("{}[{}]", name, i), v.to_string()))
                .collect(),
            ParamValue::StrList(values) => values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("{}[{}]", name, i), v.clone()))
                .collect(),
            ParamValue::Json(value) => vec![(name.to_string(), value.to_string())],
        }
    }

    /// Convert the value into a JSON body value
    fn into_json(self) -> Value {
        match self {
            ParamValue::Str(s) => Value::String(s),
            ParamValue::Int(i) => Value::from(i),
            ParamValue::Bool(b) => Value::Bool(b),
            ParamValue::IntList(values) => Value::from(values),
            ParamValue::StrList(values) => Value::from(values),
            ParamValue::Json(value) => value,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<i64>> for ParamValue {
    fn from(value: Vec<i64>) -> Self {
        ParamValue::IntList(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::StrList(value)
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::Json(value)
    }
}

/// Insertion-ordered argument mapping, constructed fresh per call
#[derive(Debug, Clone, Default)]
pub struct Args {
    entries: Vec<(String, ParamValue)>,
}

impl Args {
    /// Create an empty argument mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder-style
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add an argument
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Whether an argument is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    fn take(&mut self, name: &str) -> Option<ParamValue> {
        let position = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(position).1)
    }

    fn into_entries(self) -> Vec<(String, ParamValue)> {
        self.entries
    }
}

impl<N: Into<String>, V: Into<ParamValue>> Extend<(N, V)> for Args {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// A resolved request, consumed immediately by the executor
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Absolute URL with substituted placeholders and populated query
    pub url: Url,
    /// JSON body for POST-style commands
    pub body: Option<Value>,
}

/// Resolves command names and argument bags into request descriptors
#[derive(Debug, Clone)]
pub struct CommandResolver {
    // Absolute REST base, e.g. https://123-abc.mktorest.com/rest/v1
    rest_base: String,
}

impl CommandResolver {
    /// Create a resolver rooted at the given REST base URL
    pub fn new(rest_base: impl Into<String>) -> Self {
        Self {
            rest_base: rest_base.into(),
        }
    }

    /// Resolve a command name and argument mapping into a request descriptor.
    ///
    /// Fails before any network activity when the command is unknown or a
    /// required parameter is absent.
    pub fn resolve(&self, name: &str, mut args: Args) -> MarketoResult<RequestDescriptor> {
        let spec = command(name).ok_or_else(|| CommandError::UnknownCommand {
            name: name.to_string(),
        })?;

        for param in spec.params.iter().filter(|p| p.required) {
            if !args.contains(param.name) {
                return Err(CommandError::MissingParameter {
                    command: spec.name.to_string(),
                    parameter: param.name.to_string(),
                }
                .into());
            }
        }

        let path = self.substitute_path(spec, &mut args)?;
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.rest_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
        .map_err(|e| CommandError::InvalidUrl {
            command: spec.name.to_string(),
            message: e.to_string(),
        })?;

        let mut query_pairs: Vec<(String, String)> = Vec::new();
        let mut body_fields: serde_json::Map<String, Value> = serde_json::Map::new();
        let body_style = spec
            .params
            .iter()
            .any(|p| p.placement == Placement::Body);

        for param in spec.params.iter().filter(|p| p.placement != Placement::Path) {
            if let Some(value) = args.take(param.name) {
                match param.placement {
                    Placement::Query => query_pairs.extend(value.query_pairs(param.name)),
                    Placement::Body => {
                        body_fields.insert(param.name.to_string(), value.into_json());
                    }
                    Placement::Path => unreachable!(),
                }
            }
        }

        // Undeclared arguments pass through verbatim (forward compatibility)
        for (name, value) in args.into_entries() {
            if body_style {
                body_fields.insert(name, value.into_json());
            } else {
                query_pairs.extend(value.query_pairs(&name));
            }
        }

        if !query_pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(query_pairs);
        }

        if let Some(repeated) = spec.repeated_param {
            let fixed = fix_repeated_params(url.as_str(), repeated);
            url = Url::parse(&fixed).map_err(|e| CommandError::InvalidUrl {
                command: spec.name.to_string(),
                message: e.to_string(),
            })?;
        }

        let body = if body_fields.is_empty() {
            None
        } else {
            Some(Value::Object(body_fields))
        };

        Ok(RequestDescriptor {
            method: spec.method.clone(),
            url,
            body,
        })
    }

    fn substitute_path(&self, spec: &CommandSpec, args: &mut Args) -> MarketoResult<String> {
        let mut path = spec.path.to_string();
        for param in spec.params.iter().filter(|p| p.placement == Placement::Path) {
            // Required-parameter check above guarantees presence
            let value = args.take(param.name).ok_or_else(|| CommandError::MissingParameter {
                command: spec.name.to_string(),
                parameter: param.name.to_string(),
            })?;
            let segment = value.as_path_segment().ok_or_else(|| CommandError::InvalidUrl {
                command: spec.name.to_string(),
                message: format!("parameter '{}' is not scalar", param.name),
            })?;
            path = path.replace(&format!("{{{}}}", param.name), &segment);
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketoError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolver() -> CommandResolver {
        CommandResolver::new("https://app.example.com/rest/v1")
    }

    #[test]
    fn test_resolve_get_with_path_placeholder() {
        let descriptor = resolver()
            .resolve("getLead", Args::new().set("id", 42))
            .unwrap();

        assert_eq!(descriptor.method, Method::GET);
        assert_eq!(
            descriptor.url.as_str(),
            "https://app.example.com/rest/v1/leads/42.json"
        );
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_resolve_query_params_in_declared_order() {
        let args = Args::new()
            .set("filterValues", "a@b.com")
            .set("filterType", "email");
        let descriptor = resolver().resolve("getLeadsByFilterType", args).unwrap();

        // declared order, not insertion order
        assert_eq!(
            descriptor.url.query().unwrap(),
            "filterType=email&filterValues=a%40b.com"
        );
    }

    #[test]
    fn test_resolve_post_body() {
        let args = Args::new()
            .set("action", "createOnly")
            .set("lookupField", "email")
            .set("input", json!([{"email": "a@b.com"}]));
        let descriptor = resolver().resolve("createOrUpdateLeads", args).unwrap();

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(
            descriptor.url.as_str(),
            "https://app.example.com/rest/v1/leads.json"
        );
        assert_eq!(
            descriptor.body.unwrap(),
            json!({
                "action": "createOnly",
                "lookupField": "email",
                "input": [{"email": "a@b.com"}]
            })
        );
    }

    #[test]
    fn test_resolve_repeated_ids_flattened() {
        let args = Args::new().set("listId", 100).set("id", vec![1i64, 2, 3]);
        let descriptor = resolver().resolve("isMemberOfList", args).unwrap();

        assert_eq!(
            descriptor.url.as_str(),
            "https://app.example.com/rest/v1/lists/100/leads/ismember.json?id=1&id=2&id=3"
        );
    }

    #[test]
    fn test_resolve_unflagged_command_keeps_indexed_ids() {
        let args = Args::new()
            .set("filterType", "id")
            .set("filterValues", "1,2")
            .set("custom", vec![7i64, 8]);
        let descriptor = resolver().resolve("getLeadsByFilterType", args).unwrap();

        let query = descriptor.url.query().unwrap();
        assert!(query.contains("custom%5B0%5D=7"));
        assert!(query.contains("custom%5B1%5D=8"));
    }

    #[test]
    fn test_resolve_remove_leads_keeps_method_override() {
        let args = Args::new().set("listId", 100).set("id", vec![1i64, 2]);
        let descriptor = resolver().resolve("removeLeadsFromList", args).unwrap();

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(
            descriptor.url.as_str(),
            "https://app.example.com/rest/v1/lists/100/leads.json?_method=DELETE&id=1&id=2"
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = resolver().resolve("describeLead", Args::new()).unwrap_err();
        assert!(matches!(
            err,
            MarketoError::Command(CommandError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = resolver().resolve("getList", Args::new()).unwrap_err();
        match err {
            MarketoError::Command(CommandError::MissingParameter { command, parameter }) => {
                assert_eq!(command, "getList");
                assert_eq!(parameter, "id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_params_pass_through_to_query() {
        let args = Args::new().set("id", 7).set("fields", "email,firstName");
        let descriptor = resolver().resolve("getLead", args).unwrap();

        assert_eq!(
            descriptor.url.query().unwrap(),
            "fields=email%2CfirstName"
        );
    }

    #[test]
    fn test_extra_params_pass_through_to_body() {
        let args = Args::new()
            .set("action", "createOnly")
            .set("input", json!([]))
            .set("asyncProcessing", true);
        let descriptor = resolver().resolve("createOrUpdateLeads", args).unwrap();

        assert_eq!(
            descriptor.body.unwrap().get("asyncProcessing").unwrap(),
            &json!(true)
        );
    }

    #[test]
    fn test_every_command_resolves_with_complete_args() {
        let complete: &[(&str, Args)] = &[
            (
                "createOrUpdateLeads",
                Args::new().set("action", "createOrUpdate").set("input", json!([])),
            ),
            ("getLead", Args::new().set("id", 1)),
            (
                "getLeadsByFilterType",
                Args::new().set("filterType", "email").set("filterValues", "x@y.z"),
            ),
            ("getLeadsByList", Args::new().set("listId", 1)),
            ("getLists", Args::new()),
            ("getList", Args::new().set("id", 1)),
            (
                "isMemberOfList",
                Args::new().set("listId", 1).set("id", vec![1i64]),
            ),
            (
                "addLeadsToList",
                Args::new().set("listId", 1).set("id", vec![1i64]),
            ),
            (
                "removeLeadsFromList",
                Args::new().set("listId", 1).set("id", vec![1i64]),
            ),
            ("getCampaign", Args::new().set("id", 1)),
            ("getCampaigns", Args::new()),
        ];

        for (name, args) in complete {
            let spec = crate::commands::command(name).unwrap();
            let descriptor = resolver().resolve(name, args.clone()).unwrap();
            assert_eq!(descriptor.method, spec.method, "method for {name}");
            assert!(
                descriptor.url.path().starts_with("/rest/v1/"),
                "prefix for {name}"
            );
        }
    }
}
