//! Static command schema table.
//!
//! Each entry declares the HTTP verb, URL template relative to the
//! `/rest/v{version}` prefix, parameter placement rules, and whether the
//! command takes array-valued identifiers that must serialize as repeated
//! bare keys (`id=1&id=2`) on the wire.

use http::Method;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Where a declared parameter is placed in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into a `{placeholder}` path segment
    Path,
    /// Appended to the query string
    Query,
    /// Placed in the JSON request body
    Body,
}

/// A declared parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name
    pub name: &'static str,
    /// Placement in the request
    pub placement: Placement,
    /// Whether the parameter must be present
    pub required: bool,
}

impl ParamSpec {
    const fn path(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Path,
            required: true,
        }
    }

    const fn query(name: &'static str, required: bool) -> Self {
        Self {
            name,
            placement: Placement::Query,
            required,
        }
    }

    const fn body(name: &'static str, required: bool) -> Self {
        Self {
            name,
            placement: Placement::Body,
            required,
        }
    }
}

/// A command schema entry
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Unique command name
    pub name: &'static str,
    /// HTTP verb
    pub method: Method,
    /// URL template relative to the REST prefix, may contain `{placeholders}`
    pub path: &'static str,
    /// Declared parameters
    pub params: &'static [ParamSpec],
    /// Parameter rewritten from indexed to repeated bare keys, when the
    /// command takes array-valued identifiers. A static property of the
    /// command, never inferred from the argument shape.
    pub repeated_param: Option<&'static str>,
}

/// The command catalog
pub static CATALOG: &[CommandSpec] = &[
    CommandSpec {
        name: "createOrUpdateLeads",
        method: Method::POST,
        path: "leads.json",
        params: &[
            ParamSpec::body("action", true),
            ParamSpec::body("input", true),
            ParamSpec::body("lookupField", false),
            ParamSpec::body("partitionName", false),
        ],
        repeated_param: None,
    },
    CommandSpec {
        name: "getLead",
        method: Method::GET,
        path: "leads/{id}.json",
        params: &[ParamSpec::path("id")],
        repeated_param: None,
    },
    CommandSpec {
        name: "getLeadsByFilterType",
        method: Method::GET,
        path: "leads.json",
        params: &[
            ParamSpec::query("filterType", true),
            ParamSpec::query("filterValues", true),
            ParamSpec::query("fields", false),
            ParamSpec::query("batchSize", false),
            ParamSpec::query("nextPageToken", false),
        ],
        repeated_param: None,
    },
    CommandSpec {
        name: "getLeadsByList",
        method: Method::GET,
        path: "lists/{listId}/leads.json",
        params: &[
            ParamSpec::path("listId"),
            ParamSpec::query("fields", false),
            ParamSpec::query("batchSize", false),
            ParamSpec::query("nextPageToken", false),
        ],
        repeated_param: None,
    },
    CommandSpec {
        name: "getLists",
        method: Method::GET,
        path: "lists.json",
        params: &[
            ParamSpec::query("id", false),
            ParamSpec::query("name", false),
            ParamSpec::query("programName", false),
            ParamSpec::query("workspaceName", false),
            ParamSpec::query("batchSize", false),
            ParamSpec::query("nextPageToken", false),
        ],
        repeated_param: Some("id"),
    },
    CommandSpec {
        name: "getList",
        method: Method::GET,
        path: "lists/{id}.json",
        params: &[ParamSpec::path("id")],
        repeated_param: None,
    },
    CommandSpec {
        name: "isMemberOfList",
        method: Method::GET,
        path: "lists/{listId}/leads/ismember.json",
        params: &[ParamSpec::path("listId"), ParamSpec::query("id", true)],
        repeated_param: Some("id"),
    },
    CommandSpec {
        name: "addLeadsToList",
        method: Method::POST,
        path: "lists/{listId}/leads.json",
        params: &[ParamSpec::path("listId"), ParamSpec::query("id", true)],
        repeated_param: Some("id"),
    },
    CommandSpec {
        name: "removeLeadsFromList",
        method: Method::POST,
        path: "lists/{listId}/leads.json?_method=DELETE",
        params: &[ParamSpec::path("listId"), ParamSpec::query("id", true)],
        repeated_param: Some("id"),
    },
    CommandSpec {
        name: "getCampaign",
        method: Method::GET,
        path: "campaigns/{id}.json",
        params: &[ParamSpec::path("id")],
        repeated_param: None,
    },
    CommandSpec {
        name: "getCampaigns",
        method: Method::GET,
        path: "campaigns.json",
        params: &[
            ParamSpec::query("id", false),
            ParamSpec::query("name", false),
            ParamSpec::query("programName", false),
            ParamSpec::query("workspaceName", false),
            ParamSpec::query("batchSize", false),
            ParamSpec::query("nextPageToken", false),
        ],
        repeated_param: Some("id"),
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static CommandSpec>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(CATALOG.len());
    for spec in CATALOG {
        let existing = index.insert(spec.name, spec);
        debug_assert!(existing.is_none(), "duplicate command {}", spec.name);
    }
    index
});

/// Look up a command by name
pub fn command(name: &str) -> Option<&'static CommandSpec> {
    INDEX.get(name).copied()
}
