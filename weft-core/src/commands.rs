//! Builtin command schemas
//!
//! The single source of truth for every remote command's contract. The
//! client encoder and the host dispatcher both resolve schemas from this
//! table, so the two processes can never disagree on a field set.

use crate::schema::{ArgsSpec, CommandSchema, FieldKind, FieldSpec, OptionSpec};

/// Schema for `set-colors`: change live (and optionally configured) colors
/// across matched windows.
pub const SET_COLORS: CommandSchema = CommandSchema {
    name: "set-colors",
    fields: &[
        FieldSpec {
            name: "colors",
            kind: FieldKind::Map,
            required: true,
        },
        FieldSpec {
            name: "match_window",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "match_tab",
            kind: FieldKind::Str,
            required: false,
        },
        FieldSpec {
            name: "all",
            kind: FieldKind::Bool,
            required: false,
        },
        FieldSpec {
            name: "configured",
            kind: FieldKind::Bool,
            required: false,
        },
        FieldSpec {
            name: "reset",
            kind: FieldKind::Bool,
            required: false,
        },
    ],
    options: &[
        OptionSpec {
            long: "all",
            short: Some('a'),
            kind: FieldKind::Bool,
            help: "Change colors in all windows, not just the active one",
        },
        OptionSpec {
            long: "configured",
            short: Some('c'),
            kind: FieldKind::Bool,
            help: "Also change the configured colors used for new windows",
        },
        OptionSpec {
            long: "reset",
            short: None,
            kind: FieldKind::Bool,
            help: "Restore colors to their startup values (implies --all --configured)",
        },
        OptionSpec {
            long: "match",
            short: Some('m'),
            kind: FieldKind::Str,
            help: "Window to change colors in",
        },
        OptionSpec {
            long: "match-tab",
            short: Some('t'),
            kind: FieldKind::Str,
            help: "Tab to change colors in",
        },
    ],
    args: ArgsSpec {
        placeholder: "COLOR_OR_FILE ...",
        field: Some("colors"),
    },
    no_response: false,
};

/// All builtin command schemas, in registration order.
pub fn builtin() -> &'static [&'static CommandSchema] {
    &[&SET_COLORS]
}

/// Look up a builtin schema by command name.
pub fn schema_for(name: &str) -> Option<&'static CommandSchema> {
    builtin().iter().copied().find(|s| s.name == name)
}
