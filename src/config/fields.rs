//! Field descriptor table
// (c) 2024 Ross Younger

use std::sync::LazyLock;

use super::Configuration;

static DEFAULTS: LazyLock<Configuration> = LazyLock::new(Configuration::default);

/// Describes one member of [`Configuration`] in a type-erased way,
/// so that generic code can walk every field without knowing its type.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Struct member name
    pub name: &'static str,
    /// Long command-line name; also the key in option files
    pub long: &'static str,
    /// Short forms and aliases accepted on the command line
    pub aliases: &'static [&'static str],
    differs: fn(&Configuration, &Configuration) -> bool,
    is_default: fn(&Configuration) -> bool,
    copy: fn(&mut Configuration, &Configuration),
    render: fn(&Configuration) -> String,
}

impl Field {
    /// Whether this field holds different values in `a` and `b`
    #[must_use]
    pub fn differs(&self, a: &Configuration, b: &Configuration) -> bool {
        (self.differs)(a, b)
    }

    /// Whether this field in `config` holds the schema default
    #[must_use]
    pub fn is_default(&self, config: &Configuration) -> bool {
        (self.is_default)(config)
    }

    /// Copies this field from `src` into `dst`
    pub fn copy(&self, dst: &mut Configuration, src: &Configuration) {
        (self.copy)(dst, src);
    }

    /// Formats this field's value in `config`
    #[must_use]
    pub fn render(&self, config: &Configuration) -> String {
        (self.render)(config)
    }

    /// Whether any token mentions this field by `-name` or `-alias`.
    ///
    /// This is a substring match, so `--loglevel`, `-loglevel` and `--loglevel=info`
    /// all count.
    #[must_use]
    pub fn appears_in(&self, tokens: &[String]) -> bool {
        std::iter::once(self.long)
            .chain(self.aliases.iter().copied())
            .map(|name| format!("-{name}"))
            .any(|needle| tokens.iter().any(|t| t.contains(&needle)))
    }
}

macro_rules! field {
    ($name:ident, $long:literal $(, $alias:literal)*) => {
        Field {
            name: stringify!($name),
            long: $long,
            aliases: &[$($alias),*],
            differs: |a, b| a.$name != b.$name,
            is_default: |c| c.$name == DEFAULTS.$name,
            copy: |dst, src| dst.$name.clone_from(&src.$name),
            render: |c| c.$name.to_string(),
        }
    };
}

/// Every member of [`Configuration`], in declaration order.
///
/// The aliases here must agree with the `short` and `alias` settings on the struct.
pub static FIELDS: &[Field] = &[
    field!(script, "script"),
    field!(repl, "repl", "r"),
    field!(debug, "debug", "d"),
    field!(cache, "cache"),
    field!(loglevel, "loglevel", "log"),
    field!(install, "install", "i"),
    field!(global, "global", "g"),
    field!(save, "save"),
    field!(clean, "clean"),
    field!(allow_prerelease, "allow-prerelease", "pre"),
    field!(version, "version", "v"),
    field!(modules, "modules"),
    field!(output, "output", "o"),
    field!(watch, "watch", "w"),
    field!(config, "config"),
];
