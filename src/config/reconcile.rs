//! Three-way configuration merging
// (c) 2024 Ross Younger

use tracing::trace;

use super::{Configuration, FIELDS};

/// Folds `over` onto `base`, field by field, and returns the merged configuration.
///
/// If either side is absent the other is returned as-is. Otherwise, for each field where the two differ:
/// * if `over` holds a non-default value, it wins;
/// * if `over` holds the schema default, it wins only if `host_args` mention the field
///   (by `-name` or `-alias`); otherwise `base` keeps its value.
///
/// **Caution:** A configuration file that explicitly sets a field to its default is indistinguishable
/// from one that never mentions it, so it cannot override a non-default value underneath it unless
/// the same field also appears on the command line.
#[must_use]
pub fn reconcile(
    base: Option<Configuration>,
    over: Option<Configuration>,
    host_args: &[String],
) -> Option<Configuration> {
    let (mut merged, over) = match (base, over) {
        (None, over) => return over,
        (base, None) => return base,
        (Some(base), Some(over)) => (base, over),
    };

    for field in FIELDS {
        if !field.differs(&merged, &over) {
            continue;
        }
        if !field.is_default(&over) {
            trace!("{}: override value {} wins", field.long, field.render(&over));
            field.copy(&mut merged, &over);
        } else if field.appears_in(host_args) {
            trace!("{}: explicit default on the command line", field.long);
            field.copy(&mut merged, &over);
        }
    }
    Some(merged)
}

#[cfg(test)]
mod test {
    use super::reconcile;
    use crate::config::{Configuration, LogLevel};

    fn tokens(t: &[&str]) -> Vec<String> {
        t.iter().map(ToString::to_string).collect()
    }

    fn with_loglevel(loglevel: LogLevel) -> Configuration {
        Configuration {
            loglevel,
            ..Default::default()
        }
    }

    #[test]
    fn absent_sides() {
        let x = with_loglevel(LogLevel::Info);
        assert_eq!(reconcile(None, Some(x.clone()), &[]), Some(x.clone()));
        assert_eq!(reconcile(Some(x.clone()), None, &[]), Some(x));
        assert_eq!(reconcile(None, None, &[]), None);
    }

    #[test]
    fn override_wins() {
        let base = Configuration {
            loglevel: LogLevel::Info,
            repl: true,
            ..Default::default()
        };
        let over = Configuration {
            loglevel: LogLevel::Debug,
            script: "a.csx".into(),
            ..Default::default()
        };
        let merged = reconcile(Some(base), Some(over), &[]).unwrap();
        assert_eq!(merged.loglevel, LogLevel::Debug);
        assert_eq!(merged.script, "a.csx");
        // untouched by the override
        assert!(merged.repl);
    }

    #[test]
    fn base_preserved_when_not_mentioned() {
        let base = with_loglevel(LogLevel::Info);
        let over = Configuration::default();
        let merged = reconcile(Some(base.clone()), Some(over), &tokens(&["--repl"])).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn explicit_default_on_command_line() {
        let base = with_loglevel(LogLevel::Info);
        let over = with_loglevel(LogLevel::Warn);
        let merged = reconcile(Some(base), Some(over), &tokens(&["--loglevel", "warn"])).unwrap();
        assert_eq!(merged.loglevel, LogLevel::Warn);
    }

    #[test]
    fn explicit_default_via_alias() {
        let base = Configuration {
            install: "pkg".into(),
            ..Default::default()
        };
        let over = Configuration::default();
        let merged = reconcile(Some(base), Some(over), &tokens(&["-i", ""])).unwrap();
        assert_eq!(merged.install, "");
    }

    #[test]
    fn idempotent() {
        let h = tokens(&["--debug"]);
        let base = Configuration {
            loglevel: LogLevel::Info,
            debug: true,
            output: "out.dll".into(),
            ..Default::default()
        };
        let over = Configuration {
            loglevel: LogLevel::Trace,
            watch: true,
            ..Default::default()
        };
        let once = reconcile(Some(base), Some(over.clone()), &h);
        let twice = reconcile(once.clone(), Some(over), &h);
        assert_eq!(once, twice);
    }

    #[test]
    fn file_cannot_reset_to_default() {
        // Known limitation: the local file says "warn" (the default) explicitly,
        // but without a command-line mention the global "info" survives.
        let global = with_loglevel(LogLevel::Info);
        let local = with_loglevel(LogLevel::Warn);
        let merged = reconcile(Some(global), Some(local), &[]).unwrap();
        assert_eq!(merged.loglevel, LogLevel::Info);
    }

    #[test]
    fn substring_in_value_counts_as_mention() {
        // Known limitation: `x-debug.csx` contains `-debug`, so the default `false`
        // from the command line replaces the file's `true`.
        let base = Configuration {
            debug: true,
            ..Default::default()
        };
        let over = Configuration {
            script: "x-debug.csx".into(),
            ..Default::default()
        };
        let merged = reconcile(Some(base), Some(over), &tokens(&["x-debug.csx"])).unwrap();
        assert!(!merged.debug);
        assert_eq!(merged.script, "x-debug.csx");
    }

    #[test]
    fn field_set_unchanged() {
        let merged = reconcile(
            Some(Configuration::default()),
            Some(with_loglevel(LogLevel::Error)),
            &[],
        )
        .unwrap();
        let expected = with_loglevel(LogLevel::Error);
        assert_eq!(merged, expected);
    }
}
