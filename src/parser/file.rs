// Option file parsing
// (c) 2024 Ross Younger

use anyhow::Result;
use figment::{
    providers::{Format as _, Json, Serialized},
    Figment,
};

use super::{ConfigFileError, ConfigFileParser};
use crate::config::Configuration;

/// Parses JSON option files with `figment`.
///
/// The schema defaults sit underneath the file, so anything it does not mention comes out
/// at its default. Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigFileParser {}

impl ConfigFileParser for JsonConfigFileParser {
    fn parse(&self, text: Option<&str>) -> Result<Option<Configuration>> {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Ok(None);
        };
        let config = Figment::new()
            .merge(Serialized::defaults(Configuration::default()))
            .merge(Json::string(text))
            .extract::<Configuration>()
            .map_err(ConfigFileError::from)?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod test {
    use super::JsonConfigFileParser;
    use crate::config::{Configuration, LogLevel};
    use crate::parser::ConfigFileParser as _;
    use assertables::assert_contains;

    #[test]
    fn absent_or_blank() {
        let p = JsonConfigFileParser::default();
        assert_eq!(p.parse(None).unwrap(), None);
        assert_eq!(p.parse(Some("")).unwrap(), None);
        assert_eq!(p.parse(Some("  \n")).unwrap(), None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed = JsonConfigFileParser::default()
            .parse(Some(
                r#"{ "loglevel": "info", "allow-prerelease": true, "unused__": 42 }"#,
            ))
            .unwrap()
            .unwrap();
        let expected = Configuration {
            loglevel: LogLevel::Info,
            allow_prerelease: true,
            ..Default::default()
        };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn type_error_names_key() {
        let err = JsonConfigFileParser::default()
            .parse(Some(r#"{ "repl": "sometimes" }"#))
            .unwrap_err();
        assert_contains!(err.to_string(), "repl");
    }

    #[test]
    fn bad_variant_lists_choices() {
        let err = JsonConfigFileParser::default()
            .parse(Some(r#"{ "loglevel": "loud" }"#))
            .unwrap_err();
        let msg = err.to_string();
        assert_contains!(msg, "loud");
        assert_contains!(msg, "warn");
    }

    #[test]
    fn syntax_error() {
        let result = JsonConfigFileParser::default().parse(Some("{ loglevel = info"));
        assert!(result.is_err());
    }
}
