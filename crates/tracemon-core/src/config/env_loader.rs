//! Environment variable-based configuration overrides

use super::model::Config;
use crate::error::{TracemonError, TracemonResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Apply `TRACEMON_*` overrides to `config`, reading variables through `lookup`
///
/// Empty values are ignored. Unparseable numbers are configuration errors.
pub fn apply_env<F>(mut config: Config, lookup: F) -> TracemonResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(program) = get("TRACEMON_MONITOR_PROGRAM") {
        config.monitor.program = program;
    }
    if let Some(args) = get("TRACEMON_MONITOR_ARGS") {
        config.monitor.args = args.split_whitespace().map(String::from).collect();
    }
    if let Some(dir) = get("TRACEMON_MONITOR_WORKING_DIR") {
        config.monitor.working_dir = Some(PathBuf::from(dir));
    }
    if let Some(raw) = get("TRACEMON_MONITOR_TIMEOUT_SECS") {
        config.monitor.timeout_secs = Some(parse_var("TRACEMON_MONITOR_TIMEOUT_SECS", &raw)?);
    }
    if let Some(raw) = get("TRACEMON_MONITOR_MAX_CONCURRENT") {
        config.monitor.max_concurrent = Some(parse_var("TRACEMON_MONITOR_MAX_CONCURRENT", &raw)?);
    }

    if let Some(dir) = get("TRACEMON_TRACE_DIR") {
        config.storage.trace_dir = PathBuf::from(dir);
    }

    if let Some(host) = get("TRACEMON_HOST") {
        config.server.host = host;
    }
    if let Some(raw) = get("TRACEMON_PORT") {
        config.server.port = parse_var("TRACEMON_PORT", &raw)?;
    }
    if let Some(raw) = get("TRACEMON_MAX_BODY_BYTES") {
        config.server.max_body_bytes = parse_var("TRACEMON_MAX_BODY_BYTES", &raw)?;
    }

    if let Some(level) = get("TRACEMON_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(raw) = get("TRACEMON_LOG_FORMAT") {
        config.logging.format = raw
            .parse()
            .map_err(|e: String| TracemonError::config_with_context(e, "TRACEMON_LOG_FORMAT"))?;
    }

    Ok(config)
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> TracemonResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| TracemonError::config_with_context(format!("Invalid {} value: {}", key, raw), key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_variables_keeps_config() {
        let config = apply_env(Config::default(), env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = apply_env(
            Config::default(),
            env(&[
                ("TRACEMON_MONITOR_PROGRAM", "tessla"),
                ("TRACEMON_MONITOR_ARGS", "interpreter  spec.tessla"),
                ("TRACEMON_MONITOR_TIMEOUT_SECS", "15"),
                ("TRACEMON_TRACE_DIR", "/tmp/traces"),
                ("TRACEMON_PORT", "8081"),
                ("TRACEMON_LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.monitor.program, "tessla");
        assert_eq!(config.monitor.args, vec!["interpreter", "spec.tessla"]);
        assert_eq!(config.monitor.timeout_secs, Some(15));
        assert_eq!(config.storage.trace_dir, PathBuf::from("/tmp/traces"));
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = apply_env(Config::default(), env(&[("TRACEMON_HOST", "  ")])).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = apply_env(Config::default(), env(&[("TRACEMON_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("TRACEMON_PORT"));
        assert_eq!(err.source_hint(), Some("TRACEMON_PORT"));
    }
}
