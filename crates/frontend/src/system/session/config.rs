use contracts::system::session::AppConfig;

const CONFIG_ELEMENT_ID: &str = "zbase-config";

/// Parse the bootstrap config JSON shipped by the host page.
pub fn parse_config(raw: &str) -> Result<AppConfig, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Read the embedded `#zbase-config` script tag from the current document.
pub fn load_config() -> Result<AppConfig, String> {
    let document = web_sys::window()
        .ok_or_else(|| "window is not available".to_string())?
        .document()
        .ok_or_else(|| "document is not available".to_string())?;

    let element = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| format!("#{} element not found", CONFIG_ELEMENT_ID))?;

    parse_config(&element.text_content().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"{"current_user": {"userid": "alice@acme.test", "namespace": "acme"}}"#,
        )
        .unwrap();
        assert_eq!(config.current_user.userid, "alice@acme.test");
        assert_eq!(config.current_user.namespace, "acme");
    }

    #[test]
    fn test_parse_config_rejects_malformed_input() {
        assert!(parse_config("").is_err());
        assert!(parse_config("{}").is_err());
        assert!(parse_config(r#"{"current_user": {"userid": "alice"}}"#).is_err());
    }
}
