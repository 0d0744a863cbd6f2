use gloo_net::http::Request;

const API_BASE: &str = "/api/v1/auth";

/// Fetch the namespaces the current user may switch to.
pub async fn available_namespaces() -> Result<Vec<String>, String> {
    let url = format!("{}/available_namespaces", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<String> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Ask the backend to make `namespace` the active one for this session.
pub async fn set_namespace(namespace: &str) -> Result<(), String> {
    let url = format!("{}/set_namespace", API_BASE);

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(set_namespace_body(namespace))
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Namespace change failed: {}", response.status()));
    }

    Ok(())
}

/// URL-encoded form body for the namespace-change request.
pub fn set_namespace_body(namespace: &str) -> String {
    format!("namespace={}", urlencoding::encode(namespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_namespace_body() {
        assert_eq!(set_namespace_body("namespace1"), "namespace=namespace1");
        assert_eq!(set_namespace_body("my team"), "namespace=my%20team");
        assert_eq!(set_namespace_body("a/b&c=d"), "namespace=a%2Fb%26c%3Dd");
    }
}
