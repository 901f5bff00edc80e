use super::*;

fn client(base_url: &str) -> ArmyForgeClient {
    ArmyForgeClient::new(ClientOptions {
        base_url: base_url.to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_listing_url() {
    let client = client(DEFAULT_BASE_URL);
    let request = client.listing_request(GameSystem::GrimdarkFuture).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://army-forge.onepagerules.com/api/army-books?filters=official&gameSystemSlug=grimdark-future"
    );
}

#[test]
fn test_detail_url() {
    let client = client(DEFAULT_BASE_URL);
    let request = client.detail_request("abc123", 3).unwrap();
    assert_eq!(
        request.url().as_str(),
        "https://army-forge.onepagerules.com/api/army-books/abc123?gameSystem=3"
    );
}

#[test]
fn test_trailing_slash_base_url() {
    let client = client("http://localhost:8080/api/");
    let request = client.detail_request("xyz789", 2).unwrap();
    assert_eq!(
        request.url().as_str(),
        "http://localhost:8080/api/army-books/xyz789?gameSystem=2"
    );
}

#[test]
fn test_uid_is_path_encoded() {
    let client = client(DEFAULT_BASE_URL);
    let request = client.detail_request("a/b c", 2).unwrap();
    assert_eq!(request.url().path(), "/api/army-books/a%2Fb%20c");
}

#[test]
fn test_invalid_base_url() {
    let result = ArmyForgeClient::new(ClientOptions {
        base_url: "not a url".to_string(),
        ..Default::default()
    });
    assert!(matches!(result, Err(ForgeError::Config(_))));

    let result = ArmyForgeClient::new(ClientOptions {
        base_url: "mailto:someone@example.com".to_string(),
        ..Default::default()
    });
    assert!(matches!(result, Err(ForgeError::Config(_))));
}

#[test]
fn test_excerpt_is_char_safe() {
    let text = "é".repeat(300);
    let short = excerpt(&text);
    assert_eq!(short.chars().count(), 200);
    assert_eq!(excerpt("short"), "short");
}

#[test]
fn test_status_error() {
    let err = ForgeError::Status {
        status: 500,
        url: "http://x/army-books".to_string(),
    };
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Server error (HTTP 500) for http://x/army-books");
    assert_eq!(ForgeError::api("bad").status(), None);
}
