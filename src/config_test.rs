use super::*;

#[test]
fn configured_domain_uses_tls_origins() {
    let origin = api_origin(Some("gate.skola.sk"), "http://localhost:8080");
    assert_eq!(origin, "https://gate.skola.sk");
    assert_eq!(ws_base_from_origin(&origin), "wss://gate.skola.sk");
}

#[test]
fn blank_domain_falls_back_to_page_origin() {
    assert_eq!(api_origin(Some("  "), "http://localhost:8080/"), "http://localhost:8080");
    assert_eq!(api_origin(None, "https://brana.example.org"), "https://brana.example.org");
}

#[test]
fn socket_base_follows_page_scheme() {
    assert_eq!(ws_base_from_origin("http://localhost:8080"), "ws://localhost:8080");
    assert_eq!(ws_base_from_origin("https://brana.example.org/"), "wss://brana.example.org");
}
