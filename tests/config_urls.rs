use formpoint::config::Settings;

fn settings_with_api(api_base_url: &str) -> Settings {
    Settings {
        api_base_url: api_base_url.to_string(),
        payment_base_url: "http://localhost:8081/api/v1".to_string(),
        payment_client_key: None,
        access_token: None,
    }
}

#[test]
fn ws_endpoint_strips_the_rest_prefix() {
    let settings = settings_with_api("http://localhost:8080/api/v1");
    assert_eq!(settings.ws_url(), "ws://localhost:8080/ws");
}

#[test]
fn ws_endpoint_upgrades_https_to_wss() {
    let settings = settings_with_api("https://api.formpoint.example/api/v1");
    assert_eq!(settings.ws_url(), "wss://api.formpoint.example/ws");
}
