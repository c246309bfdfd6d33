//! Integration tests for rate fetching using wiremock

use bounty_board::config::Config;
use bounty_board::rates::{GOLD_RATE_KEY, RateFetcher, to_erg_value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POOL_TOKEN_ID: &str = "011d3364de07e5a26f0c4eef0852cddb387039a921b7154ef3cab22c6eda887f";

const MARKET_BODY: &str = r#"[
    { "baseSymbol": "ERG", "quoteSymbol": "SigUSD", "lastPrice": 0.82, "baseVolume": { "value": 5000.0 } },
    { "baseSymbol": "ERG", "quoteSymbol": "SigUSD", "lastPrice": 0.99, "baseVolume": { "value": 1.0 } },
    { "baseSymbol": "ERG", "quoteSymbol": "GORT", "lastPrice": 45.5 },
    { "baseSymbol": "SigUSD", "quoteSymbol": "ERG", "lastPrice": 1.22 }
]"#;

const ORACLE_BODY: &str = r#"{
    "items": [
        { "additionalRegisters": { "R4": { "renderedValue": "125000000000000", "sigmaType": "SLong" } } },
        { "additionalRegisters": { "R4": { "renderedValue": "999", "sigmaType": "SLong" } } }
    ]
}"#;

fn test_config(market_uri: &str, oracle_uri: &str) -> Config {
    Config {
        market_api_url: format!("{market_uri}/markets"),
        oracle_api_url: format!("{oracle_uri}/boxes/unspent/byTokenId"),
        oracle_pool_token_id: POOL_TOKEN_ID.to_owned(),
        ..Config::default()
    }
}

async fn mount_market(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET")).and(path("/markets")).respond_with(template).mount(server).await;
}

async fn mount_oracle(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/boxes/unspent/byTokenId/{POOL_TOKEN_ID}")))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_rates_from_both_sources() {
    let server = MockServer::start().await;
    mount_market(&server, ResponseTemplate::new(200).set_body_string(MARKET_BODY)).await;
    mount_oracle(&server, ResponseTemplate::new(200).set_body_string(ORACLE_BODY)).await;

    let fetcher = RateFetcher::from_config(&test_config(&server.uri(), &server.uri())).unwrap();
    let rates = fetcher.fetch_rates().await;

    // Highest-volume SigUSD pair wins; RSN has no pair and is absent
    assert_eq!(rates.get("SigUSD"), Some(0.82));
    assert_eq!(rates.get("GORT"), Some(45.5));
    assert_eq!(rates.get("RSN"), None);

    // BENE inherits the SigUSD rate
    assert_eq!(rates.get("BENE"), Some(0.82));

    // First oracle box wins: 1e18 / (125e12 * 100) = 80 ERG per gram
    let gold = rates.get(GOLD_RATE_KEY).unwrap();
    assert!((gold - 80.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_oracle_failure_keeps_market_rates() {
    let server = MockServer::start().await;
    mount_market(&server, ResponseTemplate::new(200).set_body_string(MARKET_BODY)).await;
    mount_oracle(&server, ResponseTemplate::new(500)).await;

    let fetcher = RateFetcher::from_config(&test_config(&server.uri(), &server.uri())).unwrap();
    let rates = fetcher.fetch_rates().await;

    assert_eq!(rates.get("SigUSD"), Some(0.82));
    assert_eq!(rates.get(GOLD_RATE_KEY), None);

    // Gold-priced bounties degrade to zero rather than failing the run
    assert!(to_erg_value("2", "g GOLD", &rates).abs() < f64::EPSILON);
    assert!((to_erg_value("50", "SigUSD", &rates) - 60.975_609_756_097_55).abs() < 1e-6);
}

#[tokio::test]
async fn test_market_failure_keeps_oracle_rate() {
    let server = MockServer::start().await;
    mount_market(&server, ResponseTemplate::new(503)).await;
    mount_oracle(&server, ResponseTemplate::new(200).set_body_string(ORACLE_BODY)).await;

    let fetcher = RateFetcher::from_config(&test_config(&server.uri(), &server.uri())).unwrap();
    let rates = fetcher.fetch_rates().await;

    assert_eq!(rates.get("SigUSD"), None);
    assert_eq!(rates.get("BENE"), None);
    assert!(rates.get(GOLD_RATE_KEY).is_some());

    // 2 grams at 80 ERG per gram
    assert!((to_erg_value("2", "g GOLD", &rates) - 160.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_both_sources_down_yields_empty_table() {
    let server = MockServer::start().await;
    mount_market(&server, ResponseTemplate::new(500)).await;
    mount_oracle(&server, ResponseTemplate::new(500)).await;

    let fetcher = RateFetcher::from_config(&test_config(&server.uri(), &server.uri())).unwrap();
    let rates = fetcher.fetch_rates().await;

    assert!(rates.is_empty());
    assert!(to_erg_value("100", "SigUSD", &rates).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_malformed_market_payload_is_tolerated() {
    let server = MockServer::start().await;
    mount_market(&server, ResponseTemplate::new(200).set_body_string("not json")).await;
    mount_oracle(&server, ResponseTemplate::new(200).set_body_string(ORACLE_BODY)).await;

    let fetcher = RateFetcher::from_config(&test_config(&server.uri(), &server.uri())).unwrap();
    let rates = fetcher.fetch_rates().await;

    assert_eq!(rates.len(), 1);
    assert!(rates.get(GOLD_RATE_KEY).is_some());
}
