use recipe_suggest::config::{CredentialPlacement, ProviderKind};
use recipe_suggest::{
    suggest_recipes, ApiCredential, AppConfig, DietaryPreference, ProviderConfig, ProviderError,
    ProviderFactory, RecipeQuery, ResponseShape,
};

fn spicy_dinner() -> RecipeQuery {
    RecipeQuery::builder()
        .prompt("I want a spicy, quick dinner recipe")
        .ingredients_text("Tomato, onion, paneer")
        .dietary_preference(DietaryPreference::Vegetarian)
        .max_prep_minutes(20)
        .build()
        .unwrap()
}

fn endpoint_config(base_url: String, shape: ResponseShape) -> AppConfig {
    AppConfig {
        provider: ProviderConfig {
            kind: ProviderKind::Endpoint,
            base_url: Some(base_url),
            path: Some("/generate".to_string()),
            shape,
            api_key: Some("test_key".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_gemini_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_header("x-goog-api-key", "test_key")
        .match_body(mockito::Matcher::Regex(
            "Ingredients: Tomato, onion, paneer".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates": [{"content": {"parts": [{"text": "Paneer Bhurji\n1. Crumble paneer."}]}}]}"#,
        )
        .create();

    let config = AppConfig {
        provider: ProviderConfig {
            base_url: Some(server.url()),
            api_key: Some("test_key".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let provider = ProviderFactory::from_config(&config).unwrap();

    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    assert!(suggestions.is_ok());
    assert_eq!(suggestions.recipes.len(), 1);
    let recipe = &suggestions.recipes[0];
    assert_eq!(recipe.name, "Generated Recipe");
    assert!(recipe.steps.is_empty());
    assert_eq!(
        recipe.raw_text.as_deref(),
        Some("Paneer Bhurji\n1. Crumble paneer.")
    );
    mock.assert();
}

#[tokio::test]
async fn test_structured_endpoint_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .match_body(mockito::Matcher::Regex(
            "Maximum Preparation Time: 20 minutes".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name": "Dal", "prep_time": 20, "steps": ["Boil", "Simmer"], "cuisine": "Indian"},
                {"steps": ["Boil"]}
            ]"#,
        )
        .create();

    let config = endpoint_config(server.url(), ResponseShape::Structured);
    let provider = ProviderFactory::from_config(&config).unwrap();
    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    assert!(suggestions.is_ok());
    assert_eq!(suggestions.recipes.len(), 2);
    assert_eq!(suggestions.recipes[0].name, "Dal");
    assert_eq!(suggestions.recipes[0].prep_minutes, Some(20));
    assert_eq!(suggestions.recipes[0].steps, vec!["Boil", "Simmer"]);
    assert_eq!(suggestions.recipes[1].name, "Unnamed Recipe");
    mock.assert();
}

#[tokio::test]
async fn test_candidate_endpoint_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"output": "Mix and fry."}, {"output": "Grill it."}]"#)
        .create();

    let config = endpoint_config(server.url(), ResponseShape::Candidates);
    let provider = ProviderFactory::from_config(&config).unwrap();
    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    let texts: Vec<_> = suggestions
        .recipes
        .iter()
        .map(|r| r.raw_text.as_deref().unwrap())
        .collect();
    assert_eq!(texts, vec!["Mix and fry.", "Grill it."]);
    assert!(suggestions
        .recipes
        .iter()
        .all(|r| r.name == "Generated Recipe"));
    mock.assert();
}

#[tokio::test]
async fn test_server_error_yields_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/generate")
        .with_status(500)
        .with_body("upstream exploded")
        .expect(1)
        .create();

    let config = endpoint_config(server.url(), ResponseShape::Text);
    let provider = ProviderFactory::from_config(&config).unwrap();
    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    assert!(!suggestions.is_ok());
    assert!(suggestions.recipes.is_empty());
    match suggestions.error {
        Some(ProviderError::Upstream { status, ref body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        ref other => panic!("expected Upstream, got {:?}", other),
    }
    mock.assert();
}

#[tokio::test]
async fn test_malformed_response_yields_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/generate")
        .with_status(200)
        .with_body("not json at all")
        .create();

    let config = endpoint_config(server.url(), ResponseShape::Structured);
    let provider = ProviderFactory::from_config(&config).unwrap();
    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    assert!(suggestions.recipes.is_empty());
    assert!(matches!(
        suggestions.error,
        Some(ProviderError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/generate").expect(0).create();

    let config = endpoint_config(server.url(), ResponseShape::Text);
    let provider =
        ProviderFactory::create(&config.provider, ApiCredential::new(""), None).unwrap();
    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;

    assert!(suggestions.recipes.is_empty());
    assert!(matches!(
        suggestions.error,
        Some(ProviderError::Unauthenticated)
    ));
    mock.assert();
}

#[tokio::test]
async fn test_unreachable_provider_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let mut config = endpoint_config(format!("http://127.0.0.1:{}", port), ResponseShape::Text);
    config.provider.credential_placement = CredentialPlacement::Query;
    config.provider.api_key = Some("never-printed".to_string());
    let provider = ProviderFactory::from_config(&config).unwrap();

    let suggestions = suggest_recipes(provider.as_ref(), &spicy_dinner()).await;
    match suggestions.error {
        Some(ProviderError::Network(message)) => assert!(!message.contains("never-printed")),
        other => panic!("expected Network, got {:?}", other),
    }
}
