use mockito::Matcher;
use recipe_calories::{
    analyze_with_client, AnalysisClient, Controller, ControllerConfig, CookEndpoint,
    FailureKind, IngredientStatus, Mode, ModeResult, NutritionEndpoint,
};
use serde_json::json;

const RECIPE_URL: &str = "https://www.example.com/recipes/pad-thai";

fn client_for(server: &mockito::ServerGuard) -> AnalysisClient {
    AnalysisClient::new(ControllerConfig::with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn test_cook_request_posts_url_and_decodes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/cook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "url": RECIPE_URL })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Pad Thai",
                "prep_time": 15,
                "cook_time": 10,
                "total_time": 25,
                "ingredients": ["200g rice noodles", "2 eggs"],
                "instructions": ["Soak the noodles.", "Fry everything."]
            }"#,
        )
        .create_async()
        .await;

    let cook = client_for(&server)
        .fetch::<CookEndpoint>(RECIPE_URL)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(cook.title.as_deref(), Some("Pad Thai"));
    assert_eq!(cook.total_time, Some(25));
    assert_eq!(cook.ingredients.len(), 2);
    assert_eq!(cook.instructions[1], "Fry everything.");
}

#[tokio::test]
async fn test_nutrition_request_decodes_backend_statuses() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/calculate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Pad Thai",
                "servings": 4,
                "total_kcal": 2100.4,
                "per_serving": 525.1,
                "ingredients": [
                    {"raw": "200g rice noodles", "name": "rice noodles", "grams": 200.0,
                     "kcal_per_100g": 364.0, "total_kcal": 728.0,
                     "usda_match": "Noodles, rice, dry", "status": "ok", "note": ""},
                    {"raw": "lime wedges", "name": "lime", "grams": null,
                     "kcal_per_100g": null, "total_kcal": null, "usda_match": null,
                     "status": "skipped", "note": "no quantity found"},
                    {"raw": "1 tbsp tamarind", "status": "not found", "note": "no USDA match"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let recipe = client_for(&server)
        .fetch::<NutritionEndpoint>(RECIPE_URL)
        .await
        .unwrap();

    assert_eq!(recipe.servings, Some(4));
    assert_eq!(recipe.total_kcal, 2100.4);
    let statuses: Vec<_> = recipe.ingredients.iter().map(|i| i.status.clone()).collect();
    assert_eq!(
        statuses,
        vec![
            IngredientStatus::Ok,
            IngredientStatus::Skipped,
            IngredientStatus::NotFound
        ]
    );
    assert_eq!(recipe.ingredients[1].note(), Some("no quantity found"));
}

#[tokio::test]
async fn test_blocked_response() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"error": "This site blocks automated access.", "blocked": true}"#;
    let _m = server
        .mock("POST", "/api/cook")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch::<CookEndpoint>(RECIPE_URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Blocked);
    assert!(err.blocked);
    assert_eq!(err.user_message, "This site blocks automated access.");
    let debug = err.debug.unwrap();
    assert_eq!(debug.status, Some(403));
    assert_eq!(debug.url, RECIPE_URL);
    assert_eq!(debug.body, body);
}

#[tokio::test]
async fn test_html_error_page_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let page = "<html><body>504 Gateway Timeout</body></html>";
    let _m = server
        .mock("POST", "/api/calculate")
        .with_status(504)
        .with_header("content-type", "text/html")
        .with_body(page)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch::<NutritionEndpoint>(RECIPE_URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedResponse);
    assert_eq!(err.user_message, "Server returned non-JSON response.");
    let debug = err.debug.unwrap();
    assert_eq!(debug.status, Some(504));
    assert_eq!(debug.body, page);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    // Nothing listens on port 1
    let client = AnalysisClient::new(ControllerConfig::with_base_url("http://127.0.0.1:1")).unwrap();

    let err = client.fetch::<CookEndpoint>(RECIPE_URL).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Transport);
    assert_eq!(err.user_message, "Failed to connect to server.");
    let debug = err.debug.unwrap();
    assert_eq!(debug.status, None);
    assert!(!debug.body.is_empty());
}

#[tokio::test]
async fn test_analyze_with_client_runs_both_endpoints() {
    let mut server = mockito::Server::new_async().await;
    let cook = server
        .mock("POST", "/api/cook")
        .with_status(200)
        .with_body(r#"{"title": "Tacos", "ingredients": ["beef"], "instructions": ["Cook beef"]}"#)
        .create_async()
        .await;
    let nutrition = server
        .mock("POST", "/api/calculate")
        .with_status(500)
        .with_body(r#"{"error": "parse failed"}"#)
        .create_async()
        .await;

    let analysis = analyze_with_client(&client_for(&server), "http://x/recipe").await;

    cook.assert_async().await;
    nutrition.assert_async().await;
    assert_eq!(analysis.cook.unwrap().title.as_deref(), Some("Tacos"));
    assert_eq!(analysis.nutrition.unwrap_err().user_message, "parse failed");
}

#[tokio::test]
async fn test_controller_over_http() {
    let mut server = mockito::Server::new_async().await;
    let _cook = server
        .mock("POST", "/api/cook")
        .with_status(200)
        .with_body(r#"{"title": "Tacos", "ingredients": ["beef"], "instructions": ["Cook beef"]}"#)
        .create_async()
        .await;
    let _nutrition = server
        .mock("POST", "/api/calculate")
        .with_status(200)
        .with_body(r#"{"title": "Tacos", "servings": 2, "total_kcal": 800, "per_serving": 400, "ingredients": []}"#)
        .create_async()
        .await;

    let mut controller =
        Controller::from_config(ControllerConfig::with_base_url(server.url())).unwrap();
    controller.analyze("http://x/recipe");
    controller.settle().await;

    let view = controller.view();
    assert!(matches!(view.projected.data, Some(ModeResult::Cook(_))));

    controller.select_mode(Mode::Nutrition);
    let view = controller.view();
    let recipe = view.projected.data.as_ref().and_then(ModeResult::as_nutrition).unwrap();
    assert_eq!(recipe.total_kcal, 800.0);
    assert_eq!(recipe.per_serving, Some(400.0));
}
