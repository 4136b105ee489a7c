use mockito::{Matcher, Server};
use trip_planner_rs::{
    services::inference::DEFAULT_MODEL, InferenceClient, PlannerError, TextGenerator,
    TravelPlanner, TripRequest,
};

const ITINERARY_TEXT: &str = "Day 1\n- Morning: Alfama walking tour\n- Tram 28 ride\nDay 2\n- Belem Tower visit\nFood recommendations\n- Pastel de nata @ Pasteis de Belem\nTravel tips\n- Buy a Viva Viagem card";

fn model_path() -> String {
    format!("/models/{}", DEFAULT_MODEL)
}

fn client(server: &Server, max_retries: usize) -> InferenceClient {
    let mut client = InferenceClient::new("test-key");
    client.set_base_url(server.url());
    client.set_max_retries(max_retries);
    client
}

#[tokio::test]
async fn test_successful_generation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", model_path().as_str())
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "inputs": "plan a trip",
            "parameters": { "max_length": 1000, "do_sample": true }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!([{ "generated_text": "Day 1\n- Beach" }]).to_string())
        .create_async()
        .await;

    let text = client(&server, 0).generate("plan a trip").await.unwrap();

    assert_eq!(text, "Day 1\n- Beach");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_classified() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", model_path().as_str())
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .create_async()
        .await;

    let result = client(&server, 3).generate("plan a trip").await;

    assert!(matches!(result, Err(PlannerError::Unauthorized)));
}

#[tokio::test]
async fn test_service_unavailable_means_model_loading() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", model_path().as_str())
        .with_status(503)
        .with_body(r#"{"error":"Model is currently loading","estimated_time":20.0}"#)
        .create_async()
        .await;

    let result = client(&server, 0).generate("plan a trip").await;

    assert!(matches!(result, Err(PlannerError::ModelLoading)));
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", model_path().as_str())
        .with_status(500)
        .with_body(r#"{"error":"internal"}"#)
        .expect(3)
        .create_async()
        .await;

    let result = client(&server, 2).generate("plan a trip").await;

    match result {
        Err(PlannerError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_names_the_path() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", model_path().as_str())
        .with_status(200)
        .with_body(r#"[{"generated_text": 42}]"#)
        .create_async()
        .await;

    let result = client(&server, 0).generate("plan a trip").await;

    match result {
        Err(PlannerError::Decode { path, .. }) => assert_eq!(path, "[0].generated_text"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_planner_extracts_hosted_output() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", model_path().as_str())
        .with_status(200)
        .with_body(serde_json::json!([{ "generated_text": ITINERARY_TEXT }]).to_string())
        .create_async()
        .await;

    let planner = TravelPlanner::with_api_key("test-key")
        .with_base_url(server.url())
        .with_max_retries(0);
    let request = TripRequest::new("Lisbon")
        .with_days(2)
        .with_interests(["food", "history"]);

    let outcome = planner.generate_itinerary(&request).await.unwrap();

    assert!(outcome.is_generated());
    assert_eq!(outcome.itinerary.daily_plan.len(), 2);
    assert_eq!(outcome.itinerary.daily_plan.get("Day 1").unwrap().len(), 2);
    assert_eq!(
        outcome.itinerary.food_recommendations[0].restaurant.as_deref(),
        Some("Pasteis de Belem")
    );
    assert_eq!(outcome.itinerary.travel_tips, vec!["Buy a Viva Viagem card"]);
}

#[tokio::test]
async fn test_planner_falls_back_when_model_is_loading() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", model_path().as_str())
        .with_status(503)
        .create_async()
        .await;

    let planner = TravelPlanner::with_api_key("test-key")
        .with_base_url(server.url())
        .with_max_retries(0);
    let request = TripRequest::new("Lisbon").with_interests(["food"]);

    let outcome = planner.generate_itinerary(&request).await.unwrap();

    assert!(!outcome.is_generated());
    assert_eq!(outcome.itinerary.daily_plan.len(), 3);
    let messages: Vec<&str> = outcome.notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "AI model is loading. Using template generation for now.",
            "Using template-based itinerary generation...",
        ]
    );
}
