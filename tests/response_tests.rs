use newsbrief::api::helpers::{cors_headers, err_response, preflight_response, success_response};
use newsbrief::core::models::{ArticleSummary, SummarizeOutcome, SummarySource};

/// Tests for the proxy response builders. These verify the API Gateway
/// contract: a statusCode, CORS headers, and the body carried as a JSON
/// string rather than a nested object.

fn sample_outcome(source: SummarySource) -> SummarizeOutcome {
    SummarizeOutcome {
        summary: ArticleSummary::build(
            "https://example.com/article",
            "Example Story",
            "one two three four five six seven eight nine ten",
            "one two three".to_string(),
        ),
        source,
    }
}

#[test]
fn test_success_response_envelope() {
    let response = success_response(&sample_outcome(SummarySource::Fresh), "*");

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Content-Type"], "application/json");

    // Body travels as a JSON string
    let body: serde_json::Value =
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["from_cache"], false);
    assert_eq!(body["data"]["url"], "https://example.com/article");
    assert_eq!(body["data"]["title"], "Example Story");
    assert_eq!(body["data"]["summary"], "one two three");
    assert_eq!(body["data"]["word_count"], 3);
    assert_eq!(body["data"]["original_length"], 10);
    assert_eq!(body["data"]["compression_ratio"], 3.33);
}

#[test]
fn test_success_response_marks_cache_hits() {
    let response = success_response(&sample_outcome(SummarySource::Cache), "*");

    let body: serde_json::Value =
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["from_cache"], true);
}

#[test]
fn test_err_response_envelope() {
    let response = err_response(502, "Failed to generate summary: model loading", "*");

    assert_eq!(response["statusCode"], 502);
    let body: serde_json::Value =
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to generate summary: model loading");
}

#[test]
fn test_preflight_response() {
    let response = preflight_response("https://reader.example");

    assert_eq!(response["statusCode"], 200);
    assert_eq!(
        response["headers"]["Access-Control-Allow-Origin"],
        "https://reader.example"
    );
    assert_eq!(
        response["headers"]["Access-Control-Allow-Methods"],
        "POST, OPTIONS"
    );
}

#[test]
fn test_cors_headers_present_on_every_builder() {
    let origin = "https://reader.example";
    for response in [
        preflight_response(origin),
        success_response(&sample_outcome(SummarySource::Fresh), origin),
        err_response(400, "URL is required", origin),
    ] {
        assert_eq!(response["headers"]["Access-Control-Allow-Origin"], origin);
        assert_eq!(
            response["headers"]["Access-Control-Allow-Headers"],
            "Content-Type"
        );
    }
}

#[test]
fn test_cors_headers_shape() {
    let headers = cors_headers("*");
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Content-Type"], "application/json");
    assert_eq!(headers.as_object().unwrap().len(), 4);
}
