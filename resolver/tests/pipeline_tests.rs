use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use termlink_resolver::services::ontology_client::DbpediaClient;
use termlink_resolver::services::pipeline::BatchPipeline;
use termlink_resolver::services::term_resolver::TermResolver;
use termlink_resolver::services::wikipedia_client::WikipediaClient;

const TIMEOUT: Duration = Duration::from_secs(5);

fn search_body(titles: &[&str]) -> serde_json::Value {
    json!({
        "query": {
            "search": titles.iter().map(|t| json!({ "title": t })).collect::<Vec<_>>()
        }
    })
}

fn sparql_body(pairs: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "results": {
            "bindings": pairs
                .iter()
                .map(|(p, v)| json!({
                    "property": { "value": p },
                    "value": { "value": v }
                }))
                .collect::<Vec<_>>()
        }
    })
}

fn pipeline_against(server: &MockServer) -> BatchPipeline {
    let wikipedia = Arc::new(WikipediaClient::new(server.uri(), TIMEOUT));
    let dbpedia = Arc::new(DbpediaClient::new(server.uri(), TIMEOUT));
    BatchPipeline::new(TermResolver::new(wikipedia), dbpedia)
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn exact_match_is_enriched_and_counted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("srsearch", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["Paris"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sparql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_body(&[
            ("http://dbpedia.org/ontology/country", "France"),
            ("http://www.w3.org/2000/01/rdf-schema#label", "Paris"),
        ])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server).run(&terms(&["Paris"])).await;

    let record = &report.results["Paris"];
    assert_eq!(record.triple_count(), 2);
    assert_eq!(
        record.properties["http://dbpedia.org/ontology/country"],
        vec!["France"]
    );

    let summary = report.summary();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.exact, 1);
    assert_eq!(summary.similar, 0);
    assert_eq!(summary.not_found, 0);
    assert!((summary.percent_found() - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn ontology_query_uses_normalized_resource_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["Machine Learning"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sparql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_body(&[])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server)
        .run(&terms(&["Machine Learning"]))
        .await;
    assert_eq!(report.summary().exact, 1);

    let sparql_request = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.url.path() == "/sparql")
        .expect("no SPARQL request recorded");
    let query = sparql_request
        .url
        .query_pairs()
        .find(|(k, _)| k == "query")
        .map(|(_, v)| v.into_owned())
        .expect("no query parameter");

    assert!(query.contains("<http://dbpedia.org/resource/machine_learning>"));
    assert!(query.contains("LIMIT 50"));
}

#[tokio::test]
async fn close_title_is_reported_as_similar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("srsearch", "Londonn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["London"])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server).run(&terms(&["Londonn"])).await;

    assert_eq!(
        report.similar_terms,
        vec!["Londonn -> London (similarity: 85.71%)"]
    );
    assert!(report.results.is_empty());

    let summary = report.summary();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.similar, 1);
    assert!((summary.percent_found() - 0.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_search_results_go_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server)
        .run(&terms(&["Xyzzqqabc123"]))
        .await;

    assert_eq!(report.not_found_terms, vec!["Xyzzqqabc123"]);
    assert_eq!(report.summary().not_found, 1);
}

#[tokio::test]
async fn missing_query_envelope_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let report = pipeline_against(&server).run(&terms(&["anything"])).await;

    assert_eq!(report.not_found_terms, vec!["anything"]);
}

#[tokio::test]
async fn empty_input_reports_zero_percent() {
    let server = MockServer::start().await;

    let report = pipeline_against(&server).run(&[]).await;

    let summary = report.summary();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.exact, 0);
    assert!((summary.percent_found() - 0.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn ontology_failure_routes_exact_term_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["Paris"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sparql"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = pipeline_against(&server).run(&terms(&["Paris"])).await;

    assert!(report.results.is_empty());
    assert_eq!(report.not_found_terms, vec!["Paris"]);

    let summary = report.summary();
    assert_eq!(summary.exact, 0);
    assert_eq!(summary.not_found, 1);
}

#[tokio::test]
async fn search_failure_does_not_abort_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("srsearch", "BadTerm"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("srsearch", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["Paris"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sparql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_body(&[(
            "http://dbpedia.org/ontology/country",
            "France",
        )])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server)
        .run(&terms(&["BadTerm", "Paris"]))
        .await;

    assert_eq!(report.not_found_terms, vec!["BadTerm"]);
    assert!(report.results.contains_key("Paris"));

    let summary = report.summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.exact, 1);
    assert_eq!(summary.not_found, 1);
    assert!((summary.percent_found() - 50.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn exact_match_shadows_a_closer_scoring_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            "Machine learning basics",
            "machine-learning",
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sparql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sparql_body(&[])))
        .mount(&server)
        .await;

    let report = pipeline_against(&server)
        .run(&terms(&["Machine learning"]))
        .await;

    assert!(report.results.contains_key("Machine learning"));
    assert_eq!(report.summary().exact, 1);
    assert!(report.similar_terms.is_empty());
}
