//! Integration tests for the JSON boundary: what the editor may send and
//! exactly what it gets back.

use flowstack::service::{self, PipelineRequest};
use flowstack::validate::Verdict;

#[test]
fn editor_export_counts_and_verdict() {
    let verdict = service::analyze_json(include_str!("fixtures/simple_pipeline.json"))
        .expect("Editor export should be accepted");
    assert_eq!(
        verdict,
        Verdict { num_nodes: 3, num_edges: 2, is_dag: true }
    );
}

#[test]
fn verdict_wire_shape() {
    let verdict = service::analyze_json(include_str!("fixtures/simple_pipeline.json"))
        .expect("Should analyze");
    insta::assert_json_snapshot!(verdict, @r###"
    {
      "num_nodes": 3,
      "num_edges": 2,
      "is_dag": true
    }
    "###);
}

#[test]
fn cycle_verdict_wire_shape() {
    let verdict = service::analyze_json(include_str!("fixtures/cycle.json"))
        .expect("Should analyze");
    insta::assert_json_snapshot!(verdict, @r###"
    {
      "num_nodes": 3,
      "num_edges": 3,
      "is_dag": false
    }
    "###);
}

#[test]
fn handles_may_be_null_or_absent() {
    let verdict = service::analyze_json(
        r#"{
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [
                {"source": "a", "sourceHandle": null, "target": "b", "targetHandle": null},
                {"source": "b", "target": "a"}
            ]
        }"#,
    )
    .expect("Handles are optional at the boundary");
    assert_eq!(verdict.num_edges, 2);
    assert!(!verdict.is_dag, "a->b->a cycles regardless of handles");
}

#[test]
fn missing_sections_read_as_empty() {
    assert_eq!(
        service::analyze_json("{}").expect("Empty document is fine"),
        Verdict { num_nodes: 0, num_edges: 0, is_dag: true }
    );
    assert_eq!(
        service::analyze_json(r#"{"nodes": [{"id": "a"}]}"#).expect("Edges may be absent"),
        Verdict { num_nodes: 1, num_edges: 0, is_dag: true }
    );
}

#[test]
fn edges_to_undeclared_nodes_fail_the_dag_check() {
    let verdict = service::analyze_json(
        r#"{
            "nodes": [{"id": "a"}],
            "edges": [
                {"source": "a", "target": "ghost"},
                {"source": "ghost", "target": "a"}
            ]
        }"#,
    )
    .expect("Should analyze");
    assert_eq!(verdict.num_edges, 2, "Submitted edges are counted as sent");
    assert!(!verdict.is_dag, "A ring through an undeclared node is no DAG");

    let dangling = service::analyze_json(
        r#"{"nodes": [{"id": "a"}], "edges": [{"source": "a", "target": "ghost"}]}"#,
    )
    .expect("Should analyze");
    assert_eq!(
        dangling,
        Verdict { num_nodes: 1, num_edges: 1, is_dag: false },
        "Even one edge into an undeclared node disqualifies the pipeline"
    );
}

#[test]
fn duplicate_node_ids_count_as_submitted() {
    let verdict = service::analyze_json(
        r#"{"nodes": [{"id": "a"}, {"id": "a"}], "edges": []}"#,
    )
    .expect("Should analyze");
    assert_eq!(verdict.num_nodes, 2);
    assert!(verdict.is_dag);
}

#[test]
fn malformed_documents_are_refused() {
    assert!(service::analyze_json("not json").is_err());
    assert!(service::analyze_json(r#"{"nodes": {"id": "a"}}"#).is_err());
    assert!(service::analyze_json(r#"{"nodes": [{"name": "missing id"}]}"#).is_err());
}

#[test]
fn request_tolerates_unknown_fields() {
    let request: PipelineRequest = serde_json::from_str(
        r#"{
            "nodes": [{"id": "a", "type": "llm", "position": {"x": 1, "y": 2}, "data": {}}],
            "edges": [],
            "viewport": {"zoom": 1.5}
        }"#,
    )
    .expect("Canvas baggage should be ignored");
    assert_eq!(request.nodes.len(), 1);
    assert_eq!(service::analyze(&request).num_nodes, 1);
}
