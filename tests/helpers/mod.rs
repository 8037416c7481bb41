use flowstack::model::{GraphModel, InputConfig, LlmConfig, NodeConfig, PortRef, TextConfig};

// =============================================================================
// Endpoint shorthand
// =============================================================================

pub fn port(node: &str, port: &str) -> PortRef {
    PortRef::new(node, port)
}

// =============================================================================
// Prebuilt models
// =============================================================================

/// Input feeding an LLM feeding an output: `customInput-1`, `llm-1`,
/// `customOutput-1` joined by two edges.
pub fn chain_model() -> GraphModel {
    let mut model = GraphModel::new();
    model.add_node(NodeConfig::Input(InputConfig {
        input_name: "question".into(),
        ..Default::default()
    }));
    model.add_node(NodeConfig::Llm(LlmConfig {}));
    model.add_node(NodeConfig::Output(Default::default()));
    model
        .add_edge(port("customInput-1", "value"), port("llm-1", "prompt"))
        .expect("Should connect input to llm");
    model
        .add_edge(port("llm-1", "response"), port("customOutput-1", "value"))
        .expect("Should connect llm to output");
    model
}

/// Two inputs fanning into `text-1` (template `{{a}} {{b}}`), whose output
/// feeds `customOutput-1`.
pub fn text_fanin_model() -> GraphModel {
    let mut model = GraphModel::new();
    model.add_node(NodeConfig::Text(TextConfig {
        text: "{{a}} {{b}}".into(),
    }));
    model.add_node(NodeConfig::Input(Default::default()));
    model.add_node(NodeConfig::Input(Default::default()));
    model.add_node(NodeConfig::Output(Default::default()));
    model
        .add_edge(port("customInput-1", "value"), port("text-1", "a"))
        .expect("Should connect first input");
    model
        .add_edge(port("customInput-2", "value"), port("text-1", "b"))
        .expect("Should connect second input");
    model
        .add_edge(port("text-1", "output"), port("customOutput-1", "value"))
        .expect("Should connect text to output");
    model
}
