use serde_json::Value;

/// ========================================
/// Webhook response shapes
/// ========================================

pub const KEY_RESEARCH_SUMMARY: &str = "research_summary";
pub const KEY_PROMPT_SEEDS: &str = "prompt_seeds";
pub const KEY_WIREFRAME_RAW: &str = "wireframe_raw";

/// Text slots shown to the user. An empty string means "not populated".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlueprintResult {
    pub research_summary: String,
    pub prompt_seeds: String,
    pub wireframe_raw: String,
}

impl BlueprintResult {
    pub fn is_empty(&self) -> bool {
        self.research_summary.is_empty() && self.prompt_seeds.is_empty() && self.wireframe_raw.is_empty()
    }
}

/// The response families the webhook has produced over time.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookResponse {
    /// Current workflow: flat keys, each optional.
    Structured {
        research_summary: Option<Value>,
        prompt_seeds: Option<Value>,
        wireframe_raw: Option<Value>,
    },
    /// Older workflow that forwarded a raw chat completion.
    Legacy { content: Option<Value> },
    Unrecognized,
}

impl WebhookResponse {
    /// Ordered presence checks: structured keys win over `choices`.
    pub fn classify(doc: &Value) -> Self {
        let Some(obj) = doc.as_object() else {
            return WebhookResponse::Unrecognized;
        };

        let structured = [KEY_RESEARCH_SUMMARY, KEY_PROMPT_SEEDS, KEY_WIREFRAME_RAW]
            .iter()
            .any(|k| obj.contains_key(*k));
        if structured {
            return WebhookResponse::Structured {
                research_summary: obj.get(KEY_RESEARCH_SUMMARY).cloned(),
                prompt_seeds: obj.get(KEY_PROMPT_SEEDS).cloned(),
                wireframe_raw: obj.get(KEY_WIREFRAME_RAW).cloned(),
            };
        }

        if let Some(choices) = obj.get("choices") {
            return WebhookResponse::Legacy {
                content: first_choice_content(choices).cloned(),
            };
        }

        WebhookResponse::Unrecognized
    }

    pub fn into_result(self) -> BlueprintResult {
        match self {
            WebhookResponse::Structured { research_summary, prompt_seeds, wireframe_raw } => BlueprintResult {
                research_summary: text_slot(research_summary.as_ref()),
                prompt_seeds: text_slot(prompt_seeds.as_ref()),
                wireframe_raw: wireframe_slot(wireframe_raw.as_ref()),
            },
            WebhookResponse::Legacy { content } => BlueprintResult {
                research_summary: text_slot(content.as_ref()),
                ..BlueprintResult::default()
            },
            WebhookResponse::Unrecognized => BlueprintResult::default(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            WebhookResponse::Structured { .. } => "structured",
            WebhookResponse::Legacy { .. } => "legacy",
            WebhookResponse::Unrecognized => "unrecognized",
        }
    }
}

/// `choices[0].message.content`, or None if any link is missing.
fn first_choice_content(choices: &Value) -> Option<&Value> {
    choices
        .as_array()?
        .first()?
        .as_object()?
        .get("message")?
        .as_object()?
        .get("content")
}

/// Falsy values (`null`, `false`, `0`, `""`) and missing keys read as empty.
fn text_slot(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Strings pass through; anything else present is pretty-printed (2 spaces).
fn wireframe_slot(v: Option<&Value>) -> String {
    match v {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Top-level keys of an object document, for diagnostics.
pub fn present_keys(doc: &Value) -> Vec<String> {
    doc.as_object().map(|m| m.keys().cloned().collect()).unwrap_or_default()
}
