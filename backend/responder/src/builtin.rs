//! The built-in lab assistant rule set.

use crate::evaluator::ResponseSelector;
use crate::types::{Matcher, ResponseRule};

pub const GREETING: &str = "Hi, I am Albari's lab assistant. Ask me about AI + Flutter + Hardware.";

pub const FALLBACK: &str = "I can talk about Flutter, AI/ML, and hardware integrations. \
Try asking: \"How do you connect Flutter to sensors?\"";

pub fn lab_assistant_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule::new(
            Matcher::contains("flutter"),
            "Flutter drives the UI; telemetry flows via BLE/MQTT and visualizes in real-time.",
        ),
        ResponseRule::new(
            Matcher::any_of(["arduino", "hardware"]),
            "Arduino streams sensor data; Python bridges serial to MQTT; safety watchdogs included.",
        ),
        ResponseRule::new(
            Matcher::any_of(["ai", "ml"]),
            "Models focus on small-on-device classifiers and cloud-backed inference for heavier tasks.",
        ),
        ResponseRule::new(
            Matcher::any_of(["germany", "austria"]),
            "Goal: pursue an MSc in Germany/Austria focusing on AI systems engineering and HCI.",
        ),
    ]
}

pub fn lab_assistant() -> ResponseSelector {
    ResponseSelector::new(lab_assistant_rules(), FALLBACK)
}
