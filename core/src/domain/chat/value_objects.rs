use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    WasteReduction,
    LeftoverHandling,
    Sustainability,
    Greeting,
    Unknown,
}

impl Intent {
    pub fn response(&self) -> &'static str {
        match self {
            Intent::WasteReduction => {
                "Focus on demand forecasting! Use historical 'Student Attendance' data to adjust cooking batches."
            }
            Intent::LeftoverHandling => {
                "Always check if leftovers are safe for donation first. If not, look into composting or repurposing into snack items."
            }
            Intent::Sustainability => {
                "Eating sustainably in a canteen means prioritizing local produce and zero-waste cooking methods."
            }
            Intent::Greeting => {
                "Hello! I am your AI Sustainability Agent. Ask me anything about food waste or green canteen practices!"
            }
            Intent::Unknown => {
                "That's an interesting query. I'm learning more every day! Try asking about 'waste reduction' or 'leftover handling'."
            }
        }
    }
}

/// Keyword phrases per intent. Order matters: ties go to the earlier entry.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::WasteReduction,
        &["how to reduce", "less waste", "minimize", "stop wasting"],
    ),
    (
        Intent::LeftoverHandling,
        &["leftover", "what to do with food", "extra food", "repurpose"],
    ),
    (
        Intent::Sustainability,
        &[
            "why sustainability",
            "climate change",
            "environment",
            "global warming",
        ],
    ),
    (Intent::Greeting, &["hello", "hi", "hey", "who are you"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    HostedModel,
    IntentClassifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
    pub source: ReplySource,
}

pub fn build_prompt(query: &str) -> String {
    format!(
        "You are EcoCanteen AI, a helpful assistant for reducing food waste in college canteens.\n\
         Answer the following user query directly and concisely.\n\
         \n\
         User: {query}\n\
         EcoCanteen AI:"
    )
}
