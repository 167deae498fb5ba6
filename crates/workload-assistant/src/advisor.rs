//! The five advisory calls
//!
//! Each call builds a prompt, asks the generator, and turns the reply into
//! a value the caller can display. None of them fail: a missing generator
//! or a service error yields an empty string or an empty list.

use std::collections::BTreeMap;

use workload_core::model::{split_list, DashboardSummary};

use crate::config::AssistantConfig;
use crate::errors::AssistantError;
use crate::generator::TextGenerator;
use crate::groq::GroqClient;

/// Advisory assistant; disabled when it holds no generator
pub struct Assistant {
    generator: Option<Box<dyn TextGenerator>>,
}

impl Assistant {
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Build from configuration
    ///
    /// Falls back to a disabled assistant when no API key is configured or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &AssistantConfig) -> Self {
        match GroqClient::from_config(config) {
            Ok(client) => Self::with_generator(Box::new(client)),
            Err(AssistantError::NotConfigured) => {
                tracing::debug!("no assistant API key configured; suggestions disabled");
                Self::disabled()
            }
            Err(e) => {
                tracing::warn!(error = %e, "assistant client unavailable; suggestions disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Items that might go well with the current order
    pub fn suggest_complementary_items<S: AsRef<str>>(
        &self,
        customer_name: &str,
        items: &[S],
    ) -> Vec<String> {
        let prompt = format!(
            "You know what restaurant customers like to order together.\n\
             Customer: {}\n\
             Current order: {}\n\
             Suggest 2 complementary items, as a comma-separated list.",
            customer_name,
            comma_join(items)
        );
        split_list(&self.ask("suggest_complementary_items", &prompt))
    }

    /// Name of the staff member best suited to an item
    ///
    /// `staff` maps names to their skill groups and `pending` maps names to
    /// their open order counts (absent names count as zero). Empty when
    /// `staff` is empty.
    pub fn suggest_best_assignee(
        &self,
        item: &str,
        staff: &BTreeMap<String, String>,
        pending: &BTreeMap<String, usize>,
    ) -> String {
        if staff.is_empty() {
            return String::new();
        }

        let staff_info = staff
            .iter()
            .map(|(name, skills)| {
                format!(
                    "{}: Skills({}), Pending Orders({})",
                    name,
                    skills,
                    pending.get(name).copied().unwrap_or(0)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = format!(
            "You balance kitchen workload.\n\
             Order item: {}\n\
             Staff with skill groups and pending orders: {}\n\
             Reply with exactly ONE staff name to assign this item to, weighing \
             skill match against current workload.",
            item, staff_info
        );
        self.ask("suggest_best_assignee", &prompt).trim().to_string()
    }

    /// Free-text insight over the dashboard counts
    pub fn summarize_trends(&self, summary: &DashboardSummary) -> String {
        let prompt = format!(
            "You analyse order workload.\n\
             Order summary: {}\n\
             Describe the trends you see and what to expect next.",
            summary.describe()
        );
        self.ask("summarize_trends", &prompt)
    }

    /// Skill groups worth giving a new staff member
    pub fn suggest_new_groups(&self) -> Vec<String> {
        let prompt = "You plan kitchen staffing.\n\
                      Suggest 2 skill groups for a new staff member, as a \
                      comma-separated list.";
        split_list(&self.ask("suggest_new_groups", prompt))
    }

    /// A short, polite summary of a staff member's pending items
    pub fn summarize_pending<S: AsRef<str>>(&self, staff_name: &str, items: &[S]) -> String {
        let prompt = format!(
            "You are assisting {}.\n\
             Politely summarise their pending orders: {}",
            staff_name,
            comma_join(items)
        );
        self.ask("summarize_pending", &prompt)
    }

    /// Run one prompt; an empty string stands in for any failure
    fn ask(&self, call: &str, prompt: &str) -> String {
        let Some(generator) = &self.generator else {
            return String::new();
        };

        match generator.complete(prompt) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    call = call,
                    provider = generator.name(),
                    error = %e,
                    "assistant call failed"
                );
                String::new()
            }
        }
    }
}

fn comma_join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
