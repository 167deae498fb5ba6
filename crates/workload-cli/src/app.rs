//! Shared state for one CLI invocation

use rusqlite::Connection;
use serde::Serialize;
use workload_assistant::Assistant;
use workload_core::errors::ExError;
use workload_store::Database;

use crate::settings::Settings;

pub struct App {
    database: Database,
    assistant: Assistant,
    json: bool,
}

impl App {
    pub fn new(settings: &Settings, assistant_enabled: bool, json: bool) -> Self {
        let assistant = if assistant_enabled {
            Assistant::from_config(&settings.assistant)
        } else {
            Assistant::disabled()
        };

        Self {
            database: Database::new(settings.database.path.clone()),
            assistant,
            json,
        }
    }

    /// Open a connection for this interaction, creating the schema if needed
    pub fn connect(&self) -> Result<Connection, ExError> {
        self.database.initialize()?;
        self.database.connect()
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Print `value` as JSON when `--json` was given, otherwise run `human`
    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        human: impl FnOnce(),
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }
}
