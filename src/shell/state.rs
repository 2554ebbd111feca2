use super::{
    fsm::{Activity, Command, ShellEvent, ShellPhase},
    trace::{DebugEntry, DebugTrace},
};
use crate::{
    Error, Result,
    config::OllamaConfig,
    llm::{Availability, ConnectionState, GenerationRequest, GenerationResult},
    preview,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const SAMPLE_DESCRIPTION: &str = "Explain the power rule for derivatives. Start with a section introducing the rule, \
give the formula d/dx x^n = n x^(n-1) in display math, work through the example x^3 step by step, \
and finish with a numbered list summarising the steps and a bold note about when the rule applies.";

/// The application state behind the page. Mutated only through [`Shell::reduce`].
#[derive(Debug)]
pub struct Shell {
    input: String,
    output: String,
    preview: String,
    preview_visible: bool,
    connection: ConnectionState,
    models: Vec<String>,
    fallback_models: Vec<String>,
    selected_model: String,
    activity: Activity,
    trace: DebugTrace,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellSnapshot {
    pub input: String,
    pub output: String,
    pub preview: String,
    pub preview_visible: bool,
    pub connection: ConnectionState,
    pub models: Vec<String>,
    pub selected_model: String,
    pub phase: ShellPhase,
    pub can_convert: bool,
    pub debug: Vec<DebugEntry>,
}

impl Shell {
    pub fn new(config: &OllamaConfig) -> Self {
        let fallback_models = config.fallback_models();
        let selected_model = config.initial_model();

        Self {
            input: String::new(),
            output: String::new(),
            preview: String::new(),
            preview_visible: true,
            connection: ConnectionState::Unknown,
            models: fallback_models.clone(),
            fallback_models,
            selected_model,
            activity: Activity::default(),
            trace: DebugTrace::default(),
        }
    }

    /// Applies one event. Faults are written to the debug trace before being
    /// returned, so the page always sees them.
    pub fn reduce(&mut self, event: ShellEvent) -> Result<Option<Command>> {
        let name = event.name();
        debug!("Shell received event {}", name);

        self.apply(event).inspect_err(|e| {
            warn!("Shell event {} failed: {}", name, e);
            self.trace.error(e.to_string());
        })
    }

    fn apply(&mut self, event: ShellEvent) -> Result<Option<Command>> {
        match event {
            ShellEvent::InputChanged(text) => {
                self.input = text;
                Ok(None)
            }
            ShellEvent::SampleRequested => {
                self.input = SAMPLE_DESCRIPTION.to_string();
                self.trace.info("Loaded sample description");
                Ok(None)
            }
            ShellEvent::ModelSelected(model) => {
                if !self.models.contains(&model) {
                    return Err(Error::UnknownModel { model });
                }
                self.trace.info(format!("Selected model {}", model));
                self.selected_model = model;
                Ok(None)
            }
            ShellEvent::PreviewToggled => {
                self.preview_visible = !self.preview_visible;
                Ok(None)
            }
            ShellEvent::CheckRequested => {
                self.activity.begin_check();
                self.trace.info("Checking Ollama connection...");
                Ok(Some(Command::CheckAvailability))
            }
            ShellEvent::CheckCompleted(availability) => {
                self.activity.end_check()?;
                self.apply_availability(availability);
                Ok(None)
            }
            ShellEvent::ConvertRequested => self.request_conversion(),
            ShellEvent::ConvertCompleted { id, result } => {
                self.activity.end_convert(id)?;
                self.apply_generation(result);
                Ok(None)
            }
            ShellEvent::Exported(file_name) => {
                self.trace.info(format!("Downloaded {}", file_name));
                Ok(None)
            }
            ShellEvent::ExportFailed(reason) => {
                self.trace.error(format!("Export failed: {}", reason));
                Ok(None)
            }
        }
    }

    fn request_conversion(&mut self) -> Result<Option<Command>> {
        if self.connection != ConnectionState::Connected {
            self.trace
                .error("Not connected to Ollama; check the connection before converting");
            return Ok(None);
        }
        if self.input.trim().is_empty() {
            self.trace.info("Nothing to convert: the description is empty");
            return Ok(None);
        }

        let id = Uuid::new_v4();
        self.activity.begin_convert(id)?;
        self.trace.info(format!(
            "Converting with model {} ({} chars)",
            self.selected_model,
            self.input.trim().len()
        ));

        let request = GenerationRequest::new(self.input.trim(), self.selected_model.clone());
        Ok(Some(Command::Generate { id, request }))
    }

    fn apply_availability(&mut self, availability: Availability) {
        self.connection = availability.state;
        match availability.state {
            ConnectionState::Connected => self.trace.info(availability.diagnostic),
            _ => self.trace.error(availability.diagnostic),
        }

        self.models = if availability.models.is_empty() {
            self.fallback_models.clone()
        } else {
            availability.models.into_iter().map(|m| m.name).collect()
        };

        if !self.models.contains(&self.selected_model) {
            if let Some(first) = self.models.first() {
                info!(
                    "Selected model {} no longer offered, switching to {}",
                    self.selected_model, first
                );
                self.selected_model = first.clone();
            }
        }
    }

    fn apply_generation(&mut self, result: GenerationResult) {
        match result {
            GenerationResult::Success { markup } => {
                self.trace
                    .info(format!("Conversion finished ({} chars)", markup.len()));
                self.set_output(markup);
            }
            GenerationResult::Failure { reason } => {
                self.trace.error(format!("Conversion failed: {}", reason));
                self.set_output(String::new());
            }
        }
    }

    fn set_output(&mut self, output: String) {
        self.preview = preview::render(&output);
        self.output = output;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn phase(&self) -> ShellPhase {
        self.activity.phase()
    }

    pub fn trace(&self) -> &DebugTrace {
        &self.trace
    }

    pub fn can_convert(&self) -> bool {
        self.connection == ConnectionState::Connected
            && self.phase() != ShellPhase::Converting
            && !self.input.trim().is_empty()
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            input: self.input.clone(),
            output: self.output.clone(),
            preview: self.preview.clone(),
            preview_visible: self.preview_visible,
            connection: self.connection,
            models: self.models.clone(),
            selected_model: self.selected_model.clone(),
            phase: self.phase(),
            can_convert: self.can_convert(),
            debug: self.trace.entries().cloned().collect(),
        }
    }
}
