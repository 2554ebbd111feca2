use super::{
    fsm::{Command, ShellEvent},
    state::{Shell, ShellSnapshot},
};
use crate::{
    Error, Result,
    export::{self, ExportedDocument},
    llm::InferenceClient,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{Instrument, debug, info_span};

/// Drives the shell: reductions happen under the lock, network calls never do.
#[derive(Clone)]
pub struct ShellHandle {
    shell: Arc<Mutex<Shell>>,
    client: Arc<dyn InferenceClient>,
}

impl ShellHandle {
    pub fn new(shell: Shell, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            shell: Arc::new(Mutex::new(shell)),
            client,
        }
    }

    pub async fn snapshot(&self) -> ShellSnapshot {
        self.shell.lock().await.snapshot()
    }

    /// Applies a synchronous event and returns the resulting snapshot.
    pub async fn dispatch(&self, event: ShellEvent) -> Result<ShellSnapshot> {
        let command = self.shell.lock().await.reduce(event)?;
        self.run(command).await
    }

    pub async fn check(&self) -> Result<ShellSnapshot> {
        self.dispatch(ShellEvent::CheckRequested).await
    }

    pub async fn convert(&self) -> Result<ShellSnapshot> {
        self.dispatch(ShellEvent::ConvertRequested).await
    }

    pub async fn export(&self, base_name: &str) -> Result<ExportedDocument> {
        let mut shell = self.shell.lock().await;
        match export::export(shell.output(), base_name) {
            Ok(document) => {
                shell.reduce(ShellEvent::Exported(document.file_name.clone()))?;
                Ok(document)
            }
            Err(e) => {
                shell.reduce(ShellEvent::ExportFailed(e.to_string()))?;
                Err(e)
            }
        }
    }

    /// Runs a command on its own task so the completion is reduced even when
    /// the caller (an HTTP handler) is dropped mid-flight.
    async fn run(&self, command: Option<Command>) -> Result<ShellSnapshot> {
        let Some(command) = command else {
            return Ok(self.snapshot().await);
        };

        let handle = self.clone();
        tokio::spawn(async move { handle.execute(command).await })
            .await
            .map_err(|e| Error::internal(format!("Shell command task failed: {}", e)))?
    }

    async fn execute(&self, command: Command) -> Result<ShellSnapshot> {
        let completion = match command {
            Command::CheckAvailability => {
                let availability = self.client.check_availability().await;
                ShellEvent::CheckCompleted(availability)
            }
            Command::Generate { id, request } => {
                let span = info_span!("convert", %id, model = %request.model);
                let result = self
                    .client
                    .generate(&request)
                    .instrument(span)
                    .await;
                debug!("Conversion {} finished, success = {}", id, result.is_success());
                ShellEvent::ConvertCompleted { id, result }
            }
        };

        let mut shell = self.shell.lock().await;
        shell.reduce(completion)?;
        Ok(shell.snapshot())
    }
}
