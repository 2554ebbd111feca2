use crate::{
    Error, Result,
    llm::{Availability, GenerationRequest, GenerationResult},
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellPhase {
    Idle,
    Checking,
    Converting,
}

// Every user action and every async completion enters the shell as one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    InputChanged(String),
    SampleRequested,
    ModelSelected(String),
    PreviewToggled,
    CheckRequested,
    CheckCompleted(Availability),
    ConvertRequested,
    ConvertCompleted {
        id: Uuid,
        result: GenerationResult,
    },
    Exported(String),
    ExportFailed(String),
}

impl ShellEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InputChanged(_) => "InputChanged",
            Self::SampleRequested => "SampleRequested",
            Self::ModelSelected(_) => "ModelSelected",
            Self::PreviewToggled => "PreviewToggled",
            Self::CheckRequested => "CheckRequested",
            Self::CheckCompleted(_) => "CheckCompleted",
            Self::ConvertRequested => "ConvertRequested",
            Self::ConvertCompleted { .. } => "ConvertCompleted",
            Self::Exported(_) => "Exported",
            Self::ExportFailed(_) => "ExportFailed",
        }
    }
}

/// Work the caller must perform outside the shell lock and feed back as a
/// completion event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CheckAvailability,
    Generate { id: Uuid, request: GenerationRequest },
}

/// Tracks in-flight operations. Checks may overlap each other and a
/// conversion; at most one conversion is admitted at a time.
#[derive(Debug, Default)]
pub struct Activity {
    checks_in_flight: usize,
    conversion: Option<Uuid>,
}

impl Activity {
    pub fn phase(&self) -> ShellPhase {
        if self.conversion.is_some() {
            ShellPhase::Converting
        } else if self.checks_in_flight > 0 {
            ShellPhase::Checking
        } else {
            ShellPhase::Idle
        }
    }

    pub fn begin_check(&mut self) {
        let old_phase = self.phase();
        self.checks_in_flight += 1;
        self.log_transition(old_phase, "CheckRequested");
    }

    pub fn end_check(&mut self) -> Result<()> {
        if self.checks_in_flight == 0 {
            warn!("❌ Availability result arrived with no check in flight");
            return Err(Error::fsm(
                "Availability result received while no check was in flight",
            ));
        }
        let old_phase = self.phase();
        self.checks_in_flight -= 1;
        self.log_transition(old_phase, "CheckCompleted");
        Ok(())
    }

    pub fn begin_convert(&mut self, id: Uuid) -> Result<()> {
        let old_phase = self.phase();
        if self.conversion.is_some() {
            warn!("❌ Conversion requested while another is in flight");
            return Err(Error::InvalidTransition {
                current: format!("{:?}", old_phase),
                requested: "Converting".to_string(),
            });
        }
        self.conversion = Some(id);
        self.log_transition(old_phase, "ConvertRequested");
        Ok(())
    }

    pub fn end_convert(&mut self, id: Uuid) -> Result<()> {
        match self.conversion {
            Some(current) if current == id => {
                let old_phase = self.phase();
                self.conversion = None;
                self.log_transition(old_phase, "ConvertCompleted");
                Ok(())
            }
            Some(current) => Err(Error::fsm(format!(
                "Conversion {} completed but {} is in flight",
                id, current
            ))),
            None => Err(Error::fsm(format!(
                "Conversion {} completed while no conversion was in flight",
                id
            ))),
        }
    }

    fn log_transition(&self, old_phase: ShellPhase, event: &str) {
        let new_phase = self.phase();
        if old_phase != new_phase {
            info!(
                "🎯 Shell phase transition: {:?} -> {:?} (event: {})",
                old_phase, new_phase, event
            );
        } else {
            debug!("🔄 Shell staying in phase {:?} after {}", old_phase, event);
        }
    }
}
