use crate::core::command::Command;
use crate::core::session::{Reply, Session};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub action: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub steps: Vec<StepOutcome>,
    pub succeeded: usize,
    pub failed: usize,
    /// Steps never attempted because an earlier one failed.
    pub skipped: usize,
}

impl ScenarioReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs a list of commands against one session, in order.
pub struct ScenarioRunner {
    session: Session,
    continue_on_error: bool,
}

impl ScenarioRunner {
    pub fn new(session: Session, continue_on_error: bool) -> Self {
        Self {
            session,
            continue_on_error,
        }
    }

    pub fn run(&self, steps: &[Command]) -> ScenarioReport {
        let mut report = ScenarioReport::default();

        for (index, step) in steps.iter().enumerate() {
            let action = step.name();
            match self.session.execute(step.clone()) {
                Ok(reply) => {
                    tracing::debug!("Step {} ({}) succeeded", index + 1, action);
                    report.succeeded += 1;
                    report.steps.push(StepOutcome {
                        index: index + 1,
                        action,
                        ok: true,
                        reply: Some(reply),
                        error: None,
                    });
                }
                Err(e) => {
                    tracing::warn!("Step {} ({}) failed: {}", index + 1, action, e);
                    report.failed += 1;
                    report.steps.push(StepOutcome {
                        index: index + 1,
                        action,
                        ok: false,
                        reply: None,
                        error: Some(e.user_friendly_message()),
                    });
                    if !self.continue_on_error {
                        report.skipped = steps.len() - index - 1;
                        break;
                    }
                }
            }
        }

        report
    }
}
