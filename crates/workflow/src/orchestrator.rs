//! The three-stage workflow state machine.

use std::fmt;
use std::time::Duration;

use resilience_core::api::{DispatchRequest, MitigationRequest};
use resilience_core::model::{
    Asset, DispatchLogEntry, MitigationPlan, Risk, Scenario, WorkflowStage,
};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{EngineApi, EngineError};

/// Which workflow operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// [`Orchestrator::run_scenario`].
    Simulation,
    /// [`Orchestrator::request_mitigation`].
    Mitigation,
    /// [`Orchestrator::execute_dispatch`].
    Dispatch,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Simulation => "scenario simulation",
            Step::Mitigation => "mitigation planning",
            Step::Dispatch => "dispatch execution",
        })
    }
}

/// Operation failure surfaced to the operator.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The operation was re-invoked while its previous call is in flight.
    #[error("{0} is already in progress")]
    Busy(Step),
    /// Stage-2 action attempted without assessed risks.
    #[error("no assessed risks to plan for; run a scenario first")]
    MitigationUnavailable,
    /// Stage-3 action attempted without a plan carrying actions.
    #[error("no mitigation actions to dispatch; request a mitigation plan first")]
    DispatchUnavailable,
    /// The collaborator call settled with a failure.
    #[error("{step} failed")]
    Remote {
        /// Operation that failed.
        step: Step,
        /// The collaborator failure.
        #[source]
        source: EngineError,
    },
}

/// Per-operation in-flight flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    /// A scenario run is in flight.
    pub simulation: bool,
    /// A mitigation request is in flight.
    pub mitigation: bool,
    /// A dispatch call is in flight.
    pub dispatch: bool,
}

impl BusyFlags {
    /// True when any operation is in flight.
    pub fn any(self) -> bool {
        self.simulation || self.mitigation || self.dispatch
    }
}

/// Snapshot of everything the panels render.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    /// Current workflow phase.
    pub stage: WorkflowStage,
    /// Submitted scenario, stored optimistically at submission.
    pub scenario: Option<Scenario>,
    /// Asset set of the current run, replaced wholesale per run.
    pub assets: Vec<Asset>,
    /// Risk set of the current run, replaced wholesale per run.
    pub risks: Vec<Risk>,
    /// Mitigation plan, once requested.
    pub plan: Option<MitigationPlan>,
    /// Dispatch activity log, replaced wholesale per dispatch call.
    pub log: Vec<DispatchLogEntry>,
    /// In-flight flags gating re-invocation.
    pub busy: BusyFlags,
    /// Correlates log events of one scenario run.
    pub run_id: Option<Uuid>,
}

/// Owns the workflow state and drives the three collaborator calls.
///
/// State changes happen only inside the watch channel's modify closures and
/// never across an await, so every snapshot a view reads is consistent. The
/// stage advances forward only; [`Orchestrator::reset`] is the single way
/// back to `Simulation`.
pub struct Orchestrator<E> {
    engine: E,
    settle_delay: Duration,
    state: watch::Sender<WorkflowState>,
}

impl<E: EngineApi> Orchestrator<E> {
    /// `settle_delay` is the user-visible pause between a successful call
    /// and the stage advance. Tests pass `Duration::ZERO`.
    pub fn new(engine: E, settle_delay: Duration) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self {
            engine,
            settle_delay,
            state,
        }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Receiver observing every state change.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Stage 1: run the scenario simulation.
    ///
    /// Stores the scenario optimistically, replaces the asset and risk sets
    /// on success, then advances to `RiskAssessment` after the settle delay.
    /// On failure only the busy flag is touched.
    pub async fn run_scenario(&self, input: Scenario) -> Result<(), WorkflowError> {
        let run_id = Uuid::new_v4();
        let begun = self.state.send_if_modified(|s| {
            if s.busy.simulation {
                return false;
            }
            s.busy.simulation = true;
            s.run_id = Some(run_id);
            s.scenario = Some(input.clone());
            true
        });
        if !begun {
            return Err(WorkflowError::Busy(Step::Simulation));
        }

        info!(
            %run_id,
            location = %input.location,
            event = input.event_type.label(),
            hours = input.duration_hours,
            "running scenario"
        );
        match self.engine.run_scenario(&input).await {
            Ok(resp) => {
                let (asset_count, risk_count) = (resp.assets.len(), resp.risks.len());
                self.state.send_modify(|s| {
                    s.busy.simulation = false;
                    s.assets = resp.assets;
                    s.risks = resp.risks;
                });
                info!(%run_id, assets = asset_count, risks = risk_count, "scenario complete");
                self.advance(WorkflowStage::RiskAssessment).await;
                Ok(())
            }
            Err(e) => {
                self.state.send_modify(|s| s.busy.simulation = false);
                warn!(%run_id, error = %e, "scenario run failed");
                Err(WorkflowError::Remote {
                    step: Step::Simulation,
                    source: e,
                })
            }
        }
    }

    /// Stage 2: request the mitigation plan. The stage does not change;
    /// plan review happens within `RiskAssessment`.
    pub async fn request_mitigation(&self) -> Result<(), WorkflowError> {
        let request = {
            let s = self.state.borrow();
            if s.busy.mitigation {
                return Err(WorkflowError::Busy(Step::Mitigation));
            }
            let Some(scenario) = s.scenario.clone() else {
                return Err(WorkflowError::MitigationUnavailable);
            };
            if s.risks.is_empty() {
                return Err(WorkflowError::MitigationUnavailable);
            }
            MitigationRequest {
                scenario,
                risks: s.risks.clone(),
                assets: s.assets.clone(),
            }
        };
        let begun = self.state.send_if_modified(|s| {
            if s.busy.mitigation {
                return false;
            }
            s.busy.mitigation = true;
            true
        });
        if !begun {
            return Err(WorkflowError::Busy(Step::Mitigation));
        }

        info!(risks = request.risks.len(), "requesting mitigation plan");
        match self.engine.request_mitigation(&request).await {
            Ok(plan) => {
                let actions = plan.mitigation_actions.len();
                self.state.send_modify(|s| {
                    s.busy.mitigation = false;
                    s.plan = Some(plan);
                });
                info!(actions, "mitigation plan stored");
                Ok(())
            }
            Err(e) => {
                self.state.send_modify(|s| s.busy.mitigation = false);
                warn!(error = %e, "mitigation planning failed");
                Err(WorkflowError::Remote {
                    step: Step::Mitigation,
                    source: e,
                })
            }
        }
    }

    /// Stage 3: submit the plan's actions to the dispatch network.
    ///
    /// Replaces the activity log wholesale on success, then advances to
    /// `DispatchNetwork` after the settle delay. A failed call leaves the
    /// prior log untouched.
    pub async fn execute_dispatch(&self) -> Result<(), WorkflowError> {
        let request = {
            let s = self.state.borrow();
            if s.busy.dispatch {
                return Err(WorkflowError::Busy(Step::Dispatch));
            }
            match &s.plan {
                Some(plan) if !plan.mitigation_actions.is_empty() => DispatchRequest {
                    actions: plan.mitigation_actions.clone(),
                },
                _ => return Err(WorkflowError::DispatchUnavailable),
            }
        };
        let begun = self.state.send_if_modified(|s| {
            if s.busy.dispatch {
                return false;
            }
            s.busy.dispatch = true;
            true
        });
        if !begun {
            return Err(WorkflowError::Busy(Step::Dispatch));
        }

        info!(actions = request.actions.len(), "dispatching mitigation actions");
        match self.engine.execute_dispatch(&request).await {
            Ok(resp) => {
                let entries = resp.log.len();
                self.state.send_modify(|s| {
                    s.busy.dispatch = false;
                    s.log = resp.log;
                });
                info!(entries, "dispatch complete");
                self.advance(WorkflowStage::DispatchNetwork).await;
                Ok(())
            }
            Err(e) => {
                self.state.send_modify(|s| s.busy.dispatch = false);
                warn!(error = %e, "dispatch execution failed");
                Err(WorkflowError::Remote {
                    step: Step::Dispatch,
                    source: e,
                })
            }
        }
    }

    /// Return to the initial state, discarding all run data. Synchronous;
    /// no network calls.
    pub fn reset(&self) {
        self.state.send_modify(|s| *s = WorkflowState::default());
        info!("workflow reset");
    }

    async fn advance(&self, stage: WorkflowStage) {
        tokio::time::sleep(self.settle_delay).await;
        self.state.send_modify(|s| {
            // Forward-only; a stale advance never regresses the stage.
            if stage > s.stage {
                s.stage = stage;
            }
        });
        info!(stage = stage.label(), "stage advanced");
    }
}
