use std::{collections::VecDeque, time::Duration};

use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    position::{PositionOptions, PositionProvider, RawPosition, RawPositionError},
    routing::{
        BackendError, InstructionDescriptor, ManeuverModifier, ManeuverType, RouteQuery,
        RouteResponse, RoutingBackend, StepResponse,
    },
    session::RouteSnapshot,
    speech::{SpeechEngine, Utterance, Voice},
};

const CAPTURED_AT_EPOCH_MS: i64 = 1_760_000_000_000;

async fn wait(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub enum ScriptedPosition {
    Resolve { raw: RawPosition, delay: Duration },
    Fail { code: u16, delay: Duration },
    /// Never answers
    Pending,
}

impl ScriptedPosition {
    pub fn resolve(raw: RawPosition) -> Self {
        ScriptedPosition::Resolve {
            raw,
            delay: Duration::ZERO,
        }
    }

    pub fn fail(code: u16) -> Self {
        ScriptedPosition::Fail {
            code,
            delay: Duration::ZERO,
        }
    }

    pub fn after(self, after: Duration) -> Self {
        match self {
            ScriptedPosition::Resolve { raw, .. } => ScriptedPosition::Resolve { raw, delay: after },
            ScriptedPosition::Fail { code, .. } => ScriptedPosition::Fail { code, delay: after },
            ScriptedPosition::Pending => ScriptedPosition::Pending,
        }
    }
}

/// Answers each call with the next scripted reading, `Pending` once the script is exhausted.
pub struct ScriptedPositionProvider {
    available: bool,
    script: Mutex<VecDeque<ScriptedPosition>>,
    calls: Mutex<Vec<PositionOptions>>,
}

impl ScriptedPositionProvider {
    pub fn new(script: Vec<ScriptedPosition>) -> Self {
        Self {
            available: true,
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(vec![])
        }
    }

    pub fn calls(&self) -> Vec<PositionOptions> {
        self.calls.lock().clone()
    }
}

impl PositionProvider for ScriptedPositionProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn current_position(
        &self,
        options: PositionOptions,
    ) -> Result<RawPosition, RawPositionError> {
        self.calls.lock().push(options);
        let next = self
            .script
            .lock()
            .pop_front()
            .unwrap_or(ScriptedPosition::Pending);

        match next {
            ScriptedPosition::Resolve { raw, delay } => {
                wait(delay).await;
                Ok(raw)
            }
            ScriptedPosition::Fail { code, delay } => {
                wait(delay).await;
                Err(RawPositionError { code })
            }
            ScriptedPosition::Pending => std::future::pending().await,
        }
    }
}

pub fn raw_position(latitude: f64, longitude: f64, accuracy_meters: f64) -> RawPosition {
    RawPosition {
        latitude,
        longitude,
        accuracy_meters,
        captured_at_epoch_ms: CAPTURED_AT_EPOCH_MS,
    }
}

pub enum ScriptedRoute {
    Respond {
        response: RouteResponse,
        delay: Duration,
    },
    Fail {
        error: BackendError,
        delay: Duration,
    },
    Pending,
}

impl ScriptedRoute {
    pub fn respond(response: RouteResponse) -> Self {
        ScriptedRoute::Respond {
            response,
            delay: Duration::ZERO,
        }
    }

    pub fn fail(error: BackendError) -> Self {
        ScriptedRoute::Fail {
            error,
            delay: Duration::ZERO,
        }
    }

    pub fn after(self, after: Duration) -> Self {
        match self {
            ScriptedRoute::Respond { response, .. } => ScriptedRoute::Respond {
                response,
                delay: after,
            },
            ScriptedRoute::Fail { error, .. } => ScriptedRoute::Fail {
                error,
                delay: after,
            },
            ScriptedRoute::Pending => ScriptedRoute::Pending,
        }
    }
}

pub struct ScriptedRoutingBackend {
    script: Mutex<VecDeque<ScriptedRoute>>,
    queries: Mutex<Vec<RouteQuery>>,
}

impl ScriptedRoutingBackend {
    pub fn new(script: Vec<ScriptedRoute>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<RouteQuery> {
        self.queries.lock().clone()
    }
}

impl RoutingBackend for ScriptedRoutingBackend {
    async fn fetch_route(&self, query: RouteQuery) -> Result<RouteResponse, BackendError> {
        self.queries.lock().push(query);
        let next = self.script.lock().pop_front().unwrap_or(ScriptedRoute::Pending);

        match next {
            ScriptedRoute::Respond { response, delay } => {
                wait(delay).await;
                Ok(response)
            }
            ScriptedRoute::Fail { error, delay } => {
                wait(delay).await;
                Err(error)
            }
            ScriptedRoute::Pending => std::future::pending().await,
        }
    }
}

/// One left turn per `(distance, duration)` pair, totals summed.
pub fn route_response(steps: &[(f64, f64)]) -> RouteResponse {
    RouteResponse {
        steps: steps
            .iter()
            .map(|&(distance_meters, duration_seconds)| StepResponse {
                distance_meters,
                duration_seconds,
                instruction: InstructionDescriptor::new(ManeuverType::Turn)
                    .with_modifier(ManeuverModifier::Left),
            })
            .collect(),
        total_distance_meters: steps.iter().map(|(distance, _)| distance).sum(),
        total_duration_seconds: steps.iter().map(|(_, duration)| duration).sum(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    CancelAll,
    Speak(Utterance),
}

pub struct RecordingSpeechEngine {
    available: bool,
    voices: Vec<Voice>,
    events: Mutex<Vec<SpeechEvent>>,
}

impl RecordingSpeechEngine {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            available: true,
            voices,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_voices(vec![])
        }
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.lock().clone()
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SpeechEvent::Speak(utterance) => Some(utterance.clone()),
                SpeechEvent::CancelAll => None,
            })
            .collect()
    }
}

impl SpeechEngine for RecordingSpeechEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: Utterance) {
        self.events.lock().push(SpeechEvent::Speak(utterance));
    }

    fn cancel_all(&self) {
        self.events.lock().push(SpeechEvent::CancelAll);
    }
}

pub fn voice(name: &str, locale_tag: &str) -> Voice {
    Voice {
        name: name.to_string(),
        locale_tag: locale_tag.to_string(),
    }
}

pub fn drain_snapshots(receiver: &mut UnboundedReceiver<RouteSnapshot>) -> Vec<RouteSnapshot> {
    let mut snapshots = Vec::new();
    while let Ok(snapshot) = receiver.try_recv() {
        snapshots.push(snapshot);
    }
    snapshots
}
