use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    geo::Destination,
    instructions::{InstructionCompiler, NarratedInstruction},
    params::NavigatorParams,
    position::{PositionAcquirer, PositionProvider},
    routing::{RouteRequest, RoutingBackend, RoutingClient},
    speech::{SpeechEngine, SpeechNarrator},
};

use super::{
    DestinationFallback, NoopPresenter, Presenter, RouteSession, RouteSnapshot, RouteSummary,
    SessionFailure, SessionId, SessionState, SessionWarning, WarningKind,
};

struct LiveSession {
    session: RouteSession,
    token: CancellationToken,
    destination: Destination,
    instructions: Vec<NarratedInstruction>,
    warning: Option<SessionWarning>,
    fallback: Option<DestinationFallback>,
}

/// Owns the single live route session.
///
/// Every `open_route` replaces the live session and cancels the previous one.
/// Results are applied only while their session is still the live one, so a
/// late answer for an abandoned destination never reaches the presenter.
pub struct RouteSessionController<P, B, E, V = NoopPresenter> {
    position: PositionAcquirer<P>,
    routing: RoutingClient<B>,
    compiler: InstructionCompiler,
    narrator: SpeechNarrator<E>,
    presenter: V,
    params: NavigatorParams,
    live: Mutex<Option<LiveSession>>,
}

impl<P, B, E, V> RouteSessionController<P, B, E, V>
where
    P: PositionProvider,
    B: RoutingBackend,
    E: SpeechEngine,
    V: Presenter,
{
    pub fn new(provider: P, backend: B, speech: E, presenter: V, params: NavigatorParams) -> Self {
        Self {
            position: PositionAcquirer::new(provider, params.position),
            routing: RoutingClient::new(backend, params.route_timeout),
            compiler: InstructionCompiler::default(),
            narrator: SpeechNarrator::new(speech),
            presenter,
            params,
            live: Mutex::new(None),
        }
    }

    pub fn with_compiler(mut self, compiler: InstructionCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn params(&self) -> &NavigatorParams {
        &self.params
    }

    pub fn position(&self) -> &PositionAcquirer<P> {
        &self.position
    }

    pub fn routing(&self) -> &RoutingClient<B> {
        &self.routing
    }

    pub fn narrator(&self) -> &SpeechNarrator<E> {
        &self.narrator
    }

    /// Starts a new session for `destination` and drives it to `Ready` or `Failed`.
    ///
    /// Returns the terminal snapshot, or `None` when a later request or
    /// `close_route` superseded this one first. Dropping the future before it
    /// resolves closes the session.
    pub async fn open_route(&self, destination: Destination) -> Option<RouteSnapshot> {
        let (session_id, token) = self.start_session(destination.clone());
        let _guard = OpenRouteGuard {
            controller: self,
            session_id,
        };

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(%session_id, "Session: superseded, dropping pending work");
                None
            }
            snapshot = self.run_session(session_id, &destination) => snapshot,
        }
    }

    /// Abandons the live session, stops narration and goes back to `Idle`.
    pub fn close_route(&self) {
        let mut live = self.live.lock();
        if let Some(previous) = live.take() {
            info!(session_id = %previous.session.id, "Session: closing route");
            previous.token.cancel();
        }
        self.presenter.present(&RouteSnapshot::idle());
        drop(live);

        self.narrator.stop();
    }

    /// Speaks the instruction shown at `display_index` (1-based).
    ///
    /// Returns `false` when there is no ready route or no such instruction.
    pub fn narrate_step(&self, display_index: usize) -> bool {
        let text = {
            let live = self.live.lock();
            live.as_ref()
                .filter(|live| live.session.state == SessionState::Ready)
                .and_then(|live| {
                    live.instructions
                        .iter()
                        .find(|instruction| instruction.display_index() == display_index)
                })
                .map(|instruction| instruction.text.clone())
        };

        match text {
            Some(text) => {
                self.narrator.narrate(&text, &self.params.locale);
                true
            }
            None => {
                debug!(display_index, "Session: no ready instruction to narrate");
                false
            }
        }
    }

    pub fn snapshot(&self) -> RouteSnapshot {
        self.live
            .lock()
            .as_ref()
            .map(|live| self.snapshot_of(live))
            .unwrap_or_else(RouteSnapshot::idle)
    }

    pub fn live_session(&self) -> Option<RouteSession> {
        self.live.lock().as_ref().map(|live| live.session.clone())
    }

    /// Closes `session_id` if it is still live and unfinished.
    fn abandon(&self, session_id: SessionId) {
        let mut live = self.live.lock();
        let unfinished = live.as_ref().is_some_and(|live| {
            live.session.id == session_id && !live.session.state.is_terminal()
        });
        if !unfinished {
            return;
        }

        if let Some(abandoned) = live.take() {
            warn!(
                %session_id,
                state = ?abandoned.session.state,
                "Session: dropped before completion, closing"
            );
            abandoned.token.cancel();
        }
        self.presenter.present(&RouteSnapshot::idle());
    }

    fn start_session(&self, destination: Destination) -> (SessionId, CancellationToken) {
        let session_id = SessionId::new();
        let token = CancellationToken::new();

        let mut session = RouteSession::new(session_id);
        session.acquire_position();
        let next = LiveSession {
            session,
            token: token.clone(),
            destination,
            instructions: Vec::new(),
            warning: None,
            fallback: None,
        };

        let mut live = self.live.lock();
        if let Some(previous) = live.take() {
            if !previous.session.state.is_terminal() {
                info!(
                    superseded = %previous.session.id,
                    %session_id,
                    "Session: cancelling unfinished session"
                );
            }
            previous.token.cancel();
        }

        info!(
            %session_id,
            destination = %next.destination.label,
            "Session: acquiring position"
        );
        self.presenter.present(&self.snapshot_of(&next));
        *live = Some(next);

        (session_id, token)
    }

    async fn run_session(
        &self,
        session_id: SessionId,
        destination: &Destination,
    ) -> Option<RouteSnapshot> {
        let fix = match self.position.acquire_position().await {
            Ok(fix) => fix,
            Err(error) => {
                warn!(%session_id, %error, "Session: no position, centering on destination");
                let fallback = DestinationFallback::from(destination);
                return self.transition(session_id, |live| {
                    live.fallback = Some(fallback);
                    live.session.fail(error.into());
                });
            }
        };

        let warning = fix
            .is_low_accuracy(self.params.low_accuracy_threshold_meters)
            .then(|| {
                warn!(
                    %session_id,
                    accuracy = fix.accuracy_meters(),
                    "Session: position has low accuracy"
                );
                SessionWarning {
                    kind: WarningKind::LowAccuracy {
                        accuracy_meters: fix.accuracy_meters(),
                    },
                    message: self
                        .compiler
                        .table(&self.params.locale)
                        .low_accuracy_warning(fix.accuracy_meters()),
                }
            });

        let request = RouteRequest::new(fix.coordinate(), destination);
        self.transition(session_id, |live| {
            live.warning = warning;
            live.session.request_route(request.clone());
        })?;

        match self.routing.request_route(&request).await {
            Ok(result) => {
                let instructions = self.compiler.compile_all(&result.steps, &self.params.locale);
                info!(%session_id, steps = instructions.len(), "Session: route ready");

                self.transition(session_id, |live| {
                    live.instructions = instructions;
                    live.session.complete(result);
                })
            }
            Err(error) => {
                warn!(%session_id, %error, "Session: route request failed");
                self.transition(session_id, |live| live.session.fail(error.into()))
            }
        }
    }

    /// Applies `update` to the live session and publishes the result, only if
    /// `session_id` is still the live one.
    fn transition<F>(&self, session_id: SessionId, update: F) -> Option<RouteSnapshot>
    where
        F: FnOnce(&mut LiveSession),
    {
        let mut live = self.live.lock();
        let current = live.as_mut()?;
        if current.session.id != session_id {
            debug!(%session_id, live = %current.session.id, "Session: discarding stale result");
            return None;
        }

        update(current);
        let snapshot = self.snapshot_of(current);
        self.presenter.present(&snapshot);

        Some(snapshot)
    }

    fn snapshot_of(&self, live: &LiveSession) -> RouteSnapshot {
        let table = self.compiler.table(&self.params.locale);
        let session = &live.session;
        let no_instructions =
            session.state == SessionState::Ready && live.instructions.is_empty();

        RouteSnapshot {
            session_id: Some(session.id),
            state: session.state,
            destination: Some(live.destination.clone()),
            instructions: live.instructions.clone(),
            summary: session.result.as_ref().map(RouteSummary::from),
            no_instructions,
            notice: no_instructions.then(|| table.no_instructions()),
            warning: live.warning.clone(),
            error: session.failure_reason.map(|kind| SessionFailure {
                kind,
                message: table.error_message(kind),
            }),
            fallback: live.fallback.clone(),
        }
    }
}

/// Held by `open_route`. A session that already finished or was superseded is left alone.
struct OpenRouteGuard<'a, P, B, E, V>
where
    P: PositionProvider,
    B: RoutingBackend,
    E: SpeechEngine,
    V: Presenter,
{
    controller: &'a RouteSessionController<P, B, E, V>,
    session_id: SessionId,
}

impl<P, B, E, V> Drop for OpenRouteGuard<'_, P, B, E, V>
where
    P: PositionProvider,
    B: RoutingBackend,
    E: SpeechEngine,
    V: Presenter,
{
    fn drop(&mut self) {
        self.controller.abandon(self.session_id);
    }
}
