use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::RouteSnapshot;

/// Receives a snapshot on every session transition.
///
/// Called while the controller holds its session lock, so implementations
/// must not call back into the controller.
pub trait Presenter {
    fn present(&self, snapshot: &RouteSnapshot);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn present(&self, _snapshot: &RouteSnapshot) {}
}

impl Presenter for mpsc::UnboundedSender<RouteSnapshot> {
    fn present(&self, snapshot: &RouteSnapshot) {
        if self.send(snapshot.clone()).is_err() {
            debug!("Presenter: snapshot channel closed");
        }
    }
}

/// Keeps only the latest snapshot.
impl Presenter for watch::Sender<RouteSnapshot> {
    fn present(&self, snapshot: &RouteSnapshot) {
        self.send_replace(snapshot.clone());
    }
}
