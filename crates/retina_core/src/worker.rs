use crate::predict::{PredictError, PredictResponse, Predictor};
use crate::session::{PredictRequest, RequestToken};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// A finished request, ready for [`crate::Session::complete`].
#[derive(Debug)]
pub struct Finished {
    pub token: RequestToken,
    pub result: Result<PredictResponse, PredictError>,
}

/// Runs predictions off the UI thread and hands results back through a channel.
pub struct PredictionWorker {
    predictor: Arc<dyn Predictor>,
    tx: Sender<Finished>,
    rx: Receiver<Finished>,
}

impl PredictionWorker {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { predictor, tx, rx }
    }

    /// Starts the request. `on_done` runs on the worker thread after the result
    /// is queued; the GUI uses it to request a repaint.
    pub fn dispatch<F>(&self, request: PredictRequest, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let predictor = Arc::clone(&self.predictor);
        let tx = self.tx.clone();
        let token = request.token;
        let spawned = thread::Builder::new()
            .name(format!("predict-{:?}", request.token))
            .spawn(move || {
                let result = predictor.predict(&request.file);
                if tx
                    .send(Finished {
                        token: request.token,
                        result,
                    })
                    .is_err()
                {
                    tracing::debug!("worker dropped before prediction finished");
                }
                on_done();
            });
        if let Err(e) = spawned {
            tracing::error!("failed to spawn prediction thread: {e}");
            let _ = self.tx.send(Finished {
                token,
                result: Err(PredictError::Worker(e)),
            });
        }
    }

    pub fn try_recv(&self) -> Option<Finished> {
        match self.rx.try_recv() {
            Ok(done) => Some(done),
            Err(TryRecvError::Empty) => None,
            // `self.tx` keeps the channel open for as long as the worker lives
            Err(TryRecvError::Disconnected) => None,
        }
    }
}
