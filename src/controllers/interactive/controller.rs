use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, trace};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractalError, generate_fractal_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::PixelBuffer;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders requests on one worker thread. Only the newest request is kept;
/// a render that has been overtaken is cancelled and never presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request the worker has not started,
    /// and returns its generation.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok((pixel_buffer, interior_pixels)) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer,
                    render_duration,
                    interior_pixels,
                }),
                Err(RenderOutcome::Cancelled) => {
                    trace!("render {} cancelled after {:?}", job_generation, render_duration);
                    continue;
                }
                Err(RenderOutcome::Error(message)) => RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message,
                }),
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            debug!("render {} finished in {:?}", job_generation, render_duration);
            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<(PixelBuffer, u64), RenderOutcome> {
        let pixel_rect = request.pixel_rect();

        let results = generate_fractal_cancelable(pixel_rect, request.algorithm(), cancel)
            .map_err(|e| match e {
                GenerateFractalError::Cancelled(_) => RenderOutcome::Cancelled,
                GenerateFractalError::Algorithm(never) => match never {},
            })?;

        if cancel.is_cancelled() {
            return Err(RenderOutcome::Cancelled);
        }

        let interior_pixels = results.iter().filter(|result| result.is_interior()).count() as u64;

        let pixel_buffer =
            generate_pixel_buffer_cancelable(results, request.palette(), pixel_rect, cancel)
                .map_err(|e| match e {
                    GeneratePixelBufferCancelableError::Cancelled(_) => RenderOutcome::Cancelled,
                    GeneratePixelBufferCancelableError::PixelBuffer(err) => {
                        RenderOutcome::Error(err.to_string())
                    }
                })?;

        Ok((pixel_buffer, interior_pixels))
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
