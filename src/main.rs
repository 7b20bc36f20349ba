use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use log::info;
use mandelbrot_explorer::{
    InteractiveController, InteractiveControllerPresenterPort, InteriorColour,
    MandelbrotColourMapKind, MandelbrotSession, ParameterEdits, RenderEvent,
};

const CANVAS_WIDTH: i32 = 1000;
const CANVAS_HEIGHT: i32 = 500;

struct ChannelPresenter {
    sender: mpsc::Sender<RenderEvent>,
}

impl InteractiveControllerPresenterPort for ChannelPresenter {
    fn present(&self, event: RenderEvent) {
        let _ = self.sender.send(event);
    }
}

fn render_and_log(
    session: &MandelbrotSession,
    label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let buffer = session.render(CANVAS_WIDTH, CANVAS_HEIGHT)?;

    info!(
        "{}: {:?} rendered into {} bytes in {:?}",
        label,
        session.viewport().region(),
        buffer.buffer_size(),
        start.elapsed()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();

    let mut session = MandelbrotSession::new();
    render_and_log(&session, "default view")?;

    session.plain_click(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2, CANVAS_WIDTH, CANVAS_HEIGHT)?;
    render_and_log(&session, "after zoom in")?;

    session.modified_click(0, 0)?;
    render_and_log(&session, "after zoom out")?;

    session.apply_parameter_edits(&ParameterEdits {
        max_iterations: "200",
        escape_threshold: "",
        brightness: "1.5",
    })?;
    session.select_palette("blue-green".parse::<MandelbrotColourMapKind>()?);
    session.select_interior_colour(InteriorColour::White);

    let (sender, receiver) = mpsc::channel();
    let mut controller = InteractiveController::new(Arc::new(ChannelPresenter { sender }));
    let generation =
        controller.submit_request(Arc::new(session.render_request(CANVAS_WIDTH, CANVAS_HEIGHT)?));

    match receiver.recv_timeout(Duration::from_secs(30))? {
        RenderEvent::Frame(frame) => info!(
            "background render {} finished in {:?}, {} interior pixels",
            frame.generation, frame.render_duration, frame.interior_pixels
        ),
        RenderEvent::Error(err) => return Err(err.into()),
    }
    info!("last completed generation {} of {}", controller.last_completed_generation(), generation);

    controller.shutdown();
    session.reset();
    Ok(())
}
