use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
