use crate::plate::Image;

/// Lifecycle milestones of one alignment run, emitted in this order, each
/// exactly once per successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineEvent {
    ImageLoaded,
    ChannelsSplit,
    Cropped,
    Aligned,
    PostProcessed,
}

impl std::fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageLoaded => write!(f, "image loaded"),
            Self::ChannelsSplit => write!(f, "channels split"),
            Self::Cropped => write!(f, "borders cropped"),
            Self::Aligned => write!(f, "channels aligned"),
            Self::PostProcessed => write!(f, "result postprocessed"),
        }
    }
}

/// Subscriber callback. The image is present for `Aligned` and
/// `PostProcessed`, where listeners typically persist the result; listener
/// effects are best-effort and never part of the alignment contract.
pub type Subscriber = Box<dyn FnMut(PipelineEvent, Option<&Image>) + Send>;
