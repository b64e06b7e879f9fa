pub mod config;
mod events;
mod orchestrator;

pub use events::{PipelineEvent, Subscriber};
pub use orchestrator::AlignmentPipeline;
