pub mod analysis;
pub mod dashboard;
pub mod events;
pub mod exporter;
pub mod pipeline;
pub mod queue;
pub mod validator;
