pub mod dashboard_types;
pub mod export_types;
pub mod upload_types;
