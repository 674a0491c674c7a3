pub mod catalog;
pub mod consultation;
pub mod lab_analysis;
pub mod stats;

pub use consultation::ConsultationService;
pub use lab_analysis::LabAnalysisService;
