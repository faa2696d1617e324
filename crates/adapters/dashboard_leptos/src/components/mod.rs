mod appliance_row;
mod loading;
mod nav;
mod registration_modal;
mod report_section;

pub use appliance_row::ApplianceRowInputs;
pub use loading::Loading;
pub use nav::Nav;
pub use registration_modal::RegistrationModal;
pub use report_section::ReportSectionView;
