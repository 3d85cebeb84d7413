//! Application layer - session orchestration over the domain.

mod disclosures;
mod session;
mod view;

pub use disclosures::Disclosures;
pub use session::{SessionError, WizardSession, MSG_GENERIC_FAILURE};
pub use view::WizardView;
