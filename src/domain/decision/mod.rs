//! Decision domain - the draft record, the step machine, and safety
//! screening.

mod draft;
mod safety;
mod step;
mod values;
mod wizard;

pub use draft::DecisionDraft;
pub use safety::{SafetyConcern, SafetyScreen, CRISIS_RESOURCE_URL, HARMFUL_KEYWORDS, SUPPORT_MESSAGE};
pub use step::WizardStep;
pub use values::{CoreValue, MAX_SELECTED_VALUES};
pub use wizard::{
    DecisionWizard, FieldChange, OptionSlot, StepValidationError, MSG_INTUITION_REQUIRED,
    MSG_OPTION_REQUIRED, MSG_QUESTION_REQUIRED,
};
