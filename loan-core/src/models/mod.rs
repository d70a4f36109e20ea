mod field;
mod form_data;
mod loan_type;
mod step;

pub use field::{FieldKind, FieldOption, FormField, Validator, validators};
pub use form_data::FormData;
pub use loan_type::LoanType;
pub use step::{FormStep, StepId};
