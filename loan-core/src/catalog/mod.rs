//! The step catalog: which ordered steps and fields each loan program's
//! application presents.
//!
//! Every program starts from the same seven-step base sequence. A program
//! transform clones the base and inserts a step (under a fractional
//! [`StepId`] so neighbors keep their numbers), appends fields to a step,
//! or replaces a field definition in place. The base itself is never
//! mutated, and an unrecognized program slug resolves to the unmodified
//! base sequence.
//!
//! Two invariants hold for every resolved list: step ids are strictly
//! increasing, and the final step is the review step with no fields.

use crate::models::{FieldKind, FieldOption, FormField, FormStep, LoanType, StepId, validators};

/// Resolves the ordered step list for a loan-type slug.
///
/// Unknown slugs are not an error; they get the base sequence.
pub fn resolve_steps(loan_type: &str) -> Vec<FormStep> {
    let base = base_steps();
    match LoanType::parse(loan_type) {
        Some(LoanType::Va) => va_steps(base),
        Some(LoanType::Fha) => fha_steps(base),
        Some(LoanType::Construction) => construction_steps(base),
        Some(LoanType::ReverseMortgage) => reverse_mortgage_steps(base),
        Some(LoanType::FixFlip) => fix_flip_steps(base),
        Some(LoanType::BankStatement) => bank_statement_steps(base),
        Some(LoanType::Commercial) => commercial_steps(base),
        Some(LoanType::DscrInvestment) => dscr_steps(base),
        None => base,
    }
}

fn select(options: &[(&str, &str)]) -> FieldKind {
    FieldKind::Select {
        options: options
            .iter()
            .map(|(value, label)| FieldOption::new(value, label))
            .collect(),
    }
}

fn radio(options: &[(&str, &str)]) -> FieldKind {
    FieldKind::Radio {
        options: options
            .iter()
            .map(|(value, label)| FieldOption::new(value, label))
            .collect(),
    }
}

/// The seven canonical steps shared by every program.
pub fn base_steps() -> Vec<FormStep> {
    vec![
        FormStep::new(
            StepId::new(1),
            "Let's Get Started",
            "Tell us about your loan needs",
            vec![
                FormField::required(
                    "loanType",
                    "Loan Type",
                    select(&[
                        ("purchase", "Purchase"),
                        ("refinance", "Refinance"),
                        ("cash-out", "Cash-Out Refinance"),
                        ("construction", "Construction"),
                        ("investment", "Investment Property"),
                    ]),
                ),
                FormField::required(
                    "propertyType",
                    "Property Type",
                    select(&[
                        ("single-family", "Single Family Home"),
                        ("condo", "Condominium"),
                        ("townhome", "Townhome"),
                        ("multi-family", "Multi-Family (2-4 units)"),
                        ("commercial", "Commercial Property"),
                    ]),
                ),
            ],
        ),
        FormStep::new(
            StepId::new(2),
            "Property Details",
            "Tell us about the property",
            vec![
                FormField::required("purchasePrice", "Purchase Price / Property Value", FieldKind::Number)
                    .with_placeholder("750000"),
                FormField::required("zipCode", "Property ZIP Code", FieldKind::Text)
                    .with_placeholder("91364"),
                FormField::required(
                    "propertyUse",
                    "How will you use this property?",
                    radio(&[
                        ("primary", "Primary Residence"),
                        ("secondary", "Secondary/Vacation Home"),
                        ("investment", "Investment/Rental Property"),
                    ]),
                ),
            ],
        ),
        FormStep::new(
            StepId::new(3),
            "Financial Information",
            "Help us understand your financial situation",
            vec![
                FormField::required("downPayment", "Down Payment Amount", FieldKind::Number)
                    .with_placeholder("150000"),
                FormField::required("income", "Annual Gross Income", FieldKind::Number)
                    .with_placeholder("120000"),
                FormField::required("monthlyDebt", "Monthly Debt Payments", FieldKind::Number)
                    .with_placeholder("2500"),
            ],
        ),
        FormStep::new(
            StepId::new(4),
            "Credit & Employment",
            "A few more details about your background",
            vec![
                FormField::required(
                    "creditScore",
                    "Credit Score Range",
                    select(&[
                        ("800+", "800+ (Excellent)"),
                        ("740-799", "740-799 (Very Good)"),
                        ("680-739", "680-739 (Good)"),
                        ("620-679", "620-679 (Fair)"),
                        ("580-619", "580-619 (Poor)"),
                        ("unknown", "I don't know"),
                    ]),
                ),
                FormField::required(
                    "employmentType",
                    "Employment Type",
                    select(&[
                        ("w2", "W2 Employee"),
                        ("self-employed", "Self-Employed"),
                        ("business-owner", "Business Owner"),
                        ("retired", "Retired"),
                        ("military", "Military"),
                        ("other", "Other"),
                    ]),
                ),
            ],
        ),
        FormStep::new(
            StepId::new(5),
            "Timeline & Goals",
            "When are you looking to close?",
            vec![
                FormField::required(
                    "timeframe",
                    "When do you want to close?",
                    select(&[
                        ("asap", "As soon as possible"),
                        ("30-days", "Within 30 days"),
                        ("60-days", "Within 60 days"),
                        ("90-days", "Within 90 days"),
                        ("exploring", "Just exploring options"),
                    ]),
                ),
                FormField::required("cashAvailable", "Total Cash Available for Purchase", FieldKind::Number)
                    .with_placeholder("200000"),
            ],
        ),
        FormStep::new(
            StepId::new(6),
            "Contact Information",
            "How can we reach you?",
            vec![
                FormField::required("firstName", "First Name", FieldKind::Text)
                    .with_placeholder("John"),
                FormField::required("lastName", "Last Name", FieldKind::Text)
                    .with_placeholder("Smith"),
                FormField::required("email", "Email Address", FieldKind::Email)
                    .with_placeholder("john@example.com")
                    .with_validator(validators::email),
                FormField::required("phone", "Phone Number", FieldKind::Tel)
                    .with_placeholder("(818) 555-0123")
                    .with_validator(validators::phone),
            ],
        ),
        FormStep::new(
            StepId::new(7),
            "Review & Submit",
            "Review your information and submit your application",
            vec![],
        ),
    ]
}

/// Inserts a step at its sorted position. Steps after it keep their ids.
fn insert_step(mut steps: Vec<FormStep>, step: FormStep) -> Vec<FormStep> {
    let index = steps.partition_point(|existing| existing.id < step.id);
    steps.insert(index, step);
    steps
}

/// Replaces the named field within a step, leaving its position intact.
fn replace_field(steps: &mut [FormStep], id: StepId, field: FormField) {
    if let Some(step) = steps.iter_mut().find(|step| step.id == id) {
        if let Some(slot) = step.fields.iter_mut().find(|f| f.name == field.name) {
            *slot = field;
        }
    }
}

/// Replaces a step's entire field list.
fn replace_step_fields(steps: &mut [FormStep], id: StepId, fields: Vec<FormField>) {
    if let Some(step) = steps.iter_mut().find(|step| step.id == id) {
        step.fields = fields;
    }
}

/// Appends a field to the end of a step's field list.
fn append_field(steps: &mut [FormStep], id: StepId, field: FormField) {
    if let Some(step) = steps.iter_mut().find(|step| step.id == id) {
        step.fields.push(field);
    }
}

/// VA: military service questions between employment and timeline.
fn va_steps(base: Vec<FormStep>) -> Vec<FormStep> {
    insert_step(
        base,
        FormStep::new(
            StepId::inserted(4, 5),
            "Military Service",
            "Tell us about your military background",
            vec![FormField::required(
                "militaryService",
                "Military Service Status",
                select(&[
                    ("active-duty", "Active Duty"),
                    ("veteran", "Veteran"),
                    ("reserves", "Reserves/National Guard"),
                    ("spouse", "Eligible Surviving Spouse"),
                ]),
            )],
        ),
    )
}

/// FHA: same flow, but the down payment field calls out the 3.5% floor.
fn fha_steps(mut base: Vec<FormStep>) -> Vec<FormStep> {
    replace_field(
        &mut base,
        StepId::new(3),
        FormField::required("downPayment", "Down Payment Amount (Minimum 3.5%)", FieldKind::Number)
            .with_placeholder("26250"),
    );
    base
}

/// Construction: project budget and build timeline after the goals step.
fn construction_steps(base: Vec<FormStep>) -> Vec<FormStep> {
    insert_step(
        base,
        FormStep::new(
            StepId::inserted(5, 5),
            "Construction Details",
            "Tell us about your construction project",
            vec![
                FormField::required("renovationBudget", "Total Construction Budget", FieldKind::Number)
                    .with_placeholder("500000"),
                FormField::required(
                    "timeline",
                    "Expected Construction Timeline",
                    select(&[
                        ("6-months", "6 months or less"),
                        ("12-months", "6-12 months"),
                        ("18-months", "12-18 months"),
                        ("24-months", "18-24 months"),
                    ]),
                ),
            ],
        ),
    )
}

/// Reverse mortgage: age gate up front, and the financial step asks about
/// the existing home instead of a purchase.
fn reverse_mortgage_steps(base: Vec<FormStep>) -> Vec<FormStep> {
    let mut steps = insert_step(
        base,
        FormStep::new(
            StepId::inserted(1, 5),
            "Age Verification",
            "Reverse mortgages are available for borrowers 62+",
            vec![
                FormField::required("age", "Your Age", FieldKind::Number).with_placeholder("65"),
            ],
        ),
    );
    replace_step_fields(
        &mut steps,
        StepId::new(3),
        vec![
            FormField::required("currentHomeValue", "Current Home Value", FieldKind::Number)
                .with_placeholder("750000"),
            FormField::required("currentMortgage", "Current Mortgage Balance", FieldKind::Number)
                .with_placeholder("200000"),
        ],
    );
    steps
}

/// Fix & flip: investor track record and renovation budget.
fn fix_flip_steps(base: Vec<FormStep>) -> Vec<FormStep> {
    insert_step(
        base,
        FormStep::new(
            StepId::inserted(4, 5),
            "Investment Experience",
            "Tell us about your real estate investment experience",
            vec![
                FormField::required(
                    "experienceLevel",
                    "Real Estate Investment Experience",
                    select(&[
                        ("first-time", "First-time investor"),
                        ("1-3-deals", "1-3 previous deals"),
                        ("4-10-deals", "4-10 previous deals"),
                        ("10-plus", "10+ previous deals"),
                    ]),
                ),
                FormField::required("renovationBudget", "Estimated Renovation Budget", FieldKind::Number)
                    .with_placeholder("100000"),
            ],
        ),
    )
}

/// Bank statement: business structure question added to the timeline step.
fn bank_statement_steps(mut base: Vec<FormStep>) -> Vec<FormStep> {
    append_field(
        &mut base,
        StepId::new(5),
        FormField::required(
            "businessType",
            "Type of Business",
            select(&[
                ("sole-proprietor", "Sole Proprietorship"),
                ("llc", "LLC"),
                ("corporation", "Corporation"),
                ("partnership", "Partnership"),
                ("freelancer", "Freelancer/Contractor"),
            ]),
        ),
    );
    base
}

/// Commercial: business profile between financials and credit.
fn commercial_steps(base: Vec<FormStep>) -> Vec<FormStep> {
    insert_step(
        base,
        FormStep::new(
            StepId::inserted(3, 5),
            "Business Information",
            "Tell us about your business",
            vec![
                FormField::required(
                    "businessType",
                    "Business Type",
                    select(&[
                        ("retail", "Retail"),
                        ("office", "Office"),
                        ("warehouse", "Warehouse/Industrial"),
                        ("restaurant", "Restaurant"),
                        ("medical", "Medical/Healthcare"),
                        ("other", "Other"),
                    ]),
                ),
                FormField::required("yearsInBusiness", "Years in Business", FieldKind::Number)
                    .with_placeholder("5"),
            ],
        ),
    )
}

/// DSCR: rental track record added to the credit step.
fn dscr_steps(mut base: Vec<FormStep>) -> Vec<FormStep> {
    append_field(
        &mut base,
        StepId::new(4),
        FormField::required(
            "experienceLevel",
            "Rental Property Experience",
            select(&[
                ("first-time", "First rental property"),
                ("1-3-properties", "1-3 rental properties"),
                ("4-10-properties", "4-10 rental properties"),
                ("10-plus", "10+ rental properties"),
            ]),
        ),
    );
    base
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(steps: &[FormStep]) -> Vec<String> {
        steps.iter().map(|s| s.id.to_string()).collect()
    }

    fn assert_well_formed(steps: &[FormStep]) {
        for pair in steps.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "step {} does not precede {}",
                pair[0].id,
                pair[1].id
            );
        }
        let last = steps.last().expect("non-empty step list");
        assert_eq!(last.id, StepId::new(7));
        assert!(last.fields.is_empty(), "review step must collect nothing");
    }

    #[test]
    fn base_sequence_has_seven_ordered_steps() {
        let steps = base_steps();

        assert_eq!(ids(&steps), ["1", "2", "3", "4", "5", "6", "7"]);
        assert_well_formed(&steps);
    }

    #[test]
    fn every_known_program_resolves_well_formed() {
        for loan_type in LoanType::ALL {
            let steps = resolve_steps(loan_type.as_str());
            assert_well_formed(&steps);
        }
    }

    #[test]
    fn unknown_slug_falls_back_to_base() {
        let steps = resolve_steps("jumbo-loans");

        assert_eq!(ids(&steps), ids(&base_steps()));
        assert_eq!(steps.len(), 7);
    }

    #[test]
    fn va_inserts_military_service_between_four_and_five() {
        let steps = resolve_steps("va-loans");

        assert_eq!(ids(&steps), ["1", "2", "3", "4", "4.5", "5", "6", "7"]);
        let inserted = &steps[4];
        assert_eq!(inserted.title, "Military Service");
        assert_eq!(inserted.fields[0].name, "militaryService");
    }

    #[test]
    fn fha_replaces_the_down_payment_field_in_place() {
        let steps = resolve_steps("fha-loans");

        assert_eq!(steps.len(), 7);
        let financial = &steps[2];
        assert_eq!(financial.fields[0].name, "downPayment");
        assert_eq!(financial.fields[0].label, "Down Payment Amount (Minimum 3.5%)");
        assert_eq!(financial.fields[0].placeholder.as_deref(), Some("26250"));
        // The other fields are untouched.
        assert_eq!(financial.fields[1].name, "income");
    }

    #[test]
    fn construction_inserts_project_details_after_goals() {
        let steps = resolve_steps("construction-loans");

        assert_eq!(ids(&steps), ["1", "2", "3", "4", "5", "5.5", "6", "7"]);
        assert_eq!(steps[5].title, "Construction Details");
    }

    #[test]
    fn reverse_mortgage_gates_on_age_and_reworks_financials() {
        let steps = resolve_steps("reverse-mortgage");

        assert_eq!(ids(&steps), ["1", "1.5", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(steps[1].title, "Age Verification");

        let financial = &steps[3];
        let names: Vec<_> = financial.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["currentHomeValue", "currentMortgage"]);
    }

    #[test]
    fn fix_flip_inserts_experience_step() {
        let steps = resolve_steps("fix-flip-loans");

        assert_eq!(ids(&steps), ["1", "2", "3", "4", "4.5", "5", "6", "7"]);
        let names: Vec<_> = steps[4].fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["experienceLevel", "renovationBudget"]);
    }

    #[test]
    fn bank_statement_appends_business_type_to_goals() {
        let steps = resolve_steps("bank-statement-loans");

        assert_eq!(steps.len(), 7);
        let goals = &steps[4];
        assert_eq!(goals.fields.last().map(|f| f.name), Some("businessType"));
    }

    #[test]
    fn commercial_inserts_business_step() {
        let steps = resolve_steps("commercial-loans");

        assert_eq!(ids(&steps), ["1", "2", "3", "3.5", "4", "5", "6", "7"]);
        assert_eq!(steps[3].title, "Business Information");
    }

    #[test]
    fn dscr_appends_rental_experience_to_credit() {
        let steps = resolve_steps("dscr-investment-loans");

        assert_eq!(steps.len(), 7);
        let credit = &steps[3];
        assert_eq!(credit.fields.last().map(|f| f.name), Some("experienceLevel"));
    }

    #[test]
    fn transforms_do_not_leak_into_the_base() {
        let _ = resolve_steps("fha-loans");

        let base = base_steps();
        assert_eq!(base[2].fields[0].label, "Down Payment Amount");
    }

    #[test]
    fn contact_step_carries_format_validators() {
        let steps = base_steps();
        let contact = &steps[5];

        let email = contact.fields.iter().find(|f| f.name == "email").unwrap();
        let phone = contact.fields.iter().find(|f| f.name == "phone").unwrap();
        assert!(email.validator.is_some());
        assert!(phone.validator.is_some());
    }
}
