use crate::config::ValidationNotice;
use crate::models::Form;
use tracing::info;

/// Blocking user prompts the guards need from the host page.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> bool;

    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    Declined,
    MissingFields(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancelled(CancelReason),
}

impl SubmitDecision {
    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGuard {
    prompt: String,
}

impl DeleteGuard {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Deletion forms tunnel the DELETE verb through a hidden `method` field.
    pub fn applies_to(&self, form: &Form) -> bool {
        form.method_override()
            .is_some_and(|method| method.eq_ignore_ascii_case("DELETE"))
    }

    pub fn check(&self, form: &Form, prompter: &mut dyn Prompter) -> SubmitDecision {
        if !self.applies_to(form) {
            return SubmitDecision::Proceed;
        }
        if prompter.confirm(&self.prompt) {
            SubmitDecision::Proceed
        } else {
            info!(action = %form.action, "deletion cancelled by user");
            SubmitDecision::Cancelled(CancelReason::Declined)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequiredFieldGuard {
    notice: ValidationNotice,
}

impl RequiredFieldGuard {
    pub fn new(notice: ValidationNotice) -> Self {
        Self { notice }
    }

    pub fn blank_fields(form: &Form) -> Vec<String> {
        form.fields
            .iter()
            .filter(|field| field.required && field.is_blank())
            .map(|field| field.name.clone())
            .collect()
    }

    pub fn check(&self, form: &Form, prompter: &mut dyn Prompter) -> SubmitDecision {
        let missing = Self::blank_fields(form);
        if missing.is_empty() {
            return SubmitDecision::Proceed;
        }

        match self.notice {
            ValidationNotice::PerField => {
                for name in &missing {
                    prompter.alert(&format!("El campo \"{name}\" es obligatorio."));
                }
            }
            ValidationNotice::Batched => {
                prompter.alert(&format!(
                    "Completa los campos obligatorios: {}",
                    missing.join(", ")
                ));
            }
        }

        info!(action = %form.action, missing = ?missing, "submission blocked by blank fields");
        SubmitDecision::Cancelled(CancelReason::MissingFields(missing))
    }
}
