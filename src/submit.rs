//! Survey form submission proxy
//!
//! Responses are relayed to the upstream form backend as one
//! form-encoded POST. Field names are translated through a static
//! map of destination slots; fields with no slot are dropped with a
//! warning rather than failing the whole submission.

use crate::fetch::Transport;
use crate::{Error, Result};

/// One submittable form: its endpoint and field-to-slot map.
#[derive(Debug)]
pub struct FormTarget {
    pub name: &'static str,
    pub url: &'static str,
    slots: &'static [(&'static str, &'static str)],
}

impl FormTarget {
    fn slot_for(&self, field: &str) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, slot)| *slot)
    }
}

const TASTE_TEST_FORM: FormTarget = FormTarget {
    name: "taste-test",
    url: "https://docs.google.com/forms/d/e/1FAIpQLSdUU_4nttpp5a15pp2T9bQqDAkiSSGaHx4MZJzvhp9r_zjmRA/formResponse",
    slots: &[
        ("participant_id", "entry.1794639938"),
        ("coffee", "entry.1599024898"),
        ("bitterness", "entry.1824965704"),
        ("sweetness", "entry.671551337"),
        ("acidity", "entry.272037129"),
        ("body", "entry.1154026105"),
        ("aftertaste", "entry.832944999"),
        ("tasting_notes", "entry.1596012011"),
        ("quality", "entry.354662826"),
    ],
};

const PREFERENCE_FORM: FormTarget = FormTarget {
    name: "preference",
    url: "https://docs.google.com/forms/d/e/1FAIpQLScEqPRm9qKfdgCpRz1WbjQoO5xLLRtwnp2eUMY5TXxeZGWklQ/formResponse",
    slots: &[
        ("participant_id", "entry.649444699"),
        ("preference", "entry.1827359057"),
        ("coffee_frequency", "entry.70561061"),
        ("coffees_per_day", "entry.465256553"),
        ("teas_per_day", "entry.1432820961"),
        ("other_caffeinated_drinks", "entry.1544061021"),
        ("black_coffee", "entry.2016949479"),
        ("drink_decaf", "entry.461709431"),
        ("additions", "entry.270068699"),
        ("coffee_types", "entry.1869977587"),
        ("roast_preference", "entry.1035930586"),
        ("reasons", "entry.558699320"),
        ("limit_reasons", "entry.1572246610"),
    ],
};

/// The taste test response form.
pub fn taste_test_form() -> &'static FormTarget {
    &TASTE_TEST_FORM
}

/// The preference survey form.
pub fn preference_form() -> &'static FormTarget {
    &PREFERENCE_FORM
}

/// Relays field/value pairs to a form backend.
pub struct FormSubmitter<T: Transport> {
    transport: T,
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit `fields` to `target`. Multi-value answers must already be
    /// joined (", ") by the caller.
    ///
    /// The backend answers a redirect on success, so any status below
    /// 400 counts as accepted.
    pub async fn submit(&self, target: &FormTarget, fields: &[(&str, String)]) -> Result<()> {
        let mut form: Vec<(String, String)> = Vec::with_capacity(fields.len() + 1);
        for (field, value) in fields {
            match target.slot_for(field) {
                Some(slot) => form.push((slot.to_string(), value.clone())),
                None => {
                    tracing::warn!(form = target.name, field, "Dropping unmapped form field");
                }
            }
        }
        form.push(("submit".to_string(), "Submit".to_string()));

        let response = self.transport.post_form(target.url, &form).await?;
        if response.status < 400 {
            tracing::info!(form = target.name, fields = form.len() - 1, "Form submitted");
            Ok(())
        } else {
            Err(Error::Network(format!(
                "form submission failed with HTTP {}",
                response.status
            )))
        }
    }
}
