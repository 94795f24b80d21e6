use crate::error::CoreError;
use crate::masks::{capitalize_first, format_phone, uppercase_letters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    #[serde(rename = "phone")]
    PhoneUs,
    Uppercase,
    Capitalize,
}

impl MaskKind {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::PhoneUs),
            "uppercase" => Ok(Self::Uppercase),
            "capitalize" => Ok(Self::Capitalize),
            _ => Err(CoreError::UnknownMaskKind(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhoneUs => "phone",
            Self::Uppercase => "uppercase",
            Self::Capitalize => "capitalize",
        }
    }

    /// Runs the mask over `raw`. The name masks always produce a value;
    /// the phone mask returns `None` while the input is not growing.
    pub fn apply(&self, raw: &str, previous: &str) -> Option<String> {
        match self {
            Self::PhoneUs => format_phone(raw, previous),
            Self::Uppercase => Some(uppercase_letters(raw)),
            Self::Capitalize => Some(capitalize_first(raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    pub mask: MaskKind,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>, mask: MaskKind) -> Result<Self, CoreError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CoreError::EmptyFieldLabel);
        }
        Ok(Self { label, mask })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let fields = specs
            .into_iter()
            .map(|spec| FormField {
                spec,
                value: String::new(),
            })
            .collect();
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Result<&FormField, CoreError> {
        self.fields
            .get(index)
            .ok_or(CoreError::FieldOutOfRange(index))
    }

    /// Masks `raw` against the field's stored value and keeps the result as
    /// the new display value. When the mask produces no value (the phone
    /// mask while deleting), the raw text is stored exactly as edited.
    pub fn apply_input(&mut self, index: usize, raw: &str) -> Result<(), CoreError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(CoreError::FieldOutOfRange(index))?;
        field.value = match field.spec.mask.apply(raw, &field.value) {
            Some(next) => next,
            None => raw.to_string(),
        };
        Ok(())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldSpec, FormState, MaskKind};
    use crate::error::CoreError;

    fn sample_form() -> FormState {
        FormState::new(vec![
            FieldSpec::new("Name", MaskKind::Uppercase).expect("spec"),
            FieldSpec::new("Surname", MaskKind::Capitalize).expect("spec"),
            FieldSpec::new("Phone", MaskKind::PhoneUs).expect("spec"),
        ])
    }

    fn type_text(form: &mut FormState, index: usize, text: &str) {
        for ch in text.chars() {
            let mut raw = form.field(index).expect("field").value.clone();
            raw.push(ch);
            form.apply_input(index, &raw).expect("apply");
        }
    }

    #[test]
    fn mask_kind_parses_known_names() {
        assert_eq!(MaskKind::parse("phone"), Ok(MaskKind::PhoneUs));
        assert_eq!(MaskKind::parse(" Uppercase "), Ok(MaskKind::Uppercase));
        assert_eq!(MaskKind::parse("capitalize"), Ok(MaskKind::Capitalize));
    }

    #[test]
    fn mask_kind_rejects_unknown_names() {
        assert_eq!(
            MaskKind::parse("zip"),
            Err(CoreError::UnknownMaskKind("zip".to_string()))
        );
    }

    #[test]
    fn field_spec_requires_a_label() {
        assert_eq!(
            FieldSpec::new("  ", MaskKind::PhoneUs),
            Err(CoreError::EmptyFieldLabel)
        );
    }

    #[test]
    fn apply_input_threads_previous_value_through_the_phone_mask() {
        let mut form = sample_form();
        type_text(&mut form, 2, "1234");
        assert_eq!(form.field(2).expect("field").value, "(123) 4");
    }

    #[test]
    fn apply_input_keeps_raw_text_while_deleting_phone_digits() {
        let mut form = sample_form();
        type_text(&mut form, 2, "123");
        assert_eq!(form.field(2).expect("field").value, "(123)");

        // Backspace removes the closing parenthesis; the shrunken raw text
        // is stored without re-punctuating.
        form.apply_input(2, "(123").expect("apply");
        assert_eq!(form.field(2).expect("field").value, "(123");
    }

    #[test]
    fn apply_input_masks_name_fields_statelessly() {
        let mut form = sample_form();
        form.apply_input(0, "ada!").expect("apply");
        form.apply_input(1, "lovelace").expect("apply");
        assert_eq!(form.field(0).expect("field").value, "ADA");
        assert_eq!(form.field(1).expect("field").value, "Lovelace");
    }

    #[test]
    fn apply_input_rejects_out_of_range_fields() {
        let mut form = sample_form();
        assert_eq!(
            form.apply_input(9, "x"),
            Err(CoreError::FieldOutOfRange(9))
        );
    }

    #[test]
    fn reset_clears_every_value() {
        let mut form = sample_form();
        type_text(&mut form, 2, "1234567890");
        form.apply_input(0, "ada").expect("apply");
        form.reset();
        assert!(form.fields().iter().all(|field| field.value.is_empty()));
    }

    #[test]
    fn apply_input_clears_a_field_on_empty_raw_text() {
        let mut form = sample_form();
        type_text(&mut form, 2, "1234");
        form.apply_input(2, "").expect("apply");
        assert_eq!(form.field(2).expect("field").value, "");
    }
}
