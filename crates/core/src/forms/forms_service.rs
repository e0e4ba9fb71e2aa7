use crate::categories::Category;
use crate::constants::{APP_NAME, DEFAULT_CATEGORY, DEFAULT_MATERIAL, MAX_FEES_PCT};
use crate::forms::forms_model::{FieldDescriptor, FormSchema};
use crate::items::Condition;

const MATERIALS: [&str; 7] = [
    "wood", "metal", "plastic", "leather", "fabric", "glass", "mixed",
];

/// Build the intake form for a category.
///
/// Blank input means the default category. Categories outside the known
/// set still get the baseline fields, titled after the given text; only
/// chairs, sofas and beds get the trailing `seats` field.
pub fn resolve_form(category: &str) -> FormSchema {
    let trimmed = category.trim();
    let name = if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_lowercase()
    };

    let mut fields = baseline_fields();
    if name.parse::<Category>().is_ok_and(|c| c.has_seats()) {
        fields.push(
            FieldDescriptor::number("seats", "Seats (optional)", 1.0).bounds(
                Some(1.0),
                None,
                Some(1.0),
            ),
        );
    }

    FormSchema {
        title: format!("{} — {} Form", APP_NAME, title_case(&name)),
        fields,
    }
}

fn baseline_fields() -> Vec<FieldDescriptor> {
    let conditions: Vec<&str> = Condition::ALL.iter().map(Condition::as_str).collect();
    vec![
        FieldDescriptor::text("name", "Item name", "").required(),
        FieldDescriptor::select(
            "condition",
            "Condition",
            &conditions,
            Condition::default().as_str(),
        )
        .required(),
        FieldDescriptor::money("buy_price", "Purchase price ($)", 0.0)
            .required()
            .bounds(Some(0.0), None, Some(1.0)),
        FieldDescriptor::money("repair_cost", "Repair cost ($)", 0.0)
            .required()
            .bounds(Some(0.0), None, Some(1.0)),
        FieldDescriptor::number("fees_pct", "Platform fees (%)", 0.0)
            .required()
            .bounds(Some(0.0), Some(MAX_FEES_PCT), Some(1.0)),
        FieldDescriptor::textarea("notes", "Notes (optional)", ""),
        FieldDescriptor::select(
            "material",
            "Material (optional)",
            &MATERIALS,
            DEFAULT_MATERIAL,
        ),
    ]
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
