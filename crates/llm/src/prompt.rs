//! Prompt construction for the language-model boundary.
//!
//! Prompts ask for a strict JSON action list; the reply is parsed, never
//! evaluated. Name abbreviation for over-long items is delegated to the
//! model here and re-checked by the validator downstream.

use chefbyte_core::{InventoryItem, MAX_NAME_LEN};

/// Render the current inventory as `name: quantity` lines.
pub fn render_inventory(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "(empty)".to_string();
    }
    items
        .iter()
        .map(|i| format!("{}: {}", i.name, i.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mutation_instructions() -> String {
    format!(
        "Generate a structured list of items to be added, updated, or deleted. \
         Check if an item already exists in the inventory, accounting for case \
         differences and similar names. If an item does not exist, mark it for \
         insertion with the given quantity. If the item already exists, mark it \
         for updating the quantity. If the quantity of an item is going to be \
         zero or less, mark it for deletion. For items with long names, provide \
         an abbreviated name that fits within {MAX_NAME_LEN} characters. \
         Respond with a JSON array only, no explanations and no code fences. \
         Each element must have the fields: 'action' (add, update, delete), \
         'item_name', 'quantity'."
    )
}

/// Prompt for converting free-text input into an action list.
pub fn mutation_prompt(user_input: &str, items: &[InventoryItem]) -> String {
    format!(
        "The current inventory is:\n{}\n\nUser input: {}\n\n{}",
        render_inventory(items),
        user_input,
        mutation_instructions()
    )
}

/// Prompt for extracting an action list from a photograph.
pub fn image_prompt(items: &[InventoryItem]) -> String {
    format!(
        "The current inventory is:\n{}\n\nExtract the items from this image and \
         convert them into a structured list of items to be added, updated, or \
         deleted. {}",
        render_inventory(items),
        mutation_instructions()
    )
}

/// Prompt for the recipe-suggestion pass-through.
pub fn recipe_prompt(
    user_input: &str,
    profile: &str,
    items: &[InventoryItem],
    inventory_only: bool,
) -> String {
    let restriction = if inventory_only {
        "You must only suggest recipes that use items from the inventory.\n"
    } else {
        ""
    };
    format!(
        "This is a personalized chef recipe suggestion service. The user profile is:\n{}\n\n\
         The current inventory is:\n{}\n\nUser input: {}\n\n{}\
         Based on the profile and the input, suggest a recipe that fits the user's \
         preferences. Provide the recipe in a structured format including ingredients \
         and steps.",
        profile,
        render_inventory(items),
        user_input,
        restriction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chefbyte_core::ItemId;

    fn item(name: &str, quantity: i64) -> InventoryItem {
        InventoryItem {
            id: ItemId::new(),
            name: name.to_string(),
            quantity,
            expiration_date: None,
        }
    }

    #[test]
    fn inventory_renders_name_quantity_lines() {
        let items = vec![item("Milk", 1), item("Eggs", 12)];
        assert_eq!(render_inventory(&items), "Milk: 1\nEggs: 12");
    }

    #[test]
    fn empty_inventory_renders_placeholder() {
        assert_eq!(render_inventory(&[]), "(empty)");
    }

    #[test]
    fn mutation_prompt_carries_input_and_inventory() {
        let items = vec![item("Milk", 1)];
        let prompt = mutation_prompt("we finished the milk", &items);
        assert!(prompt.contains("Milk: 1"));
        assert!(prompt.contains("we finished the milk"));
        assert!(prompt.contains("'action' (add, update, delete)"));
        // Parse, don't evaluate: the model must not be invited to emit code.
        assert!(prompt.contains("JSON array only"));
    }

    #[test]
    fn recipe_prompt_restriction_is_conditional() {
        let items = vec![item("Milk", 1)];
        let restricted = recipe_prompt("pasta", "vegetarian", &items, true);
        assert!(restricted.contains("only suggest recipes"));

        let open = recipe_prompt("pasta", "vegetarian", &items, false);
        assert!(!open.contains("only suggest recipes"));
    }
}
