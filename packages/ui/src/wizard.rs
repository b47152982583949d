//! State machine for the 3-step AI recipe creation flow.
//!
//! Kept free of framework types so every transition and invariant can be
//! tested directly; the view layer holds a [`WizardState`] in a signal and
//! calls into it.

use api::Product;

/// Minimum ingredient selection before the flow may advance.
pub const MIN_INGREDIENTS: usize = 2;
/// Fixed upper bound for the budget input.
pub const MAX_BUDGET: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    SelectIngredients,
    SetBudget,
    /// Request issued: waiting for the generation result, or showing it.
    Generate,
}

/// One outbound generation request: the selected ingredient names and the
/// budget.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    pub budget: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    catalog: Vec<Product>,
    selected: Vec<i64>,
    /// Selected product records, snapshotted when leaving step 1 and kept in
    /// sync with later removals.
    chosen: Vec<Product>,
    budget: f64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products;
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Select or deselect a catalog entry (step 1 only).
    pub fn toggle(&mut self, id: i64) {
        if self.step != WizardStep::SelectIngredients {
            return;
        }
        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
        } else if self.catalog.iter().any(|p| p.id == id) {
            self.selected.push(id);
        }
    }

    pub fn selection_valid(&self) -> bool {
        self.selected.len() >= MIN_INGREDIENTS
    }

    pub fn selected_products(&self) -> Vec<Product> {
        self.catalog
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .cloned()
            .collect()
    }

    /// The snapshot taken when leaving step 1.
    pub fn chosen(&self) -> &[Product] {
        &self.chosen
    }

    /// Sum of the selected ingredient prices — the budget minimum. Live on
    /// step 1, snapshot-based afterwards.
    pub fn base_cost(&self) -> f64 {
        if self.step == WizardStep::SelectIngredients {
            self.selected_products().iter().map(|p| p.price).sum()
        } else {
            self.chosen.iter().map(|p| p.price).sum()
        }
    }

    /// Step 1 → step 2. Snapshots the selection and raises a stale budget up
    /// to the new minimum. Returns whether the transition happened.
    pub fn advance(&mut self) -> bool {
        if self.step != WizardStep::SelectIngredients || !self.selection_valid() {
            return false;
        }
        self.chosen = self.selected_products();
        if self.budget < self.base_cost() {
            self.budget = self.base_cost();
        }
        self.step = WizardStep::SetBudget;
        true
    }

    /// Step 2 → step 1. The selection and budget stay as they are.
    pub fn back(&mut self) {
        if self.step == WizardStep::SetBudget {
            self.step = WizardStep::SelectIngredients;
        }
    }

    /// Remove one chosen ingredient (the chip list on step 2). The budget
    /// minimum follows the selection.
    pub fn remove_chosen(&mut self, id: i64) {
        self.selected.retain(|s| *s != id);
        self.chosen.retain(|p| p.id != id);
        if self.budget < self.base_cost() {
            self.budget = self.base_cost();
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn set_budget(&mut self, budget: f64) {
        self.budget = budget;
    }

    pub fn budget_valid(&self) -> bool {
        self.budget >= self.base_cost() && self.budget <= MAX_BUDGET
    }

    pub fn ingredient_names(&self) -> Vec<String> {
        self.chosen.iter().map(|p| p.name.clone()).collect()
    }

    /// Step 2 → step 3, issuing the request payload. Once this returns
    /// `Some`, the flow can only wait for the response.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if self.step != WizardStep::SetBudget || !self.budget_valid() {
            return None;
        }
        self.step = WizardStep::Generate;
        Some(GenerationRequest {
            ingredients: self.ingredient_names(),
            budget: self.budget,
        })
    }

    /// Failed generation returns to the budget step — not to step 1 — with
    /// the prior budget intact.
    pub fn generation_failed(&mut self) {
        if self.step == WizardStep::Generate {
            self.step = WizardStep::SetBudget;
        }
    }

    /// "Generar otra": back to an empty step 1, keeping the loaded catalog.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.chosen.clear();
        self.budget = 0.0;
        self.step = WizardStep::SelectIngredients;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
            category_id: 1,
            category_name: None,
        }
    }

    fn wizard_with_catalog() -> WizardState {
        let mut state = WizardState::new();
        state.set_catalog(vec![
            product(1, "Tomate", 2.50),
            product(2, "Cebolla", 1.75),
            product(3, "Arroz", 3.00),
        ]);
        state
    }

    #[test]
    fn test_cannot_advance_with_fewer_than_two_ingredients() {
        let mut state = wizard_with_catalog();
        assert!(!state.advance());

        state.toggle(1);
        assert!(!state.selection_valid());
        assert!(!state.advance());
        assert_eq!(state.step(), WizardStep::SelectIngredients);

        state.toggle(2);
        assert!(state.advance());
        assert_eq!(state.step(), WizardStep::SetBudget);
    }

    #[test]
    fn test_base_cost_is_sum_of_selected_prices() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        assert!(state.advance());
        assert_eq!(state.base_cost(), 4.25);

        // Budget was raised to the minimum on advance.
        assert_eq!(state.budget(), 4.25);
    }

    #[test]
    fn test_budget_minimum_follows_selection_changes() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.toggle(3);
        state.advance();
        assert_eq!(state.base_cost(), 7.25);

        state.remove_chosen(3);
        assert_eq!(state.base_cost(), 4.25);

        // Re-selecting after going back re-snapshots on advance.
        state.back();
        state.toggle(3);
        state.advance();
        assert_eq!(state.base_cost(), 7.25);
        assert_eq!(state.budget(), 7.25);
    }

    #[test]
    fn test_budget_below_minimum_is_rejected() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.advance();

        state.set_budget(4.00);
        assert!(!state.budget_valid());
        assert!(state.begin_generation().is_none());
        assert_eq!(state.step(), WizardStep::SetBudget);

        state.set_budget(10.00);
        assert!(state.budget_valid());
    }

    #[test]
    fn test_budget_above_upper_bound_is_rejected() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.advance();

        state.set_budget(MAX_BUDGET + 0.01);
        assert!(!state.budget_valid());
    }

    #[test]
    fn test_generation_request_carries_names_and_budget() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.advance();
        state.set_budget(10.0);

        let request = state.begin_generation().unwrap();
        assert_eq!(request.ingredients, vec!["Tomate", "Cebolla"]);
        assert_eq!(request.budget, 10.0);
        assert_eq!(state.step(), WizardStep::Generate);
    }

    #[test]
    fn test_failure_returns_to_budget_step_with_budget_intact() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.advance();
        state.set_budget(12.50);
        state.begin_generation().unwrap();

        state.generation_failed();
        assert_eq!(state.step(), WizardStep::SetBudget);
        assert_eq!(state.budget(), 12.50);
        assert_eq!(state.chosen().len(), 2);
    }

    #[test]
    fn test_reset_keeps_catalog_and_clears_the_rest() {
        let mut state = wizard_with_catalog();
        state.toggle(1);
        state.toggle(2);
        state.advance();
        state.set_budget(9.0);
        state.begin_generation().unwrap();

        state.reset();
        assert_eq!(state.step(), WizardStep::SelectIngredients);
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.budget(), 0.0);
        assert_eq!(state.catalog().len(), 3);
    }
}
