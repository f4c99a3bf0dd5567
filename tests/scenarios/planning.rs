//! Scenario: Planning meals from the same inventory
//!
//! R1 needs egg=2 pcs and tomato=300 g; R2 needs egg=5 pcs. Stock is
//! egg=4 pcs and tomato=500 g.

use std::collections::BTreeMap;

use cookmate::domain::value_objects::{Quantity, RecipeId, Unit};
use cookmate::presentation::Services;
use cookmate::IngredientInput;

use crate::common::{stock, StoreFixture};

fn two_recipe_kitchen(services: &Services) -> (RecipeId, RecipeId) {
    services
        .ingredients
        .register("egg", Unit::Piece, Default::default())
        .unwrap();
    services
        .ingredients
        .register("tomato", Unit::Gram, Default::default())
        .unwrap();
    let r1 = services
        .recipes
        .create_recipe(
            "R1",
            &[
                IngredientInput::new("egg", "2", ""),
                IngredientInput::new("tomato", "300", ""),
            ],
            Vec::new(),
            Default::default(),
        )
        .unwrap();
    let r2 = services
        .recipes
        .create_recipe(
            "R2",
            &[IngredientInput::new("egg", "5", "")],
            Vec::new(),
            Default::default(),
        )
        .unwrap();
    stock(services, "egg", "4", "pcs");
    stock(services, "tomato", "500", "g");
    (r1, r2)
}

/// SCENARIO 4: only recipes the stock covers are cookable.
#[test]
fn scenario_cookable_recipes() {
    for fixture in StoreFixture::all() {
        let services = fixture.services();
        two_recipe_kitchen(&services);

        let cookable: Vec<String> = services
            .planner
            .list_cookable_recipes(1)
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();

        assert_eq!(cookable, vec!["R1".to_string()], "backend {}", fixture.name);
        assert!(services.planner.list_cookable_recipes(2).unwrap().is_empty());
    }
}

/// SCENARIO 5: the shopping list holds only true shortfalls.
#[test]
fn scenario_shopping_list() {
    for fixture in StoreFixture::all() {
        let services = fixture.services();
        let (r1, r2) = two_recipe_kitchen(&services);
        let tomato = services.ingredients.get_by_name("tomato").unwrap();

        let desired = BTreeMap::from([(r1, 2), (r2, 0)]);
        let list = services
            .planner
            .generate_shopping_list(Some(&desired))
            .unwrap();

        assert_eq!(list.len(), 1, "backend {}", fixture.name);
        assert_eq!(list[&tomato.id()], Quantity::of("100", Unit::Gram).unwrap());
    }
}

/// Without a selection every recipe counts once; demand is summed first.
#[test]
fn scenario_shopping_list_for_everything() {
    let fixture = StoreFixture::memory();
    let services = fixture.services();
    two_recipe_kitchen(&services);
    let egg = services.ingredients.get_by_name("egg").unwrap();

    let list = services.planner.generate_shopping_list(None).unwrap();

    // egg demand 2 + 5 = 7 against 4 in stock; tomato 300 is covered.
    assert_eq!(list.len(), 1);
    assert_eq!(list[&egg.id()], Quantity::of("3", Unit::Piece).unwrap());
}
