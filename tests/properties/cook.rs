//! Property tests for the cook transaction.

use proptest::prelude::*;

use cookmate::domain::value_objects::{Quantity, Unit};
use cookmate::IngredientInput;

use crate::common::StoreFixture;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a cook either deducts every requirement exactly, or fails
    /// with a deficit for each short ingredient and changes nothing.
    #[test]
    fn property_cook_is_all_or_nothing(
        need_flour in 1u32..500,
        need_egg in 1u32..4,
        have_flour in 0u32..2000,
        have_egg in 0u32..12,
        servings in 1u32..4,
    ) {
        let fixture = StoreFixture::memory();
        let services = fixture.services();
        services.ingredients.register("flour", Unit::Gram, Default::default()).unwrap();
        services.ingredients.register("egg", Unit::Piece, Default::default()).unwrap();
        services.recipes.create_recipe(
            "pancake",
            &[
                IngredientInput::new("flour", need_flour.to_string(), "g"),
                IngredientInput::new("egg", need_egg.to_string(), "pcs"),
            ],
            Vec::new(),
            Default::default(),
        ).unwrap();
        // Flour is stocked in kilograms so every cook crosses a unit boundary.
        let have_flour_kg = Quantity::of(&have_flour.to_string(), Unit::Gram)
            .unwrap()
            .to(Unit::Kilogram)
            .unwrap();
        services.inventory
            .set_stock("flour", &have_flour_kg.amount().to_string(), "kg", None)
            .unwrap();
        services.inventory.set_stock("egg", &have_egg.to_string(), "pcs", None).unwrap();

        let before = services.inventory.list().unwrap();
        let flour_short = need_flour * servings > have_flour;
        let egg_short = need_egg * servings > have_egg;

        match services.cook.cook_by_name("pancake", servings) {
            Ok(_) => {
                prop_assert!(!flour_short && !egg_short);
                let after = services.inventory.list().unwrap();
                let flour = after.iter().find(|e| e.ingredient_name == "flour").unwrap();
                let egg = after.iter().find(|e| e.ingredient_name == "egg").unwrap();
                prop_assert_eq!(
                    *flour.item.quantity(),
                    Quantity::of(&(have_flour - need_flour * servings).to_string(), Unit::Gram).unwrap()
                );
                prop_assert_eq!(flour.item.quantity().unit(), Unit::Kilogram);
                prop_assert_eq!(
                    *egg.item.quantity(),
                    Quantity::of(&(have_egg - need_egg * servings).to_string(), Unit::Piece).unwrap()
                );
            }
            Err(err) => {
                let missing = err.missing().expect("only shortages reject a cook");
                prop_assert_eq!(missing.len(), usize::from(flour_short) + usize::from(egg_short));
                prop_assert_eq!(services.inventory.list().unwrap(), before);
            }
        }
    }
}
