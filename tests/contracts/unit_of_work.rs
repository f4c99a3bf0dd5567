//! Unit of work contracts: commit publishes, everything else discards.

use std::sync::Arc;
use std::thread;

use cookmate::domain::entities::Ingredient;
use cookmate::domain::value_objects::{Quantity, Unit};
use cookmate::error::CookmateError;
use cookmate::presentation::Services;
use cookmate::{with_transaction, IngredientInput};

use crate::common::{omelette_kitchen, stock, StoreFixture};

/// CONTRACT: committed writes are visible to the next unit of work.
#[test]
fn contract_commit_publishes_writes() {
    for fixture in StoreFixture::all() {
        let egg = Ingredient::new("egg", Unit::Piece).unwrap();
        {
            let mut uow = fixture.store.begin().unwrap();
            uow.ingredients().add(egg.clone()).unwrap();
            uow.commit().unwrap();
        }
        let mut uow = fixture.store.begin().unwrap();
        assert_eq!(
            uow.ingredients().list().unwrap(),
            vec![egg],
            "backend {}",
            fixture.name
        );
    }
}

/// CONTRACT: explicit rollback and plain drop both discard staged writes.
#[test]
fn contract_rollback_and_drop_discard_writes() {
    for fixture in StoreFixture::all() {
        {
            let mut uow = fixture.store.begin().unwrap();
            uow.ingredients()
                .add(Ingredient::new("egg", Unit::Piece).unwrap())
                .unwrap();
            uow.rollback().unwrap();
            assert!(uow.ingredients().list().unwrap().is_empty());
        }
        {
            let mut uow = fixture.store.begin().unwrap();
            uow.ingredients()
                .add(Ingredient::new("milk", Unit::Milliliter).unwrap())
                .unwrap();
        }
        let mut uow = fixture.store.begin().unwrap();
        assert!(
            uow.ingredients().list().unwrap().is_empty(),
            "backend {}",
            fixture.name
        );
    }
}

/// CONTRACT: a failing transaction body leaves no trace and its error propagates.
#[test]
fn contract_with_transaction_rolls_back_on_error() {
    for fixture in StoreFixture::all() {
        let result: Result<(), CookmateError> = with_transaction(fixture.store.as_ref(), |uow| {
            uow.ingredients()
                .add(Ingredient::new("egg", Unit::Piece).unwrap())?;
            Err(CookmateError::invalid("abort"))
        });

        assert!(matches!(result, Err(CookmateError::InvalidArgument { .. })));
        let mut uow = fixture.store.begin().unwrap();
        assert!(
            uow.ingredients().list().unwrap().is_empty(),
            "backend {}",
            fixture.name
        );
    }
}

/// CONTRACT: a rejected cook changes nothing, on any backend.
#[test]
fn contract_rejected_cook_is_all_or_nothing() {
    for fixture in StoreFixture::all() {
        let services = fixture.services();
        omelette_kitchen(&services);
        stock(&services, "egg", "10", "pcs");
        stock(&services, "milk", "30", "ml");

        let err = services.cook.cook_by_name("omelette", 1).unwrap_err();

        assert_eq!(err.missing().map(|m| m.len()), Some(1));
        let entries = services.inventory.list().unwrap();
        let egg = entries.iter().find(|e| e.ingredient_name == "egg").unwrap();
        assert_eq!(
            *egg.item.quantity(),
            Quantity::of("10", Unit::Piece).unwrap(),
            "backend {}",
            fixture.name
        );
    }
}

/// CONTRACT: concurrent cooks serialize; stock never goes negative and
/// exactly as many cooks succeed as the stock covers.
#[test]
fn contract_concurrent_cooks_serialize() {
    for fixture in StoreFixture::all() {
        let services = fixture.services();
        omelette_kitchen(&services);
        stock(&services, "egg", "6", "pcs");
        stock(&services, "milk", "1", "l");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&fixture.store);
                thread::spawn(move || {
                    let services = Services::new(
                        store,
                        Arc::new(cookmate::domain::ports::NoopEventSink),
                    );
                    services.cook.cook_by_name("omelette", 1).is_ok()
                })
            })
            .collect();

        let succeeded = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(succeeded, 3, "backend {}", fixture.name);
        let entries = services.inventory.list().unwrap();
        let egg = entries.iter().find(|e| e.ingredient_name == "egg").unwrap();
        assert!(egg.item.quantity().is_zero());
        let milk = entries.iter().find(|e| e.ingredient_name == "milk").unwrap();
        assert_eq!(
            *milk.item.quantity(),
            Quantity::of("0.85", Unit::Liter).unwrap()
        );
    }
}

/// CONTRACT: a reopened TOML store sees exactly what was committed.
#[test]
fn contract_toml_store_survives_reopen() {
    let fixture = StoreFixture::toml();
    let services = fixture.services();
    omelette_kitchen(&services);
    stock(&services, "egg", "4", "pcs");
    stock(&services, "milk", "100", "ml");
    services.cook.cook_by_name("omelette", 2).unwrap();

    let reopened = Services::new(
        fixture.reopen().unwrap(),
        Arc::new(cookmate::domain::ports::NoopEventSink),
    );

    let recipe = reopened.recipes.get_by_name("omelette").unwrap();
    assert_eq!(recipe.steps(), ["whisk".to_string(), "fry".to_string()]);
    let entries = reopened.inventory.list().unwrap();
    assert!(entries.iter().all(|e| e.item.quantity().is_zero()));
}

/// CONTRACT: a write that only changes the unit is persisted like any other.
#[test]
fn contract_unit_only_change_is_committed() {
    for fixture in StoreFixture::all() {
        let services = fixture.services();
        omelette_kitchen(&services);
        stock(&services, "flour", "1", "kg");
        stock(&services, "flour", "1000", "g");
        services
            .recipes
            .update_ingredients(
                "omelette",
                &[
                    IngredientInput::new("egg", "2", "pcs"),
                    IngredientInput::new("milk", "0.05", "l"),
                ],
            )
            .unwrap();

        let store = fixture.reopen().unwrap_or_else(|| Arc::clone(&fixture.store));
        let reopened = Services::new(store, Arc::new(cookmate::domain::ports::NoopEventSink));

        let flour = reopened
            .inventory
            .list()
            .unwrap()
            .into_iter()
            .find(|e| e.ingredient_name == "flour")
            .unwrap();
        assert_eq!(flour.item.quantity().unit(), Unit::Gram, "backend {}", fixture.name);
        assert_eq!(flour.item.quantity().amount().to_string(), "1000");

        let milk = reopened.ingredients.get_by_name("milk").unwrap();
        let recipe = reopened.recipes.get_by_name("omelette").unwrap();
        assert_eq!(
            recipe.required(&milk.id()).map(|q| q.unit()),
            Some(Unit::Liter),
            "backend {}",
            fixture.name
        );
    }
}
