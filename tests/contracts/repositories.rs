//! Repository contracts, run against every store.

use chrono::NaiveDate;

use cookmate::domain::entities::{Ingredient, InventoryItem, Recipe};
use cookmate::domain::ports::RepositoryError;
use cookmate::domain::value_objects::{Quantity, QuantityMap, Unit};

use crate::common::StoreFixture;

fn ingredient(name: &str, unit: Unit) -> Ingredient {
    Ingredient::new(name, unit).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// CONTRACT: listing preserves insertion order; lookups by id and name agree.
#[test]
fn contract_ingredients_keep_insertion_order() {
    for fixture in StoreFixture::all() {
        let names = ["salt", "egg", "milk"];
        let mut uow = fixture.store.begin().unwrap();
        for name in names {
            uow.ingredients().add(ingredient(name, Unit::Gram)).unwrap();
        }
        uow.commit().unwrap();
        drop(uow);

        let mut uow = fixture.store.begin().unwrap();
        let listed: Vec<String> = uow
            .ingredients()
            .list()
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(listed, names, "backend {}", fixture.name);

        let egg = uow.ingredients().find_by_name("egg").unwrap().unwrap();
        assert_eq!(
            uow.ingredients().get(&egg.id()).unwrap().as_ref(),
            Some(&egg),
            "backend {}",
            fixture.name
        );
        assert!(uow.ingredients().find_by_name("pepper").unwrap().is_none());
    }
}

/// CONTRACT: adding an id twice is a duplicate; updating an unknown id is missing.
#[test]
fn contract_duplicate_and_missing_ids() {
    for fixture in StoreFixture::all() {
        let egg = ingredient("egg", Unit::Piece);
        let mut uow = fixture.store.begin().unwrap();
        uow.ingredients().add(egg.clone()).unwrap();

        let dup = uow.ingredients().add(egg.clone()).unwrap_err();
        assert!(
            matches!(dup, RepositoryError::Duplicate { .. }),
            "backend {}",
            fixture.name
        );

        let stranger = ingredient("ghost", Unit::Gram);
        let missing = uow.ingredients().update(stranger).unwrap_err();
        assert!(
            matches!(missing, RepositoryError::Missing { .. }),
            "backend {}",
            fixture.name
        );
    }
}

/// CONTRACT: update replaces the stored aggregate; remove is idempotent.
#[test]
fn contract_recipe_update_and_remove() {
    for fixture in StoreFixture::all() {
        let egg = ingredient("egg", Unit::Piece);
        let mut required = QuantityMap::new();
        required.insert(egg.id(), Quantity::of("2", Unit::Piece).unwrap());
        let recipe = Recipe::new("omelette", required).unwrap();

        let mut uow = fixture.store.begin().unwrap();
        uow.ingredients().add(egg).unwrap();
        uow.recipes().add(recipe.clone()).unwrap();
        uow.commit().unwrap();
        drop(uow);

        let mut uow = fixture.store.begin().unwrap();
        let tagged = recipe.with_metadata_field("cuisine", "french");
        uow.recipes().update(tagged.clone()).unwrap();
        assert_eq!(
            uow.recipes().get(&recipe.id()).unwrap(),
            Some(tagged),
            "backend {}",
            fixture.name
        );

        uow.recipes().remove(&recipe.id()).unwrap();
        uow.recipes().remove(&recipe.id()).unwrap();
        assert!(uow.recipes().list().unwrap().is_empty());
    }
}

/// CONTRACT: inventory is keyed by ingredient; add_or_update upserts.
#[test]
fn contract_inventory_upserts_by_ingredient() {
    for fixture in StoreFixture::all() {
        let milk = ingredient("milk", Unit::Milliliter);
        let first = InventoryItem::new(milk.id(), Quantity::of("500", Unit::Milliliter).unwrap())
            .unwrap();
        let second = InventoryItem::new(milk.id(), Quantity::of("1", Unit::Liter).unwrap())
            .unwrap()
            .with_expiration(Some(date(2026, 10, 20)));

        let mut uow = fixture.store.begin().unwrap();
        uow.ingredients().add(milk.clone()).unwrap();
        uow.inventory().add_or_update(first).unwrap();
        uow.inventory().add_or_update(second.clone()).unwrap();
        uow.commit().unwrap();
        drop(uow);

        let mut uow = fixture.store.begin().unwrap();
        let items = uow.inventory().list().unwrap();
        assert_eq!(items.len(), 1, "backend {}", fixture.name);
        assert_eq!(items[0].quantity().unit(), Unit::Liter);
        assert_eq!(items[0].expires_on(), Some(date(2026, 10, 20)));
        assert_eq!(uow.inventory().get(&milk.id()).unwrap(), Some(second));
    }
}

/// CONTRACT: low_stock and expiring_soon filter the same way on every backend.
#[test]
fn contract_inventory_queries() {
    let today = date(2026, 10, 18);
    for fixture in StoreFixture::all() {
        let egg = ingredient("egg", Unit::Piece);
        let milk = ingredient("milk", Unit::Milliliter);
        let cream = ingredient("cream", Unit::Milliliter);

        let mut uow = fixture.store.begin().unwrap();
        for i in [&egg, &milk, &cream] {
            uow.ingredients().add(i.clone()).unwrap();
        }
        uow.inventory()
            .add_or_update(InventoryItem::new(egg.id(), Quantity::zero(Unit::Piece)).unwrap())
            .unwrap();
        uow.inventory()
            .add_or_update(
                InventoryItem::new(milk.id(), Quantity::of("1000", Unit::Milliliter).unwrap())
                    .unwrap()
                    .with_expiration(Some(date(2026, 10, 20))),
            )
            .unwrap();
        uow.inventory()
            .add_or_update(
                InventoryItem::new(cream.id(), Quantity::of("200", Unit::Milliliter).unwrap())
                    .unwrap()
                    .with_expiration(Some(date(2026, 10, 17))),
            )
            .unwrap();
        uow.commit().unwrap();
        drop(uow);

        let mut uow = fixture.store.begin().unwrap();
        let low: Vec<_> = uow
            .inventory()
            .low_stock()
            .unwrap()
            .iter()
            .map(InventoryItem::ingredient_id)
            .collect();
        assert_eq!(low, vec![egg.id()], "backend {}", fixture.name);

        let expiring: Vec<_> = uow
            .inventory()
            .expiring_soon(3, today)
            .unwrap()
            .iter()
            .map(InventoryItem::ingredient_id)
            .collect();
        assert_eq!(expiring, vec![milk.id()], "backend {}", fixture.name);
        assert!(uow.inventory().expiring_soon(1, today).unwrap().is_empty());
    }
}
