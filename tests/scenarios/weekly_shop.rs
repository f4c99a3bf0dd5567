//! Scenario: A week in a persisted kitchen
//!
//! Journey: a cook registers ingredients, writes a recipe, stocks up, plans,
//! cooks until stock runs out, and shops for the rest. Every step is a
//! separate `cookmate` process sharing the TOML document.

use crate::common::TestEnv;

/// SCENARIO: end-to-end journey through the CLI with the TOML store
#[test]
fn scenario_weekly_shop_journey() {
    let env = TestEnv::new();

    for (name, unit) in [("egg", "pcs"), ("milk", "ml"), ("butter", "g")] {
        let result = env.run(&["ingredient", "add", name, "--unit", unit]);
        assert!(result.success, "{}", result.combined_output());
    }

    let result = env.run(&[
        "recipe",
        "add",
        "omelette",
        "-i",
        "egg,2",
        "-i",
        "milk,50,ml",
        "-i",
        "butter,10",
        "--step",
        "whisk eggs and milk",
        "--step",
        "fry in butter",
        "--meta",
        "cuisine=french",
    ]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.store_path().exists());

    env.run(&["inventory", "set", "egg", "5"]);
    env.run(&["inventory", "set", "milk", "0.5", "--unit", "l"]);
    env.run(&["inventory", "set", "butter", "250"]);

    let result = env.run(&["--json", "plan", "cookable", "--servings", "2"]);
    assert_eq!(result.data()["recipes"], serde_json::json!(["omelette"]));

    let result = env.run(&["cook", "omelette", "--servings", "2"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Cooked omelette (2 serving(s))"));

    // One egg left: a second double portion must fail without touching stock.
    let result = env.run(&["cook", "omelette", "-s", "2"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("egg: 3 pcs"));

    let result = env.run(&["--json", "inventory", "list"]);
    let items = result.data()["items"].as_array().unwrap().clone();
    let egg = items.iter().find(|i| i["ingredient"] == "egg").unwrap();
    assert_eq!(egg["quantity"]["amount"], "1");
    let milk = items.iter().find(|i| i["ingredient"] == "milk").unwrap();
    assert_eq!(milk["quantity"], serde_json::json!({"amount": "0.4", "unit": "l"}));

    let result = env.run(&["--json", "plan", "shopping", "--recipe", "omelette=3"]);
    assert_eq!(
        result.data()["missing"],
        serde_json::json!({"egg": {"amount": "5", "unit": "pcs"}})
    );

    let result = env.run(&["inventory", "add", "egg", "1", "--unit", "pcs"]);
    assert!(result.success, "{}", result.combined_output());
    let result = env.run(&["cook", "omelette"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Low stock: egg (0 pcs)"));
}
