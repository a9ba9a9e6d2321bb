//! The adventurer walkthrough.
//!
//! An adventurer with skills but no weapon and no pet, queried the way
//! JavaScript optional chaining would query it. Each step pairs the JavaScript
//! expression with the result optchain produces for it.

use optchain_access::{Fallback, Path, describe_all_with, resolve, resolve_with};
use optchain_types::Value;
use serde::Serialize;

/// Every skill the walkthrough asks about; only some are known.
pub const ALL_SKILLS: [&str; 5] = ["run", "negotiate", "intimidate", "scare", "menace"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoStep {
    pub expression: &'static str,
    pub result: Value,
}

/// John: 100 health, two skills, no weapon, no pet.
pub fn adventurer() -> Value {
    Value::record([
        ("name", Value::from("John")),
        ("health", Value::from(100)),
        (
            "skills",
            Value::record([
                (
                    "run",
                    Value::record([("description", "Escapes the battle as fast as possible!")]),
                ),
                (
                    "negotiate",
                    Value::record([(
                        "description",
                        "Talks to the enemy until finding an opportunity to run away",
                    )]),
                ),
            ]),
        ),
    ])
}

/// The same adventurer carrying a sword.
pub fn armed_adventurer() -> Value {
    let mut hero = adventurer();
    if let Value::Record(fields) = &mut hero {
        fields.insert(
            "weapon".into(),
            Value::record([("name", Value::from("Sword")), ("damage", Value::from(30))]),
        );
    }
    hero
}

/// Descriptions of the known skills in [`ALL_SKILLS`] order. Empty
/// descriptions are dropped along with missing ones, as `filter(Boolean)` does.
pub fn skill_descriptions(hero: &Value) -> Value {
    let skills = resolve(hero, &Path::new().field("skills"), Value::Absent);
    let description = Path::new().field("description");
    Value::List(describe_all_with(
        &skills,
        ALL_SKILLS,
        &description,
        &Value::Absent,
        Fallback::Falsy,
    ))
}

/// Runs every step against [`adventurer`] and [`armed_adventurer`].
pub fn walkthrough() -> Vec<DemoStep> {
    let hero = adventurer();
    let armed = armed_adventurer();

    let health = resolve(&hero, &Path::new().field("health"), Value::Absent);
    let get_health = Path::new().invoke("getHealth");
    let weapon_damage = Path::new().field("weapon").field("damage");
    let pet_attack = Path::new().field("pet").invoke("attack");

    vec![
        DemoStep {
            expression: "adventurer.getHealth?.()",
            result: resolve(&hero, &get_health, Value::Absent),
        },
        DemoStep {
            expression: "adventurer.getHealth?.() || adventurer.health",
            result: resolve_with(&hero, &get_health, health, Fallback::Falsy),
        },
        DemoStep {
            expression: "adventurer.weapon?.damage",
            result: resolve(&hero, &weapon_damage, Value::Absent),
        },
        DemoStep {
            expression: "adventurer.weapon?.damage || 1",
            result: resolve_with(&hero, &weapon_damage, Value::from(1), Fallback::Falsy),
        },
        DemoStep {
            expression: "adventurer.pet?.attack?.() || 0",
            result: resolve_with(&hero, &pet_attack, Value::from(0), Fallback::Falsy),
        },
        DemoStep {
            expression: "armed?.weapon?.damage || 0",
            result: resolve_with(&armed, &weapon_damage, Value::from(0), Fallback::Falsy),
        },
        DemoStep {
            expression: "undefined?.weapon?.damage || 0",
            result: resolve_with(&Value::Absent, &weapon_damage, Value::from(0), Fallback::Falsy),
        },
        DemoStep {
            expression: "allSkills.map(s => adventurer.skills?.[s]?.description).filter(Boolean)",
            result: skill_descriptions(&hero),
        },
    ]
}
