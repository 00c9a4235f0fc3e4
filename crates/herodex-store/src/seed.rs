//! Default roster used by the demo binary and fixtures

use crate::superhero::Superhero;

fn hero(id: &str, name: &str, real_name: &str, superpower: &str) -> Superhero {
    Superhero {
        id: id.to_string(),
        name: name.to_string(),
        real_name: Some(real_name.to_string()),
        superpower: Some(superpower.to_string()),
    }
}

/// The roster a seeded store starts with
///
/// Identifiers follow the store's generated shape (millis timestamp plus a
/// 6-digit suffix) so seeded and created records are indistinguishable.
#[must_use]
pub fn default_roster() -> Vec<Superhero> {
    vec![
        hero(
            "1700000000000000001",
            "Superman",
            "Clark Kent",
            "Flight, super strength, heat vision",
        ),
        hero(
            "1700000000000000002",
            "Batman",
            "Bruce Wayne",
            "Peak human conditioning, detective work, gadgets",
        ),
        hero(
            "1700000000000000003",
            "Wonder Woman",
            "Diana Prince",
            "Super strength, lasso of truth",
        ),
        hero(
            "1700000000000000004",
            "Flash",
            "Barry Allen",
            "Super speed",
        ),
        hero(
            "1700000000000000005",
            "Green Arrow",
            "Oliver Queen",
            "Master archery",
        ),
    ]
}
