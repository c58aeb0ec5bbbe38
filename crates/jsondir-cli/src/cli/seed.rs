//! Sample data: a small `users` collection with nested addresses.

use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "users";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub company: String,
    pub address: Address,
}

fn user(name: &str, company: &str, address: (&str, &str, &str)) -> User {
    let (city, state, country) = address;
    User {
        name: name.to_string(),
        age: 23,
        contact: "9234923492".to_string(),
        company: company.to_string(),
        address: Address {
            city: city.to_string(),
            state: state.to_string(),
            country: country.to_string(),
            pincode: "008".to_string(),
        },
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("Smoker", "Surya Tech", ("logue town", "Kinki", "Japan")),
        user("Zoro", "Asura Tech", ("Shimotsuki Village", "East Blue", "Mars")),
        user("Benn", "Yantra Tech", ("Shanks' Ship", "Grand Line", "Nepal")),
        user("Doflamingo", "String Tech", ("Dressrosa", "New World", "Australia")),
        user("Sabo", "Agni Tech", ("Baltigo", "Grand Line", "Equador")),
        user("Kuma", "Panda Tech", ("Sorbet Kingdom", "South Blue", "South Africa")),
        user("Kid", "Montessori Tech", ("South Blue", "South Blue", "Argentina")),
    ]
}
