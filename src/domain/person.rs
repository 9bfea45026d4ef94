use crate::domain::address::Address;
use crate::domain::model::{Identity, StudentId};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: StudentId,
    name: String,
    age: u32,
    address: Address,
}

impl Person {
    pub fn new(id: StudentId, name: impl Into<String>, age: u32, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            address,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Identity for Person {
    fn id(&self) -> StudentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Address: {}",
            self.id, self.name, self.age, self.address
        )
    }
}
