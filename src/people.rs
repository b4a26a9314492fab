//! Chapter 4: nested records and composition.
//!
//! `Employee` holds a `Person` by value. Nothing is inherited; methods the
//! employee shares with the person are forwarded explicitly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default)]
    pub address: Address,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            address: Address::default(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    person: Person,
    pub job_title: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(person: Person, job_title: impl Into<String>, salary: f64) -> Self {
        Self {
            person,
            job_title: job_title.into(),
            salary,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}
