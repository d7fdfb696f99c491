//! Validating a derived entity with bizobj-rules
//!
//! Run with `RUST_LOG=bizobj_rules=trace` to see every rule evaluation.

use std::sync::LazyLock;

use bizobj_rules::prelude::*;
use tracing_subscriber::EnvFilter;

struct Person {
    name: String,
    email: Option<String>,
}

static PERSON: LazyLock<PropertyMap<Person>> = LazyLock::new(|| {
    PropertyMap::new("Person")
        .data_property("Name", |p: &Person| Some(p.name.as_str().into()))
        .data_property("Email", |p: &Person| p.email.as_deref().map(Into::into))
});

impl Entity for Person {
    fn properties() -> &'static PropertyMap<Self> {
        &PERSON
    }

    fn create_rules() -> Result<RuleSetBuilder, ConfigurationError> {
        Ok(RuleSetBuilder::new()
            .rule(length("Name", 1, 20)?)
            .rule(required("Email")?)
            .rule(
                pattern("Email", r"^[^@\s]+@[^@\s]+$")?
                    .with_description("Email must be an address"),
            ))
    }
}

struct Employee {
    person: Person,
    salary: i64,
}

static EMPLOYEE: LazyLock<PropertyMap<Employee>> = LazyLock::new(|| {
    PropertyMap::new("Employee")
        .inherit(&PERSON, |e: &Employee| &e.person)
        .data_property("Salary", |e: &Employee| Some(e.salary.into()))
});

impl Entity for Employee {
    fn properties() -> &'static PropertyMap<Self> {
        &EMPLOYEE
    }

    fn create_rules() -> Result<RuleSetBuilder, ConfigurationError> {
        Ok(Person::create_rules()?.rule(in_range("Salary", 0, 1_000_000)?))
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bizobj_rules=debug")),
        )
        .init();

    let validator = Validator::new(ValidatorConfig::from_env()?);

    let employees = [
        Employee {
            person: Person {
                name: "Ada Lovelace".to_owned(),
                email: Some("ada@example.com".to_owned()),
            },
            salary: 5_000,
        },
        Employee {
            person: Person {
                name: String::new(),
                email: Some("not an address".to_owned()),
            },
            salary: -1,
        },
    ];

    for employee in &employees {
        let broken = validator.validate(employee)?;
        if broken.is_valid() {
            println!("✓ {} is valid", employee.person.name);
        } else {
            println!("✗ {:?} has {} broken rule(s):", employee.person.name, broken.len());
            for rule in &broken {
                println!("  - [{}] {}", rule.property_name(), rule);
            }
        }
    }

    let summary = validator.validate(&employees[1])?;
    println!("\n{}", serde_json::to_string_pretty(&summary).unwrap_or_default());

    Ok(())
}
