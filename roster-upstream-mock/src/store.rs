//! In-memory employee store

use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared::models::{Employee, EmployeeCreate, MAX_AGE, MIN_AGE};

const FIRST_NAMES: &[&str] = &[
    "Aniksha", "Arjun", "Bela", "Chandra", "Dev", "Elena", "Farhan", "Grace", "Hiro", "Ingrid",
    "Jamal", "Kavya", "Luis", "Mei", "Nadia", "Omar", "Priya", "Quentin", "Rosa", "Shivani",
];

const LAST_NAMES: &[&str] = &[
    "Singh", "Patel", "Nair", "Iyer", "Rao", "Garcia", "Kimura", "Okafor", "Novak", "Haddad",
    "Fischer", "Larsen", "Moreau", "Santos", "Kowalski", "Tanaka",
];

const TITLES: &[&str] = &[
    "Engineer",
    "Senior Engineer",
    "Manager",
    "Director",
    "Analyst",
    "Designer",
    "Product Owner",
    "Accountant",
];

/// Thread-safe in-memory employee collection
#[derive(Clone, Default)]
pub struct EmployeeStore {
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl EmployeeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `count` randomly generated employees
    pub fn seeded(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let employees = (0..count).map(|_| random_employee(&mut rng)).collect();

        Self {
            employees: Arc::new(RwLock::new(employees)),
        }
    }

    /// Snapshot of all employees in insertion order
    pub async fn list(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }

    /// Look up one employee by its string id
    pub async fn get(&self, id: &str) -> Option<Employee> {
        self.employees
            .read()
            .await
            .iter()
            .find(|e| e.id.to_string() == id)
            .cloned()
    }

    /// Insert a new employee, assigning the id and deriving the email
    pub async fn insert(&self, input: &EmployeeCreate) -> Employee {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            salary: input.salary,
            age: input.age,
            title: input.title.clone(),
            email: derive_email(&input.name),
        };

        self.employees.write().await.push(employee.clone());
        employee
    }

    /// Remove the first employee with this exact name; returns whether
    /// anything was removed
    pub async fn remove_by_name(&self, name: &str) -> bool {
        let mut employees = self.employees.write().await;
        match employees.iter().position(|e| e.name == name) {
            Some(idx) => {
                employees.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Lowercased dotted name at a fixed company domain
fn derive_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
        .to_lowercase();
    format!("{local}@company.com")
}

fn random_employee(rng: &mut impl Rng) -> Employee {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let name = format!("{first} {last}");

    Employee {
        id: Uuid::new_v4(),
        email: derive_email(&name),
        name,
        salary: rng.gen_range(30_000..=200_000),
        age: rng.gen_range(MIN_AGE..=MAX_AGE),
        title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
    }
}
