//! In-memory employee repository.
//!
//! Owns the record collection behind the REST contract. Identifiers are
//! stringified counters assigned at creation; the store never validates
//! field formats (entry-time validation is the client's job).

use staffdir_core::types::{Employee, EmployeeInput, EmployeeUpdate};

/// Number of synthetic records seeded at startup.
const SEED_COUNT: u64 = 10;

/// The mutable record collection plus its id counter.
#[derive(Debug)]
pub struct EmployeeRepo {
    employees: Vec<Employee>,
    next_id: u64,
}

impl EmployeeRepo {
    /// An empty repository. Ids start at `"1"`.
    pub fn empty() -> Self {
        Self {
            employees: Vec::new(),
            next_id: 1,
        }
    }

    /// A repository seeded with [`SEED_COUNT`] synthetic employees.
    pub fn seeded() -> Self {
        let mut repo = Self::empty();
        for i in 0..SEED_COUNT {
            repo.create(EmployeeInput {
                name: format!("Employee {i}"),
                email: format!("employee{i}@example.com"),
                phone_number: format!("555555000{i}"),
                address: format!("123 Main St, City {i}, State {i} 12345"),
            });
        }
        repo
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    /// Append a new record, assigning the next identifier.
    pub fn create(&mut self, input: EmployeeInput) -> Employee {
        let employee = Employee {
            id: self.next_id.to_string(),
            name: input.name,
            email: Some(input.email),
            phone_number: Some(input.phone_number),
            address: Some(input.address),
        };
        self.next_id += 1;
        self.employees.push(employee.clone());
        employee
    }

    /// Merge a partial payload into the matching record.
    ///
    /// Present fields overwrite, absent fields keep their stored value.
    /// Returns the updated record, or `None` if the id is unknown.
    pub fn update(&mut self, id: &str, patch: EmployeeUpdate) -> Option<Employee> {
        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.matches_id(id))?;

        if let Some(name) = patch.name {
            employee.name = name;
        }
        if let Some(email) = patch.email {
            employee.email = Some(email);
        }
        if let Some(phone_number) = patch.phone_number {
            employee.phone_number = Some(phone_number);
        }
        if let Some(address) = patch.address {
            employee.address = Some(address);
        }

        Some(employee.clone())
    }

    /// Remove the matching record. Returns `false` if the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| !employee.matches_id(id));
        self.employees.len() < before
    }
}
