//! Sample customer data for the in-memory table.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::customer::{Customer, CustomerId};

/// Sample dates fall within this many seconds before "now" (one year).
const PAST_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Supplies the customers a table starts with.
pub trait CustomerSource {
    fn customers(&mut self) -> Vec<Customer>;
}

/// A fixed list of customers, handy as a test fixture.
impl CustomerSource for Vec<Customer> {
    fn customers(&mut self) -> Vec<Customer> {
        self.clone()
    }
}

/// Generates company-style customers from a seeded random source.
#[derive(Debug, Clone)]
pub struct FakeCustomers<R = StdRng> {
    rng: R,
    count: usize,
    now: DateTime<Utc>,
}

impl FakeCustomers<StdRng> {
    pub fn seeded(seed: u64, count: usize, now: DateTime<Utc>) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), count, now)
    }
}

impl<R: Rng> FakeCustomers<R> {
    pub fn with_rng(rng: R, count: usize, now: DateTime<Utc>) -> Self {
        Self { rng, count, now }
    }

    fn generate(&mut self, id: CustomerId) -> Customer {
        let name: String = CompanyName().fake_with_rng(&mut self.rng);
        let contact: String = Name().fake_with_rng(&mut self.rng);
        let phone: String = PhoneNumber().fake_with_rng(&mut self.rng);
        let age = Duration::seconds(self.rng.gen_range(1..=PAST_WINDOW_SECS));

        Customer {
            id,
            name,
            contact,
            phone,
            date_added: self.now - age,
        }
    }
}

impl<R: Rng> CustomerSource for FakeCustomers<R> {
    fn customers(&mut self) -> Vec<Customer> {
        let customers: Vec<_> = (0..self.count)
            .map(|index| self.generate(index as CustomerId))
            .collect();
        tracing::debug!(count = customers.len(), "generated sample customers");
        customers
    }
}
