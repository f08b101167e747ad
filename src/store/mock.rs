//! # Mock Store
//!
//! A scripted [`OrderStore`] for testing the service without touching disk.
//!
//! Queue up the calls you expect with [`MockOrderStore::expect_load`] and
//! [`MockOrderStore::expect_append`], hand the store to the code under test,
//! then call [`MockOrderStore::verify`]. Calls are matched strictly in order;
//! an unexpected call panics.
//!
//! ```ignore
//! let store = MockOrderStore::new();
//! store.expect_append().return_err(StoreError::Serialize(err));
//!
//! let service = OrderService::new(Arc::new(store.clone()), TotalsPolicy::Trusting);
//! assert!(service.create_order(request).await.is_err());
//! store.verify();
//! ```

use super::{OrderStore, StoreError};
use crate::model::Order;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Expectation {
    Load {
        response: Result<Vec<Order>, StoreError>,
    },
    Append {
        response: Result<(), StoreError>,
    },
}

/// An order store that replays queued responses.
///
/// Clones share the same queue, so a test can keep one handle for `verify`
/// while the service owns another.
#[derive(Clone, Default)]
pub struct MockOrderStore {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    appended: Arc<Mutex<Vec<Order>>>,
}

impl MockOrderStore {
    /// Creates a mock store with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `load` call.
    pub fn expect_load(&self) -> LoadExpectationBuilder {
        LoadExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `append` call.
    pub fn expect_append(&self) -> AppendExpectationBuilder {
        AppendExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Orders passed to `append`, including ones answered with an error.
    pub fn appended(&self) -> Vec<Order> {
        self.appended.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn load(&self) -> Result<Vec<Order>, StoreError> {
        match self.next() {
            Some(Expectation::Load { response }) => response,
            _ => panic!("Unexpected load or expectation mismatch"),
        }
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        self.appended.lock().unwrap().push(order);
        match self.next() {
            Some(Expectation::Append { response }) => response,
            _ => panic!("Unexpected append or expectation mismatch"),
        }
    }
}

/// Builder for `load` expectations.
pub struct LoadExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LoadExpectationBuilder {
    /// Sets the expectation to return these orders.
    pub fn return_ok(self, orders: Vec<Order>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Load { response: Ok(orders) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Load { response: Err(error) });
    }
}

/// Builder for `append` expectations.
pub struct AppendExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl AppendExpectationBuilder {
    /// Sets the expectation to accept the order.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Append { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Append { response: Err(error) });
    }
}
