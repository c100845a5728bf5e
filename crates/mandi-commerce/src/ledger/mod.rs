//! Supplier balance and payment history.

mod balance;

pub use balance::{Balance, ChartPoint, PaymentDirection, PaymentHistory, PaymentRecord};
