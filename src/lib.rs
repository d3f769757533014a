//! Discrete-mathematics engine for small binary relations and graphs.
//!
//! Relations are square `0`/`1` matrices over 2 to 7 labelled elements. On top of them, the
//! crate provides boolean relation algebra ([`algebra`]), closures ([`closure`]), property
//! classification ([`properties`]), reachability and component analysis ([`reachability`],
//! [`components`]), structural graph queries ([`structure`]) and path algorithms ([`paths`]).
//! With the `serde` feature, [`api`] exposes every operation as a JSON request/response pair.

mod error;

#[cfg(test)]
mod test_utils;

pub mod algebra;
#[cfg(feature = "serde")]
pub mod api;
pub mod closure;
pub mod components;
pub mod labels;
pub mod matrix;
pub mod paths;
pub mod properties;
pub mod reachability;
pub mod structure;

pub use error::GraphError;

use crate::labels::label;
use crate::matrix::VertexSet;

/// Size and member labels of a vertex set, for log messages.
fn log_set(set: &VertexSet) -> String {
    let members = set.iter().map(label).collect::<Vec<_>>();
    format!("elements={}; members=[{}]", set.len(), members.join(", "))
}

/// The last path segment of the name of `T`, used to tag log messages of generic steps.
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
