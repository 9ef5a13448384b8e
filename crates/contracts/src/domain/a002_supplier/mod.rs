pub mod aggregate;

pub use aggregate::{NewSupplier, Supplier, SupplierDraft};
