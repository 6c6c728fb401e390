//! CrudService: the per-entity repository over the SQLite store.

mod crud;
pub use crud::CrudService;
