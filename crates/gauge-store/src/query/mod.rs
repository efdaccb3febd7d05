//! Repository traits and their implementations.

mod data_source;

pub use data_source::DataSourceRepository;
