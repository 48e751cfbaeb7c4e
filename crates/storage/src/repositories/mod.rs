pub mod signals_repo;

pub use signals_repo::SignalsRepository;
