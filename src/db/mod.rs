//! Data access layer with a clean repository abstraction.
//!
//! The crate stores theater company data (actors, scenes, timeslots and
//! scheduled rehearsals) behind trait-based repositories so the scheduling
//! engine never touches a concrete store:
//!
//! 1. **Repository traits** - abstract interfaces, one per concern
//!    ([`ActorRepository`], [`SceneRepository`], [`TimeslotRepository`],
//!    [`RehearsalRepository`]) plus the combined [`CompanyRepository`]
//! 2. **Implementations** - backend-specific code under `repositories/`
//!    (in-memory [`LocalRepository`] today)
//! 3. **Factory** - [`RepositoryFactory`] selects and seeds a backend from
//!    environment or TOML configuration
//!
//! # Example
//! ```
//! use callboard::db::RepositoryFactory;
//!
//! let repo = RepositoryFactory::create_local();
//! ```

pub mod checksum;
pub mod error;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    ActorRepository, CompanyRepository, RehearsalRepository, SceneRepository, TimeslotRepository,
};
