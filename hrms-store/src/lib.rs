//! HRMS master-data store
//!
//! # Overview
//!
//! In-process store for the master and transactional records of a small
//! HR management system:
//!
//! - **Store** (`store`): eleven entity collections with CRUD, leave
//!   approval and referential-integrity checks on delete
//! - **Persistence** (`persistence`): one JSON array per collection,
//!   mirrored into an embedded redb database after every mutation
//! - **Notifier** (`notifier`): outcome notifications for UI collaborators
//! - **Views** (`views`, `dashboard`): list rows with resolved names and
//!   the dashboard summary
//!
//! # Layout
//!
//! ```text
//! hrms-store/src/
//! ├── core/          # configuration
//! ├── persistence/   # Persistence trait + redb backend
//! ├── store/         # Store, collections, integrity rules, sample data
//! ├── utils/         # logging setup
//! ├── notifier.rs
//! ├── views.rs
//! └── dashboard.rs
//! ```

pub mod core;
pub mod dashboard;
pub mod notifier;
pub mod persistence;
pub mod store;
pub mod utils;
pub mod views;

pub use core::Config;
pub use dashboard::DashboardSummary;
pub use notifier::Notifier;
pub use persistence::{PersistError, Persistence, RedbStorage};
pub use store::{Dependents, Store, StoreError, StoreOptions, StoreResult};
pub use utils::logger::{init_logger, init_logger_with_file};
