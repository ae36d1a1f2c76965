//! Внешний API колод (без транспорта).
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (создать колоду, снять карты, перемешать);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — то, что уходит клиенту в JSON;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - сервис (service.rs) — разбор параметров, вызов движка и хранилища.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::*;
