//! Инфраструктурный слой вокруг движка колод:
//! - генерация ID;
//! - RNG-реализации для shuffle;
//! - кодек карт и абстракция хранения;
//! - seeder эталонных карт.

pub mod codec;
pub mod ids;
pub mod persistence;
pub mod rng;
pub mod seeds;

pub use codec::*;
pub use ids::*;
pub use persistence::*;
pub use rng::*;
pub use seeds::seed_reference_cards;
