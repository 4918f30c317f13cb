pub mod basic;
pub mod disposal;
pub mod integration;
pub mod operators;
pub mod recovery;
pub mod runner;
pub mod threads;

pub use crate::domain::model::{RecipeReport, User};
pub use crate::domain::ports::{ConfigProvider, Recipe, UserApi, UserStore};
pub use crate::utils::error::Result;
pub use runner::{build_catalogue, RecipeRunner, CATALOGUE};
