// Biblioteca do pipeline ETL Santander Dev Week
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use pipeline::{formatar_resumo, Pipeline, RelatorioCarga, ResultadoPipeline};
