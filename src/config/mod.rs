pub mod settings;

pub use settings::{OpenAISettings, SaidaSettings, Settings};
