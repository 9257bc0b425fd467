use config::{Config, ConfigError, Environment, File};
use ia_service::IaServiceConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub openai: OpenAISettings,
    pub saida: SaidaSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenAISettings {
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,  // Endpoint compatível com a API da OpenAI
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SaidaSettings {
    pub json_path: String,
    pub csv_path: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Self::defaults()?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Credencial da OpenAI (única variável obrigatória em produção)
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.set_override("openai.api_key", api_key)?;
        }
        if let Ok(api_base) = std::env::var("OPENAI_API_BASE") {
            builder = builder.set_override("openai.api_base", api_base)?;
        }

        builder = builder.add_source(Environment::with_prefix("SANTANDER_ETL").separator("__"));

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("openai.api_key", "")?
            .set_default("openai.model", "gpt-4")?
            .set_default("openai.temperature", 0.7)?
            .set_default("openai.max_tokens", 50)?
            .set_default("saida.json_path", "usuarios_atualizados.json")?
            .set_default("saida.csv_path", "usuarios_atualizados.csv")
    }

    /// Configuração do serviço de IA derivada das settings
    pub fn ia_service_config(&self) -> IaServiceConfig {
        let mut config = IaServiceConfig::new(self.openai.api_key.clone())
            .with_chat_model(self.openai.model.clone())
            .with_temperature(self.openai.temperature)
            .with_max_tokens(self.openai.max_tokens);

        if let Some(api_base) = &self.openai.api_base {
            config = config.with_api_base(api_base.clone());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.openai.model, "gpt-4");
        assert_eq!(settings.openai.temperature, 0.7);
        assert_eq!(settings.openai.max_tokens, 50);
        assert_eq!(settings.openai.api_key, "");
        assert!(settings.openai.api_base.is_none());
        assert_eq!(settings.saida.json_path, "usuarios_atualizados.json");
        assert_eq!(settings.saida.csv_path, "usuarios_atualizados.csv");
    }

    #[test]
    fn test_ia_service_config() {
        let settings: Settings = Settings::defaults()
            .unwrap()
            .set_override("openai.api_key", "sk-teste")
            .unwrap()
            .set_override("openai.api_base", "http://localhost:9999")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let config = settings.ia_service_config();
        assert_eq!(config.api_key, "sk-teste");
        assert_eq!(config.chat_model, "gpt-4");
        assert_eq!(config.max_tokens, 50);
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:9999"));
    }
}
