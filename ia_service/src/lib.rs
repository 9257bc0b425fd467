//! Serviço de IA usando async-openai
//!
//! Este crate fornece a geração de mensagens curtas de marketing bancário
//! (chat completions) usadas pelo pipeline ETL para enriquecer clientes.
//!
//! A credencial é passada uma única vez na construção do serviço; não existe
//! cliente global.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use thiserror::Error;

/// Instrução de sistema fixa enviada em toda requisição
pub const PROMPT_SISTEMA: &str = "Você é um especialista em marketing bancário. \
Crie mensagens motivacionais e personalizadas sobre investimentos.";

/// Erros do serviço de IA
#[derive(Debug, Error)]
pub enum IaServiceError {
    /// Falha ao montar a requisição ou na chamada à API (rede, auth, rate limit)
    #[error("OpenAI error: {0}")]
    OpenAIError(String),

    /// Resposta sem conteúdo utilizável
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type IaResult<T> = Result<T, IaServiceError>;

/// Configuração do serviço de IA
#[derive(Clone)]
pub struct IaServiceConfig {
    /// API key da OpenAI
    pub api_key: String,
    /// Modelo para chat (padrão: gpt-4)
    pub chat_model: String,
    /// Endpoint alternativo compatível com a API da OpenAI
    pub api_base: Option<String>,
    /// Temperatura (padrão: 0.7)
    pub temperature: f32,
    /// Max tokens para respostas (padrão: 50)
    pub max_tokens: u32,
}

impl IaServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            chat_model: "gpt-4".to_string(),
            api_base: None,
            temperature: 0.7,
            max_tokens: 50,
        }
    }

    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = tokens;
        self
    }
}

/// Serviço principal de IA
#[derive(Clone)]
pub struct IaService {
    client: Client<OpenAIConfig>,
    config: IaServiceConfig,
}

impl IaService {
    /// Cria novo serviço de IA
    pub fn new(config: IaServiceConfig) -> IaResult<Self> {
        if config.chat_model.trim().is_empty() {
            return Err(IaServiceError::ConfigError(
                "Modelo de chat não pode ser vazio".to_string(),
            ));
        }

        let mut openai_config = OpenAIConfig::new().with_api_key(&config.api_key);
        if let Some(api_base) = &config.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }
        // Uma tentativa por cliente: sem retry em 429
        let sem_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let client = Client::with_config(openai_config).with_backoff(sem_retry);

        tracing::info!("✅ IaService inicializado com modelo: {}", config.chat_model);

        Ok(Self { client, config })
    }

    /// Gera uma mensagem curta e motivadora sobre investimentos para o cliente
    ///
    /// Uma única tentativa por chamada; qualquer falha (rede, autenticação,
    /// rate limit, resposta vazia) é devolvida como erro para o chamador
    /// decidir a política de fallback.
    ///
    /// # Argumentos
    /// * `nome` - Nome do cliente, embutido no prompt do usuário
    pub async fn gerar_mensagem_investimento(&self, nome: &str) -> IaResult<String> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(PROMPT_SISTEMA)
            .build()
            .map_err(|e| IaServiceError::OpenAIError(format!("Failed to build message: {}", e)))?;

        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt_usuario(nome))
            .build()
            .map_err(|e| IaServiceError::OpenAIError(format!("Failed to build message: {}", e)))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.chat_model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build()
            .map_err(|e| IaServiceError::OpenAIError(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| IaServiceError::OpenAIError(format!("API call failed: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| IaServiceError::ParseError("No content in response".to_string()))?;

        tracing::debug!("📋 Resposta bruta: {}", content);

        let mensagem = limpar_aspas(content);
        if mensagem.is_empty() {
            return Err(IaServiceError::ParseError("Empty content in response".to_string()));
        }

        Ok(mensagem.to_string())
    }
}

/// Prompt do usuário com o nome do cliente e o limite de tamanho
pub fn prompt_usuario(nome: &str) -> String {
    format!(
        "Crie uma mensagem personalizada para {} sobre a importância dos investimentos. \
        Máximo 100 caracteres. Seja direto e motivador.",
        nome
    )
}

/// Remove espaços e aspas nas extremidades do texto gerado
pub fn limpar_aspas(texto: &str) -> &str {
    texto.trim().trim_matches('"').trim()
}
