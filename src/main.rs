/// Pipeline ETL Santander Dev Week
///
/// - EXTRACT: clientes fixos (a API da Dev Week está fora do ar)
/// - TRANSFORM: uma mensagem de investimento por cliente via OpenAI
/// - LOAD: usuários enriquecidos em JSON e CSV
///
/// Execução sequencial, uma chamada à IA por cliente.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ia_service::IaService;
use santander_etl::config::Settings;
use santander_etl::services::FonteMock;
use santander_etl::utils::{logging::*, AppError};
use santander_etl::{formatar_resumo, Pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_carregado = dotenvy::dotenv().is_ok();

    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtro).init();

    if dotenv_carregado {
        tracing::info!("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    let settings = Settings::new()
        .map_err(AppError::from)
        .context("Failed to load settings")?;
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    if settings.openai.api_key.is_empty() {
        log_warning("⚠️ OPENAI_API_KEY não configurada - todas as mensagens usarão o fallback");
    }

    let ia_service = IaService::new(settings.ia_service_config())
        .map_err(AppError::from)
        .context("Failed to initialize IaService")?;

    let pipeline = Pipeline::new(FonteMock, ia_service, settings.saida.clone());

    if let Some(resultado) = pipeline.executar().await {
        print!("{}", formatar_resumo(&resultado.usuarios));
    }

    Ok(())
}
