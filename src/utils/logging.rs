use tracing::{error, info, warn};

const SEPARADOR: &str = "============================================================";

pub fn log_separador() {
    info!("{}", SEPARADOR);
}

pub fn log_etapa(numero: u8, nome: &str, descricao: &str) {
    info!("[{}/3] {} - {}", numero, nome, descricao);
}

pub fn log_usuarios_extraidos(total: usize) {
    info!("✅ {} usuários extraídos com sucesso", total);
}

pub fn log_gerando_mensagem(nome: &str) {
    info!("Gerando mensagem para {}...", nome);
}

pub fn log_mensagem_gerada(nome: &str) {
    info!("✅ Mensagem gerada para {}", nome);
}

pub fn log_erro_mensagem(nome: &str, erro: &str) {
    error!("❌ Erro ao gerar mensagem para {}: {}", nome, erro);
}

pub fn log_transformacao_concluida(total: usize) {
    info!("✅ Transformação concluída para {} usuários", total);
}

pub fn log_arquivo_salvo(caminho: &str) {
    info!("✅ Dados salvos em '{}'", caminho);
}

pub fn log_erro_arquivo(formato: &str, caminho: &str, erro: &str) {
    error!("❌ Erro ao salvar {} em '{}': {}", formato, caminho, erro);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
