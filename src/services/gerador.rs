//! Abstração do gerador de mensagens usado no enriquecimento
//!
//! Permite substituir o serviço de IA por stubs em testes sem tocar
//! no enriquecedor nem na carga.

use ia_service::{IaResult, IaService};

/// Capacidade de gerar uma mensagem personalizada para um cliente
#[allow(async_fn_in_trait)]
pub trait GeradorMensagem {
    /// Gera a mensagem para o cliente `nome`; erros ficam a cargo do chamador
    async fn gerar(&self, nome: &str) -> IaResult<String>;
}

impl GeradorMensagem for IaService {
    async fn gerar(&self, nome: &str) -> IaResult<String> {
        self.gerar_mensagem_investimento(nome).await
    }
}
