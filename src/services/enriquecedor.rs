//! TRANSFORM - enriquece usuários com mensagens geradas por IA
//!
//! Cada usuário é processado de forma isolada: uma falha do gerador vira a
//! mensagem de fallback daquele usuário e o processamento segue.

use crate::models::{Noticia, Usuario};
use crate::services::gerador::GeradorMensagem;
use crate::utils::logging::*;

/// Mensagem determinística usada quando o gerador falha
pub fn mensagem_fallback(nome: &str) -> String {
    format!("{}, invest in your future! Start today.", nome)
}

/// Enriquecedor com o gerador injetado na construção
pub struct Enriquecedor<G: GeradorMensagem> {
    gerador: G,
}

impl<G: GeradorMensagem> Enriquecedor<G> {
    pub fn new(gerador: G) -> Self {
        Self { gerador }
    }

    /// Gera a mensagem de um usuário; nunca falha
    pub async fn mensagem_para(&self, nome: &str) -> String {
        log_gerando_mensagem(nome);

        match self.gerador.gerar(nome).await {
            Ok(mensagem) => {
                log_mensagem_gerada(nome);
                mensagem
            }
            Err(e) => {
                log_erro_mensagem(nome, &e.to_string());
                mensagem_fallback(nome)
            }
        }
    }

    /// Anexa uma mensagem a cada usuário, sequencialmente
    pub async fn enriquecer(&self, mut usuarios: Vec<Usuario>) -> Vec<Usuario> {
        log_info("Iniciando transformação dos dados...");

        for usuario in usuarios.iter_mut() {
            let mensagem = self.mensagem_para(&usuario.name).await;
            usuario.news.push(Noticia::credito(mensagem));
        }

        log_transformacao_concluida(usuarios.len());
        usuarios
    }

    #[cfg(test)]
    pub(crate) fn gerador(&self) -> &G {
        &self.gerador
    }
}
