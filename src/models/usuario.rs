//! Registro de cliente do banco processado pelo pipeline
//! Os nomes dos campos seguem o schema da API da Santander Dev Week

use serde::{Deserialize, Serialize};

/// Ícone fixo anexado a toda mensagem gerada
pub const ICONE_CREDITO: &str =
    "https://digitalinnovationone.github.io/santander-dev-week-2023-api/icons/credit.svg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: u32,
    pub name: String,
    pub account: Conta,
    pub card: Cartao,
    /// Mensagens personalizadas; vazia na extração, exatamente uma após o enriquecimento
    #[serde(default)]
    pub news: Vec<Noticia>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conta {
    pub number: String,
    pub agency: String,
    pub balance: f64,
    pub limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cartao {
    /// Número mascarado para exibição (ex: "**** **** **** 1234")
    pub number: String,
    pub limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Noticia {
    pub icon: String,
    pub description: String,
}

impl Noticia {
    /// Cria uma notícia com o ícone padrão de crédito
    pub fn credito(description: impl Into<String>) -> Self {
        Self {
            icon: ICONE_CREDITO.to_string(),
            description: description.into(),
        }
    }
}

impl Usuario {
    /// Descrição da primeira mensagem, se houver
    pub fn primeira_mensagem(&self) -> Option<&str> {
        self.news.first().map(|n| n.description.as_str())
    }
}
