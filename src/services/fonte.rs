//! EXTRACT - fonte de usuários do pipeline

use crate::models::{Cartao, Conta, Usuario};
use crate::utils::logging::log_usuarios_extraidos;

/// Fonte de dados de usuários (extract)
pub trait FonteUsuarios {
    fn extrair(&self) -> Vec<Usuario>;
}

/// Fonte com os clientes fixos da demonstração (a API original está fora do ar)
#[derive(Debug, Clone, Copy, Default)]
pub struct FonteMock;

impl FonteUsuarios for FonteMock {
    fn extrair(&self) -> Vec<Usuario> {
        let usuarios = vec![
            usuario(1, "João Silva", "00001-1", 1500.0, 5000.0, "**** **** **** 1234", 3000.0),
            usuario(2, "Maria Santos", "00002-2", 3200.0, 8000.0, "**** **** **** 5678", 5000.0),
            usuario(3, "Pedro Costa", "00003-3", 890.0, 3000.0, "**** **** **** 9012", 2000.0),
        ];

        log_usuarios_extraidos(usuarios.len());
        usuarios
    }
}

fn usuario(
    id: u32,
    name: &str,
    conta: &str,
    balance: f64,
    limit: f64,
    cartao: &str,
    card_limit: f64,
) -> Usuario {
    Usuario {
        id,
        name: name.to_string(),
        account: Conta {
            number: conta.to_string(),
            agency: "0001".to_string(),
            balance,
            limit,
        },
        card: Cartao {
            number: cartao.to_string(),
            limit: card_limit,
        },
        news: Vec::new(),
    }
}
