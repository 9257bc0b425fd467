//! LOAD - persiste os usuários enriquecidos em JSON e CSV
//!
//! As duas escritas são independentes e best-effort: o erro é registrado no
//! log e devolvido ao chamador, que decide a política.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Usuario;
use crate::utils::logging::{log_arquivo_salvo, log_erro_arquivo};
use crate::utils::AppResult;

/// Texto usado no CSV quando o usuário não tem mensagem
pub const SEM_MENSAGEM: &str = "Sem mensagem";

/// Cabeçalho fixo do CSV
pub const CABECALHO_CSV: [&str; 5] = ["ID", "Nome", "Saldo", "Limite", "Mensagem"];

/// Linha achatada do CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinhaCsv {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(rename = "Saldo")]
    pub saldo: f64,
    #[serde(rename = "Limite")]
    pub limite: f64,
    #[serde(rename = "Mensagem")]
    pub mensagem: String,
}

impl From<&Usuario> for LinhaCsv {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.name.clone(),
            saldo: usuario.account.balance,
            limite: usuario.account.limit,
            mensagem: usuario.primeira_mensagem().unwrap_or(SEM_MENSAGEM).to_string(),
        }
    }
}

/// Salva todos os usuários em JSON (UTF-8, indentação de 2 espaços), sobrescrevendo o arquivo
///
/// Retorna a quantidade de usuários gravados.
pub fn salvar_json(usuarios: &[Usuario], caminho: impl AsRef<Path>) -> AppResult<usize> {
    let caminho = caminho.as_ref();

    match escrever_json(usuarios, caminho) {
        Ok(total) => {
            log_arquivo_salvo(&caminho.display().to_string());
            Ok(total)
        }
        Err(e) => {
            log_erro_arquivo("JSON", &caminho.display().to_string(), &e.to_string());
            Err(e)
        }
    }
}

fn escrever_json(usuarios: &[Usuario], caminho: &Path) -> AppResult<usize> {
    let mut writer = BufWriter::new(File::create(caminho)?);
    serde_json::to_writer_pretty(&mut writer, usuarios)?;
    writer.flush()?;
    Ok(usuarios.len())
}

/// Salva uma linha por usuário em CSV, com cabeçalho `ID,Nome,Saldo,Limite,Mensagem`
///
/// O cabeçalho é escrito mesmo quando não há usuários.
pub fn salvar_csv(usuarios: &[Usuario], caminho: impl AsRef<Path>) -> AppResult<usize> {
    let caminho = caminho.as_ref();

    match escrever_csv(usuarios, caminho) {
        Ok(total) => {
            log_arquivo_salvo(&caminho.display().to_string());
            Ok(total)
        }
        Err(e) => {
            log_erro_arquivo("CSV", &caminho.display().to_string(), &e.to_string());
            Err(e)
        }
    }
}

fn escrever_csv(usuarios: &[Usuario], caminho: &Path) -> AppResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(caminho)?;

    writer.write_record(CABECALHO_CSV)?;
    for usuario in usuarios {
        writer.serialize(LinhaCsv::from(usuario))?;
    }
    writer.flush()?;

    Ok(usuarios.len())
}
