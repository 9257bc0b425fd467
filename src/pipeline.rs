//! Pipeline ETL completo: EXTRACT → TRANSFORM → LOAD
//!
//! Fluxo estritamente sequencial. Falhas por usuário são absorvidas no
//! enriquecimento, falhas de escrita viram `false` no relatório de carga e
//! qualquer outro erro interrompe a execução com `None`.

use crate::config::SaidaSettings;
use crate::models::Usuario;
use crate::services::{salvar_csv, salvar_json, Enriquecedor, FonteUsuarios, GeradorMensagem};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Resultado das duas escritas da etapa LOAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatorioCarga {
    pub json_ok: bool,
    pub csv_ok: bool,
}

#[derive(Debug, Clone)]
pub struct ResultadoPipeline {
    pub usuarios: Vec<Usuario>,
    pub carga: RelatorioCarga,
}

pub struct Pipeline<F: FonteUsuarios, G: GeradorMensagem> {
    fonte: F,
    enriquecedor: Enriquecedor<G>,
    saida: SaidaSettings,
}

impl<F: FonteUsuarios, G: GeradorMensagem> Pipeline<F, G> {
    pub fn new(fonte: F, gerador: G, saida: SaidaSettings) -> Self {
        Self {
            fonte,
            enriquecedor: Enriquecedor::new(gerador),
            saida,
        }
    }

    /// Executa o pipeline; erros não absorvidos pelas etapas são registrados e viram `None`
    pub async fn executar(&self) -> Option<ResultadoPipeline> {
        log_separador();
        log_info("INICIANDO PIPELINE ETL");
        log_separador();

        match self.executar_etapas().await {
            Ok(resultado) => {
                log_separador();
                log_info("✅ PIPELINE CONCLUÍDO COM SUCESSO!");
                log_separador();
                Some(resultado)
            }
            Err(e) => {
                log_error(&format!("❌ Erro no pipeline: {}", e));
                None
            }
        }
    }

    async fn executar_etapas(&self) -> AppResult<ResultadoPipeline> {
        log_etapa(1, "EXTRACT", "Extraindo dados...");
        let usuarios = self.fonte.extrair();

        log_etapa(2, "TRANSFORM", "Transformando dados com IA...");
        let usuarios = self.enriquecedor.enriquecer(usuarios).await;
        validar_enriquecimento(&usuarios)?;

        log_etapa(3, "LOAD", "Carregando dados...");
        let carga = RelatorioCarga {
            json_ok: salvar_json(&usuarios, &self.saida.json_path).is_ok(),
            csv_ok: salvar_csv(&usuarios, &self.saida.csv_path).is_ok(),
        };

        if !carga.json_ok || !carga.csv_ok {
            log_warning("⚠️ Carga parcial: ao menos um arquivo não foi salvo");
        }

        Ok(ResultadoPipeline { usuarios, carga })
    }
}

/// Garante que todo usuário chega à carga com exatamente uma mensagem
pub fn validar_enriquecimento(usuarios: &[Usuario]) -> AppResult<()> {
    match usuarios.iter().find(|u| u.news.len() != 1) {
        Some(usuario) => Err(AppError::ValidationError(format!(
            "usuário {} ({}) tem {} mensagens, esperado 1",
            usuario.id,
            usuario.name,
            usuario.news.len()
        ))),
        None => Ok(()),
    }
}

/// Resumo legível dos dados processados, exibido no stdout ao final da execução
pub fn formatar_resumo(usuarios: &[Usuario]) -> String {
    let mut resumo = String::from("\n📊 RESUMO DOS DADOS PROCESSADOS:\n\n");

    for usuario in usuarios {
        resumo.push_str(&format!(
            "👤 {}\n   Saldo: R$ {:.2}\n   Mensagem: {}\n\n",
            usuario.name,
            usuario.account.balance,
            usuario.primeira_mensagem().unwrap_or_default()
        ));
    }

    resumo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Noticia;
    use crate::services::FonteMock;
    use ia_service::{IaResult, IaServiceError};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    struct GeradorFixo {
        texto: &'static str,
        falhar_para: Option<&'static str>,
    }

    impl GeradorMensagem for GeradorFixo {
        async fn gerar(&self, nome: &str) -> IaResult<String> {
            if self.falhar_para == Some(nome) {
                return Err(IaServiceError::OpenAIError("timeout simulado".to_string()));
            }
            Ok(self.texto.to_string())
        }
    }

    /// Fonte que entrega um usuário já com mensagem, violando o invariante da carga
    struct FonteComMensagem;

    impl FonteUsuarios for FonteComMensagem {
        fn extrair(&self) -> Vec<Usuario> {
            let mut usuarios = FonteMock.extrair();
            usuarios[0].news.push(Noticia::credito("antiga"));
            usuarios
        }
    }

    fn saida_em(dir: &Path) -> SaidaSettings {
        SaidaSettings {
            json_path: dir.join("usuarios_atualizados.json").display().to_string(),
            csv_path: dir.join("usuarios_atualizados.csv").display().to_string(),
        }
    }

    fn ler_json(caminho: &str) -> Vec<Usuario> {
        serde_json::from_str(&std::fs::read_to_string(caminho).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_pipeline_ponta_a_ponta() {
        let dir = tempfile::tempdir().unwrap();
        let saida = saida_em(dir.path());
        let gerador = GeradorFixo { texto: "Invista hoje!", falhar_para: None };

        let resultado = Pipeline::new(FonteMock, gerador, saida.clone())
            .executar()
            .await
            .unwrap();

        assert_eq!(resultado.carga, RelatorioCarga { json_ok: true, csv_ok: true });

        let usuarios = ler_json(&saida.json_path);
        assert_eq!(usuarios.len(), 3);
        for usuario in &usuarios {
            assert_eq!(usuario.news.len(), 1);
            assert_eq!(usuario.news[0].description, "Invista hoje!");
        }
        assert_eq!(usuarios, resultado.usuarios);

        let mut reader = csv::Reader::from_path(&saida.csv_path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["ID", "Nome", "Saldo", "Limite", "Mensagem"]
        );
        let linhas: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(linhas.len(), 3);
        let saldos: Vec<&str> = linhas.iter().map(|l| &l[2]).collect();
        assert_eq!(saldos, vec!["1500.0", "3200.0", "890.0"]);
        assert!(linhas.iter().all(|l| &l[4] == "Invista hoje!"));
    }

    #[tokio::test]
    async fn test_pipeline_com_falha_injetada() {
        let dir = tempfile::tempdir().unwrap();
        let saida = saida_em(dir.path());
        let gerador = GeradorFixo {
            texto: "Invista hoje!",
            falhar_para: Some("Maria Santos"),
        };

        let resultado = Pipeline::new(FonteMock, gerador, saida.clone())
            .executar()
            .await
            .unwrap();

        let descricoes: Vec<&str> = resultado
            .usuarios
            .iter()
            .map(|u| u.news[0].description.as_str())
            .collect();
        assert_eq!(
            descricoes,
            vec![
                "Invista hoje!",
                "Maria Santos, invest in your future! Start today.",
                "Invista hoje!",
            ]
        );
        assert_eq!(ler_json(&saida.json_path), resultado.usuarios);
    }

    #[tokio::test]
    async fn test_falha_de_escrita_nao_interrompe() {
        let dir = tempfile::tempdir().unwrap();
        let saida = SaidaSettings {
            json_path: dir.path().join("nao_existe").join("u.json").display().to_string(),
            csv_path: dir.path().join("u.csv").display().to_string(),
        };
        let gerador = GeradorFixo { texto: "ok", falhar_para: None };

        let resultado = Pipeline::new(FonteMock, gerador, saida.clone())
            .executar()
            .await
            .unwrap();

        assert_eq!(resultado.carga, RelatorioCarga { json_ok: false, csv_ok: true });
        assert!(Path::new(&saida.csv_path).exists());
        assert_eq!(resultado.usuarios.len(), 3);
    }

    #[tokio::test]
    async fn test_invariante_violado_retorna_none() {
        let dir = tempfile::tempdir().unwrap();
        let saida = saida_em(dir.path());
        let gerador = GeradorFixo { texto: "ok", falhar_para: None };

        let resultado = Pipeline::new(FonteComMensagem, gerador, saida.clone())
            .executar()
            .await;

        assert!(resultado.is_none());
        assert!(!Path::new(&saida.json_path).exists());
        assert!(!Path::new(&saida.csv_path).exists());
    }

    #[test]
    fn test_validar_enriquecimento() {
        let mut usuarios = FonteMock.extrair();
        assert!(validar_enriquecimento(&usuarios).is_err());

        for usuario in usuarios.iter_mut() {
            usuario.news.push(Noticia::credito("x"));
        }
        assert!(validar_enriquecimento(&usuarios).is_ok());
        assert!(validar_enriquecimento(&[]).is_ok());
    }

    #[test]
    fn test_formatar_resumo() {
        let mut usuarios = FonteMock.extrair();
        usuarios.truncate(1);
        usuarios[0].news.push(Noticia::credito("Invista hoje!"));

        let resumo = formatar_resumo(&usuarios);

        assert_eq!(
            resumo,
            "\n📊 RESUMO DOS DADOS PROCESSADOS:\n\n\
             👤 João Silva\n   Saldo: R$ 1500.00\n   Mensagem: Invista hoje!\n\n"
        );
    }
}
