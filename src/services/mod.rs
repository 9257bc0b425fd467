pub mod carga;
pub mod enriquecedor;
pub mod fonte;
pub mod gerador;

pub use carga::{salvar_csv, salvar_json, LinhaCsv, SEM_MENSAGEM};
pub use enriquecedor::{mensagem_fallback, Enriquecedor};
pub use fonte::{FonteMock, FonteUsuarios};
pub use gerador::GeradorMensagem;
